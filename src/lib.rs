//! Editing session for variables whose behaviour is defined by a
//! kind-specific argument payload (query, map or constant).

pub mod config;
pub mod logging;
pub mod script;
pub mod ui;
pub mod variable;
