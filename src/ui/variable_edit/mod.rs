//! Variable edit session.
//!
//! Edits one existing variable: switching its kind, taking argument
//! payloads from a kind-specific editor, picking a default selection,
//! and submitting the result once the arguments are valid.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Session state and validity status
//! - `intent.rs` - Host and argument-editor events
//! - `reducer.rs` - State transitions
//! - `session.rs` - Operations over the reducer
//! - `flow.rs` - Update and dismissal hand-off
//! - `form.rs` - Form view model

mod error;
mod flow;
mod form;
mod intent;
mod reducer;
mod session;
mod state;

pub use error::EditError;
pub use flow::VariableEditFlow;
pub use form::{KindOption, VariableEditForm, NAME_HELP_TEXT};
pub use intent::VariableEditIntent;
pub use reducer::VariableEditReducer;
pub use session::VariableEditSession;
pub use state::{EditStatus, VariableEditState};
