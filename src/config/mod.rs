//! Configuration: the kind catalog and logging settings.

mod catalog;
mod loader;
mod types;

pub use catalog::KindCatalog;
pub use loader::ConfigError;
pub use types::{Config, KindEntry, LoggingConfig};
