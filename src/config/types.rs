use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::variable::VariableKind;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Kind-selection options, in display order.
    #[serde(default = "default_kinds")]
    pub kinds: Vec<KindEntry>,
}

/// Logging settings. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive (default: "warn").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Write logs to this file instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// One entry of the kind catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindEntry {
    pub kind: VariableKind,
    pub label: String,
}

impl KindEntry {
    pub fn new(kind: VariableKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

pub(crate) fn default_kinds() -> Vec<KindEntry> {
    vec![
        KindEntry::new(VariableKind::Map, "Map"),
        KindEntry::new(VariableKind::Query, "Query"),
        KindEntry::new(VariableKind::Constant, "CSV"),
    ]
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            kinds: default_kinds(),
        }
    }
}
