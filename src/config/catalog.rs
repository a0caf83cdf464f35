//! Kind-to-label lookup for kind-selection options.

use crate::config::loader::ConfigError;
use crate::config::types::KindEntry;
use crate::variable::VariableKind;

/// Ordered catalog of supported kinds and their labels.
///
/// Built once at startup, only through [`KindCatalog::from_entries`]
/// (usually via `Config::catalog`). Construction fails if any kind lacks a
/// label, so [`KindCatalog::label`] never has to guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindCatalog {
    order: Vec<VariableKind>,
    labels: [String; 3],
}

impl KindCatalog {
    pub fn from_entries(entries: &[KindEntry]) -> Result<Self, ConfigError> {
        let mut labels: [Option<String>; 3] = Default::default();
        let mut order = Vec::with_capacity(entries.len());

        for entry in entries {
            let label = entry.label.trim();
            if label.is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("Kind '{}' has an empty label", entry.kind),
                });
            }

            let slot = &mut labels[entry.kind.index()];
            if slot.is_some() {
                return Err(ConfigError::ValidationError {
                    message: format!("Kind '{}' is listed more than once", entry.kind),
                });
            }
            *slot = Some(label.to_string());
            order.push(entry.kind);
        }

        if let Some(missing) = VariableKind::ALL
            .into_iter()
            .find(|kind| labels[kind.index()].is_none())
        {
            return Err(ConfigError::ValidationError {
                message: format!("Kind '{}' has no label", missing),
            });
        }

        Ok(Self {
            order,
            labels: labels.map(Option::unwrap_or_default),
        })
    }

    pub fn label(&self, kind: VariableKind) -> &str {
        &self.labels[kind.index()]
    }

    /// Kinds and labels in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (VariableKind, &str)> + '_ {
        self.order.iter().map(|&kind| (kind, self.label(kind)))
    }
}
