//! In-memory directory of known variables.
//!
//! The store is the host application's view of every variable. An edit
//! session reads one record out of it before starting and hands the
//! finalized record back through [`VariableUpdater`] on submit.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use super::types::Variable;

/// Errors that can occur when loading a variable collection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read variables file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse variables file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Variable id '{id}' appears more than once")]
    DuplicateId { id: String },
}

/// Read-only access to known variables by id.
pub trait VariableLookup {
    fn find_variable(&self, id: &str) -> Option<Variable>;
}

/// Sink for finalized variables.
///
/// Invoked once per successful submit. The editing flow does not wait on
/// or interpret the outcome.
pub trait VariableUpdater {
    fn update_variable(&self, id: &str, variable: Variable);
}

impl<T: VariableLookup + ?Sized> VariableLookup for &T {
    fn find_variable(&self, id: &str) -> Option<Variable> {
        (**self).find_variable(id)
    }
}

impl<T: VariableUpdater + ?Sized> VariableUpdater for &T {
    fn update_variable(&self, id: &str, variable: Variable) {
        (**self).update_variable(id, variable)
    }
}

/// Thread-safe variable collection with interior mutability.
#[derive(Clone, Default)]
pub struct VariableStore {
    inner: Arc<RwLock<Vec<Variable>>>,
}

impl VariableStore {
    /// Create a store from an initial collection.
    ///
    /// # Errors
    /// Returns error if two variables share an id.
    pub fn new(variables: Vec<Variable>) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for variable in &variables {
            if !seen.insert(variable.id.as_str()) {
                return Err(StoreError::DuplicateId {
                    id: variable.id.clone(),
                });
            }
        }

        Ok(Self {
            inner: Arc::new(RwLock::new(variables)),
        })
    }

    /// Load a JSON array of variables from `path`.
    pub fn load_from(path: &Path) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path).map_err(|e| StoreError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let variables: Vec<Variable> =
            serde_json::from_str(&content).map_err(|e| StoreError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        tracing::debug!(path = %path.display(), count = variables.len(), "Loaded variables");
        Self::new(variables)
    }

    /// Snapshot of every variable, in insertion order.
    pub fn list(&self) -> Vec<Variable> {
        self.inner.read().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl VariableLookup for VariableStore {
    fn find_variable(&self, id: &str) -> Option<Variable> {
        self.inner.read().iter().find(|v| v.id == id).cloned()
    }
}

impl VariableUpdater for VariableStore {
    fn update_variable(&self, id: &str, variable: Variable) {
        let mut variables = self.inner.write();
        match variables.iter_mut().find(|v| v.id == id) {
            Some(slot) => {
                *slot = variable;
                tracing::info!(variable_id = %id, "Variable updated");
            }
            None => {
                tracing::warn!(variable_id = %id, "Update for unknown variable ignored");
            }
        }
    }
}
