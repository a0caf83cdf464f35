//! Variable records and the directory they are looked up in.
//!
//! A variable's behaviour is defined by its [`VariableArguments`], a sum
//! type over the three supported kinds. The editing core only ever holds
//! one resolved [`Variable`]; the wider collection lives behind
//! [`VariableLookup`] and is written back through [`VariableUpdater`].

mod store;
mod types;

pub use store::{StoreError, VariableLookup, VariableStore, VariableUpdater};
pub use types::{
    QueryArguments, UnknownKind, Variable, VariableArguments, VariableKind,
    DEFAULT_QUERY_LANGUAGE,
};
