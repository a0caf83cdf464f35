use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Language assigned to a freshly reset query payload.
pub const DEFAULT_QUERY_LANGUAGE: &str = "flux";

/// The kinds of argument payload a variable can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Query,
    Map,
    Constant,
}

impl VariableKind {
    /// Every supported kind, in declaration order.
    pub const ALL: [VariableKind; 3] = [
        VariableKind::Query,
        VariableKind::Map,
        VariableKind::Constant,
    ];

    /// Stable token used on the wire and in kind-selection options.
    pub fn as_str(self) -> &'static str {
        match self {
            VariableKind::Query => "query",
            VariableKind::Map => "map",
            VariableKind::Constant => "constant",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            VariableKind::Query => 0,
            VariableKind::Map => 1,
            VariableKind::Constant => 2,
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A kind token outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown variable kind '{0}'")]
pub struct UnknownKind(pub String);

impl FromStr for VariableKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "query" => Ok(VariableKind::Query),
            "map" => Ok(VariableKind::Map),
            "constant" => Ok(VariableKind::Constant),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// Payload of a query-kind variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryArguments {
    pub query: String,
    pub language: String,
}

impl Default for QueryArguments {
    fn default() -> Self {
        Self {
            query: String::new(),
            language: DEFAULT_QUERY_LANGUAGE.to_string(),
        }
    }
}

/// Kind-specific argument payload.
///
/// Serialized adjacently tagged, e.g. `{"type": "map", "values": {"k": "v"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "values", rename_all = "lowercase")]
pub enum VariableArguments {
    Query(QueryArguments),
    Map(BTreeMap<String, String>),
    Constant(Vec<String>),
}

impl VariableArguments {
    /// The typed empty payload for `kind`.
    pub fn empty(kind: VariableKind) -> Self {
        match kind {
            VariableKind::Query => VariableArguments::Query(QueryArguments::default()),
            VariableKind::Map => VariableArguments::Map(BTreeMap::new()),
            VariableKind::Constant => VariableArguments::Constant(Vec::new()),
        }
    }

    pub fn kind(&self) -> VariableKind {
        match self {
            VariableArguments::Query(_) => VariableKind::Query,
            VariableArguments::Map(_) => VariableKind::Map,
            VariableArguments::Constant(_) => VariableKind::Constant,
        }
    }
}

/// A named, user-configurable value source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub id: String,
    pub name: String,
    /// Chosen default value(s); interpreted by the kind-specific editor.
    #[serde(default)]
    pub selected: Option<Vec<String>>,
    pub arguments: VariableArguments,
    /// Remaining record fields, carried through edits untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Variable {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: VariableArguments,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            selected: None,
            arguments,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_selected<I, S>(mut self, selected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = Some(selected.into_iter().map(Into::into).collect());
        self
    }

    pub fn kind(&self) -> VariableKind {
        self.arguments.kind()
    }
}
