//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

use std::cell::RefCell;
use std::collections::BTreeMap;

use vareditor::variable::{QueryArguments, Variable, VariableArguments, VariableUpdater};

/// `{id:"v1", arguments:{type:"constant", values:["a","b"]}, selected:["a"]}`
pub fn constant_variable() -> Variable {
    Variable::new(
        "v1",
        "hosts",
        VariableArguments::Constant(vec!["a".to_string(), "b".to_string()]),
    )
    .with_selected(["a"])
}

pub fn query_variable() -> Variable {
    Variable::new(
        "q1",
        "bucket",
        VariableArguments::Query(QueryArguments {
            query: "buckets() |> keep(columns: [\"name\"])".to_string(),
            language: "flux".to_string(),
        }),
    )
    .with_selected(["telegraf"])
}

pub fn map_args(pairs: &[(&str, &str)]) -> VariableArguments {
    VariableArguments::Map(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
    )
}

/// Records every hand-off it receives.
#[derive(Default)]
pub struct RecordingUpdater {
    pub updates: RefCell<Vec<(String, Variable)>>,
}

impl VariableUpdater for RecordingUpdater {
    fn update_variable(&self, id: &str, variable: Variable) {
        self.updates.borrow_mut().push((id.to_string(), variable));
    }
}
