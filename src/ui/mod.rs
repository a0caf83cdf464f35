pub mod mvi;
pub mod variable_edit;
