pub mod query;
pub mod shell;
