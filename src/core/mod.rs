// Public modules
pub mod alias;
pub mod command;
pub mod environment;
pub mod error;
pub mod pipeline;
pub mod runner;
pub mod sync;

// Re-export common types for convenience
pub use error::{Error, Result};
