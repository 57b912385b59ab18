//! CLI command handling

pub mod hook;
pub mod output;

pub use hook::*;
pub use output::*;
