//! Terminal and machine output for the CLI.

pub mod error;
pub mod json;
pub mod log;
pub mod output;
pub mod terminal;
