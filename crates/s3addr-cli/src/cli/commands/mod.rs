//! CLI command handlers, one per file.

mod config;
mod parse;

pub use config::run_config;
pub use parse::run_parse;
