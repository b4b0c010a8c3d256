//! CLI command handlers, one per file.

mod completions;
mod config;
mod folders;
mod generate;

pub use completions::run_completions;
pub use config::run_config;
pub use folders::run_folders;
pub use generate::run_generate;
