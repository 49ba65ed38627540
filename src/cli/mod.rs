pub mod config;
pub mod context;
pub mod entry;
pub mod items;
pub mod prompts;

pub use context::CliContext;
pub use entry::{Args, Command, ConfigCommand, GlobalOptions, run, run_with_prompt};
pub use prompts::Prompt;
