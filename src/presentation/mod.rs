pub mod cli;
pub mod config;
pub mod dialog;

pub use cli::{Cli, Commands};
pub use config::Settings;
