pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
mod args;

#[cfg(feature = "cli")]
pub use args::{CliConfig, DEFAULT_BASE_NAME, DEFAULT_RECORDS_KEY};
