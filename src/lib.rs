pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
pub use config::toml_config::Settings;

#[cfg(feature = "cli")]
pub use adapters::terminal::{StdinAnswers, TerminalNotifier};
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{etl::EtlEngine, pipeline::ElementPipeline};
pub use domain::model::{ExportFormat, ExportTarget, FieldSet, OutputSpec, RunOutcome};
pub use utils::error::{Result, SpecificDataError};
