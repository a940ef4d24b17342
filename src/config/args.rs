use crate::config::toml_config::Settings;
use crate::core::{ConfigProvider, OutputSpec};
use crate::utils::error::Result;
use crate::utils::paths::{default_data_file, install_root};
use crate::utils::validation::{
    validate_non_empty_string, validate_output_extension, validate_path, Validate,
};
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_BASE_NAME: &str = "SpecificData";
pub const DEFAULT_RECORDS_KEY: &str = "elements";

const EXAMPLES: &str = "\
examples:
  Properties written to a json file:
     $ specific-data --properties=name,atomic_mass --output name_mass.json

  Properties written to a csv file:
     $ specific-data --properties name,atomic_mass --output name_mass.csv

  Properties written into both files SpecificData.json and SpecificData.csv:
     $ specific-data --properties=name,atomic_mass

  Union of properties written into both files SpecificData.json and SpecificData.csv:
     $ specific-data --properties=name,atomic_mass --interactive

  Select properties interactively and write to files SpecificData.json and SpecificData.csv:
     $ specific-data --interactive

NOTE: default output files are written to the directory above the one holding specific-data.";

#[derive(Debug, Clone, Parser)]
#[command(name = "specific-data")]
#[command(about = "Select specific data about elements and write them to a named file")]
#[command(after_help = EXAMPLES)]
pub struct CliConfig {
    /// Comma separated list of properties
    #[arg(long, value_delimiter = ',', value_name = "P1,...")]
    pub properties: Option<Vec<String>>,

    /// Interactively select properties
    #[arg(long)]
    pub interactive: bool,

    /// Where to output the data (default: SpecificData.{json,csv})
    #[arg(long, value_name = "FILENAME", num_args = 0..=1, default_missing_value = "")]
    pub output: Option<String>,

    /// Element data file (default: PeriodicTableJSON.json one level above the executable)
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// TOML settings file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(skip)]
    pub settings: Settings,
}

impl CliConfig {
    /// 載入 --config 指定的設定檔（若有）
    pub fn load_settings(&mut self) -> Result<()> {
        if let Some(path) = &self.config {
            tracing::debug!("Loading settings from {}", path.display());
            self.settings = Settings::from_file(path)?;
        }
        Ok(())
    }

    pub fn color_enabled(&self) -> bool {
        !self.no_color && self.settings.display.color.unwrap_or(true)
    }

    pub fn clear_screen_enabled(&self) -> bool {
        self.settings.display.clear_screen.unwrap_or(true)
    }
}

impl ConfigProvider for CliConfig {
    fn data_file(&self) -> Result<PathBuf> {
        if let Some(path) = &self.data_file {
            return Ok(path.clone());
        }
        match &self.settings.dataset.path {
            Some(path) => Ok(PathBuf::from(path)),
            None => default_data_file(),
        }
    }

    fn records_key(&self) -> &str {
        self.settings
            .dataset
            .records_key
            .as_deref()
            .unwrap_or(DEFAULT_RECORDS_KEY)
    }

    fn properties(&self) -> Option<&[String]> {
        self.properties.as_deref()
    }

    fn interactive(&self) -> bool {
        self.interactive
    }

    /// `--output` without a value, or with the base name itself, means both default files.
    fn output(&self) -> OutputSpec {
        match self.output.as_deref() {
            None | Some("") => OutputSpec::Default,
            Some(name) if name == self.default_base_name() => OutputSpec::Default,
            Some(name) => OutputSpec::Explicit(name.to_string()),
        }
    }

    fn default_base_name(&self) -> &str {
        self.settings
            .output
            .base_name
            .as_deref()
            .unwrap_or(DEFAULT_BASE_NAME)
    }

    fn output_dir(&self) -> Result<PathBuf> {
        match &self.settings.output.directory {
            Some(directory) => Ok(PathBuf::from(directory)),
            None => install_root(),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.settings.validate()?;

        if let OutputSpec::Explicit(name) = self.output() {
            validate_output_extension(&name)?;
        }
        validate_non_empty_string("output base name", self.default_base_name())?;

        if let Some(path) = &self.data_file {
            let shown = path.to_string_lossy();
            validate_path("--data-file", &shown)?;
        }
        Ok(())
    }
}
