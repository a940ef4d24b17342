use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecificDataError {
    #[error("Data file not found: {}", path.display())]
    DataFileNotFound { path: PathBuf },

    #[error("Failed to parse data file {}: {source}", path.display())]
    DataParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed data file {}: {reason}", path.display())]
    MalformedDataset { path: PathBuf, reason: String },

    #[error("Unsupported file extension for '{output}'. Enter a .json or .csv file.")]
    UnsupportedOutputFormat { output: String },

    #[error("Record {record_index} has no property '{field}'")]
    KeyMissing { field: String, record_index: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    DataLoad,
    UserInput,
    Configuration,
    Processing,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl SpecificDataError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DataFileNotFound { .. }
            | Self::DataParse { .. }
            | Self::MalformedDataset { .. } => ErrorCategory::DataLoad,
            Self::UnsupportedOutputFormat { .. } => ErrorCategory::UserInput,
            Self::ConfigError { .. }
            | Self::InvalidConfigValue { .. } => ErrorCategory::Configuration,
            Self::KeyMissing { .. } => ErrorCategory::Processing,
            Self::IoError(_) | Self::CsvError(_) | Self::SerializationError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::DataLoad => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::DataFileNotFound { .. } => {
                "Place PeriodicTableJSON.json one directory above the executable, or pass --data-file"
                    .to_string()
            }
            Self::DataParse { .. } | Self::MalformedDataset { .. } => {
                "Check that the data file is valid JSON with an array of element objects".to_string()
            }
            Self::UnsupportedOutputFormat { .. } => {
                "Use an output name ending in .json or .csv, or omit --output".to_string()
            }
            Self::KeyMissing { .. } => {
                "Every element record must carry the same set of properties".to_string()
            }
            Self::ConfigError { .. } | Self::InvalidConfigValue { .. } => {
                "Review the command line flags and the settings file".to_string()
            }
            Self::IoError(_) | Self::CsvError(_) | Self::SerializationError(_) => {
                "Check that the output location exists and is writable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::DataFileNotFound { path } => {
                format!("ERROR: cannot find the element data at {}", path.display())
            }
            _ => format!("ERROR: {}", self),
        }
    }

    /// 依嚴重程度決定行程結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SpecificDataError>;
