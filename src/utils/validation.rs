use crate::domain::model::ExportFormat;
use crate::utils::error::{Result, SpecificDataError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SpecificDataError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SpecificDataError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SpecificDataError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Resolves the export format from the file extension of `output`.
///
/// Only the real extension counts: `report_json_csv.txt` is rejected even
/// though both format names appear in it.
pub fn validate_output_extension(output: &str) -> Result<ExportFormat> {
    Path::new(output)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(ExportFormat::from_extension)
        .ok_or_else(|| SpecificDataError::UnsupportedOutputFormat {
            output: output.to_string(),
        })
}
