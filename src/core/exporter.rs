use crate::core::{ExportFormat, ExportTarget, FieldSet, OutputSpec, ProjectedRecord, Storage};
use crate::utils::error::Result;
use crate::utils::validation::validate_output_extension;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

const JSON_INDENT: &[u8] = b"    ";

pub struct Exporter<'a, S: Storage> {
    storage: &'a S,
    base_name: &'a str,
    output_dir: &'a Path,
}

impl<'a, S: Storage> Exporter<'a, S> {
    pub fn new(storage: &'a S, base_name: &'a str, output_dir: &'a Path) -> Self {
        Self {
            storage,
            base_name,
            output_dir,
        }
    }

    /// Writes `records` to every target `output` resolves to. Nothing is
    /// written when the output name is rejected.
    pub fn export(
        &self,
        records: &[ProjectedRecord],
        fields: &FieldSet,
        output: &OutputSpec,
    ) -> Result<Vec<ExportTarget>> {
        let targets = plan_targets(output, self.base_name, self.output_dir)?;

        for target in &targets {
            let bytes = match target.format {
                ExportFormat::Json => to_json_bytes(records)?,
                ExportFormat::Csv => to_csv_bytes(records, fields)?,
            };
            tracing::debug!(
                "Writing {} bytes of {} to {}",
                bytes.len(),
                target.format,
                target.path.display()
            );
            self.storage.write_file(&target.path, &bytes)?;
        }

        Ok(targets)
    }
}

/// 預設輸出兩種格式；指定檔名時只輸出副檔名對應的一種
pub fn plan_targets(output: &OutputSpec, base_name: &str, output_dir: &Path) -> Result<Vec<ExportTarget>> {
    match output {
        OutputSpec::Default => Ok([ExportFormat::Json, ExportFormat::Csv]
            .into_iter()
            .map(|format| ExportTarget {
                path: output_dir.join(format!("{}.{}", base_name, format.extension())),
                format,
            })
            .collect()),
        OutputSpec::Explicit(name) => {
            let format = validate_output_extension(name)?;
            Ok(vec![ExportTarget {
                path: PathBuf::from(name),
                format,
            }])
        }
    }
}

/// JSON array of objects, 4-space indent, no trailing newline.
pub fn to_json_bytes(records: &[ProjectedRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    Ok(buf)
}

/// Header row in `fields` order, then one row per record, CRLF terminated.
pub fn to_csv_bytes(records: &[ProjectedRecord], fields: &FieldSet) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(fields.iter())?;
    for record in records {
        writer.write_record(
            fields
                .iter()
                .map(|field| record.data.get(field).map(csv_cell).unwrap_or_default()),
        )?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(bytes)
}

fn csv_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
