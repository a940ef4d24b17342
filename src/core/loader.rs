use crate::core::{Dataset, ElementRecord, Storage};
use crate::utils::error::{Result, SpecificDataError};
use serde_json::Value;
use std::path::Path;

/// 讀取元素資料檔，欄位清單取自第一筆記錄
pub fn load_dataset<S: Storage>(storage: &S, path: &Path, records_key: &str) -> Result<Dataset> {
    tracing::debug!("Reading element data from {}", path.display());
    let bytes = storage.read_file(path).map_err(|e| match e {
        SpecificDataError::IoError(io) if io.kind() == std::io::ErrorKind::NotFound => {
            SpecificDataError::DataFileNotFound {
                path: path.to_path_buf(),
            }
        }
        other => other,
    })?;

    let dataset = parse_dataset(&bytes, path, records_key)?;
    tracing::info!(
        "Loaded {} element records with {} properties",
        dataset.records.len(),
        dataset.fields.len()
    );
    Ok(dataset)
}

pub fn parse_dataset(bytes: &[u8], path: &Path, records_key: &str) -> Result<Dataset> {
    let malformed = |reason: String| SpecificDataError::MalformedDataset {
        path: path.to_path_buf(),
        reason,
    };

    let root: Value = serde_json::from_slice(bytes).map_err(|source| SpecificDataError::DataParse {
        path: path.to_path_buf(),
        source,
    })?;

    let items = match root {
        Value::Object(mut obj) => match obj.remove(records_key) {
            Some(Value::Array(items)) => items,
            Some(_) => return Err(malformed(format!("'{}' is not an array", records_key))),
            None => return Err(malformed(format!("missing top-level '{}' array", records_key))),
        },
        _ => return Err(malformed("top level is not an object".to_string())),
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(data) => records.push(ElementRecord { data }),
            _ => return Err(malformed(format!("record {} is not an object", index))),
        }
    }

    let fields = match records.first() {
        Some(first) => first.data.keys().cloned().collect(),
        None => return Err(malformed(format!("'{}' holds no records", records_key))),
    };

    Ok(Dataset { records, fields })
}
