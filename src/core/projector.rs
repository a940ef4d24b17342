use crate::core::{ElementRecord, FieldSet, ProjectedRecord};
use crate::utils::error::{Result, SpecificDataError};

/// Keeps only `fields` of each record, in `fields` order, values untouched.
pub fn project(records: &[ElementRecord], fields: &FieldSet) -> Result<Vec<ProjectedRecord>> {
    records
        .iter()
        .enumerate()
        .map(|(record_index, record)| {
            let mut data = serde_json::Map::with_capacity(fields.len());
            for field in fields.iter() {
                let value = record.data.get(field).ok_or_else(|| SpecificDataError::KeyMissing {
                    field: field.to_string(),
                    record_index,
                })?;
                data.insert(field.to_string(), value.clone());
            }
            Ok(ProjectedRecord { data })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> ElementRecord {
        match value {
            serde_json::Value::Object(data) => ElementRecord { data },
            _ => unreachable!("test records are objects"),
        }
    }

    #[test]
    fn test_project_keeps_selection_order() {
        let records = vec![
            record(json!({"name": "Hydrogen", "atomic_mass": 1.008, "symbol": "H"})),
            record(json!({"name": "Helium", "atomic_mass": 4.0026022, "symbol": "He"})),
        ];
        let fields: FieldSet = ["symbol", "name"].into_iter().collect();

        let projected = project(&records, &fields).unwrap();

        assert_eq!(projected.len(), 2);
        let keys: Vec<&String> = projected[0].data.keys().collect();
        assert_eq!(keys, vec!["symbol", "name"]);
        assert_eq!(projected[1].data["name"], json!("Helium"));
        assert!(!projected[1].data.contains_key("atomic_mass"));
    }

    #[test]
    fn test_project_copies_null_and_numbers_verbatim() {
        let records = vec![record(json!({"name": "Helium", "electronegativity_pauling": null, "number": 2}))];
        let fields: FieldSet = ["electronegativity_pauling", "number"].into_iter().collect();

        let projected = project(&records, &fields).unwrap();

        assert_eq!(
            serde_json::Value::Object(projected[0].data.clone()),
            json!({"electronegativity_pauling": null, "number": 2})
        );
    }

    #[test]
    fn test_project_reports_missing_key() {
        let records = vec![
            record(json!({"name": "Hydrogen", "phase": "Gas"})),
            record(json!({"name": "Helium"})),
        ];
        let fields: FieldSet = ["name", "phase"].into_iter().collect();

        match project(&records, &fields).unwrap_err() {
            SpecificDataError::KeyMissing { field, record_index } => {
                assert_eq!(field, "phase");
                assert_eq!(record_index, 1);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_project_empty_inputs() {
        let fields: FieldSet = ["name"].into_iter().collect();
        assert!(project(&[], &fields).unwrap().is_empty());

        let records = vec![record(json!({"name": "Hydrogen"}))];
        let projected = project(&records, &FieldSet::new()).unwrap();
        assert_eq!(projected.len(), 1);
        assert!(projected[0].data.is_empty());
    }
}
