use crate::core::{Pipeline, RunOutcome};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn run(&mut self) -> Result<RunOutcome> {
        tracing::info!("Loading element data...");
        let dataset = self.pipeline.extract()?;

        tracing::info!("Selecting properties...");
        let result = self.pipeline.transform(&dataset)?;
        if result.fields.is_empty() {
            tracing::info!("No properties selected, nothing to export");
            return Ok(RunOutcome::NothingSelected);
        }
        tracing::info!(
            "Projected {} records onto {} properties",
            result.records.len(),
            result.fields.len()
        );

        tracing::info!("Writing output...");
        let targets = self.pipeline.load(result)?;
        Ok(RunOutcome::Exported(targets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pipeline::ElementPipeline;
    use crate::core::test_support::{
        MemoryStorage, MockConfig, RecordingNotifier, ScriptedAnswers, SAMPLE_DATA,
    };
    use crate::core::{ExportFormat, OutputSpec};
    use crate::utils::error::SpecificDataError;
    use serde_json::Value;
    use std::path::PathBuf;

    fn engine(
        config: MockConfig,
        answers: &[&str],
    ) -> EtlEngine<ElementPipeline<MemoryStorage, MockConfig, RecordingNotifier, ScriptedAnswers>> {
        let storage = MemoryStorage::new();
        storage.put("/install/PeriodicTableJSON.json", SAMPLE_DATA.as_bytes());
        EtlEngine::new(ElementPipeline::new(
            storage,
            config,
            RecordingNotifier::new(),
            ScriptedAnswers::new(answers),
        ))
    }

    #[test]
    fn test_default_output_writes_json_and_csv() {
        let mut engine = engine(MockConfig::new(&["name", "atomic_mass"]), &[]);

        let outcome = engine.run().unwrap();

        let RunOutcome::Exported(targets) = outcome else {
            panic!("expected an export");
        };
        let formats: Vec<ExportFormat> = targets.iter().map(|t| t.format).collect();
        assert_eq!(formats, vec![ExportFormat::Json, ExportFormat::Csv]);

        let storage = engine.pipeline().storage();
        let json: Value =
            serde_json::from_slice(&storage.get("/install/SpecificData.json").unwrap()).unwrap();
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        for row in rows {
            let keys: Vec<&String> = row.as_object().unwrap().keys().collect();
            assert_eq!(keys, vec!["name", "atomic_mass"]);
        }
        assert!(storage.get("/install/SpecificData.csv").is_some());
    }

    #[test]
    fn test_nothing_selected_writes_nothing() {
        let mut config = MockConfig::new(&[]);
        config.properties = None;
        let mut engine = engine(config, &[]);

        let outcome = engine.run().unwrap();

        assert_eq!(outcome, RunOutcome::NothingSelected);
        assert_eq!(
            engine.pipeline().storage().paths(),
            vec![PathBuf::from("/install/PeriodicTableJSON.json")]
        );
    }

    #[test]
    fn test_explicit_and_interactive_union() {
        let mut config = MockConfig::new(&["symbol"]);
        config.interactive = true;
        config.output = OutputSpec::Explicit("/out/pick.json".to_string());
        // name: y, atomic_mass: n, number: q
        let mut engine = engine(config, &["y", "n", "q"]);

        engine.run().unwrap();

        let json: Value =
            serde_json::from_slice(&engine.pipeline().storage().get("/out/pick.json").unwrap())
                .unwrap();
        let keys: Vec<&String> = json[0].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["symbol", "name"]);
    }

    #[test]
    fn test_missing_data_file_fails_before_selection() {
        let mut config = MockConfig::new(&["name"]);
        config.data_file = PathBuf::from("/elsewhere/PeriodicTableJSON.json");
        let mut engine = engine(config, &[]);

        let err = engine.run().unwrap_err();

        assert!(matches!(err, SpecificDataError::DataFileNotFound { .. }));
        assert!(engine.pipeline().notifier().lines.is_empty());
    }

    #[test]
    fn test_unsupported_output_fails_without_writing() {
        let mut config = MockConfig::new(&["name"]);
        config.output = OutputSpec::Explicit("result.txt".to_string());
        let mut engine = engine(config, &[]);

        let err = engine.run().unwrap_err();

        assert!(matches!(err, SpecificDataError::UnsupportedOutputFormat { .. }));
        assert_eq!(engine.pipeline().storage().paths().len(), 1);
    }
}
