use crate::core::exporter::Exporter;
use crate::core::loader::load_dataset;
use crate::core::projector::project;
use crate::core::selection;
use crate::core::{
    AnswerSource, ConfigProvider, Dataset, ExportTarget, Notice, Notifier, Pipeline, Storage,
    TransformResult,
};
use crate::utils::error::Result;

/// Element catalog pipeline: load the data file, select and project, write JSON/CSV.
pub struct ElementPipeline<S, C, N, A>
where
    S: Storage,
    C: ConfigProvider,
    N: Notifier,
    A: AnswerSource,
{
    storage: S,
    config: C,
    notifier: N,
    answers: A,
}

impl<S, C, N, A> ElementPipeline<S, C, N, A>
where
    S: Storage,
    C: ConfigProvider,
    N: Notifier,
    A: AnswerSource,
{
    pub fn new(storage: S, config: C, notifier: N, answers: A) -> Self {
        Self {
            storage,
            config,
            notifier,
            answers,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

impl<S, C, N, A> Pipeline for ElementPipeline<S, C, N, A>
where
    S: Storage,
    C: ConfigProvider,
    N: Notifier,
    A: AnswerSource,
{
    fn extract(&self) -> Result<Dataset> {
        let path = self.config.data_file()?;
        load_dataset(&self.storage, &path, self.config.records_key())
    }

    fn transform(&mut self, dataset: &Dataset) -> Result<TransformResult> {
        let fields = selection::resolve(
            self.config.properties(),
            self.config.interactive(),
            &dataset.fields,
            &mut self.notifier,
            &mut self.answers,
        )?;

        if fields.is_empty() {
            self.notifier.notify(Notice::NothingSelected);
            return Ok(TransformResult {
                fields,
                records: Vec::new(),
            });
        }

        let records = project(&dataset.records, &fields)?;
        Ok(TransformResult { fields, records })
    }

    fn load(&mut self, result: TransformResult) -> Result<Vec<ExportTarget>> {
        let output_dir = self.config.output_dir()?;
        let exporter = Exporter::new(&self.storage, self.config.default_base_name(), &output_dir);
        let targets = exporter.export(&result.records, &result.fields, &self.config.output())?;

        for target in &targets {
            self.notifier.notify(Notice::Written(target));
        }
        Ok(targets)
    }
}
