pub mod etl;
pub mod exporter;
pub mod loader;
pub mod pipeline;
pub mod projector;
pub mod selection;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{
    Dataset, ElementRecord, ExportFormat, ExportTarget, FieldSet, OutputSpec, ProjectedRecord,
    RunOutcome, TransformResult,
};
pub use crate::domain::ports::{
    AnswerSource, ConfigProvider, Notice, NoticeKind, Notifier, Pipeline, Storage,
};
pub use crate::utils::error::Result;
