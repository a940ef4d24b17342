use crate::domain::model::{
    Dataset, ExportTarget, FieldSet, OutputSpec, TransformResult,
};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn data_file(&self) -> Result<PathBuf>;
    fn records_key(&self) -> &str;
    fn properties(&self) -> Option<&[String]>;
    fn interactive(&self) -> bool;
    fn output(&self) -> OutputSpec;
    fn default_base_name(&self) -> &str;
    fn output_dir(&self) -> Result<PathBuf>;
}

/// Everything the user is told, independent of how it is rendered.
#[derive(Debug, Clone, Copy)]
pub enum Notice<'a> {
    PropertyFound(&'a str),
    PropertyNotFound(&'a str),
    SelectionStatus(&'a FieldSet),
    Question(&'a str),
    InvalidAnswer(&'a str),
    NothingSelected,
    Written(&'a ExportTarget),
    Error(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Good,
    Bad,
    Status,
    Question,
    Error,
}

impl Notice<'_> {
    pub fn kind(&self) -> NoticeKind {
        match self {
            Notice::PropertyFound(_) | Notice::Written(_) => NoticeKind::Good,
            Notice::PropertyNotFound(_) | Notice::InvalidAnswer(_) | Notice::NothingSelected => {
                NoticeKind::Bad
            }
            Notice::SelectionStatus(_) => NoticeKind::Status,
            Notice::Question(_) => NoticeKind::Question,
            Notice::Error(_) => NoticeKind::Error,
        }
    }
}

impl std::fmt::Display for Notice<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::PropertyFound(name) => write!(f, "Property {} found.", name),
            Notice::PropertyNotFound(name) => write!(f, "Property {} not found.", name),
            Notice::SelectionStatus(fields) => {
                write!(f, "{} Option(s) Selected {}", fields.len(), fields)
            }
            Notice::Question(name) => write!(f, "Do you need {}? ", name),
            Notice::InvalidAnswer(_) => write!(f, "Invalid input"),
            Notice::NothingSelected => write!(f, "No properties selected."),
            Notice::Written(target) => {
                write!(f, "Wrote {} to {}", target.format, target.path.display())
            }
            Notice::Error(message) => write!(f, "{}", message),
        }
    }
}

pub trait Notifier {
    fn notify(&mut self, notice: Notice<'_>);

    /// Called between interactive questions; displays that cannot clear ignore it.
    fn clear(&mut self) {}
}

/// Source of answers for the interactive selection.
pub trait AnswerSource {
    /// Shows the answer prompt and returns one line, or `None` once input is exhausted.
    fn read_answer(&mut self) -> Result<Option<String>>;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Dataset>;
    fn transform(&mut self, dataset: &Dataset) -> Result<TransformResult>;
    fn load(&mut self, result: TransformResult) -> Result<Vec<ExportTarget>>;
}
