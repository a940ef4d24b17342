use crate::core::{AnswerSource, ConfigProvider, Notice, Notifier, OutputSpec, Storage};
use crate::utils::error::{Result, SpecificDataError};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};

#[derive(Default)]
pub struct MemoryStorage {
    files: RefCell<HashMap<PathBuf, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, path: &str, data: &[u8]) {
        self.files
            .borrow_mut()
            .insert(PathBuf::from(path), data.to_vec());
    }

    pub fn get(&self, path: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(Path::new(path)).cloned()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.files.borrow().keys().cloned().collect();
        paths.sort();
        paths
    }
}

impl Storage for MemoryStorage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            SpecificDataError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            ))
        })
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), data.to_vec());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub lines: Vec<String>,
    pub clears: usize,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notice: Notice<'_>) {
        self.lines.push(notice.to_string());
    }

    fn clear(&mut self) {
        self.clears += 1;
    }
}

pub struct ScriptedAnswers {
    lines: VecDeque<String>,
}

impl ScriptedAnswers {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl AnswerSource for ScriptedAnswers {
    fn read_answer(&mut self) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

pub struct MockConfig {
    pub data_file: PathBuf,
    pub properties: Option<Vec<String>>,
    pub interactive: bool,
    pub output: OutputSpec,
    pub output_dir: PathBuf,
}

impl MockConfig {
    pub fn new(properties: &[&str]) -> Self {
        Self {
            data_file: PathBuf::from("/install/PeriodicTableJSON.json"),
            properties: Some(properties.iter().map(|s| s.to_string()).collect()),
            interactive: false,
            output: OutputSpec::Default,
            output_dir: PathBuf::from("/install"),
        }
    }
}

impl ConfigProvider for MockConfig {
    fn data_file(&self) -> Result<PathBuf> {
        Ok(self.data_file.clone())
    }

    fn records_key(&self) -> &str {
        "elements"
    }

    fn properties(&self) -> Option<&[String]> {
        self.properties.as_deref()
    }

    fn interactive(&self) -> bool {
        self.interactive
    }

    fn output(&self) -> OutputSpec {
        self.output.clone()
    }

    fn default_base_name(&self) -> &str {
        "SpecificData"
    }

    fn output_dir(&self) -> Result<PathBuf> {
        Ok(self.output_dir.clone())
    }
}

pub const SAMPLE_DATA: &str = r#"{
    "elements": [
        {"name": "Hydrogen", "atomic_mass": 1.008, "number": 1, "phase": "Gas", "symbol": "H"},
        {"name": "Helium", "atomic_mass": 4.0026022, "number": 2, "phase": "Gas", "symbol": "He"},
        {"name": "Lithium", "atomic_mass": 6.94, "number": 3, "phase": "Solid", "symbol": "Li"}
    ]
}"#;
