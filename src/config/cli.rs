use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Plain filesystem storage. Relative paths resolve against the working directory.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let data = fs::read(path)?;
        Ok(data)
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/deeper/out.json");
        let storage = LocalStorage::new();

        storage.write_file(&path, b"[]").unwrap();

        assert_eq!(storage.read_file(&path).unwrap(), b"[]".to_vec());
    }

    #[test]
    fn test_write_overwrites_whole_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        let storage = LocalStorage::new();

        storage.write_file(&path, b"name\r\nHydrogen\r\nHelium\r\n").unwrap();
        storage.write_file(&path, b"name\r\n").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"name\r\n".to_vec());
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = LocalStorage::new()
            .read_file(&temp_dir.path().join("missing.json"))
            .unwrap_err();

        match err {
            crate::utils::error::SpecificDataError::IoError(e) => {
                assert_eq!(e.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
