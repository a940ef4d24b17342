use crate::utils::error::{Result, SpecificDataError};
use std::path::{Path, PathBuf};

pub const DATA_FILE_NAME: &str = "PeriodicTableJSON.json";

/// The directory one level above the one holding the running executable.
///
/// The bundled data file lives here and default exports are written here,
/// independent of the current working directory.
pub fn install_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe = exe.canonicalize().unwrap_or(exe);
    root_of(&exe).ok_or_else(|| SpecificDataError::ConfigError {
        message: format!(
            "cannot determine install root from executable path {}",
            exe.display()
        ),
    })
}

fn root_of(exe: &Path) -> Option<PathBuf> {
    exe.parent()?.parent().map(Path::to_path_buf)
}

pub fn default_data_file() -> Result<PathBuf> {
    Ok(install_root()?.join(DATA_FILE_NAME))
}
