use std::env;
use std::path::PathBuf;

use crate::error::TodoError;

const DATA_DIR: &str = "data";
const DATA_FILE: &str = "todos.json";

/// Runtime configuration handed to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_file: PathBuf,
}

impl Config {
    /// `<install root>/data/todos.json`, where the install root is the
    /// parent of the directory holding the executable.
    pub fn from_install_location() -> Result<Self, TodoError> {
        let exe = env::current_exe().map_err(|e| TodoError::InstallLocation(e.to_string()))?;
        let bin_dir = exe
            .parent()
            .ok_or_else(|| TodoError::InstallLocation(format!("{} has no parent", exe.display())))?;
        let root = bin_dir.parent().unwrap_or(bin_dir);
        Ok(Self::with_data_file(root.join(DATA_DIR).join(DATA_FILE)))
    }

    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }
}
