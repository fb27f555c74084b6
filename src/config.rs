use crate::error::{DemoError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Knobs for a demo run. The binary always uses `DemoConfig::default()`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Nodes pushed by the linked list demo.
    pub node_count: usize,
    /// Elements in the owned array demo.
    pub array_len: usize,
    /// Scratch file written and read back by the custom deleter demo.
    pub scratch_path: PathBuf,
    pub scratch_byte: char,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            node_count: 1_000_000,
            array_len: 3,
            scratch_path: PathBuf::from("demo.txt"),
            scratch_byte: 'x',
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| DemoError::io(path, err))?;
        Self::from_toml_str(&content)
    }
}
