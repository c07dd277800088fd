use anyhow::{Context, Result};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture for working with deck files in a temporary directory
#[allow(dead_code)]
pub struct TestWorkspace {
    _temp_dir: TempDir,
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let root = temp_dir.path().to_path_buf();
        Ok(Self {
            _temp_dir: temp_dir,
            root,
        })
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Write a deck file and return its path
    pub fn deck_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.path(name);
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write fixture {}", path.display()))?;
        Ok(path)
    }

    pub fn read(&self, name: &str) -> Result<String> {
        std::fs::read_to_string(self.path(name)).context("Failed to read fixture")
    }
}

/// Sample decks used across tests
#[allow(dead_code)]
pub mod decks {
    pub const CAPITALS: &str = "France:Paris\nGermany:Berlin:2\nItaly:Rome:1\n";

    pub const WITH_GARBAGE: &str = "France:Paris\nnot a card\nSpain:Madrid:x\nItaly:Rome:3\n";
}
