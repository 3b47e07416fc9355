//! Shared test utilities for integration tests
//!
//! Builds throwaway site projects with the conventional layout.

use guildcfg::guild::ProjectLayout;
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary site project with an empty data directory.
pub struct TestProject {
    pub dir: TempDir,
    pub layout: ProjectLayout,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let layout = ProjectLayout::new(dir.path());
        std::fs::create_dir_all(&layout.data_dir).unwrap();
        Self { dir, layout }
    }

    pub fn write_user_config(&self, json: &str) {
        std::fs::write(&self.layout.user_config, json).unwrap();
    }

    pub fn write_data_file(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.layout.data_dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, bytes).unwrap();
        path
    }

    pub fn read_artifact(&self) -> Vec<u8> {
        std::fs::read(&self.layout.artifact).unwrap()
    }

    /// Files under public/ whose name starts with "custom-logo".
    pub fn custom_logos(&self) -> Vec<PathBuf> {
        match std::fs::read_dir(&self.layout.public_dir) {
            Ok(entries) => entries
                .map(|e| e.unwrap().path())
                .filter(|p| {
                    p.file_name()
                        .map(|n| n.to_string_lossy().starts_with("custom-logo"))
                        .unwrap_or(false)
                })
                .collect(),
            Err(_) => Vec::new(),
        }
    }
}
