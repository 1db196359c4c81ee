use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

#[derive(Debug)]
pub struct TempFileManager {
    base_dir: TempDir,
}

impl TempFileManager {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            base_dir: tempfile::Builder::new().prefix("drawodds-cli").tempdir()?,
        })
    }

    pub fn create_file(&self, name: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.base_dir.path().join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    #[allow(dead_code)]
    pub fn create_bytes(&self, name: &str, contents: &[u8]) -> std::io::Result<PathBuf> {
        let path = self.base_dir.path().join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    #[allow(dead_code)]
    pub fn path(&self, name: &str) -> PathBuf {
        self.base_dir.path().join(name)
    }
}
