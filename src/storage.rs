use std::fs;
use std::io;
use std::path::PathBuf;

/// A named destination for the exported artifacts. Each destination is
/// written independently of the others.
pub trait StorageSink {
    fn name(&self) -> &str;
    fn write_text(&self, file_name: &str, contents: &str) -> io::Result<()>;
    fn write_binary(&self, file_name: &str, contents: &[u8]) -> io::Result<()>;
}

/// Writes artifacts into a local directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct LocalDirSink {
    name: String,
    dir: PathBuf,
}

impl LocalDirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            name: dir.display().to_string(),
            dir,
        }
    }

    fn path_for(&self, file_name: &str) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        Ok(self.dir.join(file_name))
    }
}

impl StorageSink for LocalDirSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn write_text(&self, file_name: &str, contents: &str) -> io::Result<()> {
        fs::write(self.path_for(file_name)?, contents)
    }

    fn write_binary(&self, file_name: &str, contents: &[u8]) -> io::Result<()> {
        fs::write(self.path_for(file_name)?, contents)
    }
}
