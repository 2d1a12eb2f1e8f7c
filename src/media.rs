use crate::errors::MediaError;
use crate::models::media::FileDescriptor;
use std::fs;
use std::path::{Path, PathBuf};

/// Lists the entries of one directory as [`FileDescriptor`]s.
///
/// Every call re-reads the directory; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct MediaLister {
    dir: PathBuf,
    url_prefix: String,
}

impl MediaLister {
    pub fn new(dir: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            url_prefix: url_prefix.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Entries come back in the order the OS yields them, unfiltered.
    pub fn list(&self) -> Result<Vec<FileDescriptor>, MediaError> {
        let read_err = |source| MediaError::DirectoryRead {
            path: self.dir.clone(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let name = entry.file_name().to_string_lossy().to_string();
            files.push(FileDescriptor::new(name, &self.url_prefix));
        }
        Ok(files)
    }
}
