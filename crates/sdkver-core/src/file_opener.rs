//! File access capability used by the source readers.

use crate::error::{Result, SdkError};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Opens project files by path.
///
/// Implementations must distinguish a missing file (`Ok(None)`) from any
/// other failure (`Err`). The content is read in full before returning, so
/// no handle outlives the call.
pub trait FileOpener: Send + Sync {
    fn open_file(&self, path: &Path) -> Result<Option<String>>;
}

impl<T: FileOpener + ?Sized> FileOpener for &T {
    fn open_file(&self, path: &Path) -> Result<Option<String>> {
        (**self).open_file(path)
    }
}

/// Reads files from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileOpener;

impl FileOpener for FsFileOpener {
    fn open_file(&self, path: &Path) -> Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SdkError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Serves files from memory, keyed by the exact path readers request.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFileOpener {
    files: HashMap<PathBuf, String>,
}

impl InMemoryFileOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    pub fn remove(&mut self, path: impl AsRef<Path>) -> Option<String> {
        self.files.remove(path.as_ref())
    }
}

impl FileOpener for InMemoryFileOpener {
    fn open_file(&self, path: &Path) -> Result<Option<String>> {
        Ok(self.files.get(path).cloned())
    }
}
