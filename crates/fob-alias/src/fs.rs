//! File probing used by extension inference.
//!
//! Extension inference is the only step of alias resolution that may look at
//! the filesystem. It goes through [`FileSystem`] so embedders can resolve
//! against virtual files, and so the resolver can run purely textually with
//! [`NoopFileSystem`].

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

pub trait FileSystem: Send + Sync + std::fmt::Debug {
    /// Whether `path` names an existing regular file.
    fn is_file(&self, path: &Path) -> bool;
}

/// Probes the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    #[allow(clippy::disallowed_methods)]
    fn is_file(&self, path: &Path) -> bool {
        std::fs::metadata(path)
            .map(|metadata| metadata.is_file())
            .unwrap_or(false)
    }
}

/// Knows no files. Extension inference then always appends the first
/// configured extension.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopFileSystem;

impl FileSystem for NoopFileSystem {
    fn is_file(&self, _path: &Path) -> bool {
        false
    }
}

/// A fixed set of files held in memory.
///
/// ```
/// use fob_alias::{FileSystem, MemoryFileSystem};
/// use std::path::Path;
///
/// let fs = MemoryFileSystem::new().with_file("/src/folder/index.js");
/// assert!(fs.is_file(Path::new("/src/folder/index.js")));
/// assert!(!fs.is_file(Path::new("/src/folder")));
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryFileSystem {
    files: FxHashSet<PathBuf>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.insert(path);
        self
    }

    pub fn insert(&mut self, path: impl AsRef<Path>) {
        self.files.insert(path.as_ref().to_path_buf());
    }
}

impl FileSystem for MemoryFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        self.files.contains(path)
    }
}

impl<P: AsRef<Path>> FromIterator<P> for MemoryFileSystem {
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        let mut fs = Self::new();
        for path in iter {
            fs.insert(path);
        }
        fs
    }
}
