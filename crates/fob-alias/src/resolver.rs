//! Alias resolution.
//!
//! Given an import specifier and the file importing it, the resolver decides
//! whether an alias applies and what the import should point at instead:
//!
//! ```text
//! specifier ─▶ AliasTable::find ─▶ rewritten id ─┬─ bare id ─▶ ResolvedAlias::Bare
//!                                               └─ ./ or / ─▶ join importer dir
//!                                                             ─▶ normalize
//!                                                             ─▶ infer extension
//!                                                             ─▶ ResolvedAlias::Path
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::trace;

use crate::fs::{FileSystem, OsFileSystem};
use crate::options::AliasOptions;
use crate::path::{absolutize, append_suffix, is_concrete, is_local};
use crate::table::AliasTable;

/// Outcome of a successful alias lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedAlias {
    /// A non-local replacement, returned verbatim (usually another package).
    Bare(String),
    /// A normalized path to a local file.
    Path(PathBuf),
}

impl ResolvedAlias {
    pub fn is_bare(&self) -> bool {
        matches!(self, ResolvedAlias::Bare(_))
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            ResolvedAlias::Path(path) => Some(path),
            ResolvedAlias::Bare(_) => None,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            ResolvedAlias::Bare(id) => id,
            ResolvedAlias::Path(path) => path.to_string_lossy().into_owned(),
        }
    }
}

impl fmt::Display for ResolvedAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedAlias::Bare(id) => f.write_str(id),
            ResolvedAlias::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolves import specifiers against a fixed alias table.
///
/// The resolver is immutable after construction and can be shared freely
/// between threads.
///
/// # Example
///
/// ```
/// use fob_alias::{AliasOptions, AliasResolver, NoopFileSystem, ResolvedAlias};
/// use std::path::{Path, PathBuf};
/// use std::sync::Arc;
///
/// let options = AliasOptions::new()
///     .alias("react", "preact/compat")
///     .alias("foo", "./bar");
/// let resolver = AliasResolver::with_file_system(options, Arc::new(NoopFileSystem));
///
/// let importer = Path::new("/src/importer.js");
/// assert_eq!(
///     resolver.resolve("react", importer),
///     Some(ResolvedAlias::Bare("preact/compat".into()))
/// );
/// assert_eq!(
///     resolver.resolve("foo/baz", importer),
///     Some(ResolvedAlias::Path(PathBuf::from("/src/bar/baz.js")))
/// );
/// assert_eq!(resolver.resolve("foo2", importer), None);
/// ```
#[derive(Debug, Clone)]
pub struct AliasResolver {
    table: AliasTable,
    extensions: Vec<String>,
    cwd: Option<PathBuf>,
    fs: Arc<dyn FileSystem>,
}

impl AliasResolver {
    /// Create a resolver that probes the real filesystem during extension
    /// inference.
    pub fn new(options: AliasOptions) -> Self {
        Self::with_file_system(options, Arc::new(OsFileSystem))
    }

    pub fn with_file_system(options: AliasOptions, fs: Arc<dyn FileSystem>) -> Self {
        let extensions = options.extensions();
        let cwd = options.cwd.or_else(|| std::env::current_dir().ok());

        Self {
            table: AliasTable::new(&options.entries),
            extensions,
            cwd,
            fs,
        }
    }

    pub fn table(&self) -> &AliasTable {
        &self.table
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    /// Resolve `specifier` imported from `importer`.
    ///
    /// Returns `None` when no alias applies, in which case the caller should
    /// fall back to its default resolution.
    pub fn resolve(&self, specifier: &str, importer: &Path) -> Option<ResolvedAlias> {
        let base = importer.parent().unwrap_or_else(|| Path::new(""));
        self.resolve_from(specifier, base)
    }

    /// Resolve a specifier that has no importer (an entry point). Local
    /// replacements are resolved against the working root.
    pub fn resolve_entry(&self, specifier: &str) -> Option<ResolvedAlias> {
        let base = self.cwd.as_deref().unwrap_or_else(|| Path::new(""));
        self.resolve_from(specifier, base)
    }

    fn resolve_from(&self, specifier: &str, base_dir: &Path) -> Option<ResolvedAlias> {
        let Some(matched) = self.table.find(specifier) else {
            trace!("[fob-alias] No alias for '{}'", specifier);
            return None;
        };

        let id = matched.rewritten();
        trace!(
            "[fob-alias] '{}' matched alias '{}' -> '{}'",
            specifier,
            matched.entry().key(),
            id
        );

        if !is_local(&id) {
            return Some(ResolvedAlias::Bare(id));
        }

        // Normalization drops a trailing slash, so remember it: `foo/` names a directory
        let names_directory = id.ends_with('/');

        // Rooted ids replace the base entirely when joined
        let candidate = absolutize(&base_dir.join(&id), self.cwd.as_deref());
        let resolved = if names_directory {
            self.infer_index(candidate)
        } else {
            self.infer_extension(candidate)
        };
        Some(ResolvedAlias::Path(resolved))
    }

    /// Pick the concrete file a local alias target refers to.
    ///
    /// In order: keep a path that already ends in `.js` or a listed extension
    /// or names an existing file, then try `path + ext` and `path/index + ext`
    /// for every extension, and finally fall back to `path + first extension`.
    fn infer_extension(&self, candidate: PathBuf) -> PathBuf {
        if is_concrete(&candidate, &self.extensions) || self.fs.is_file(&candidate) {
            return candidate;
        }

        for ext in &self.extensions {
            let with_ext = append_suffix(&candidate, ext);
            if self.fs.is_file(&with_ext) {
                return with_ext;
            }
        }

        self.find_index(&candidate).unwrap_or_else(|| match self.extensions.first() {
            Some(ext) => append_suffix(&candidate, ext),
            None => candidate,
        })
    }

    /// Pick the index file of a directory target, falling back to
    /// `dir/index + first extension`.
    fn infer_index(&self, dir: PathBuf) -> PathBuf {
        self.find_index(&dir).unwrap_or_else(|| match self.extensions.first() {
            Some(ext) => dir.join(format!("index{ext}")),
            None => dir,
        })
    }

    fn find_index(&self, dir: &Path) -> Option<PathBuf> {
        self.extensions
            .iter()
            .map(|ext| dir.join(format!("index{ext}")))
            .find(|index| self.fs.is_file(index))
    }
}
