//! Lexical path helpers. Nothing here touches the filesystem.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

/// Whether an id points at a file (`./x`, `../x`, `/x`) rather than a package.
pub fn is_local(id: &str) -> bool {
    id.starts_with('.') || id.starts_with('/')
}

/// Collapse `.`, `..` and repeated separators.
pub fn normalize(path: &Path) -> PathBuf {
    path.clean()
}

/// Join a relative path onto `cwd` (when known) and normalize the result.
pub fn absolutize(path: &Path, cwd: Option<&Path>) -> PathBuf {
    match cwd {
        Some(cwd) if path.is_relative() => normalize(&cwd.join(path)),
        _ => normalize(path),
    }
}

/// Extension that always marks a concrete file, whatever the configured list.
pub const CONCRETE_EXTENSION: &str = ".js";

/// Whether the final component already ends with one of `extensions`.
pub fn has_listed_extension(path: &Path, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| has_extension(path, ext))
}

/// Whether the final component ends with `ext` (and is more than just `ext`).
pub fn has_extension(path: &Path, ext: &str) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };

    !ext.is_empty() && name.len() > ext.len() && name.ends_with(ext)
}

/// Whether `path` already names a concrete file: it carries a listed
/// extension or ends in `.js`.
pub fn is_concrete(path: &Path, extensions: &[String]) -> bool {
    has_extension(path, CONCRETE_EXTENSION) || has_listed_extension(path, extensions)
}

/// Append `suffix` to the final component without replacing an existing
/// extension: `se.min` + `.js` is `se.min.js`.
pub fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut raw = path.as_os_str().to_os_string();
    raw.push(suffix);
    PathBuf::from(raw)
}
