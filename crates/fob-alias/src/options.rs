//! Alias configuration.
//!
//! Aliases are usually written as a flat object where every key is an import
//! specifier and every value its replacement:
//!
//! ```json
//! { "react": "preact/compat", "@utils": "./src/utils", "resolve": [".js", ".jsx"] }
//! ```
//!
//! The `resolve` key is reserved for the extension list when it holds an
//! array (or a single extension such as `".jsx"`). Any other string value under
//! `resolve` is treated as an ordinary alias for the specifier `resolve`.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::{AliasError, Result};

/// Reserved configuration key holding the extension list.
pub const RESOLVE_KEY: &str = "resolve";

/// Extensions tried when no list is configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".js"];

/// Options used to build an [`AliasResolver`](crate::AliasResolver).
///
/// # Example
///
/// ```
/// use fob_alias::AliasOptions;
///
/// let options = AliasOptions::new()
///     .alias("react", "preact/compat")
///     .alias("@utils", "./src/utils")
///     .with_extensions([".ts", ".js"]);
///
/// assert_eq!(options.entries.len(), 2);
/// assert_eq!(options.extensions(), vec![".ts", ".js"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct AliasOptions {
    /// Specifier to replacement, in declaration order.
    pub entries: IndexMap<String, String>,

    /// Extensions tried, in order, when a local replacement lacks one.
    ///
    /// `None` falls back to [`DEFAULT_EXTENSIONS`].
    pub extensions: Option<Vec<String>>,

    /// Working root used to absolutize relative importer paths.
    ///
    /// `None` uses the process working directory when it can be read.
    pub cwd: Option<PathBuf>,
}

impl AliasOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an alias entry. Re-declaring a key replaces its value in place.
    pub fn alias(mut self, specifier: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.entries.insert(specifier.into(), replacement.into());
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_cwd(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }

    /// The effective extension list.
    pub fn extensions(&self) -> Vec<String> {
        match &self.extensions {
            Some(list) => list.clone(),
            None => DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }

    /// Build options from a dynamically shaped JSON value.
    ///
    /// `null` yields empty options. Values that are neither strings nor a
    /// valid `resolve` list are skipped with a warning so a malformed entry
    /// never takes the whole build down.
    ///
    /// # Example
    ///
    /// ```
    /// use fob_alias::AliasOptions;
    /// use serde_json::json;
    ///
    /// let options = AliasOptions::from_value(json!({
    ///     "ember": "./folder/hipster",
    ///     "resolve": [".js", ".jsx"]
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(options.entries["ember"], "./folder/hipster");
    /// assert_eq!(options.extensions(), vec![".js", ".jsx"]);
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        let map = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            other => {
                return Err(AliasError::InvalidConfig {
                    found: value_kind(&other),
                });
            }
        };

        let mut options = Self::default();
        for (key, value) in map {
            match value {
                Value::Array(items) if key == RESOLVE_KEY => {
                    options.extensions = Some(collect_extensions(items));
                }
                Value::String(ext) if key == RESOLVE_KEY && looks_like_extension(&ext) => {
                    options.extensions = Some(vec![ext]);
                }
                Value::String(replacement) => {
                    options.entries.insert(key, replacement);
                }
                other => {
                    warn!(
                        "[fob-alias] Ignoring alias '{}': expected a string, found {}",
                        key,
                        value_kind(&other)
                    );
                }
            }
        }

        Ok(options)
    }

    /// Build options from a TOML table, e.g. the body of an `[alias]` section.
    ///
    /// ```
    /// use fob_alias::AliasOptions;
    ///
    /// let options = AliasOptions::from_toml_str(r#"
    /// react = "preact/compat"
    /// "./legacy" = "./modern"
    /// resolve = [".ts", ".js"]
    /// "#).unwrap();
    ///
    /// assert_eq!(options.entries["./legacy"], "./modern");
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(source)?;
        let value = serde_json::to_value(table)?;
        Self::from_value(value)
    }
}

impl TryFrom<Value> for AliasOptions {
    type Error = AliasError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

fn collect_extensions(items: Vec<Value>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(ext) => Some(ext),
            other => {
                warn!(
                    "[fob-alias] Ignoring extension in '{}': expected a string, found {}",
                    RESOLVE_KEY,
                    value_kind(&other)
                );
                None
            }
        })
        .collect()
}

/// `.jsx` is an extension, `./src/resolve` and `some/pkg` are alias targets.
fn looks_like_extension(value: &str) -> bool {
    value.len() > 1 && value.starts_with('.') && !value.contains('/')
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_extensions() {
        let options = AliasOptions::new();
        assert_eq!(options.extensions(), vec![".js"]);
        assert!(options.entries.is_empty());
        assert!(options.cwd.is_none());
    }

    #[test]
    fn test_null_value_is_empty() {
        let options = AliasOptions::from_value(Value::Null).unwrap();
        assert_eq!(options, AliasOptions::default());
    }

    #[test]
    fn test_non_object_is_rejected() {
        let err = AliasOptions::from_value(json!(["foo", "bar"])).unwrap_err();
        assert!(matches!(err, AliasError::InvalidConfig { found: "an array" }));
    }

    #[test]
    fn test_resolve_array_is_extension_list() {
        let options = AliasOptions::from_value(json!({
            "ember": "./folder/hipster",
            "resolve": [".js", ".jsx"],
        }))
        .unwrap();

        assert_eq!(options.extensions, Some(vec![".js".into(), ".jsx".into()]));
        assert!(!options.entries.contains_key(RESOLVE_KEY));
    }

    #[test]
    fn test_resolve_single_extension() {
        let options = AliasOptions::from_value(json!({ "resolve": ".ts" })).unwrap();
        assert_eq!(options.extensions(), vec![".ts"]);
        assert!(options.entries.is_empty());
    }

    #[test]
    fn test_resolve_path_string_is_alias() {
        let options = AliasOptions::from_value(json!({ "resolve": "i/am/a/file" })).unwrap();
        assert_eq!(options.entries[RESOLVE_KEY], "i/am/a/file");
        assert!(options.extensions.is_none());

        let options =
            AliasOptions::from_value(json!({ "resolve": "./i/am/a/local/file" })).unwrap();
        assert_eq!(options.entries[RESOLVE_KEY], "./i/am/a/local/file");
    }

    #[test]
    fn test_malformed_values_are_skipped() {
        let options = AliasOptions::from_value(json!({
            "foo": "bar",
            "broken": 42,
            "nested": { "a": "b" },
            "resolve": [".js", 7, null, ".mjs"],
        }))
        .unwrap();

        assert_eq!(options.entries.len(), 1);
        assert_eq!(options.extensions(), vec![".js", ".mjs"]);
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let options = AliasOptions::from_value(json!({
            "zeta": "z",
            "alpha": "a",
            "mid": "m",
        }))
        .unwrap();

        let keys: Vec<&str> = options.entries.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_deserialize_embedded() {
        #[derive(Deserialize)]
        struct Outer {
            alias: AliasOptions,
        }

        let outer: Outer = serde_json::from_value(json!({
            "alias": { "foo": "bar", "resolve": [".jsx"] }
        }))
        .unwrap();

        assert_eq!(outer.alias.entries["foo"], "bar");
        assert_eq!(outer.alias.extensions(), vec![".jsx"]);
    }
}
