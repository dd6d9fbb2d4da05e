//! Static import aliasing for the Fob bundler.
//!
//! `fob-alias` rewrites import specifiers according to a fixed mapping:
//!
//! - `react` → `preact/compat` (package to package, returned verbatim)
//! - `@utils/fmt` → `/project/src/utils/fmt.js` (package to local file)
//! - `./legacy` → `/project/src/modern.js` (local to local)
//!
//! Local replacements are resolved relative to the importing file, normalized,
//! and given a file extension from a configurable list when they lack one.
//!
//! ## Matching rules
//!
//! A key aliases a specifier only when the specifier *is* the key, or is the
//! key followed by `/` and a sub-path. `foo` never aliases `foo2`, and `./foo`
//! never aliases `./fooze/bar`. When several keys could apply, the first
//! declared one wins.
//!
//! ## Example
//!
//! ```
//! use fob_alias::{AliasOptions, AliasResolver};
//! use serde_json::json;
//! use std::path::Path;
//!
//! let options = AliasOptions::from_value(json!({
//!     "react": "preact/compat",
//!     "resolve": [".js", ".jsx"]
//! }))
//! .unwrap();
//!
//! let resolver = AliasResolver::new(options);
//! let resolved = resolver.resolve("react", Path::new("/src/app.js")).unwrap();
//! assert_eq!(resolved.to_string(), "preact/compat");
//! ```

pub mod error;
pub mod fs;
pub mod options;
pub mod path;
pub mod resolver;
pub mod table;

pub use error::{AliasError, Result};
pub use fs::{FileSystem, MemoryFileSystem, NoopFileSystem, OsFileSystem};
pub use options::{AliasOptions, DEFAULT_EXTENSIONS, RESOLVE_KEY};
pub use resolver::{AliasResolver, ResolvedAlias};
pub use table::{AliasEntry, AliasMatch, AliasTable};
