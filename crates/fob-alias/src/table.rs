//! The immutable alias table and specifier matching.

use indexmap::IndexMap;

/// One `specifier -> replacement` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    key: String,
    replacement: String,
}

impl AliasEntry {
    pub fn new(key: impl Into<String>, replacement: impl Into<String>) -> Self {
        let key = key.into();
        // "utils/" and "utils" alias the same specifiers
        let key = match key.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
            _ => key,
        };

        Self {
            key,
            replacement: replacement.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

/// How a specifier matched an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasMatch<'a> {
    /// The specifier equals the key.
    Whole { entry: &'a AliasEntry },
    /// The specifier is `key` followed by `rest`, where `rest` starts with `/`.
    Partial { entry: &'a AliasEntry, rest: &'a str },
}

impl<'a> AliasMatch<'a> {
    pub fn entry(&self) -> &'a AliasEntry {
        match self {
            AliasMatch::Whole { entry } | AliasMatch::Partial { entry, .. } => entry,
        }
    }

    /// The rewritten specifier: the replacement with any unmatched sub-path
    /// appended unchanged.
    pub fn rewritten(&self) -> String {
        match self {
            AliasMatch::Whole { entry } => entry.replacement.clone(),
            AliasMatch::Partial { entry, rest } => {
                let base = entry
                    .replacement
                    .strip_suffix('/')
                    .unwrap_or(&entry.replacement);
                format!("{base}{rest}")
            }
        }
    }
}

/// Ordered, immutable set of aliases. The first declared entry that matches wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl AliasTable {
    pub fn new(entries: &IndexMap<String, String>) -> Self {
        entries
            .iter()
            .map(|(key, replacement)| AliasEntry::new(key.as_str(), replacement.as_str()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.iter()
    }

    /// Find the entry aliasing `specifier`.
    ///
    /// A key only matches the whole specifier or a prefix that is immediately
    /// followed by `/`, so `foo` never aliases `foo2` and `./foo` never aliases
    /// `./fooze/bar`.
    pub fn find<'a>(&'a self, specifier: &'a str) -> Option<AliasMatch<'a>> {
        self.entries.iter().find_map(|entry| {
            if specifier == entry.key {
                return Some(AliasMatch::Whole { entry });
            }

            match specifier.strip_prefix(entry.key.as_str()) {
                Some(rest) if rest.starts_with('/') => Some(AliasMatch::Partial { entry, rest }),
                _ => None,
            }
        })
    }
}

impl FromIterator<AliasEntry> for AliasTable {
    /// Entries with an empty key are dropped; they would prefix-match every
    /// rooted specifier.
    fn from_iter<T: IntoIterator<Item = AliasEntry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().filter(|entry| !entry.key.is_empty()).collect(),
        }
    }
}
