//! Resolver data types: the merged font map and resolver configuration.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Insertion-ordered mapping from logical font name to a path specifier.
///
/// A specifier is either a bare filename (resolved against the configured
/// font directory) or an absolute path. Merging a key that already exists
/// replaces its value but keeps the key's original position, so listing
/// order stays stable across override layers.
#[derive(Debug, Clone, Default)]
pub struct FontMap {
    entries: HashMap<String, String>,
    order: Vec<String>,
}

impl FontMap {
    /// Build a map from the built-in table.
    pub fn from_builtin(builtin: &[(&str, &str)]) -> Self {
        let mut map = FontMap::default();
        for (name, file) in builtin {
            map.insert(name.to_string(), file.to_string());
        }
        map
    }

    /// Insert or replace a mapping. Later insertions win on key collision.
    pub fn insert(&mut self, name: String, specifier: String) {
        if self.entries.insert(name.clone(), specifier).is_none() {
            self.order.push(name);
        }
    }

    /// Merge another mapping at higher priority than the current contents.
    pub fn merge<I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (name, specifier) in overrides {
            self.insert(name, specifier);
        }
    }

    /// Look up the specifier for a logical name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// All logical names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of mappings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no mappings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Configuration for a [`FontResolver`](crate::FontResolver).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Directory that relative font filenames are resolved against.
    pub font_dir: PathBuf,

    /// Logical name used when a requested name has no mapping.
    pub default_font: String,

    /// Explicit override file location. When `None`, a `fontmap.json` next
    /// to the running executable (then in the current directory) is used if
    /// present.
    pub override_file: Option<PathBuf>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            font_dir: dirs::font_dir()
                .unwrap_or_else(|| PathBuf::from("/usr/local/share/fonts")),
            default_font: "Helvetica Neue".to_string(),
            override_file: None,
        }
    }
}
