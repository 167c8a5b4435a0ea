//! Font resolution: logical names to files on disk, override merging, and
//! activation through a rendering backend.
//!
//! The resolver owns a merged name→path table built from three sources in
//! increasing priority:
//! 1. The built-in default table
//! 2. A caller-supplied override mapping
//! 3. An optional external `fontmap.json` override file
//!
//! Later sources win on duplicate keys. A missing or malformed external file
//! never fails construction.

mod builtin;
mod overrides;
mod types;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::backend::{FontHandle, RenderBackend};
use crate::error::FontError;

pub use builtin::BUILTIN_FONTS;
pub use overrides::OVERRIDE_FILE_NAME;
pub use types::{FontMap, ResolverConfig};

/// Resolves logical font names and applies them through a [`RenderBackend`].
///
/// Typical usage:
///
/// ```rust,no_run
/// use plotfont::{FontResolver, FontdbBackend, ResolverConfig};
///
/// # fn main() -> anyhow::Result<()> {
/// let mut resolver = FontResolver::new(ResolverConfig::default());
/// let mut backend = FontdbBackend::new();
/// let family = resolver.activate(&mut backend, "Futura ND Book")?;
/// println!("charts now render with '{family}'");
/// # Ok(())
/// # }
/// ```
pub struct FontResolver {
    config: ResolverConfig,

    /// Merged logical-name to path-specifier table.
    font_map: FontMap,

    /// Fonts already registered with a backend: logical name to internal
    /// family name. Lets repeated activation skip re-registration.
    registered: HashMap<String, String>,

    /// Internal family name of the last successful activation.
    current: Option<String>,
}

impl FontResolver {
    /// Create a resolver from the built-in table plus the external override
    /// file, if one is present.
    pub fn new(config: ResolverConfig) -> Self {
        Self::with_overrides(config, Vec::new())
    }

    /// Create a resolver with an explicit override mapping.
    ///
    /// Merge priority is built-in < `overrides` < external override file;
    /// each later source wins on duplicate keys. Construction always
    /// succeeds: a bad external file only produces a diagnostic.
    pub fn with_overrides<I>(config: ResolverConfig, overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut font_map = FontMap::from_builtin(BUILTIN_FONTS);
        font_map.merge(overrides);

        if let Some(path) = overrides::discover(config.override_file.as_deref()) {
            font_map.merge(overrides::load(&path));
        }

        log::info!(
            "Font map ready: {} logical name(s), font dir {:?}",
            font_map.len(),
            config.font_dir
        );

        FontResolver {
            config,
            font_map,
            registered: HashMap::new(),
            current: None,
        }
    }

    /// Resolve a logical name to an existing font file path.
    ///
    /// Falls back to the configured default name when `name` has no mapping.
    /// Relative specifiers are joined with the configured font directory;
    /// absolute specifiers are used as-is.
    ///
    /// # Errors
    /// [`FontError::UnknownFontName`] when neither `name` nor the default
    /// has a mapping; [`FontError::FontFileNotFound`] when the resolved path
    /// does not exist.
    pub fn resolve_path(&self, name: &str) -> Result<PathBuf> {
        let specifier = match self.font_map.get(name) {
            Some(specifier) => specifier,
            None => {
                log::debug!(
                    "Font '{}' not in map, falling back to default '{}'",
                    name,
                    self.config.default_font
                );
                self.font_map
                    .get(&self.config.default_font)
                    .ok_or_else(|| FontError::UnknownFontName(name.to_string()))?
            }
        };

        let path = if Path::new(specifier).is_absolute() {
            PathBuf::from(specifier)
        } else {
            self.config.font_dir.join(specifier)
        };

        if !path.exists() {
            return Err(FontError::FontFileNotFound(path).into());
        }
        Ok(path)
    }

    /// Activate a font globally for subsequent rendering.
    ///
    /// Resolves `name`, registers the file with `backend` (skipped when the
    /// name was already registered), sets the returned family as the global
    /// default, and disables Unicode-minus rendering so numeric axis labels
    /// fall back to a plain ASCII hyphen.
    ///
    /// Returns the internal family name the backend assigned.
    pub fn activate(&mut self, backend: &mut dyn RenderBackend, name: &str) -> Result<String> {
        let path = self.resolve_path(name)?;

        let family = match self.registered.get(name) {
            Some(family) => family.clone(),
            None => {
                let family = backend.register_font_file(&path)?;
                log::info!("Registered '{}' from {:?} as '{}'", name, path, family);
                self.registered.insert(name.to_string(), family.clone());
                family
            }
        };

        backend.set_global_family(&family);
        backend.set_unicode_minus(false);
        self.current = Some(family.clone());
        Ok(family)
    }

    /// Internal family name of the currently active font, if any.
    pub fn current_active(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// All known logical names, in merge order.
    pub fn list_available(&self) -> Vec<&str> {
        self.font_map.names().collect()
    }

    /// Build a per-font handle without touching global state.
    ///
    /// Resolution follows the same rules as [`resolve_path`](Self::resolve_path).
    /// Neither the active-font state nor any backend global changes.
    pub fn font_handle(&self, backend: &dyn RenderBackend, name: &str) -> Result<FontHandle> {
        let path = self.resolve_path(name)?;
        backend.font_handle(&path)
    }

    /// Merge an additional override mapping at highest priority.
    pub fn merge_overrides<I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.font_map.merge(overrides);
    }
}
