//! Rendering-engine seam: font registration and global style delegation.
//!
//! `FontResolver` never talks to a rendering engine directly; it drives a
//! [`RenderBackend`]. [`FontdbBackend`] is the reference implementation over
//! a `fontdb::Database`, with plain fields standing in for the engine's
//! global style store.

use std::path::{Path, PathBuf};

use anyhow::Result;
use fontdb::{Database, Source};

/// Handle to a single registered font, independent of global state.
///
/// Used for per-element overrides layered on top of (or independent of) the
/// globally active font. Building a handle never changes which font is
/// globally active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontHandle {
    path: PathBuf,
    family: String,
}

impl FontHandle {
    /// Create a handle for a font file and its internal family name.
    pub fn new(path: impl Into<PathBuf>, family: impl Into<String>) -> Self {
        FontHandle {
            path: path.into(),
            family: family.into(),
        }
    }

    /// Path of the font file this handle points at.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Internal family name assigned by the rendering engine.
    pub fn family(&self) -> &str {
        &self.family
    }
}

/// Font registration surface of a rendering engine.
///
/// Implementations register font files, expose the internally assigned
/// family name, and manage two pieces of global style state: the default
/// font family and whether numeric labels render a Unicode minus glyph.
pub trait RenderBackend {
    /// Register a font file and return its internal family name.
    ///
    /// Registering the same file more than once is harmless.
    fn register_font_file(&mut self, path: &Path) -> Result<String>;

    /// Set the global default font family for subsequent rendering.
    fn set_global_family(&mut self, family: &str);

    /// Enable or disable Unicode-minus rendering for numeric labels.
    ///
    /// When disabled, axis labels use a plain ASCII hyphen, which avoids
    /// missing-glyph boxes with fonts that lack U+2212.
    fn set_unicode_minus(&mut self, enabled: bool);

    /// Build a handle scoped to a single font file, with no global effects.
    fn font_handle(&self, path: &Path) -> Result<FontHandle>;
}

/// Reference backend over a [`fontdb::Database`].
pub struct FontdbBackend {
    db: Database,
    global_family: Option<String>,
    unicode_minus: bool,
}

impl FontdbBackend {
    /// Create a backend with an empty font database.
    pub fn new() -> Self {
        FontdbBackend {
            db: Database::new(),
            global_family: None,
            unicode_minus: true,
        }
    }

    /// The currently configured global default family, if any.
    pub fn global_family(&self) -> Option<&str> {
        self.global_family.as_deref()
    }

    /// Whether Unicode-minus rendering is enabled.
    pub fn unicode_minus(&self) -> bool {
        self.unicode_minus
    }

    /// Number of font faces registered so far.
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// First family name of a face loaded from `path`.
    fn family_for_path(db: &Database, path: &Path) -> Option<String> {
        db.faces()
            .filter(|face| match &face.source {
                Source::File(p) | Source::SharedFile(p, _) => p == path,
                Source::Binary(_) => false,
            })
            .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
    }
}

impl Default for FontdbBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for FontdbBackend {
    fn register_font_file(&mut self, path: &Path) -> Result<String> {
        self.db.load_font_file(path)?;
        // load_font_file silently skips files it cannot parse as fonts, so
        // a missing face afterwards means the data was not a usable font.
        Self::family_for_path(&self.db, path).ok_or_else(|| {
            anyhow::anyhow!("no usable font face in {}", path.display())
        })
    }

    fn set_global_family(&mut self, family: &str) {
        log::debug!("Global font family set to '{}'", family);
        self.global_family = Some(family.to_string());
    }

    fn set_unicode_minus(&mut self, enabled: bool) {
        self.unicode_minus = enabled;
    }

    fn font_handle(&self, path: &Path) -> Result<FontHandle> {
        // Scratch database so handle construction stays free of side effects
        // on the registered font set.
        let mut scratch = Database::new();
        scratch.load_font_file(path)?;
        let family = Self::family_for_path(&scratch, path).ok_or_else(|| {
            anyhow::anyhow!("no usable font face in {}", path.display())
        })?;
        Ok(FontHandle::new(path, family))
    }
}
