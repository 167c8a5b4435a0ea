//! Typed error variants for the plotfont crate.
//!
//! Provides structured error types for font resolution so callers can match
//! on specific failure modes instead of opaque `anyhow` strings.

use std::fmt;
use std::path::PathBuf;

/// Errors produced while resolving a logical font name to a file on disk.
///
/// Public APIs return `anyhow::Result`; `FontError` values are coerced via
/// the `From` impl that `anyhow` provides for any `std::error::Error`, and
/// remain recoverable through `Error::downcast_ref::<FontError>()`.
///
/// # Example
///
/// ```rust,no_run
/// use plotfont::FontError;
///
/// fn check_resolve_err(e: &anyhow::Error) {
///     if let Some(font_err) = e.downcast_ref::<FontError>() {
///         match font_err {
///             FontError::UnknownFontName(name) => eprintln!("no mapping for {name}"),
///             FontError::FontFileNotFound(path) => eprintln!("missing file {path:?}"),
///             FontError::OverrideFile(msg) => eprintln!("override file: {msg}"),
///         }
///     }
/// }
/// ```
#[derive(Debug)]
pub enum FontError {
    /// The requested logical name is absent from the font map and the
    /// configured default name has no mapping either.
    ///
    /// The inner string is the name that was requested.
    UnknownFontName(String),

    /// The logical name mapped to a path that does not exist on disk.
    ///
    /// The inner path is the fully resolved path that was checked.
    FontFileNotFound(PathBuf),

    /// The external override file could not be used.
    ///
    /// This variant is never returned from construction; a bad override file
    /// only produces a diagnostic. It exists so helpers that parse override
    /// content can classify what went wrong.
    OverrideFile(String),
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::UnknownFontName(name) => {
                write!(f, "unknown font name '{name}' and no usable default mapping")
            }
            FontError::FontFileNotFound(path) => {
                write!(f, "font file not found: {}", path.display())
            }
            FontError::OverrideFile(msg) => write!(f, "override file ignored: {msg}"),
        }
    }
}

impl std::error::Error for FontError {}
