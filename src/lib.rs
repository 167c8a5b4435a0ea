//! Font resolution and registration for chart rendering.
//!
//! This crate resolves human-readable font names to font files on disk and
//! registers them with a rendering engine so generated charts use a chosen
//! typeface instead of a default fallback. It provides:
//! - A built-in logical-name to font-file table with two override layers
//!   (constructor mapping and an optional `fontmap.json` next to the
//!   executable)
//! - Directory-relative path resolution with absolute-path passthrough
//! - Activation through a pluggable [`RenderBackend`], tracking the
//!   currently active internal family name
//! - Per-font handles for per-element overrides that leave global state
//!   untouched
//!
//! # Architecture
//!
//! The [`FontResolver`] owns the merged font map and drives a
//! [`RenderBackend`], the seam to the rendering engine's font manager.
//! [`FontdbBackend`] is the reference backend over a `fontdb::Database`.

pub mod backend;
pub mod error;
pub mod resolver;

// Re-export main types for convenience
pub use backend::{FontHandle, FontdbBackend, RenderBackend};
pub use error::FontError;
pub use resolver::{BUILTIN_FONTS, FontMap, FontResolver, OVERRIDE_FILE_NAME, ResolverConfig};
