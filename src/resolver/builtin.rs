//! Built-in font table configuration.
//!
//! Defines the default logical-name to font-file mapping used when no
//! overrides are supplied.

/// Built-in logical font names and their file specifiers.
///
/// Values are either bare filenames, resolved against the configured font
/// directory, or absolute paths used as-is. Override sources (constructor
/// mapping, external override file) can replace any entry or add new ones.
pub const BUILTIN_FONTS: &[(&str, &str)] = &[
    ("Helvetica Neue", "HelveticaNeue.ttc"),
    ("Helvetica", "Helvetica.ttc"),
    ("Futura", "Futura.ttc"),
    ("Futura ND Book", "Neufville Digital - Futura ND Book.ttf"),
    ("Futura ND Bold", "Neufville Digital - Futura ND Bold.ttf"),
    ("Optima", "Optima.ttc"),
    ("Baskerville", "Baskerville.ttc"),
    ("Myriad", "MyriadPro-Regular.otf"),
    ("Hiragino", "ヒラギノ角ゴシック W3.ttc"),
];
