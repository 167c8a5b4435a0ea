//! Integration tests for the plotfont crate.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

use plotfont::{
    BUILTIN_FONTS, FontError, FontHandle, FontResolver, RenderBackend, ResolverConfig,
};

/// Test double that records every call a resolver makes into the backend.
#[derive(Default)]
struct RecordingBackend {
    registered: Vec<PathBuf>,
    global_family: Option<String>,
    unicode_minus: Option<bool>,
}

impl RecordingBackend {
    /// Internal family name derived from the file stem, e.g.
    /// `HelveticaNeue.ttc` registers as `HelveticaNeue Internal`.
    fn family_of(path: &Path) -> String {
        format!("{} Internal", path.file_stem().unwrap().to_string_lossy())
    }
}

impl RenderBackend for RecordingBackend {
    fn register_font_file(&mut self, path: &Path) -> Result<String> {
        self.registered.push(path.to_path_buf());
        Ok(Self::family_of(path))
    }

    fn set_global_family(&mut self, family: &str) {
        self.global_family = Some(family.to_string());
    }

    fn set_unicode_minus(&mut self, enabled: bool) {
        self.unicode_minus = Some(enabled);
    }

    fn font_handle(&self, path: &Path) -> Result<FontHandle> {
        Ok(FontHandle::new(path, Self::family_of(path)))
    }
}

/// Base directory with stub files for every built-in relative filename.
fn font_dir_with_builtins() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (_, file) in BUILTIN_FONTS {
        std::fs::write(dir.path().join(file), b"stub font bytes").unwrap();
    }
    dir
}

fn config_for(dir: &TempDir) -> ResolverConfig {
    ResolverConfig {
        font_dir: dir.path().to_path_buf(),
        default_font: "Helvetica Neue".to_string(),
        // Keep an ambient fontmap.json in the working directory from
        // leaking into tests.
        override_file: Some(dir.path().join("absent-override.json")),
    }
}

#[test]
fn relative_values_join_base_directory() {
    let dir = font_dir_with_builtins();
    let resolver = FontResolver::new(config_for(&dir));

    for (name, file) in BUILTIN_FONTS {
        let path = resolver.resolve_path(name).unwrap();
        assert_eq!(path, dir.path().join(file), "wrong path for {name}");
    }
}

#[test]
fn absolute_values_pass_through() {
    let dir = font_dir_with_builtins();
    let other_dir = tempfile::tempdir().unwrap();
    let abs = other_dir.path().join("LabSans.otf");
    std::fs::write(&abs, b"stub").unwrap();

    let resolver = FontResolver::with_overrides(
        config_for(&dir),
        vec![("Lab Sans".to_string(), abs.to_string_lossy().into_owned())],
    );
    assert_eq!(resolver.resolve_path("Lab Sans").unwrap(), abs);
}

#[test]
fn override_precedence_external_file_wins() {
    let dir = font_dir_with_builtins();
    std::fs::write(dir.path().join("y.ttf"), b"stub").unwrap();
    std::fs::write(dir.path().join("z.ttf"), b"stub").unwrap();

    let override_path = dir.path().join("fontmap.json");
    std::fs::write(&override_path, r#"{"Optima": "z.ttf"}"#).unwrap();

    let mut config = config_for(&dir);
    config.override_file = Some(override_path);

    // Built-in maps Optima to Optima.ttc, the constructor override to y.ttf,
    // the external file to z.ttf. The external file must win.
    let resolver = FontResolver::with_overrides(
        config,
        vec![("Optima".to_string(), "y.ttf".to_string())],
    );
    assert_eq!(
        resolver.resolve_path("Optima").unwrap(),
        dir.path().join("z.ttf")
    );
}

#[test]
fn unknown_name_falls_back_to_default() {
    let dir = font_dir_with_builtins();
    let resolver = FontResolver::new(config_for(&dir));

    let path = resolver.resolve_path("nonexistent-name").unwrap();
    assert_eq!(path, dir.path().join("HelveticaNeue.ttc"));
}

#[test]
fn unknown_name_without_default_mapping_fails() {
    let dir = font_dir_with_builtins();
    let mut config = config_for(&dir);
    config.default_font = "Not A Mapping".to_string();

    let resolver = FontResolver::new(config);
    let err = resolver.resolve_path("nonexistent-name").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<FontError>(),
        Some(FontError::UnknownFontName(_))
    ));
}

#[test]
fn missing_font_file_fails_with_path_in_message() {
    let dir = tempfile::tempdir().unwrap();
    let resolver = FontResolver::new(config_for(&dir));

    let err = resolver.resolve_path("Baskerville").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<FontError>(),
        Some(FontError::FontFileNotFound(_))
    ));
    assert!(err.to_string().contains("Baskerville.ttc"));
}

#[test]
fn malformed_override_file_does_not_fail_construction() {
    let dir = font_dir_with_builtins();
    let override_path = dir.path().join("fontmap.json");
    // A JSON array instead of an object.
    std::fs::write(&override_path, r#"["not", "an", "object"]"#).unwrap();

    let mut config = config_for(&dir);
    config.override_file = Some(override_path);

    let resolver = FontResolver::new(config);
    let names = resolver.list_available();
    for (name, _) in BUILTIN_FONTS {
        assert!(names.contains(name), "built-in {name} lost after bad override");
    }
}

#[test]
fn invalid_json_override_file_does_not_fail_construction() {
    let dir = font_dir_with_builtins();
    let override_path = dir.path().join("fontmap.json");
    std::fs::write(&override_path, "{ this is not json").unwrap();

    let mut config = config_for(&dir);
    config.override_file = Some(override_path);

    let resolver = FontResolver::new(config);
    assert_eq!(resolver.list_available().len(), BUILTIN_FONTS.len());
}

#[test]
fn activate_sets_current_and_backend_globals() {
    let dir = font_dir_with_builtins();
    let mut resolver = FontResolver::new(config_for(&dir));
    let mut backend = RecordingBackend::default();

    let family = resolver.activate(&mut backend, "Futura").unwrap();
    assert_eq!(family, "Futura Internal");
    assert_eq!(resolver.current_active(), Some("Futura Internal"));
    assert_eq!(backend.global_family.as_deref(), Some("Futura Internal"));
    assert_eq!(backend.unicode_minus, Some(false));
    assert_eq!(backend.registered, vec![dir.path().join("Futura.ttc")]);
}

#[test]
fn repeated_activation_registers_once() {
    let dir = font_dir_with_builtins();
    let mut resolver = FontResolver::new(config_for(&dir));
    let mut backend = RecordingBackend::default();

    resolver.activate(&mut backend, "Futura").unwrap();
    resolver.activate(&mut backend, "Futura").unwrap();
    assert_eq!(backend.registered.len(), 1, "second activation should hit cache");
    assert_eq!(resolver.current_active(), Some("Futura Internal"));
}

#[test]
fn font_handle_leaves_active_state_untouched() {
    let dir = font_dir_with_builtins();
    let mut resolver = FontResolver::new(config_for(&dir));
    let mut backend = RecordingBackend::default();

    resolver.activate(&mut backend, "Futura").unwrap();
    let handle = resolver.font_handle(&backend, "Hiragino").unwrap();

    assert_eq!(handle.family(), "ヒラギノ角ゴシック W3 Internal");
    assert_eq!(
        resolver.current_active(),
        Some("Futura Internal"),
        "per-font handle must not change the active font"
    );
    assert_eq!(
        backend.global_family.as_deref(),
        Some("Futura Internal"),
        "per-font handle must not change backend globals"
    );
}

#[test]
fn activation_failure_keeps_previous_state() {
    let dir = font_dir_with_builtins();
    let mut config = config_for(&dir);
    config.default_font = "Not A Mapping".to_string();
    let mut resolver = FontResolver::with_overrides(
        config,
        vec![("Ghost".to_string(), "ghost.ttf".to_string())],
    );
    let mut backend = RecordingBackend::default();

    resolver.activate(&mut backend, "Futura").unwrap();
    // ghost.ttf is mapped but missing on disk.
    assert!(resolver.activate(&mut backend, "Ghost").is_err());
    assert_eq!(resolver.current_active(), Some("Futura Internal"));
}

#[test]
fn extra_mapping_appears_in_listing() {
    let dir = font_dir_with_builtins();
    let resolver = FontResolver::with_overrides(
        config_for(&dir),
        vec![("Lab Sans".to_string(), "/abs/path.otf".to_string())],
    );

    let names = resolver.list_available();
    assert!(names.contains(&"Lab Sans"));
    for (name, _) in BUILTIN_FONTS {
        assert!(names.contains(name));
    }
}

#[test]
fn merge_overrides_rebinds_existing_name() {
    let dir = font_dir_with_builtins();
    std::fs::write(dir.path().join("replacement.ttf"), b"stub").unwrap();

    let mut resolver = FontResolver::new(config_for(&dir));
    resolver.merge_overrides(vec![(
        "Myriad".to_string(),
        "replacement.ttf".to_string(),
    )]);

    assert_eq!(
        resolver.resolve_path("Myriad").unwrap(),
        dir.path().join("replacement.ttf")
    );
    assert_eq!(resolver.list_available().len(), BUILTIN_FONTS.len());
}
