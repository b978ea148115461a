//! Scenario: a theme references packages or files that do not exist.

use std::fs;
use std::sync::Arc;

use conkie::domain::ports::{CompileEvent, RecordingEventSink};
use conkie::domain::value_objects::CompilePhase;
use conkie::ConkieError;

use crate::common::*;

#[test]
fn missing_stylesheet_package_fails_and_writes_nothing() {
    let env = TestEnv::new();
    env.write_entry(MISSING_ICONS_THEME);

    let recorder = RecordingEventSink::new();
    let compiler = env.compiler().with_events(Arc::new(recorder.clone()));
    let session = env.session(arg(&env.entry()));

    let err = compiler.compile(&session).unwrap_err();

    match &err {
        ConkieError::ModuleResolution {
            module,
            requested_by,
        } => {
            assert_eq!(module, "foo-theme-icons");
            assert!(requested_by.contains("icons.css"));
        }
        other => panic!("expected ModuleResolution, got {other:?}"),
    }
    assert!(err.to_string().contains("\"foo-theme-icons\""));

    assert_eq!(session.phase(), CompilePhase::Failed);
    assert!(session.transient_path().is_none());
    assert_eq!(fs::read_dir(env.home_dir.path()).unwrap().count(), 0);
    assert!(!recorder
        .events()
        .iter()
        .any(|event| matches!(event, CompileEvent::Compiled { .. })));
}

#[test]
fn missing_local_script_names_the_file() {
    let env = TestEnv::new();
    env.write_entry(LOCAL_ONLY_THEME);

    let session = env.session(arg(&env.entry()));
    let err = env.compiler().compile(&session).unwrap_err();

    match err {
        ConkieError::AssetRead { path, .. } => assert!(path.ends_with("main.js")),
        other => panic!("expected AssetRead, got {other:?}"),
    }
}

#[test]
fn missing_file_inside_installed_package_is_asset_error() {
    let env = TestEnv::new();
    env.write_entry(CSS_THEME);
    env.install_package("acme-css", &[("other.css", ACME_CSS)]);

    let session = env.session(arg(&env.entry()));
    let err = env.compiler().compile(&session).unwrap_err();

    match err {
        ConkieError::AssetRead {
            path, requested_by, ..
        } => {
            assert!(path.ends_with("acme-css/style.css"));
            assert_eq!(requested_by, "CSS pre-load");
        }
        other => panic!("expected AssetRead, got {other:?}"),
    }
}

#[test]
fn required_package_missing_from_local_script_fails() {
    let env = TestEnv::new();
    env.write_entry(LOCAL_ONLY_THEME);
    env.write_theme_file("main.js", "var chart = require('chartist');");

    let session = env.session(arg(&env.entry()));
    let err = env.compiler().compile(&session).unwrap_err();

    match err {
        ConkieError::ModuleResolution {
            module,
            requested_by,
        } => {
            assert_eq!(module, "chartist");
            assert!(requested_by.starts_with("JS local pre-load"));
        }
        other => panic!("expected ModuleResolution, got {other:?}"),
    }
}

#[test]
fn unknown_theme_reference_is_theme_not_found() {
    let env = TestEnv::new();

    let session = env.session("conkie-theme-does-not-exist");
    let err = env.compiler().compile(&session).unwrap_err();

    assert!(matches!(err, ConkieError::ThemeNotFound { .. }));
    assert_eq!(session.phase(), CompilePhase::Failed);
}

#[test]
fn broken_manifest_of_requested_package_is_reported() {
    let env = TestEnv::new();
    env.write_entry(CSS_THEME);
    let dir = env.install_package("acme-css", &[("style.css", ACME_CSS)]);
    fs::write(dir.join("package.json"), "{ not json").unwrap();

    let session = env.session(arg(&env.entry()));
    let err = env.compiler().compile(&session).unwrap_err();

    assert!(matches!(err, ConkieError::InvalidManifest { .. }));
}
