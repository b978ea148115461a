//! Scenario: the theme itself is an installed package.

use std::fs;
use std::sync::Arc;

use conkie::domain::entities::ThemeSource;
use conkie::domain::ports::{CompileEvent, RecordingEventSink};

use crate::common::*;

#[test]
fn theme_package_main_is_compiled_with_its_dependencies() {
    let env = TestEnv::new();
    let theme_dir = env.install_package_with_main(
        "conkie-theme-mine",
        Some("index.html"),
        &[
            ("index.html", LOCAL_ONLY_THEME),
            ("main.js", "var acme = require('acme-js');"),
        ],
    );
    let acme_dir = env.install_package("acme-js", &[("dist/acme.js", ACME_JS)]);

    let recorder = RecordingEventSink::new();
    let compiler = env.compiler().with_events(Arc::new(recorder.clone()));
    let session = env.session("conkie-theme-mine");
    let document = compiler.compile(&session).unwrap();

    assert_eq!(document.theme().base_dir(), theme_dir.as_path());
    assert!(matches!(document.theme().source(), ThemeSource::Package { .. }));

    let written = fs::read_to_string(document.path()).unwrap();
    assert!(written.contains(&format!("require('{}')", acme_dir.display())));

    let resolved = recorder.events().into_iter().find_map(|event| match event {
        CompileEvent::ThemeResolved { package, .. } => package,
        _ => None,
    });
    assert_eq!(resolved.as_deref(), Some("conkie-theme-mine"));
}

#[test]
fn file_reference_resolves_to_file_source() {
    let env = TestEnv::new();
    env.install_package("conkie-theme-default", &[("index.js", "<p>from package</p>")]);
    env.write_entry("<p>from file</p>");

    let session = env.session(arg(&env.entry()));
    let document = env.compiler().compile(&session).unwrap();

    let written = fs::read_to_string(document.path()).unwrap();
    assert_eq!(written, "<p>from file</p>");
    assert!(matches!(document.theme().source(), ThemeSource::File));
}

#[test]
fn package_without_main_uses_index_js() {
    let env = TestEnv::new();
    env.install_package("conkie-theme-bare", &[("index.js", "<p>bare</p>")]);

    let session = env.session("conkie-theme-bare");
    let document = env.compiler().compile(&session).unwrap();

    assert!(document.theme().entry_file().ends_with("conkie-theme-bare/index.js"));
    assert_eq!(fs::read_to_string(document.path()).unwrap(), "<p>bare</p>");
}
