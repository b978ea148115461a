//! Scenario: a theme pulls stylesheets and scripts from installed packages.

use std::fs;
use std::sync::Arc;

use conkie::domain::ports::{CompileEvent, RecordingEventSink};
use conkie::domain::value_objects::CompilePhase;
use conkie::CompileSession;

use crate::common::*;

#[test]
fn stylesheet_from_package_is_inlined_after_placeholder() {
    let env = TestEnv::new();
    env.write_entry(CSS_THEME);
    env.install_package("acme-css", &[("style.css", ACME_CSS)]);

    let session = env.session(arg(&env.entry()));
    let document = env.compiler().compile(&session).unwrap();

    let written = fs::read_to_string(document.path()).unwrap();
    assert!(written.contains("<!-- CSS FOR [acme-css/style.css] -->\n<style>body{color:red}</style>"));
    assert!(!written.contains("<link"));
    assert_eq!(document.marker_count(), 1);
    assert_eq!(document.module_count(), 1);
}

#[test]
fn compiled_document_snapshot() {
    let env = TestEnv::new();
    env.write_entry(
        r#"<html>
<head>
<link rel="stylesheet" href="<%=paths.modules%>/acme-css/style.css">
<script src="<%= paths.modules %>/acme-js/dist/acme.js"></script>
</head>
<body class="debug-<%= debugMode %>">
<%# theme comment %>
</body>
</html>"#,
    );
    env.install_package("acme-css", &[("style.css", ACME_CSS)]);
    env.install_package("acme-js", &[("dist/acme.js", ACME_JS)]);

    let session = env.session(arg(&env.entry()));
    let document = env.compiler().compile(&session).unwrap();
    let written = fs::read_to_string(document.path()).unwrap();

    insta::assert_snapshot!(written, @r###"
    <html>
    <head>
    <!-- CSS FOR [acme-css/style.css] -->
    <style>body{color:red}</style>
    <!-- JS FOR [acme-js/dist/acme.js] -->
    <script>window.acme = {};</script>
    </head>
    <body class="debug-false">

    </body>
    </html>
    "###);
}

#[test]
fn full_theme_inlines_every_asset_and_rewrites_requires() {
    let env = TestEnv::new();
    env.write_entry(FULL_THEME);
    env.write_theme_file("js/widgets.js", WIDGETS_JS);
    env.install_package("acme-css", &[("style.css", ACME_CSS)]);
    env.install_package("acme-js", &[("dist/acme.js", ACME_JS)]);
    let moment_dir = env.install_package("moment", &[("moment.js", "/* moment */")]);

    let recorder = RecordingEventSink::new();
    let compiler = env.compiler().with_events(Arc::new(recorder.clone()));
    let session = CompileSession::new(env.options(arg(&env.entry())).with_debug(true));
    let document = compiler.compile(&session).unwrap();

    let written = fs::read_to_string(document.path()).unwrap();
    assert!(written.contains("<style>body{color:red}</style>"));
    assert!(written.contains("<script>window.acme = {};</script>"));
    assert!(written.contains("<!-- JS LOCAL FOR [js/widgets.js] -->\n<script>"));
    assert!(written.contains(&format!("require(\"{}\")", moment_dir.display())));
    assert!(written.contains("require('electron')"));
    assert!(written.contains("require(\"fs\")"));
    assert!(written.contains("require('./helper')"));
    assert!(written.contains(r#"<body class="true">"#));
    assert_eq!(document.marker_count(), 3);

    let requested = recorder.events().into_iter().find_map(|event| match event {
        CompileEvent::ModulesRequested { names } => Some(names),
        _ => None,
    });
    let mut requested = requested.unwrap();
    requested.sort();
    assert_eq!(requested, vec!["acme-css", "acme-js", "moment"]);

    assert_eq!(recorder.phases().last(), Some(&CompilePhase::Ready));
}

#[test]
fn repeated_reference_gets_numbered_placeholder() {
    let env = TestEnv::new();
    env.write_entry(
        r#"<link href="<%=paths.modules%>/acme-css/style.css">
<link href="<%=paths.modules%>/acme-css/style.css">"#,
    );
    env.install_package("acme-css", &[("style.css", ACME_CSS)]);

    let session = env.session(arg(&env.entry()));
    let document = env.compiler().compile(&session).unwrap();
    let written = fs::read_to_string(document.path()).unwrap();

    assert!(written.contains("<!-- CSS FOR [acme-css/style.css] -->\n<style>"));
    assert!(written.contains("<!-- CSS FOR [acme-css/style.css] #2 -->\n<style>"));
    assert_eq!(written.matches(ACME_CSS).count(), 2);
}

#[test]
fn template_paths_point_at_root_and_theme() {
    let env = TestEnv::new();
    env.write_entry(r#"<img src="<%= paths.theme %>/logo.png"><a href="<%-paths.root%>">"#);

    let session = env.session(arg(&env.entry()));
    let document = env.compiler().compile(&session).unwrap();
    let written = fs::read_to_string(document.path()).unwrap();

    assert!(written.contains(&format!(
        r#"<img src="file://{}/logo.png">"#,
        env.theme_dir().display()
    )));
    assert!(written.contains(&format!(r#"<a href="file://{}">"#, env.root.path().display())));
}

#[test]
fn package_sharing_a_core_module_name_is_inlined() {
    let env = TestEnv::new();
    env.write_entry(r#"<script src="<%=paths.modules%>/events/events.js"></script>"#);
    env.install_package("events", &[("events.js", "function EventEmitter() {}")]);

    let session = env.session(arg(&env.entry()));
    let document = env.compiler().compile(&session).unwrap();

    let written = fs::read_to_string(document.path()).unwrap();
    assert!(written.contains(
        "<!-- JS FOR [events/events.js] -->\n<script>function EventEmitter() {}</script>"
    ));
    assert_eq!(document.module_count(), 1);
}

#[test]
fn core_module_subpaths_stay_verbatim() {
    let env = TestEnv::new();
    env.write_entry(LOCAL_ONLY_THEME);
    env.write_theme_file(
        "main.js",
        "const fsp = require('fs/promises'); const fs = require('fs');",
    );

    let session = env.session(arg(&env.entry()));
    let document = env.compiler().compile(&session).unwrap();

    let written = fs::read_to_string(document.path()).unwrap();
    assert!(written.contains(
        "<script>const fsp = require('fs/promises'); const fs = require('fs');</script>"
    ));
    assert_eq!(document.module_count(), 0);
}

#[test]
fn pasted_placeholder_text_does_not_capture_content() {
    let env = TestEnv::new();
    env.write_entry(
        r#"<!-- CSS FOR [acme-css/style.css] -->
<link rel="stylesheet" href="<%=paths.modules%>/acme-css/style.css">"#,
    );
    env.install_package("acme-css", &[("style.css", ACME_CSS)]);

    let session = env.session(arg(&env.entry()));
    let document = env.compiler().compile(&session).unwrap();

    let written = fs::read_to_string(document.path()).unwrap();
    assert_eq!(
        written,
        "<!-- CSS FOR [acme-css/style.css] -->\n<!-- CSS FOR [acme-css/style.css] -->\n<style>body{color:red}</style>"
    );
}
