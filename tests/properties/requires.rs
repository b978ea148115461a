//! Property tests for `require` rewriting in local scripts.

use proptest::prelude::*;

use conkie::domain::entities::{ResolvedModule, ResolvedModules};
use conkie::domain::services::{rewrite_requires, scan_requires};
use conkie::domain::value_objects::ModuleBlacklist;

const HOST_MODULES: &[&str] = &[
    "electron",
    "lodash",
    "fs",
    "fs/promises",
    "path/posix",
    "node:os",
    "child_process",
];

fn quote() -> impl Strategy<Value = char> {
    prop_oneof![Just('"'), Just('\'')]
}

fn surrounding() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9 =;.\n]{0,30}").unwrap()
}

fn package_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,10}")
        .unwrap()
        .prop_filter("not provided by the host", |name| {
            !ModuleBlacklist::default().provides(name)
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: calls naming host modules are copied byte for byte, even
    /// when nothing is resolved.
    #[test]
    fn property_blacklisted_requires_are_untouched(
        index in 0..HOST_MODULES.len(),
        quote in quote(),
        before in surrounding(),
        after in surrounding(),
    ) {
        let content = format!("{before}require({quote}{}{quote}){after}", HOST_MODULES[index]);

        let rewritten = rewrite_requires(
            &content,
            &ResolvedModules::new(),
            &ModuleBlacklist::default(),
            "JS local pre-load",
        )
        .unwrap();

        prop_assert_eq!(rewritten, content);
    }

    /// PROPERTY: installed packages are rewritten to their install
    /// directory, keeping the original quote character.
    #[test]
    fn property_installed_requires_point_at_install_dir(
        name in package_name(),
        quote in quote(),
        before in surrounding(),
        after in surrounding(),
    ) {
        let content = format!("{before}require({quote}{name}{quote}){after}");
        let mut modules = ResolvedModules::new();
        modules.insert(ResolvedModule::new(name.clone(), format!("/pkgs/{name}")));

        prop_assert_eq!(scan_requires(&content), vec![name.clone()]);

        let rewritten = rewrite_requires(
            &content,
            &modules,
            &ModuleBlacklist::default(),
            "JS local pre-load",
        )
        .unwrap();

        prop_assert_eq!(
            rewritten,
            format!("{before}require({quote}/pkgs/{name}{quote}){after}")
        );
    }

    /// PROPERTY: an unresolved package is always an error naming it.
    #[test]
    fn property_unresolved_require_names_module(name in package_name(), quote in quote()) {
        let content = format!("require({quote}{name}{quote});");

        let err = rewrite_requires(
            &content,
            &ResolvedModules::new(),
            &ModuleBlacklist::default(),
            "JS local pre-load",
        )
        .unwrap_err();

        let expected = format!("\"{name}\"");
        prop_assert!(err.to_string().contains(&expected));
    }
}
