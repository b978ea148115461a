//! Property tests for asset discovery.

use std::collections::HashSet;

use proptest::prelude::*;

use conkie::domain::entities::MarkerKind;
use conkie::domain::services::AssetDiscoverer;

/// Markup built from numbered references separated by filler text
#[derive(Debug, Clone)]
pub struct Theme {
    pub markup: String,
    pub css: usize,
    pub bundled: usize,
    pub local: usize,
}

fn filler() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 .,\n]{0,24}").unwrap()
}

fn reference(kind: u8, index: usize, name: &str) -> String {
    match kind {
        0 => format!(r#"<link rel="stylesheet" href="<%=paths.modules%>/m{index}-{name}/s{index}.css">"#),
        1 => format!(r#"<script src="<%=paths.modules%>/m{index}-{name}/dist/b{index}.js"></script>"#),
        _ => format!(r#"<script src="<%=paths.theme%>/js/l{index}-{name}.js"></script>"#),
    }
}

pub fn theme() -> impl Strategy<Value = Theme> {
    let item = (0u8..3, "[a-z]{1,8}", filler());
    (filler(), proptest::collection::vec(item, 0..12)).prop_map(|(head, items)| {
        let mut theme = Theme {
            markup: head,
            css: 0,
            bundled: 0,
            local: 0,
        };
        for (index, (kind, name, tail)) in items.into_iter().enumerate() {
            theme.markup.push_str(&reference(kind, index, &name));
            theme.markup.push_str(&tail);
            match kind {
                0 => theme.css += 1,
                1 => theme.bundled += 1,
                _ => theme.local += 1,
            }
        }
        theme
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: N + M + K references yield exactly N + M + K distinct
    /// placeholders, partitioned by kind.
    #[test]
    fn property_discovery_counts_and_partitions(theme in theme()) {
        let discovery = AssetDiscoverer::default().discover(&theme.markup);

        prop_assert_eq!(discovery.markers.len(), theme.css + theme.bundled + theme.local);
        prop_assert_eq!(discovery.markers_of(MarkerKind::Css).count(), theme.css);
        prop_assert_eq!(discovery.markers_of(MarkerKind::BundledJs).count(), theme.bundled);
        prop_assert_eq!(discovery.markers_of(MarkerKind::LocalJs).count(), theme.local);

        let tokens: HashSet<&str> = discovery.markers.iter().map(|m| m.token()).collect();
        prop_assert_eq!(tokens.len(), discovery.markers.len());
        for token in &tokens {
            prop_assert_eq!(discovery.markup.matches(token).count(), 1);
        }

        // Local scripts never request modules directly
        prop_assert_eq!(discovery.module_requests.len(), theme.css + theme.bundled);
    }

    /// PROPERTY: placeholders are not asset references, so a second pass
    /// finds nothing and changes nothing.
    #[test]
    fn property_discovery_is_idempotent(theme in theme()) {
        let discoverer = AssetDiscoverer::default();
        let first = discoverer.discover(&theme.markup);
        let second = discoverer.discover(&first.markup);

        prop_assert!(second.markers.is_empty());
        prop_assert_eq!(second.markup, first.markup);
    }

    /// PROPERTY: discovery never panics on arbitrary input.
    #[test]
    fn property_discovery_never_panics(s in "(?s).{0,256}") {
        let _ = AssetDiscoverer::default().discover(&s);
    }
}
