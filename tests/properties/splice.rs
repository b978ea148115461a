//! Property tests for placeholder splicing.

use proptest::prelude::*;

use conkie::domain::services::{apply_splices, AssetDiscoverer, Splice};

use super::discovery::theme;

fn content() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9{};:. \n]{0,40}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every placeholder survives once, immediately followed by
    /// its wrapped content, in marker order.
    #[test]
    fn property_splice_keeps_token_then_content(
        theme in theme(),
        contents in proptest::collection::vec(content(), 12),
    ) {
        let discovery = AssetDiscoverer::default().discover(&theme.markup);
        let splices: Vec<Splice> = discovery
            .markers
            .iter()
            .zip(contents.iter())
            .map(|(marker, content)| Splice::new(marker, content))
            .collect();

        let output = apply_splices(&discovery.markup, &splices);

        let mut last = 0;
        for splice in &splices {
            prop_assert_eq!(output.matches(splice.token.as_str()).count(), 1);
            let at = output.find(&splice.replacement());
            prop_assert!(at.is_some(), "missing {}", splice.token);
            let at = at.unwrap();
            prop_assert!(at >= last);
            last = at;
        }
    }

    /// PROPERTY: splicing nothing leaves the markup untouched.
    #[test]
    fn property_empty_splice_is_identity(theme in theme()) {
        let discovery = AssetDiscoverer::default().discover(&theme.markup);
        prop_assert_eq!(apply_splices(&discovery.markup, &[]), discovery.markup);
    }
}
