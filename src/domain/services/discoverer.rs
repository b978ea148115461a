//! Asset discovery
//!
//! Replaces every recognised asset reference in the theme markup with a
//! unique placeholder comment and records an [`AssetMarker`] for it. Package
//! assets contribute their module name to the module requests; local scripts
//! do not (their own `require` calls are scanned once their content is read).

use std::collections::HashMap;
use std::thread;

use crate::domain::entities::{AssetMarker, MarkerKind, ModuleRequests};

use super::join;
use super::matcher::{default_patterns, AssetMatch, AssetPattern};

/// Output of a discovery run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Markup with references replaced by placeholder tokens
    pub markup: String,
    /// One marker per replaced reference, in document order
    pub markers: Vec<AssetMarker>,
    /// Module names contributed by package assets
    pub module_requests: ModuleRequests,
}

impl Discovery {
    pub fn markers_of(&self, kind: MarkerKind) -> impl Iterator<Item = &AssetMarker> {
        self.markers.iter().filter(move |m| m.kind() == kind)
    }
}

pub struct AssetDiscoverer {
    patterns: Vec<Box<dyn AssetPattern>>,
}

impl Default for AssetDiscoverer {
    fn default() -> Self {
        Self {
            patterns: default_patterns(),
        }
    }
}

impl AssetDiscoverer {
    /// Discoverer without any pattern; add shapes with [`Self::with_pattern`]
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    pub fn with_pattern(mut self, pattern: impl AssetPattern + 'static) -> Self {
        self.patterns.push(Box::new(pattern));
        self
    }

    /// Scan `markup` with every pattern concurrently and splice in placeholders
    pub fn discover(&self, markup: &str) -> Discovery {
        let mut found: Vec<(MarkerKind, AssetMatch)> = thread::scope(|scope| {
            let handles: Vec<_> = self
                .patterns
                .iter()
                .map(|pattern| {
                    scope.spawn(move || {
                        let kind = pattern.kind();
                        pattern
                            .find_all(markup)
                            .into_iter()
                            .map(|m| (kind, m))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(join)
                .collect()
        });

        found.sort_by_key(|(_, m)| (m.span.start, m.span.end));

        let mut discovery = Discovery::default();
        let mut uses: HashMap<String, usize> = HashMap::new();
        let mut cursor = 0;

        for (kind, found_match) in found {
            // Shapes supplied by callers could overlap; first one wins
            if found_match.span.start < cursor {
                continue;
            }

            let base = AssetMarker::placeholder(kind, found_match.module.as_deref(), &found_match.file);
            let count = uses.entry(base.clone()).or_insert(0);
            *count += 1;
            let token = if *count == 1 {
                base
            } else {
                format!("{} #{} -->", base.trim_end_matches(" -->"), count)
            };

            discovery.markup.push_str(&markup[cursor..found_match.span.start]);
            let position = discovery.markup.len();
            discovery.markup.push_str(&token);
            cursor = found_match.span.end;

            let marker = match (kind, found_match.module) {
                (MarkerKind::LocalJs, _) | (_, None) => AssetMarker::local_js(found_match.file, token),
                (MarkerKind::Css, Some(module)) => {
                    discovery.module_requests.push(module.clone());
                    AssetMarker::css(module, found_match.file, token)
                }
                (MarkerKind::BundledJs, Some(module)) => {
                    discovery.module_requests.push(module.clone());
                    AssetMarker::bundled_js(module, found_match.file, token)
                }
            };
            discovery.markers.push(marker.at(position));
        }

        discovery.markup.push_str(&markup[cursor..]);
        discovery
    }
}
