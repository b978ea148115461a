//! Placeholder splicing
//!
//! Each placeholder stays in the document as a debugging anchor and the
//! wrapped asset content is inserted right after it.

use crate::domain::entities::AssetMarker;

/// Inlined content for one placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub token: String,
    /// Offset of the token, when discovery recorded one
    pub at: Option<usize>,
    /// Content already wrapped in its `<style>`/`<script>` element
    pub wrapped: String,
}

impl Splice {
    pub fn new(marker: &AssetMarker, content: &str) -> Self {
        Self {
            token: marker.token().to_string(),
            at: marker.position(),
            wrapped: marker.kind().wrap(content),
        }
    }

    /// Text that replaces the bare token
    pub fn replacement(&self) -> String {
        format!("{}\n{}", self.token, self.wrapped)
    }
}

/// Insert every splice after its placeholder
///
/// A recorded offset is used when the token is found there. Otherwise the
/// first occurrence in the original markup is used. Inlined content is never
/// scanned for placeholders. Splices whose token is absent are skipped.
pub fn apply_splices(markup: &str, splices: &[Splice]) -> String {
    let mut located: Vec<(usize, &Splice)> = splices
        .iter()
        .filter_map(|splice| locate(markup, splice).map(|pos| (pos, splice)))
        .collect();
    located.sort_by_key(|(pos, _)| *pos);

    let extra: usize = located.iter().map(|(_, s)| s.wrapped.len() + 1).sum();
    let mut output = String::with_capacity(markup.len() + extra);
    let mut cursor = 0;

    for (pos, splice) in located {
        if pos < cursor {
            continue;
        }
        let end = pos + splice.token.len();
        output.push_str(&markup[cursor..end]);
        output.push('\n');
        output.push_str(&splice.wrapped);
        cursor = end;
    }

    output.push_str(&markup[cursor..]);
    output
}

fn locate(markup: &str, splice: &Splice) -> Option<usize> {
    let recorded = splice.at.filter(|&at| {
        markup.get(at..at + splice.token.len()) == Some(splice.token.as_str())
    });
    recorded.or_else(|| markup.find(&splice.token))
}
