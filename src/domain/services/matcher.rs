//! Asset reference matchers
//!
//! Themes reference their assets through template path variables:
//!
//! ```text
//! <link rel="stylesheet" href="<%=paths.modules%>/acme-css/style.css">
//! <script src="<%=paths.modules%>/jquery/dist/jquery.js"></script>
//! <script src="<%=paths.theme%>/js/main.js"></script>
//! ```
//!
//! Each shape has its own matcher so they can be tested in isolation and new
//! shapes can be added without touching the discoverer. Matching is
//! structural (patterns over the markup), not a full HTML parse.

use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::entities::MarkerKind;

/// `href` of a stylesheet link inside an installed package
static MODULE_STYLESHEET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<link\s(?:[^>]*?\s)?href="<%=\s*paths\.modules\s*%>/((?:@[^/"]+/)?[^/"]+)/([^"]+)"[^>]*>"#,
    )
    .expect("Invalid regex pattern for module stylesheets")
});

/// Body-less script tag whose `src` points inside an installed package
static MODULE_SCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<script\s(?:[^>]*?\s)?src="<%=\s*paths\.modules\s*%>/((?:@[^/"]+/)?[^/"]+)/([^"]+)"[^>]*>\s*</script>"#,
    )
    .expect("Invalid regex pattern for module scripts")
});

/// Body-less script tag whose `src` points inside the theme directory
static THEME_SCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<script\s(?:[^>]*?\s)?src="<%=\s*paths\.theme\s*%>/([^"]+)"[^>]*>\s*</script>"#)
        .expect("Invalid regex pattern for theme scripts")
});

/// `require("name")` or `require('name')`
static REQUIRE_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"require\((?:"([^"\n]+)"|'([^'\n]+)')\)"#)
        .expect("Invalid regex pattern for require calls")
});

/// One asset reference found in markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetMatch {
    /// Byte range of the whole reference (the tag)
    pub span: Range<usize>,
    /// Owning package, for package assets
    pub module: Option<String>,
    /// File relative to the package or theme directory
    pub file: String,
}

/// A reference shape the discoverer can recognise
pub trait AssetPattern: Send + Sync {
    /// Marker kind produced for matches of this shape
    fn kind(&self) -> MarkerKind;

    /// All non-overlapping matches, in document order
    fn find_all(&self, markup: &str) -> Vec<AssetMatch>;
}

/// `<link href="<%=paths.modules%>/<module>/<file>">`
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleStylesheetPattern;

impl AssetPattern for ModuleStylesheetPattern {
    fn kind(&self) -> MarkerKind {
        MarkerKind::Css
    }

    fn find_all(&self, markup: &str) -> Vec<AssetMatch> {
        MODULE_STYLESHEET
            .captures_iter(markup)
            .filter_map(|caps| module_match(&caps))
            .collect()
    }
}

/// `<script src="<%=paths.modules%>/<module>/<file>"></script>`
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleScriptPattern;

impl AssetPattern for ModuleScriptPattern {
    fn kind(&self) -> MarkerKind {
        MarkerKind::BundledJs
    }

    fn find_all(&self, markup: &str) -> Vec<AssetMatch> {
        MODULE_SCRIPT
            .captures_iter(markup)
            .filter_map(|caps| module_match(&caps))
            .collect()
    }
}

/// `<script src="<%=paths.theme%>/<file>"></script>`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeScriptPattern;

impl AssetPattern for ThemeScriptPattern {
    fn kind(&self) -> MarkerKind {
        MarkerKind::LocalJs
    }

    fn find_all(&self, markup: &str) -> Vec<AssetMatch> {
        THEME_SCRIPT
            .captures_iter(markup)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                Some(AssetMatch {
                    span: whole.range(),
                    module: None,
                    file: caps.get(1)?.as_str().to_string(),
                })
            })
            .collect()
    }
}

fn module_match(caps: &Captures<'_>) -> Option<AssetMatch> {
    let whole = caps.get(0)?;
    Some(AssetMatch {
        span: whole.range(),
        module: Some(caps.get(1)?.as_str().to_string()),
        file: caps.get(2)?.as_str().to_string(),
    })
}

/// The three built-in reference shapes
pub fn default_patterns() -> Vec<Box<dyn AssetPattern>> {
    vec![
        Box::new(ModuleStylesheetPattern),
        Box::new(ModuleScriptPattern),
        Box::new(ThemeScriptPattern),
    ]
}

/// A `require(...)` call site inside script content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequireCall<'a> {
    /// Byte range of the whole call
    pub span: Range<usize>,
    /// Quote character used around the name
    pub quote: char,
    /// The module specifier, without quotes
    pub name: &'a str,
}

/// All `require("...")` / `require('...')` calls in `content`
pub fn require_calls(content: &str) -> Vec<RequireCall<'_>> {
    REQUIRE_CALL
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let (quote, name) = match (caps.get(1), caps.get(2)) {
                (Some(name), _) => ('"', name.as_str()),
                (None, Some(name)) => ('\'', name.as_str()),
                (None, None) => return None,
            };
            Some(RequireCall {
                span: whole.range(),
                quote,
                name,
            })
        })
        .collect()
}
