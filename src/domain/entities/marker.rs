//! Asset marker entity
//!
//! A marker records one asset reference found in the theme markup. The
//! reference itself is replaced by the marker's placeholder token during
//! discovery; in the splice phase the token is followed by the inlined asset.

use std::fmt;

/// Kind of asset reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    /// Stylesheet shipped inside an installed package
    Css,
    /// Script shipped inside an installed package
    BundledJs,
    /// Script shipped with the theme itself
    LocalJs,
}

impl MarkerKind {
    /// Label used inside placeholder comments
    pub fn label(&self) -> &'static str {
        match self {
            MarkerKind::Css => "CSS",
            MarkerKind::BundledJs => "JS",
            MarkerKind::LocalJs => "JS LOCAL",
        }
    }

    /// Human readable name of the pre-load step that reads this kind
    pub fn preload_name(&self) -> &'static str {
        match self {
            MarkerKind::Css => "CSS pre-load",
            MarkerKind::BundledJs => "JS pre-load",
            MarkerKind::LocalJs => "JS local pre-load",
        }
    }

    /// Wrap asset content in the element that makes it live inline
    pub fn wrap(&self, content: &str) -> String {
        match self {
            MarkerKind::Css => format!("<style>{}</style>", content),
            MarkerKind::BundledJs | MarkerKind::LocalJs => format!("<script>{}</script>", content),
        }
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One discovered asset reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetMarker {
    kind: MarkerKind,
    /// Owning package (CSS and bundled JS only)
    module: Option<String>,
    /// File relative to the package install dir, or to the theme base dir
    file: String,
    /// Placeholder comment standing in for the reference
    token: String,
    /// Byte offset of the token in the discovered markup
    position: Option<usize>,
    /// Fetched content (local JS is fetched before module resolution)
    content: Option<String>,
}

impl AssetMarker {
    pub fn css(module: impl Into<String>, file: impl Into<String>, token: impl Into<String>) -> Self {
        Self::new(MarkerKind::Css, Some(module.into()), file.into(), token.into())
    }

    pub fn bundled_js(
        module: impl Into<String>,
        file: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self::new(
            MarkerKind::BundledJs,
            Some(module.into()),
            file.into(),
            token.into(),
        )
    }

    pub fn local_js(file: impl Into<String>, token: impl Into<String>) -> Self {
        Self::new(MarkerKind::LocalJs, None, file.into(), token.into())
    }

    fn new(kind: MarkerKind, module: Option<String>, file: String, token: String) -> Self {
        Self {
            kind,
            module,
            file,
            token,
            position: None,
            content: None,
        }
    }

    /// Pin the token to a byte offset in the discovered markup
    pub fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Base placeholder text for a reference, before de-duplication
    pub fn placeholder(kind: MarkerKind, module: Option<&str>, file: &str) -> String {
        match module {
            Some(module) => format!("<!-- {} FOR [{}/{}] -->", kind.label(), module, file),
            None => format!("<!-- {} FOR [{}] -->", kind.label(), file),
        }
    }

    pub fn kind(&self) -> MarkerKind {
        self.kind
    }

    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn set_content(&mut self, content: String) {
        self.content = Some(content);
    }

    /// Description used in error messages, e.g. `CSS pre-load of "style.css"`
    pub fn requested_by(&self) -> String {
        format!("{} of \"{}\"", self.kind.preload_name(), self.file)
    }
}
