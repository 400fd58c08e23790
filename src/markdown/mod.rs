//! Markdown document model
//!
//! A [`Document`] is an ordered sequence of renderable elements plus a
//! separate list of reference-style image definitions. Every element renders
//! to a string independently; the document newline-joins them in insertion
//! order and emits all image definitions together at the end, regardless of
//! where the corresponding inline references sit.
//!
//! ```rust
//! use experiment_history::markdown::{Document, Header, HeaderLevel, Table};
//!
//! let mut doc = Document::new();
//! doc.add_header(Header::new(HeaderLevel::H1, "Results"));
//! let mut table = Table::new(vec!["metric".to_string(), "value".to_string()])?;
//! table.add_row(vec!["loss".to_string(), "0.03".to_string()])?;
//! doc.add_table(table);
//! let rendered = doc.render()?;
//! assert!(rendered.starts_with("# Results"));
//! # Ok::<(), experiment_history::Error>(())
//! ```

mod list;
mod table;
mod text;

pub use list::{List, ListItemKind};
pub use table::Table;
pub use text::{center_text, Text};

use crate::{Error, Result};

/// Header level, H1 through H6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLevel {
    /// `#`
    H1,
    /// `##`
    H2,
    /// `###`
    H3,
    /// `####`
    H4,
    /// `#####`
    H5,
    /// `######`
    H6,
}

impl HeaderLevel {
    const fn depth(self) -> usize {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
            Self::H5 => 5,
            Self::H6 => 6,
        }
    }
}

/// Section header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    level: HeaderLevel,
    text: String,
}

impl Header {
    /// Create a header at the given level.
    #[must_use]
    pub fn new(level: HeaderLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    /// Render as `#...# text`.
    #[must_use]
    pub fn render(&self) -> String {
        format!("{} {}", "#".repeat(self.level.depth()), self.text)
    }
}

/// Horizontal rule, rendered as `----`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HorizontalRule;

impl HorizontalRule {
    /// Render the rule.
    #[must_use]
    pub fn render(self) -> String {
        "----".to_string()
    }
}

/// Emphasis kind. A closed set, so an unrecognized kind cannot be
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisKind {
    /// `*text*`
    Italic,
    /// `**text**`
    Bold,
    /// `***text***`
    BoldItalic,
    /// `~~text~~`
    Strikethrough,
}

/// Emphasized text span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emphasis {
    kind: EmphasisKind,
    text: String,
}

impl Emphasis {
    /// Wrap `text` in the markers for `kind`.
    #[must_use]
    pub fn new(kind: EmphasisKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Render with matching markers on both sides.
    #[must_use]
    pub fn render(&self) -> String {
        let marker = match self.kind {
            EmphasisKind::Italic => "*",
            EmphasisKind::Bold => "**",
            EmphasisKind::BoldItalic => "***",
            EmphasisKind::Strikethrough => "~~",
        };
        format!("{marker}{}{marker}", self.text)
    }
}

/// Reference-style image: an inline usage plus a definition line collected
/// separately by the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    ref_name: String,
    path: String,
    hover_text: String,
}

impl ImageRef {
    /// Create an image reference.
    #[must_use]
    pub fn new(
        ref_name: impl Into<String>,
        path: impl Into<String>,
        hover_text: impl Into<String>,
    ) -> Self {
        Self {
            ref_name: ref_name.into(),
            path: path.into(),
            hover_text: hover_text.into(),
        }
    }

    /// Render the definition line: `[ref]: path "hover text"`.
    #[must_use]
    pub fn render_definition(&self) -> String {
        format!("[{}]: {} \"{}\"", self.ref_name, self.path, self.hover_text)
    }

    /// Render the inline usage: `![alt text][ref]`.
    #[must_use]
    pub fn render(&self) -> String {
        format!("![alt text][{}]", self.ref_name)
    }
}

/// Inline link, `[text](url)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    url: String,
    text: String,
}

impl Link {
    /// Create an inline link.
    #[must_use]
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
        }
    }

    /// Render as `[text](url)`.
    #[must_use]
    pub fn render(&self) -> String {
        format!("[{}]({})", self.text, self.url)
    }
}

/// Fenced code block with a language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    language: String,
    source: String,
}

impl CodeBlock {
    /// Create a code block from source text already in hand.
    #[must_use]
    pub fn new(language: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            source: source.into(),
        }
    }

    /// Create a code block from a source provider, e.g. something that looks
    /// the text up from a file or registry.
    ///
    /// # Errors
    ///
    /// Returns `SourceUnavailable` if the provider yields `None`.
    pub fn from_provider<F>(language: impl Into<String>, provider: F) -> Result<Self>
    where
        F: FnOnce() -> Option<String>,
    {
        let language = language.into();
        let source = provider().ok_or_else(|| {
            Error::SourceUnavailable(format!("no source text for {language} code block"))
        })?;
        Ok(Self { language, source })
    }

    /// Render as a fenced block.
    #[must_use]
    pub fn render(&self) -> String {
        format!("```{}\n{}\n```", self.language, self.source)
    }
}

/// One renderable document element.
#[derive(Debug, Clone)]
pub enum Element {
    /// Section header.
    Header(Header),
    /// Horizontal rule.
    HorizontalRule(HorizontalRule),
    /// Emphasized span.
    Emphasis(Emphasis),
    /// Two-level list.
    List(List),
    /// Inline image usage (its definition lives in the document's reference
    /// section).
    Image(ImageRef),
    /// Inline link.
    Link(Link),
    /// Fenced code block.
    Code(CodeBlock),
    /// Plain text.
    Text(Text),
    /// Table.
    Table(Table),
}

impl Element {
    /// Render this element to its markdown string.
    ///
    /// # Errors
    ///
    /// Propagates a table's rendering error; all other variants are
    /// infallible.
    pub fn render(&self) -> Result<String> {
        Ok(match self {
            Self::Header(h) => h.render(),
            Self::HorizontalRule(r) => r.render(),
            Self::Emphasis(e) => e.render(),
            Self::List(l) => l.render(),
            Self::Image(i) => i.render(),
            Self::Link(l) => l.render(),
            Self::Code(c) => c.render(),
            Self::Text(t) => t.render(),
            Self::Table(t) => t.render()?,
        })
    }
}

/// Ordered collection of elements plus the reference-style image
/// definitions.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
    image_refs: Vec<ImageRef>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the document has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Add an image: inline usage in element order, definition collected for
    /// the reference section.
    pub fn add_image(&mut self, image: ImageRef) {
        self.image_refs.push(image.clone());
        self.elements.push(Element::Image(image));
    }

    /// Add a header.
    pub fn add_header(&mut self, header: Header) {
        self.elements.push(Element::Header(header));
    }

    /// Add a horizontal rule.
    pub fn add_rule(&mut self) {
        self.elements.push(Element::HorizontalRule(HorizontalRule));
    }

    /// Add an emphasized span.
    pub fn add_emphasis(&mut self, emphasis: Emphasis) {
        self.elements.push(Element::Emphasis(emphasis));
    }

    /// Add a table.
    pub fn add_table(&mut self, table: Table) {
        self.elements.push(Element::Table(table));
    }

    /// Add a link.
    pub fn add_link(&mut self, link: Link) {
        self.elements.push(Element::Link(link));
    }

    /// Add a list.
    pub fn add_list(&mut self, list: List) {
        self.elements.push(Element::List(list));
    }

    /// Add a code block.
    pub fn add_code(&mut self, code: CodeBlock) {
        self.elements.push(Element::Code(code));
    }

    /// Add plain text.
    pub fn add_text(&mut self, text: Text) {
        self.elements.push(Element::Text(text));
    }

    /// Render the whole document: elements newline-joined in insertion
    /// order, then a blank line and all image definitions together.
    ///
    /// # Errors
    ///
    /// Propagates the first element rendering failure.
    pub fn render(&self) -> Result<String> {
        let mut lines = Vec::with_capacity(self.elements.len());
        for element in &self.elements {
            lines.push(element.render()?);
        }
        let mut out = lines.join("\n");

        if !self.image_refs.is_empty() {
            out.push_str("\n\n");
            let defs: Vec<String> = self
                .image_refs
                .iter()
                .map(ImageRef::render_definition)
                .collect();
            out.push_str(&defs.join("\n"));
        }

        Ok(out)
    }
}
