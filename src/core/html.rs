// src/core/html.rs
// Selector-based document access. Site specs only talk to `StructuredDoc`/`Node`;
// `HtmlParser` is the one place that knows about the `scraper` crate.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

/// Raw page → queryable document.
pub trait DocumentParser {
    fn parse(&self, raw: &[u8]) -> Box<dyn StructuredDoc>;
}

impl<P: DocumentParser + ?Sized> DocumentParser for &P {
    fn parse(&self, raw: &[u8]) -> Box<dyn StructuredDoc> {
        (**self).parse(raw)
    }
}

pub trait StructuredDoc {
    /// First node matching `selector`.
    fn find(&self, selector: &str) -> Option<Node>;
    /// All nodes matching `selector`, in document order.
    fn find_all(&self, selector: &str) -> Vec<Node>;
}

/// Owned snapshot of one matched element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    text: String,
    attrs: Vec<(String, String)>,
    html: String,
}

impl Node {
    pub fn new(text: impl Into<String>, attrs: Vec<(String, String)>, html: impl Into<String>) -> Self {
        Self { text: text.into(), attrs, html: html.into() }
    }

    /// Visible text with whitespace collapsed.
    pub fn text(&self) -> &str { &self.text }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Outer markup, for re-parsing when fields live inside this node.
    pub fn html(&self) -> &str { &self.html }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlParser;

impl DocumentParser for HtmlParser {
    fn parse(&self, raw: &[u8]) -> Box<dyn StructuredDoc> {
        let text = String::from_utf8_lossy(raw);
        Box::new(HtmlDoc { doc: Html::parse_document(&text) })
    }
}

pub struct HtmlDoc {
    doc: Html,
}

impl HtmlDoc {
    fn selector(selector: &str) -> Option<Selector> {
        match Selector::parse(selector) {
            Ok(sel) => Some(sel),
            Err(e) => {
                logd!("invalid selector {selector:?}: {e}");
                None
            }
        }
    }
}

impl StructuredDoc for HtmlDoc {
    fn find(&self, selector: &str) -> Option<Node> {
        let sel = Self::selector(selector)?;
        self.doc.select(&sel).next().map(to_node)
    }

    fn find_all(&self, selector: &str) -> Vec<Node> {
        match Self::selector(selector) {
            Some(sel) => self.doc.select(&sel).map(to_node).collect(),
            None => Vec::new(),
        }
    }
}

fn to_node(el: ElementRef<'_>) -> Node {
    let mut raw_text = String::new();
    push_text(el, &mut raw_text);
    let attrs = el
        .value()
        .attrs()
        .map(|(k, v)| (s!(k), s!(v)))
        .collect();
    Node::new(normalize_ws(&raw_text), attrs, el.html())
}

// Elements whose edges separate words. Inline tags (`b`, `i`, `span`, `a`, ...) don't.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "footer",
    "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "ol", "p", "pre", "section",
    "table", "td", "th", "tr", "ul",
];

/// Text nodes joined as-is, with a space at block boundaries only,
/// so `<b>C</b>++` reads as "C++".
fn push_text(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        match child.value() {
            scraper::Node::Text(t) => out.push_str(t),
            scraper::Node::Element(e) => {
                let Some(child_el) = ElementRef::wrap(child) else { continue };
                let block = BLOCK_TAGS.contains(&e.name());
                if block { out.push(' '); }
                push_text(child_el, out);
                if block { out.push(' '); }
            }
            _ => {}
        }
    }
}
