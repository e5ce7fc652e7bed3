//! Readable-text extraction from raw HTML.
//!
//! Picks the main content area when the page marks one, otherwise the body,
//! and drops navigation, page chrome, scripts, and tables. Comments never
//! reach the output since only text nodes are collected.

use scraper::{ElementRef, Html, Node, Selector};

use super::BaseContentExtractor;

/// Candidate main-content containers, most specific first.
const MAIN_SELECTORS: &[&str] = &[
    "main",
    "article",
    "[role='main']",
    "#content",
    "#main",
    ".content",
    ".main",
    ".post-content",
    ".entry-content",
];

/// Subtrees that never contribute readable text.
const BOILERPLATE_SELECTORS: &[&str] = &[
    "nav",
    "header",
    "footer",
    "aside",
    "script",
    "style",
    "noscript",
    "iframe",
    "template",
    "svg",
    "form",
    "button",
    "table",
    ".nav",
    ".navbar",
    ".header",
    ".footer",
    ".sidebar",
    ".advertisement",
    ".ads",
    ".cookie-banner",
    "#nav",
    "#header",
    "#footer",
    "#sidebar",
];

#[derive(Debug, Default, Clone, Copy)]
pub struct ReadableTextExtractor;

impl ReadableTextExtractor {
    pub fn new() -> Self {
        Self
    }

    fn parse_all(selectors: &[&str]) -> Vec<Selector> {
        selectors
            .iter()
            .filter_map(|s| Selector::parse(s).ok())
            .collect()
    }

    fn content_root<'a>(document: &'a Html) -> Option<ElementRef<'a>> {
        for selector in Self::parse_all(MAIN_SELECTORS) {
            if let Some(main) = document.select(&selector).next() {
                return Some(main);
            }
        }

        let body = Selector::parse("body").ok()?;
        document.select(&body).next()
    }

    fn collect_text(element: ElementRef<'_>, skip: &[Selector], out: &mut Vec<String>) {
        for child in element.children() {
            match child.value() {
                Node::Text(text) => {
                    let text = text.trim();
                    if !text.is_empty() {
                        out.push(text.to_string());
                    }
                }
                Node::Element(_) => {
                    if let Some(child) = ElementRef::wrap(child) {
                        if !skip.iter().any(|selector| selector.matches(&child)) {
                            Self::collect_text(child, skip, out);
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

impl BaseContentExtractor for ReadableTextExtractor {
    fn extract_text(&self, html: &str) -> Option<String> {
        let document = Html::parse_document(html);
        let root = Self::content_root(&document)?;
        let skip = Self::parse_all(BOILERPLATE_SELECTORS);

        let mut chunks = Vec::new();
        Self::collect_text(root, &skip, &mut chunks);

        let text = chunks
            .iter()
            .flat_map(|chunk| chunk.split_whitespace())
            .collect::<Vec<_>>()
            .join(" ");

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
