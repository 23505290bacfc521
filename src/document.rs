//! Parsed HTML document.
//!
//! A thin wrapper over `scraper::Html` exposing only what field extraction
//! needs: first/all matches for a selector, an element's text, and its
//! attributes. Keeps the extractor free of parser-specific traversal code.
//!
//! `scraper::Html` is not `Send`; a `Document` must be built and dropped
//! without crossing an `.await`.

use scraper::{ElementRef, Html, Selector};

use crate::error_handling::ParseError;

/// A parsed, traversable HTML document.
pub struct Document {
    html: Html,
}

/// An element of a [`Document`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl Document {
    /// Parses `html` into a document.
    ///
    /// The HTML5 parser recovers from any malformed token stream, so the only
    /// rejected input is input without markup: empty, whitespace-only, or
    /// lacking a single `<`.
    pub fn parse(html: &str) -> Result<Self, ParseError> {
        if html.trim().is_empty() || !html.contains('<') {
            return Err(ParseError::NotMarkup { length: html.len() });
        }

        let html = Html::parse_document(html);
        if !html.errors.is_empty() {
            log::debug!("HTML parser recovered from {} errors", html.errors.len());
        }
        Ok(Self { html })
    }

    /// First element matching `selector`, in document order.
    pub fn select_first(&self, selector: &Selector) -> Option<Node<'_>> {
        self.html.select(selector).next().map(|element| Node { element })
    }

    /// Every element matching `selector`, in document order.
    pub fn select_all(&self, selector: &Selector) -> Vec<Node<'_>> {
        self.html
            .select(selector)
            .map(|element| Node { element })
            .collect()
    }
}

impl<'a> Node<'a> {
    /// Concatenated text of all descendant text nodes (untrimmed).
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Value of the attribute `name`, if present.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }
}
