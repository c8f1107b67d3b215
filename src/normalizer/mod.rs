use roxmltree::{Document, Node, ParsingOptions};

use crate::app::{CvefeedError, Result};
use crate::domain::Advisory;

/// Turns a syndication document into advisories.
///
/// Every un-namespaced `item` element, at any depth, becomes one advisory,
/// in document order. Items that lack a field or carry a bad `pubDate` are
/// skipped with a warning, or abort the whole document in strict mode.
/// A document that isn't well-formed XML is always an error.
#[derive(Clone, Debug, Default)]
pub struct Normalizer {
    strict: bool,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strict(strict: bool) -> Self {
        Self { strict }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn normalize(&self, body: &[u8]) -> Result<Vec<Advisory>> {
        let text = std::str::from_utf8(body)?;

        let mut options = ParsingOptions::default();
        options.allow_dtd = true;
        let document = Document::parse_with_options(text, options)?;

        let mut advisories = Vec::new();
        let items = document
            .descendants()
            .filter(|node| is_plain_element(*node, "item"));

        for (index, item) in items.enumerate() {
            // 1-based, as shown to the operator
            let position = index + 1;
            match parse_item(item, position) {
                Ok(advisory) => advisories.push(advisory),
                Err(e) if !self.strict => {
                    tracing::warn!("Skipping feed item: {}", e);
                }
                Err(e) => return Err(e),
            }
        }

        tracing::debug!("Normalized {} advisories", advisories.len());
        Ok(advisories)
    }
}

fn parse_item(item: Node, position: usize) -> Result<Advisory> {
    let title = child_text(item, "title", position)?.to_string();
    let link = child_text(item, "link", position)?.to_string();
    let description = child_text(item, "description", position)?;
    let published = child_text(item, "pubDate", position)?.to_string();

    Advisory::new(title, link, description, published.clone()).map_err(|e| {
        CvefeedError::InvalidDate {
            item: position,
            value: published,
            reason: e.to_string(),
        }
    })
}

/// Element called `name` outside any namespace, so `media:title` or
/// `dc:description` never stand in for the plain RSS fields.
fn is_plain_element(node: Node, name: &str) -> bool {
    node.is_element() && node.tag_name().namespace().is_none() && node.tag_name().name() == name
}

/// Text of the first direct child named `field`; an empty element reads as "".
fn child_text<'a>(item: Node<'a, '_>, field: &'static str, position: usize) -> Result<&'a str> {
    item.children()
        .find(|child| is_plain_element(*child, field))
        .map(|child| child.text().unwrap_or(""))
        .ok_or(CvefeedError::MissingField {
            item: position,
            field,
        })
}
