use crate::parse;

pub const ROOT_ELEMENT: &str = "Sprite";

/// One `key="value"` pair of the root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl<'a> Attribute<'a> {
    pub fn new(key: &'a str, value: &'a str) -> Self {
        Self { key, value }
    }
}

/// The XML output of a conversion: a single self-closing `<Sprite ... />`
/// element with one attribute per line.
///
/// Keys and values are written exactly as they appear in the sprite file.
/// Nothing is escaped, so a value holding `"` or `<` produces malformed XML,
/// matching what the legacy tooling emitted.
pub struct SpriteDocument {
    xml: String,
    attributes: usize,
}

impl SpriteDocument {
    pub fn new() -> Self {
        Self {
            xml: format!("<{}\n", ROOT_ELEMENT),
            attributes: 0,
        }
    }

    /// Builds the document for the contents of a sprite file.
    pub fn from_sprite(data: &str) -> Self {
        let mut document = Self::new();
        document.extend(parse::lines(data).filter_map(parse::parse_line));
        document
    }

    pub fn push(&mut self, attribute: Attribute<'_>) {
        self.xml
            .push_str(&format!("\t{}=\"{}\"\n", attribute.key, attribute.value));
        self.attributes += 1;
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes
    }

    /// Closes the root element and returns the finished document.
    pub fn into_xml(mut self) -> String {
        self.xml.push_str("/>");
        self.xml
    }
}

impl Default for SpriteDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Extend<Attribute<'a>> for SpriteDocument {
    fn extend<I: IntoIterator<Item = Attribute<'a>>>(&mut self, iter: I) {
        for attribute in iter {
            self.push(attribute);
        }
    }
}
