//! In-memory XML element tree built from Eventor responses.
//!
//! The tree keeps what the extractors need: tag, attributes in document order,
//! direct character data and ordered children. Parsing is strict about
//! well-formedness so that broken bodies can be turned into `ApiResponse::NoData`.

mod path;
pub mod pretty;

pub use path::ElementPath;
pub use pretty::{print_pretty, print_structure};

use crate::error::AppError;
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    /// Character data directly inside this element, `None` when there is none.
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            ..Element::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Parses a complete document and returns its root element.
    ///
    /// Fails on mismatched or unclosed tags, missing or multiple roots and
    /// character data outside the root element.
    pub fn parse(xml: &str) -> Result<Element, AppError> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let event = reader.read_event().map_err(|e| {
                AppError::xml_parse_error(format!(
                    "{e} at position {}",
                    reader.buffer_position()
                ))
            })?;

            match event {
                Event::Start(start) => {
                    ensure_single_root(&root)?;
                    stack.push(element_from_start(&start)?);
                }
                Event::Empty(start) => {
                    ensure_single_root(&root)?;
                    let element = element_from_start(&start)?;
                    attach(&mut stack, &mut root, element);
                }
                Event::End(_) => {
                    let element = stack.pop().ok_or_else(|| {
                        AppError::xml_parse_error("closing tag without matching opening tag")
                    })?;
                    attach(&mut stack, &mut root, element);
                }
                Event::Text(text) => {
                    let raw = std::str::from_utf8(&text)
                        .map_err(|e| AppError::xml_parse_error(e.to_string()))?;
                    let content = unescape(&normalize_line_endings(raw))
                        .map_err(|e| AppError::xml_parse_error(e.to_string()))?
                        .into_owned();
                    push_text(&mut stack, &content)?;
                }
                Event::CData(cdata) => {
                    let raw = cdata.into_inner();
                    let content = std::str::from_utf8(&raw)
                        .map_err(|e| AppError::xml_parse_error(e.to_string()))?;
                    push_text(&mut stack, &normalize_line_endings(content))?;
                }
                Event::DocType(_) => ensure_single_root(&root)?,
                Event::Eof => break,
                // Declarations, comments and processing instructions carry no data
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(AppError::xml_parse_error(format!(
                "unexpected end of document inside <{}>",
                open.tag
            )));
        }

        root.ok_or_else(|| AppError::xml_parse_error("document has no root element"))
    }

    /// Value of the named attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Text of this element when it has any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Direct children with the given tag.
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.tag == tag)
    }

    /// All elements below this one, depth first in document order.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_descendants(self, &mut out);
        out
    }

    /// First element matching `path`.
    pub fn find(&self, path: &str) -> Option<&Element> {
        ElementPath::parse(path).find(self)
    }

    /// Every element matching `path`, in document order.
    pub fn find_all(&self, path: &str) -> Vec<&Element> {
        ElementPath::parse(path).find_all(self)
    }

    /// Text of the first element matching `path`; `None` when absent or textless.
    pub fn find_text(&self, path: &str) -> Option<&str> {
        self.find(path).and_then(Element::text)
    }

    /// Attribute of the first element matching `path`.
    pub fn find_attribute(&self, path: &str, name: &str) -> Option<&str> {
        self.find(path).and_then(|element| element.attribute(name))
    }
}

fn collect_descendants<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
    for child in &element.children {
        out.push(child);
        collect_descendants(child, out);
    }
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element, AppError> {
    let tag = std::str::from_utf8(start.name().as_ref())
        .map_err(|e| AppError::xml_parse_error(e.to_string()))?
        .to_string();

    let mut element = Element::new(tag);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| AppError::xml_parse_error(e.to_string()))?;
        let key = std::str::from_utf8(attribute.key.as_ref())
            .map_err(|e| AppError::xml_parse_error(e.to_string()))?
            .to_string();
        let raw = std::str::from_utf8(&attribute.value)
            .map_err(|e| AppError::xml_parse_error(e.to_string()))?;
        let value = unescape(&normalize_attribute_whitespace(raw))
            .map_err(|e| AppError::xml_parse_error(e.to_string()))?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn ensure_single_root(root: &Option<Element>) -> Result<(), AppError> {
    match root {
        Some(existing) => Err(AppError::xml_parse_error(format!(
            "content after root element <{}>",
            existing.tag
        ))),
        None => Ok(()),
    }
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

/// `\r\n` and lone `\r` become `\n`.
fn normalize_line_endings(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n")
}

/// Literal tabs and line breaks in attribute values become single spaces.
/// Character references such as `&#10;` are unescaped afterwards and kept.
fn normalize_attribute_whitespace(raw: &str) -> String {
    raw.replace("\r\n", " ").replace(['\t', '\r', '\n'], " ")
}

/// Appends character data to the open element. Only data before the first child
/// counts as the element's text; later data is tail text of a child and dropped.
fn push_text(stack: &mut [Element], content: &str) -> Result<(), AppError> {
    match stack.last_mut() {
        Some(current) => {
            if current.children.is_empty() {
                current.text.get_or_insert_with(String::new).push_str(content);
            }
            Ok(())
        }
        None if content.trim().is_empty() => Ok(()),
        None => Err(AppError::xml_parse_error(
            "character data outside the root element",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORGANISATION_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<OrganisationList>
  <Organisation>
    <OrganisationId>7</OrganisationId>
    <Name>Acme &amp; Co</Name>
    <Country>
      <CountryId value="36"/>
      <Name languageId="en">Australia</Name>
      <Name languageId="sv">Australien</Name>
    </Country>
    <Empty></Empty>
  </Organisation>
</OrganisationList>"#;

    #[test]
    fn test_parse_builds_tree() {
        let root = Element::parse(ORGANISATION_XML).unwrap();
        assert_eq!(root.tag, "OrganisationList");
        assert_eq!(root.children.len(), 1);

        let organisation = &root.children[0];
        assert_eq!(organisation.tag, "Organisation");
        assert_eq!(organisation.find_text("OrganisationId"), Some("7"));
        assert_eq!(organisation.find_text("Name"), Some("Acme & Co"));
        assert_eq!(
            organisation.find_attribute("Country/CountryId", "value"),
            Some("36")
        );
    }

    #[test]
    fn test_element_without_text_has_none() {
        let root = Element::parse(ORGANISATION_XML).unwrap();
        assert_eq!(root.find_text(".//Empty"), None);
        assert!(root.find(".//Empty").is_some());
    }

    #[test]
    fn test_cdata_is_text() {
        let root = Element::parse("<A><B><![CDATA[x < y]]></B></A>").unwrap();
        assert_eq!(root.find_text("B"), Some("x < y"));
    }

    #[test]
    fn test_descendants_in_document_order() {
        let root = Element::parse("<A><B><C/></B><D/></A>").unwrap();
        let tags: Vec<&str> = root.descendants().iter().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, vec!["B", "C", "D"]);
    }

    #[test]
    fn test_malformed_documents_are_rejected() {
        let broken = [
            "",
            "not xml at all",
            "<A><B></A>",
            "<A><B></B>",
            "<A/><B/>",
            "</A>",
            "<A attr=\"unterminated></A>",
            "<A/><!DOCTYPE x>",
        ];
        for body in broken {
            let result = Element::parse(body);
            assert!(
                matches!(result, Err(AppError::XmlParse(_))),
                "expected parse failure for {body:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn test_doctype_before_root_is_accepted() {
        let root = Element::parse("<!DOCTYPE A><A>x</A>").unwrap();
        assert_eq!(root.text(), Some("x"));
    }

    #[test]
    fn test_text_after_child_is_not_element_text() {
        let root = Element::parse("<T>lead<s/>tail</T>").unwrap();
        assert_eq!(root.text(), Some("lead"));

        let root = Element::parse("<T><s/>tail</T>").unwrap();
        assert_eq!(root.text(), None);
        assert_eq!(root.find_text("s"), None);
    }

    #[test]
    fn test_line_endings_and_attribute_whitespace_are_normalized() {
        let root =
            Element::parse("<R><N>x\r\ny\rz</N><M v=\"a\r\nb\tc\" w=\"d&#10;e\"/></R>")
                .unwrap();
        assert_eq!(root.find_text("N"), Some("x\ny\nz"));
        assert_eq!(root.find_attribute("M", "v"), Some("a b c"));
        assert_eq!(root.find_attribute("M", "w"), Some("d\ne"));
    }

    #[test]
    fn test_builder_helpers() {
        let element = Element::new("Event")
            .with_attribute("id", "1")
            .with_child(Element::new("Name").with_text("Sprint"));
        assert_eq!(element.attribute("id"), Some("1"));
        assert_eq!(element.attribute("missing"), None);
        assert_eq!(element.find_text("Name"), Some("Sprint"));
        assert_eq!(element.children_named("Name").count(), 1);
    }
}
