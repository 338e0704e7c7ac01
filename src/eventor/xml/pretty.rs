//! Diagnostic printers for parsed responses.

use super::Element;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io::{self, Write};

const INDENT: &str = "  ";

/// Prints the element structure with manual two-space indentation.
///
/// Each element is written as its opening tag with attributes, its trimmed
/// text on its own line (skipped when blank), its children and its closing tag.
pub fn print_structure<W: Write>(out: &mut W, element: Option<&Element>) -> io::Result<()> {
    match element {
        Some(element) => write_structure(out, element, 0),
        None => writeln!(out, "None"),
    }
}

fn write_structure<W: Write>(out: &mut W, element: &Element, depth: usize) -> io::Result<()> {
    let indent = INDENT.repeat(depth);

    write!(out, "{indent}<{}", element.tag)?;
    for (key, value) in &element.attributes {
        write!(out, " {key}=\"{value}\"")?;
    }
    writeln!(out, ">")?;

    if let Some(text) = element.text().map(str::trim).filter(|t| !t.is_empty()) {
        writeln!(out, "{indent}{INDENT}{text}")?;
    }

    for child in &element.children {
        write_structure(out, child, depth + 1)?;
    }

    writeln!(out, "{indent}</{}>", element.tag)
}

/// Prints the element as indented, escaped XML.
pub fn print_pretty<W: Write>(out: &mut W, element: Option<&Element>) -> io::Result<()> {
    let Some(element) = element else {
        return writeln!(out, "None");
    };

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_pretty(&mut writer, element)?;
    out.write_all(&writer.into_inner())?;
    writeln!(out)
}

fn write_pretty(writer: &mut Writer<Vec<u8>>, element: &Element) -> io::Result<()> {
    let start = BytesStart::new(element.tag.as_str()).with_attributes(
        element
            .attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str())),
    );
    let text = element.text().map(str::trim).filter(|t| !t.is_empty());

    if text.is_none() && element.children.is_empty() {
        return emit(writer, Event::Empty(start));
    }

    emit(writer, Event::Start(start))?;
    if let Some(text) = text {
        emit(writer, Event::Text(BytesText::new(text)))?;
    }
    for child in &element.children {
        write_pretty(writer, child)?;
    }
    emit(writer, Event::End(BytesEnd::new(element.tag.as_str())))
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> io::Result<()> {
    writer
        .write_event(event)
        .map_err(|e| io::Error::other(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::parse(
            r#"<Organisation type="club"><Name>Acme &amp; Co</Name><Country><CountryId value="36"/></Country></Organisation>"#,
        )
        .unwrap()
    }

    #[test]
    fn test_print_structure() {
        let mut out = Vec::new();
        print_structure(&mut out, Some(&sample())).unwrap();
        let printed = String::from_utf8(out).unwrap();

        let expected = "\
<Organisation type=\"club\">
  <Name>
    Acme & Co
  </Name>
  <Country>
    <CountryId value=\"36\">
    </CountryId>
  </Country>
</Organisation>
";
        assert_eq!(printed, expected);
    }

    #[test]
    fn test_print_none() {
        let mut out = Vec::new();
        print_structure(&mut out, None).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "None\n");

        let mut out = Vec::new();
        print_pretty(&mut out, None).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "None\n");
    }

    #[test]
    fn test_print_pretty_reparses_to_same_tree() {
        let original = sample();
        let mut out = Vec::new();
        print_pretty(&mut out, Some(&original)).unwrap();
        let printed = String::from_utf8(out).unwrap();

        assert!(printed.contains("Acme &amp; Co"));
        assert!(printed.contains("\n  <Name>"));

        let reparsed = Element::parse(&printed).unwrap();
        assert_eq!(reparsed.find_text("Name"), Some("Acme & Co"));
        assert_eq!(
            reparsed.find_attribute("Country/CountryId", "value"),
            Some("36")
        );
    }
}
