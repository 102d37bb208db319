//! XML parsing
//!
//! Reads a document with quick-xml and converts it to a JSON-like value by
//! recursive descent: attributes become `@`-prefixed fields, an element with
//! only text collapses to a coerced scalar, repeated child tag names collect
//! into an array, and remaining children become nested object fields.

use quick_xml::Reader;
use quick_xml::events::Event;
use serde_json::Value;

use super::{ParseError, Row, coerce_scalar};

#[derive(Debug, Default)]
struct XmlNode {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
    text: String,
}

/// Parse raw XML text into the value of its root element.
///
/// # Errors
///
/// Returns [`ParseError::InvalidXml`] on malformed markup, an unclosed
/// element or a missing root element.
pub fn parse_xml(text: &str) -> Result<Value, ParseError> {
    let root = read_document(text)?;
    Ok(node_to_value(&root))
}

fn read_document(text: &str) -> Result<XmlNode, ParseError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let node = start_node(e)?;
                stack.push(node);
            }
            Ok(Event::Empty(ref e)) => {
                let node = start_node(e)?;
                attach(node, &mut stack, &mut root)?;
            }
            Ok(Event::Text(ref t)) => {
                let content = t
                    .unescape()
                    .map_err(|e| ParseError::InvalidXml(e.to_string()))?;
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&content);
                }
            }
            Ok(Event::CData(ref c)) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&String::from_utf8_lossy(c));
                }
            }
            Ok(Event::End(_)) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| ParseError::InvalidXml("unexpected closing tag".to_string()))?;
                attach(node, &mut stack, &mut root)?;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ParseError::InvalidXml(format!(
                    "parse error at position {}: {}",
                    reader.error_position(),
                    e
                )));
            }
        }
    }

    if !stack.is_empty() {
        return Err(ParseError::InvalidXml(
            "unexpected end of document".to_string(),
        ));
    }

    root.ok_or_else(|| ParseError::InvalidXml("no root element found".to_string()))
}

fn start_node(e: &quick_xml::events::BytesStart<'_>) -> Result<XmlNode, ParseError> {
    let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|e| ParseError::InvalidXml(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = String::from_utf8_lossy(&attr.value).to_string();
        attributes.push((key, value));
    }
    Ok(XmlNode {
        name,
        attributes,
        children: Vec::new(),
        text: String::new(),
    })
}

fn attach(
    node: XmlNode,
    stack: &mut Vec<XmlNode>,
    root: &mut Option<XmlNode>,
) -> Result<(), ParseError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(node);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(node);
            Ok(())
        }
        None => Err(ParseError::InvalidXml(
            "multiple root elements".to_string(),
        )),
    }
}

fn node_to_value(node: &XmlNode) -> Value {
    let text = node.text.trim();

    // Text-only element with no attributes collapses to a coerced scalar
    if node.attributes.is_empty() && node.children.is_empty() {
        return coerce_scalar(text);
    }

    let mut map = Row::new();
    for (key, value) in &node.attributes {
        map.insert(format!("@{key}"), coerce_scalar(value));
    }

    // Repeated child tag names collect into an array, preserving order
    for child in &node.children {
        let value = node_to_value(child);
        match map.get_mut(&child.name) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                map.insert(child.name.clone(), value);
            }
        }
    }

    if !text.is_empty() && node.children.is_empty() {
        map.insert("#text".to_string(), coerce_scalar(text));
    }

    Value::Object(map)
}
