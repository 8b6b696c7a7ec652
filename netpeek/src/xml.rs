//! XML reply decoding.
//!
//! Replies are turned into a [`serde_json::Value`] tree with these rules:
//!
//! - the root element becomes a single-key object `{name: content}`
//! - attributes become `@name` keys (namespace declarations included, so
//!   `xmlns` shows up as `@xmlns`)
//! - child elements become keys; an element name seen more than once under
//!   the same parent becomes an array, in document order
//! - an element with only text becomes a string, an empty element becomes
//!   `null`, and text next to attributes or children lands under `#text`
//! - text is trimmed; whitespace-only text is dropped
//!
//! Element names are kept as written, prefix included.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde_json::{Map, Value};

use crate::error::ReplyError;

const TEXT_KEY: &str = "#text";

struct Frame {
    name: String,
    children: Map<String, Value>,
    text: String,
}

impl Frame {
    fn open(start: &BytesStart<'_>, position: u64) -> Result<Self, ReplyError> {
        let name = utf8(start.name().as_ref(), position)?;
        let mut children = Map::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| malformed(position, e))?;
            let key = utf8(attr.key.as_ref(), position)?;
            let value = attr.unescape_value().map_err(|e| malformed(position, e))?;
            children.insert(format!("@{key}"), Value::String(value.into_owned()));
        }
        Ok(Self {
            name,
            children,
            text: String::new(),
        })
    }

    fn close(self) -> (String, Value) {
        let text = self.text.trim();
        let value = if self.children.is_empty() {
            if text.is_empty() {
                Value::Null
            } else {
                Value::String(text.to_string())
            }
        } else {
            let mut children = self.children;
            if !text.is_empty() {
                children.insert(TEXT_KEY.to_string(), Value::String(text.to_string()));
            }
            Value::Object(children)
        };
        (self.name, value)
    }
}

/// Decode XML text into a tree.
pub fn to_tree(xml: &str) -> Result<Value, ReplyError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<Value> = None;

    loop {
        let position = reader.buffer_position() as u64;
        let event = reader.read_event().map_err(|e| malformed(position, e))?;
        match event {
            Event::Start(start) => {
                if root.is_some() {
                    return Err(trailing(position));
                }
                stack.push(Frame::open(&start, position)?);
            }
            Event::Empty(start) => {
                if root.is_some() {
                    return Err(trailing(position));
                }
                let frame = Frame::open(&start, position)?;
                attach(&mut stack, &mut root, frame);
            }
            Event::End(_) => {
                // quick-xml already rejects mismatched end tags
                let frame = stack.pop().ok_or_else(|| ReplyError::MalformedXml {
                    position,
                    message: "unexpected closing tag".to_string(),
                })?;
                attach(&mut stack, &mut root, frame);
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(|e| malformed(position, e))?;
                match stack.last_mut() {
                    Some(frame) => frame.text.push_str(&text),
                    None if text.trim().is_empty() => {}
                    None => {
                        return Err(ReplyError::MalformedXml {
                            position,
                            message: "text outside of the root element".to_string(),
                        });
                    }
                }
            }
            Event::CData(data) => {
                let text = utf8(&data, position)?;
                match stack.last_mut() {
                    Some(frame) => frame.text.push_str(&text),
                    None => return Err(trailing(position)),
                }
            }
            Event::Eof => break,
            // declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(ReplyError::MalformedXml {
            position: xml.len() as u64,
            message: format!("unclosed element <{}>", open.name),
        });
    }
    root.ok_or(ReplyError::Empty)
}

/// Check whether text is a single well-formed XML document.
pub fn is_valid(xml: &str) -> bool {
    to_tree(xml).is_ok()
}

fn attach(stack: &mut [Frame], root: &mut Option<Value>, frame: Frame) {
    let (name, value) = frame.close();
    match stack.last_mut() {
        Some(parent) => insert_child(&mut parent.children, name, value),
        None => {
            let mut document = Map::new();
            document.insert(name, value);
            *root = Some(Value::Object(document));
        }
    }
}

fn insert_child(children: &mut Map<String, Value>, name: String, value: Value) {
    match children.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            children.insert(name, value);
        }
    }
}

fn utf8(bytes: &[u8], position: u64) -> Result<String, ReplyError> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| malformed(position, e))
}

fn malformed(position: u64, err: impl std::fmt::Display) -> ReplyError {
    ReplyError::MalformedXml {
        position,
        message: err.to_string(),
    }
}

fn trailing(position: u64) -> ReplyError {
    ReplyError::MalformedXml {
        position,
        message: "content after the root element".to_string(),
    }
}
