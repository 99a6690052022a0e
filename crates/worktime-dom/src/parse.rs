//! Markup providers.
//!
//! Both providers drive the same event parser and build the same
//! [`Document`]; they differ only in how much malformed input they
//! tolerate.

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::escape::unescape_with;
use quick_xml::events::Event;
use quick_xml::events::attributes::Attribute;

use crate::error::{DomError, Result};
use crate::tree::{Document, Element, Node};

/// Turns markup text into a navigable element tree.
///
/// The extraction pipeline only ever sees the resulting [`Document`];
/// which provider produced it is invisible downstream.
pub trait MarkupParse {
    fn parse(&self, markup: &str) -> Result<Document>;
}

/// Tolerant provider for real-world exports: void elements, unclosed
/// or mismatched tags, unquoted attributes and HTML entities are all
/// accepted, and anything unparseable is dropped rather than failing
/// the whole parse.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientHtml;

impl MarkupParse for LenientHtml {
    fn parse(&self, markup: &str) -> Result<Document> {
        let markup = strip_rawtext_blocks(markup);
        build_document(&markup, Mode::Lenient)
    }
}

/// Well-formed-markup provider. Anything the XML parser rejects
/// surfaces as a [`DomError`] instead of being recovered.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictXml;

impl MarkupParse for StrictXml {
    fn parse(&self, markup: &str) -> Result<Document> {
        build_document(markup, Mode::Strict)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Lenient,
    Strict,
}

// HTML void elements never take a closing tag.
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

// Script and style bodies are raw text in HTML. An event parser would
// misread `<` and `&` inside them, so the lenient provider removes the
// whole block up front; the blocks never carry report data.
const RAWTEXT_TAGS: [&str; 2] = ["script", "style"];

fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

fn build_document(markup: &str, mode: Mode) -> Result<Document> {
    let mut reader = Reader::from_str(markup);
    if mode == Mode::Lenient {
        let config = reader.config_mut();
        config.check_end_names = false;
        config.allow_unmatched_ends = true;
    }

    let mut stack: Vec<Element> = vec![Element::default()];
    loop {
        let position = reader.buffer_position();
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                let element = open_element(&start, mode, position)?;
                if mode == Mode::Lenient && is_void_element(&element.name) {
                    push_child(&mut stack, Node::Element(element));
                } else {
                    stack.push(element);
                }
            }
            Ok(Event::Empty(start)) => {
                let element = open_element(&start, mode, position)?;
                push_child(&mut stack, Node::Element(element));
            }
            Ok(Event::End(end)) => {
                let name = String::from_utf8_lossy(end.name().as_ref()).to_ascii_lowercase();
                close_element(&mut stack, &name);
            }
            Ok(Event::Text(text)) => {
                let raw = text.into_inner();
                push_text(&mut stack, &decode_text(&raw));
            }
            Ok(Event::CData(cdata)) => {
                let raw = cdata.into_inner();
                push_text(&mut stack, &String::from_utf8_lossy(&raw));
            }
            Ok(Event::GeneralRef(entity)) => {
                let raw = entity.into_inner();
                let name = String::from_utf8_lossy(&raw);
                push_text(&mut stack, &resolve_reference(&name));
            }
            Ok(Event::Eof) => break,
            // Declarations, comments and processing instructions carry
            // nothing the tree needs.
            Ok(_) => {}
            Err(source) => match mode {
                Mode::Strict => return Err(DomError::Malformed { position, source }),
                // Skip past the offending construct; bail out if the
                // reader cannot advance, otherwise this would spin.
                Mode::Lenient => {
                    if reader.buffer_position() == position {
                        break;
                    }
                }
            },
        }
    }

    // Close whatever is still open so truncated markup keeps its
    // content.
    while stack.len() > 1 {
        let Some(element) = stack.pop() else { break };
        push_child(&mut stack, Node::Element(element));
    }
    Ok(Document::new(stack.pop().unwrap_or_default()))
}

fn open_element(
    start: &quick_xml::events::BytesStart<'_>,
    mode: Mode,
    position: u64,
) -> Result<Element> {
    let name = String::from_utf8_lossy(start.name().as_ref()).to_ascii_lowercase();
    let mut element = Element::new(name);
    match mode {
        Mode::Lenient => {
            for attribute in start.html_attributes().with_checks(false) {
                if let Ok(attribute) = attribute {
                    push_attribute(&mut element, &attribute);
                }
            }
        }
        Mode::Strict => {
            for attribute in start.attributes() {
                match attribute {
                    Ok(attribute) => push_attribute(&mut element, &attribute),
                    Err(source) => return Err(DomError::Attribute { position, source }),
                }
            }
        }
    }
    Ok(element)
}

fn push_attribute(element: &mut Element, attribute: &Attribute<'_>) {
    let key = String::from_utf8_lossy(attribute.key.as_ref()).to_ascii_lowercase();
    element.attributes.push((key, decode_text(&attribute.value)));
}

fn push_child(stack: &mut Vec<Element>, node: Node) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    }
}

fn push_text(stack: &mut Vec<Element>, piece: &str) {
    if piece.is_empty() {
        return;
    }
    let Some(parent) = stack.last_mut() else {
        return;
    };
    // Adjacent pieces (text, entity, text) stay one logical run.
    if let Some(Node::Text(existing)) = parent.children.last_mut() {
        existing.push_str(piece);
    } else {
        parent.children.push(Node::Text(piece.to_string()));
    }
}

/// Closes the innermost open element with the given name, implicitly
/// closing anything opened inside it. A name with no open match is a
/// stray end tag and is ignored.
fn close_element(stack: &mut Vec<Element>, name: &str) {
    let Some(depth) = stack.iter().rposition(|element| element.name == name) else {
        return;
    };
    if depth == 0 {
        // The synthetic root never closes.
        return;
    }
    while stack.len() > depth {
        let Some(element) = stack.pop() else { break };
        push_child(stack, Node::Element(element));
    }
}

/// Decodes raw text bytes: lossy UTF-8 plus entity unescaping. When
/// unescaping fails the raw text is kept rather than dropped.
fn decode_text(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    match unescape_with(&text, html_entity) {
        Ok(unescaped) => unescaped.into_owned(),
        Err(_) => text.into_owned(),
    }
}

/// Resolves one `&name;` reference. Unknown names keep their raw
/// spelling so nothing silently disappears from cell text.
fn resolve_reference(name: &str) -> String {
    if let Some(digits) = name.strip_prefix('#') {
        if let Some(resolved) = resolve_char_reference(digits) {
            return resolved.to_string();
        }
    } else if let Some(replacement) = html_entity(name) {
        return replacement.to_string();
    }
    format!("&{name};")
}

fn resolve_char_reference(digits: &str) -> Option<char> {
    let value = if let Some(hex) = digits.strip_prefix(['x', 'X']) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        digits.parse::<u32>().ok()?
    };
    char::from_u32(value)
}

/// Named entities seen in these exports. The predefined XML five are
/// handled by the unescaper itself but harmless to repeat here.
fn html_entity(name: &str) -> Option<&'static str> {
    match name {
        "nbsp" => Some("\u{a0}"),
        "amp" => Some("&"),
        "lt" => Some("<"),
        "gt" => Some(">"),
        "quot" => Some("\""),
        "apos" => Some("'"),
        "copy" => Some("\u{a9}"),
        "yen" => Some("\u{a5}"),
        "times" => Some("\u{d7}"),
        _ => None,
    }
}

fn strip_rawtext_blocks(markup: &str) -> Cow<'_, str> {
    // ASCII lowering keeps byte offsets valid in the original text.
    let lower = markup.to_ascii_lowercase();
    let mut kept = String::new();
    let mut position = 0;
    while let Some((start, end)) = next_rawtext_block(&lower, position) {
        kept.push_str(&markup[position..start]);
        position = end;
    }
    if position == 0 {
        return Cow::Borrowed(markup);
    }
    kept.push_str(&markup[position..]);
    Cow::Owned(kept)
}

/// Finds the earliest raw-text block at or after `from`, returning its
/// byte range including the closing tag. An unclosed block runs to the
/// end of input.
fn next_rawtext_block(lower: &str, from: usize) -> Option<(usize, usize)> {
    let mut earliest: Option<(usize, usize)> = None;
    for tag in RAWTEXT_TAGS {
        let open = format!("<{tag}");
        let close = format!("</{tag}");
        let mut search = from;
        while let Some(found) = lower[search..].find(&open) {
            let start = search + found;
            let after = start + open.len();
            // Reject prefixes of longer tag names, e.g. `<styleset`.
            match lower.as_bytes().get(after) {
                Some(b'>' | b'/' | b' ' | b'\t' | b'\r' | b'\n') | None => {}
                Some(_) => {
                    search = after;
                    continue;
                }
            }
            let end = match lower[after..].find(&close) {
                Some(relative) => {
                    let close_at = after + relative + close.len();
                    match lower[close_at..].find('>') {
                        Some(gt) => close_at + gt + 1,
                        None => lower.len(),
                    }
                }
                None => lower.len(),
            };
            if earliest.is_none_or(|(at, _)| start < at) {
                earliest = Some((start, end));
            }
            break;
        }
    }
    earliest
}
