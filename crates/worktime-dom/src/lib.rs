//! Markup parsing for exported report pages.
//!
//! Exports arrive as browser-grade HTML rather than well-formed XML,
//! so the default provider is deliberately forgiving. Both providers
//! produce the same [`Document`] tree and are interchangeable behind
//! [`MarkupParse`].

pub mod error;
pub mod parse;
pub mod tree;

pub use error::{DomError, Result};
pub use parse::{LenientHtml, MarkupParse, StrictXml};
pub use tree::{Document, Element, Node};
