//! Element tree shared by every markup provider.

/// A node in the parsed tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with its attributes and children in document order.
///
/// Tag and attribute names are ASCII-lowercased during parsing so
/// lookups never worry about the export's casing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// First value of the named attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The `value` attribute, the way form controls expose it.
    pub fn input_value(&self) -> Option<&str> {
        self.attribute("value")
    }

    /// Concatenated text of all descendants, in document order.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        collect_text(self, &mut text);
        text
    }

    /// Descendant elements whose tag name is one of `names`, in
    /// document order. The element itself is never included.
    pub fn descendants_by_tag<'a>(&'a self, names: &[&str]) -> Vec<&'a Element> {
        let mut found = Vec::new();
        collect_descendants(self, names, &mut found);
        found
    }
}

/// A parsed document. The root is synthetic so markup with several
/// top-level nodes still forms a single tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub(crate) fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// First element carrying the given `id` attribute, in document
    /// order.
    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        find_by_id(&self.root, id)
    }
}

fn collect_text(element: &Element, into: &mut String) {
    for child in &element.children {
        match child {
            Node::Text(text) => into.push_str(text),
            Node::Element(child) => collect_text(child, into),
        }
    }
}

fn collect_descendants<'a>(element: &'a Element, names: &[&str], into: &mut Vec<&'a Element>) {
    for child in &element.children {
        if let Node::Element(child) = child {
            if names.contains(&child.name.as_str()) {
                into.push(child);
            }
            collect_descendants(child, names, into);
        }
    }
}

fn find_by_id<'a>(element: &'a Element, id: &str) -> Option<&'a Element> {
    for child in &element.children {
        if let Node::Element(child) = child {
            if child.attribute("id") == Some(id) {
                return Some(child);
            }
            if let Some(found) = find_by_id(child, id) {
                return Some(found);
            }
        }
    }
    None
}
