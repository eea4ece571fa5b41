//! A minimal markup tree shared by HTML and SVG output

use super::MarkupConfig;

/// Elements that never have children and are written self-closing
const VOID_TAGS: &[&str] = &[
    "img", "meta", "link", "br", "input", "rect", "line", "circle", "ellipse", "path", "polygon",
];

/// A node in a rendered logo or page
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with ordered attributes
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append a class attribute verbatim, skipped when the class string is empty
    pub fn with_class(self, class: &str) -> Self {
        if class.is_empty() {
            self
        } else {
            self.with_attr("class", class)
        }
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Look up an attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether the class attribute contains a class
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map_or(false, |c| c.split_whitespace().any(|c| c == class))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// All nodes in document order, starting with this one
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = vec![self];
        if let Node::Element(el) = self {
            for child in &el.children {
                out.extend(child.descendants());
            }
        }
        out
    }

    /// All elements with the given tag, in document order
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter_map(Node::as_element)
            .filter(|el| el.tag == tag)
            .collect()
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self) -> String {
        self.descendants()
            .into_iter()
            .filter_map(|n| match n {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Serialize to a markup string
    pub fn to_markup(&self, config: &MarkupConfig) -> String {
        let mut out = String::new();
        if config.standalone {
            out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            out.push('\n');
        }
        write_node(self, config, 0, config.pretty_print, &mut out);
        out
    }
}

fn write_node(node: &Node, config: &MarkupConfig, depth: usize, pretty: bool, out: &mut String) {
    let indent = if pretty {
        " ".repeat(depth * config.indent_width)
    } else {
        String::new()
    };

    let el = match node {
        Node::Text(text) => {
            out.push_str(&indent);
            out.push_str(&escape_xml(text));
            return;
        }
        Node::Element(el) => el,
    };

    out.push_str(&indent);
    out.push('<');
    out.push_str(&el.tag);
    for (name, value) in &el.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_xml(value));
        out.push('"');
    }

    if el.children.is_empty() {
        if VOID_TAGS.contains(&el.tag.as_str()) {
            out.push_str("/>");
        } else {
            out.push_str("></");
            out.push_str(&el.tag);
            out.push('>');
        }
        return;
    }
    out.push('>');

    // Mixed content stays on one line so no whitespace leaks into the text
    let block = pretty && !el.children.iter().any(|c| matches!(c, Node::Text(_)));
    for child in &el.children {
        if block {
            out.push('\n');
            write_node(child, config, depth + 1, true, out);
        } else {
            write_node(child, config, 0, false, out);
        }
    }
    if block {
        out.push('\n');
        out.push_str(&indent);
    }
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

/// Escape text for use in element content or double-quoted attributes
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Node {
        Element::new("div")
            .with_class("outer")
            .with_child(Element::new("span").with_child(Node::text("A & B")))
            .with_child(Element::new("img").with_attr("src", "x.png"))
            .into()
    }

    #[test]
    fn test_compact_markup() {
        assert_eq!(
            sample().to_markup(&MarkupConfig::default()),
            r#"<div class="outer"><span>A &amp; B</span><img src="x.png"/></div>"#
        );
    }

    #[test]
    fn test_pretty_markup() {
        let expected = "<div class=\"outer\">\n  <span>A &amp; B</span>\n  <img src=\"x.png\"/>\n</div>";
        assert_eq!(
            sample().to_markup(&MarkupConfig::new().with_pretty_print(true)),
            expected
        );
    }

    #[test]
    fn test_standalone_declaration() {
        let svg: Node = Element::new("svg").into();
        assert_eq!(
            svg.to_markup(&MarkupConfig::new().with_standalone(true)),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg></svg>"
        );
    }

    #[test]
    fn test_empty_class_is_omitted() {
        let el = Element::new("div").with_class("");
        assert!(el.attributes.is_empty());
    }

    #[test]
    fn test_class_is_not_trimmed() {
        let el = Element::new("div").with_class(" p-2 ");
        assert_eq!(el.attr("class"), Some(" p-2 "));
    }

    #[test]
    fn test_queries() {
        let node = sample();
        assert_eq!(node.find_all("span").len(), 1);
        assert_eq!(node.find_all("img")[0].attr("src"), Some("x.png"));
        assert_eq!(node.text_content(), "A & B");
        assert!(node.as_element().unwrap().has_class("outer"));
    }

    #[test]
    fn test_attribute_escaping() {
        let node: Node = Element::new("a").with_attr("title", "say \"hi\"").into();
        assert_eq!(
            node.to_markup(&MarkupConfig::default()),
            r#"<a title="say &quot;hi&quot;"></a>"#
        );
    }
}
