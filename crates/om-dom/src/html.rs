//! HTML serialization of node trees.

use crate::node::Node;
use crate::props::{PropValue, Props, VALUE};
use crate::tags::Tag;

/// Serialize a node tree to markup.
///
/// Controlled nodes are written with the value their props carry, which
/// is what a freshly mounted instance would display.
pub fn render_to_string(node: &Node) -> String {
    let mut w = HtmlWriter::new();
    write_node(&mut w, node);
    w.finish()
}

fn write_node(w: &mut HtmlWriter, node: &Node) {
    match node {
        Node::Text(text) => w.text(text),
        Node::Element(el) => w.element(el.tag(), el.props(), |w| {
            for child in el.children() {
                write_node(w, child);
            }
        }),
        Node::Controlled(ctl) => w.element(ctl.tag(), ctl.props(), |w| {
            for child in ctl.children() {
                write_node(w, child);
            }
        }),
    }
}

/// Markup writer shared by [`render_to_string`] and mounted containers.
pub(crate) struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    pub(crate) fn new() -> Self {
        Self { out: String::new() }
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }

    pub(crate) fn text(&mut self, text: &str) {
        self.out.push_str(&escape(text));
    }

    /// Write a full element; `children` writes its content.
    pub(crate) fn element(&mut self, tag: Tag, props: &Props, children: impl FnOnce(&mut Self)) {
        let is_textarea = tag.name() == "textarea";

        self.out.push('<');
        self.out.push_str(tag.name());
        if tag.name() == "svg" && props.get("xmlns").is_none() {
            self.attr("xmlns", &PropValue::from(tag.namespace().uri()));
        }
        for (key, value) in props.attrs() {
            if is_textarea && key == VALUE {
                continue;
            }
            self.attr(key, value);
        }
        self.out.push('>');

        if tag.is_void() {
            return;
        }

        match props.get(VALUE) {
            Some(value) if is_textarea => self.text(&value.to_string()),
            _ => children(self),
        }

        self.out.push_str("</");
        self.out.push_str(tag.name());
        self.out.push('>');
    }

    fn attr(&mut self, key: &str, value: &PropValue) {
        let name = match key {
            "className" => "class",
            "htmlFor" => "for",
            other => other,
        };

        match value {
            PropValue::Bool(false) => {}
            PropValue::Bool(true) => {
                self.out.push(' ');
                self.out.push_str(name);
            }
            other => {
                self.out.push(' ');
                self.out.push_str(name);
                self.out.push_str("=\"");
                self.out.push_str(&escape(&other.to_string()));
                self.out.push('"');
            }
        }
    }
}

/// Escape text for element content and quoted attribute values.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::dom;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_nested_elements() {
        let tree = dom::div(
            Props::new().attr("className", "card"),
            (
                dom::h2(Props::new(), "Title"),
                dom::p(Props::new(), ("Count: ", 3)),
            ),
        );

        assert_eq!(
            render_to_string(&tree),
            r#"<div class="card"><h2>Title</h2><p>Count: 3</p></div>"#
        );
    }

    #[test]
    fn escapes_text_and_attributes() {
        let tree = dom::a(
            Props::new().attr("title", r#"say "hi" & <go>"#),
            "Tom's <b>",
        );

        assert_eq!(
            render_to_string(&tree),
            r#"<a title="say &quot;hi&quot; &amp; &lt;go&gt;">Tom&#39;s &lt;b&gt;</a>"#
        );
    }

    #[test]
    fn boolean_attributes() {
        let tree = dom::button(
            Props::new().attr("disabled", true).attr("hidden", false),
            "Go",
        );

        assert_eq!(render_to_string(&tree), "<button disabled>Go</button>");
    }

    #[test]
    fn handlers_are_not_serialized() {
        let tree = dom::button(Props::new().on("onClick", |_| {}), "Go");
        assert_eq!(render_to_string(&tree), "<button>Go</button>");
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let tree = dom::p(
            Props::new(),
            ("a", dom::br(Props::new(), "ignored"), "b"),
        );
        assert_eq!(render_to_string(&tree), "<p>a<br>b</p>");
    }

    #[test]
    fn controlled_elements_carry_their_value() {
        let input = dom::input(Props::new().attr("type", "text").value("hi"), ());
        assert_eq!(render_to_string(&input), r#"<input type="text" value="hi">"#);

        let area = dom::textarea(Props::new().attr("rows", 2).value("a < b"), "stale");
        assert_eq!(
            render_to_string(&area),
            r#"<textarea rows="2">a &lt; b</textarea>"#
        );
    }

    #[test]
    fn svg_root_declares_its_namespace() {
        let icon = dom::svg(
            Props::new().attr("width", 8),
            dom::circle(Props::new().attr("r", 4), ()),
        );
        assert_eq!(
            render_to_string(&icon),
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="8"><circle r="4"></circle></svg>"#
        );

        let explicit = dom::svg(Props::new().attr("xmlns", "urn:x"), ());
        assert_eq!(render_to_string(&explicit), r#"<svg xmlns="urn:x"></svg>"#);
    }

    #[test]
    fn label_for_attribute() {
        let tree = dom::label(Props::new().attr("htmlFor", "name"), "Name");
        assert_eq!(render_to_string(&tree), r#"<label for="name">Name</label>"#);
    }
}
