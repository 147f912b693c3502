//! Mount point and render entry point.
//!
//! A [`Container`] holds the committed tree. [`render`] mounts into an
//! empty container, or walks the committed tree by child position when
//! one is already mounted: nodes with the same tag are updated in place
//! (controlled instances receive their new props), anything else is
//! replaced by a freshly mounted subtree.

use crate::config::RenderConfig;
use crate::controlled::Controlled;
use crate::html::HtmlWriter;
use crate::node::{Element, Node};
use crate::props::{Event, PropValue, Props, PropsError, VALUE};
use crate::tags::Tag;

/// A committed node.
#[derive(Debug)]
enum Mounted {
    Element {
        tag: Tag,
        props: Props,
        children: Vec<Mounted>,
    },
    Text(String),
    Controlled {
        instance: Controlled,
        children: Vec<Mounted>,
    },
}

impl Mounted {
    fn children(&self) -> &[Mounted] {
        match self {
            Mounted::Element { children, .. } | Mounted::Controlled { children, .. } => children,
            Mounted::Text(_) => &[],
        }
    }

    fn write_html(&self, w: &mut HtmlWriter) {
        match self {
            Mounted::Text(text) => w.text(text),
            Mounted::Element {
                tag,
                props,
                children,
            } => w.element(*tag, props, |w| {
                for child in children {
                    child.write_html(w);
                }
            }),
            Mounted::Controlled { instance, children } => {
                let rendered = instance.render();
                w.element(rendered.tag(), rendered.props(), |w| {
                    for child in children {
                        child.write_html(w);
                    }
                })
            }
        }
    }
}

fn mount(node: Node) -> Mounted {
    match node {
        Node::Text(text) => Mounted::Text(text),
        Node::Element(Element {
            tag,
            props,
            children,
        }) => Mounted::Element {
            tag,
            props,
            children: children.into_iter().map(mount).collect(),
        },
        Node::Controlled(descriptor) => {
            let children = descriptor.children().iter().cloned().map(mount).collect();
            Mounted::Controlled {
                instance: Controlled::from_node(descriptor),
                children,
            }
        }
    }
}

fn update(slot: &mut Mounted, node: Node) {
    match (slot, node) {
        (Mounted::Text(text), Node::Text(new)) => *text = new,
        (
            Mounted::Element {
                tag,
                props,
                children,
            },
            Node::Element(el),
        ) if *tag == el.tag => {
            *props = el.props;
            update_children(children, el.children);
        }
        (Mounted::Controlled { instance, children }, Node::Controlled(descriptor))
            if instance.tag() == descriptor.tag() =>
        {
            let (_, props, new_children) = descriptor.into_parts();
            instance.receive_props(props, new_children.clone());
            update_children(children, new_children);
        }
        (slot, node) => {
            tracing::trace!(tag = ?node.tag().map(|t| t.name()), "replacing node");
            *slot = mount(node);
        }
    }
}

fn update_children(old: &mut Vec<Mounted>, new: Vec<Node>) {
    let mut new = new.into_iter();
    let mut kept = 0;

    for (slot, node) in old.iter_mut().zip(new.by_ref()) {
        update(slot, node);
        kept += 1;
    }

    old.truncate(kept);
    old.extend(new.map(mount));
}

fn validate_tree(node: &Node, path: &mut Vec<usize>) -> Result<(), RenderError> {
    if let Some(props) = node.props() {
        props.validate().map_err(|source| RenderError::InvalidProps {
            path: path.clone(),
            source,
        })?;
    }

    for (i, child) in node.children().iter().enumerate() {
        path.push(i);
        validate_tree(child, path)?;
        path.pop();
    }

    Ok(())
}

/// Target of [`render`]: holds one mounted tree.
#[derive(Debug)]
pub struct Container {
    id: String,
    config: RenderConfig,
    root: Option<Mounted>,
}

impl Container {
    /// Create an empty container with default options.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_config(id, RenderConfig::default())
    }

    pub fn with_config(id: impl Into<String>, config: RenderConfig) -> Self {
        Self {
            id: id.into(),
            config,
            root: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn is_mounted(&self) -> bool {
        self.root.is_some()
    }

    /// Drop the mounted tree. Returns whether anything was mounted.
    pub fn unmount(&mut self) -> bool {
        let was_mounted = self.root.take().is_some();
        if was_mounted {
            tracing::debug!(container = %self.id, "unmounted");
        }
        was_mounted
    }

    fn node_at(&self, path: &[usize]) -> Result<&Mounted, RenderError> {
        let missing = || RenderError::NoSuchNode(path.to_vec());

        let mut node = self.root.as_ref().ok_or_else(missing)?;
        for &i in path {
            node = node.children().get(i).ok_or_else(missing)?;
        }
        Ok(node)
    }

    /// Deliver `event` to the node at `path` (child indices from the root).
    ///
    /// Returns `Ok(false)` when the node has no handler for the event.
    pub fn dispatch(&self, path: &[usize], event: &Event) -> Result<bool, RenderError> {
        let key = event.handler_key();
        let handler = match self.node_at(path)? {
            Mounted::Element { props, .. } => props.handler(&key).cloned(),
            Mounted::Controlled { instance, .. } => instance.handler(&key),
            Mounted::Text(_) => None,
        };

        tracing::debug!(container = %self.id, ?path, event = event.kind(), handled = handler.is_some(), "dispatch");

        match handler {
            Some(handler) => {
                handler(event);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The `value` currently displayed by the node at `path`.
    pub fn value_at(&self, path: &[usize]) -> Result<Option<PropValue>, RenderError> {
        Ok(match self.node_at(path)? {
            Mounted::Element { props, .. } => props.get(VALUE).cloned(),
            Mounted::Controlled { instance, .. } => instance.value(),
            Mounted::Text(_) => None,
        })
    }

    /// Markup of the mounted tree; empty when nothing is mounted.
    pub fn to_html(&self) -> String {
        let mut w = HtmlWriter::new();
        if let Some(root) = &self.root {
            root.write_html(&mut w);
        }
        w.finish()
    }
}

/// Mount `node` into `container`, or update the tree already there.
pub fn render(node: Node, container: &mut Container) -> Result<(), RenderError> {
    if container.config.is_strict() {
        validate_tree(&node, &mut Vec::new())?;
    }

    match container.root.as_mut() {
        Some(root) => {
            tracing::debug!(container = %container.id, "updating mounted tree");
            update(root, node);
        }
        None => {
            tracing::debug!(container = %container.id, "mounting tree");
            container.root = Some(mount(node));
        }
    }

    Ok(())
}

/// Errors that can occur while rendering or dispatching.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Invalid props at {path:?}: {source}")]
    InvalidProps {
        path: Vec<usize>,
        #[source]
        source: PropsError,
    },

    #[error("No mounted node at path {0:?}")]
    NoSuchNode(Vec<usize>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Validation;
    use crate::tags::dom;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn form(value: &str, log: &Rc<RefCell<Vec<String>>>) -> Node {
        let log = log.clone();
        dom::form(
            Props::new(),
            (
                dom::label(Props::new().attr("htmlFor", "q"), "Search"),
                dom::input(
                    Props::new()
                        .attr("id", "q")
                        .value(value)
                        .on_change(move |e| log.borrow_mut().push(e.value().unwrap_or("").to_string())),
                    (),
                ),
            ),
        )
    }

    #[test]
    fn mounts_into_empty_container() {
        let mut container = Container::new("app");
        assert!(!container.is_mounted());

        render(dom::p(Props::new(), "hi"), &mut container).unwrap();

        assert!(container.is_mounted());
        assert_eq!(container.id(), "app");
        assert_eq!(container.to_html(), "<p>hi</p>");
    }

    #[test]
    fn local_change_reaches_handler_and_display() {
        let log = Rc::new(RefCell::new(vec![]));
        let mut container = Container::new("app");
        render(form("", &log), &mut container).unwrap();

        let handled = container.dispatch(&[1], &Event::change("rust")).unwrap();

        assert!(handled);
        assert_eq!(*log.borrow(), vec!["rust".to_string()]);
        assert_eq!(container.value_at(&[1]).unwrap(), Some(PropValue::from("rust")));
        assert_eq!(
            container.to_html(),
            r#"<form><label for="q">Search</label><input id="q" value="rust"></form>"#
        );
    }

    #[test]
    fn rerender_updates_existing_controlled_instance() {
        let log = Rc::new(RefCell::new(vec![]));
        let mut container = Container::new("app");
        render(form("a", &log), &mut container).unwrap();

        // Keep the old handler around: it only works while the same
        // instance stays mounted.
        let Ok(Mounted::Controlled { instance, .. }) = container.node_at(&[1]) else {
            panic!("expected a controlled node");
        };
        let old_handler = instance.change_handler();

        container.dispatch(&[1], &Event::change("local")).unwrap();
        render(form("external", &log), &mut container).unwrap();
        assert_eq!(container.value_at(&[1]).unwrap(), Some(PropValue::from("external")));

        old_handler(&Event::change("via old handler"));
        assert_eq!(
            container.value_at(&[1]).unwrap(),
            Some(PropValue::from("via old handler"))
        );
    }

    #[test]
    fn different_tag_replaces_subtree() {
        let mut container = Container::new("app");
        render(dom::div(Props::new(), dom::span(Props::new(), "a")), &mut container).unwrap();
        render(dom::div(Props::new(), dom::em(Props::new(), "b")), &mut container).unwrap();

        assert_eq!(container.to_html(), "<div><em>b</em></div>");
    }

    #[test]
    fn children_are_added_and_removed_by_position() {
        let mut container = Container::new("list");
        let list = |items: &[&str]| {
            dom::ul(
                Props::new(),
                items
                    .iter()
                    .map(|i| dom::li(Props::new(), *i))
                    .collect::<Vec<_>>(),
            )
        };

        render(list(&["a", "b", "c"]), &mut container).unwrap();
        render(list(&["x"]), &mut container).unwrap();
        assert_eq!(container.to_html(), "<ul><li>x</li></ul>");

        render(list(&["x", "y"]), &mut container).unwrap();
        assert_eq!(container.to_html(), "<ul><li>x</li><li>y</li></ul>");
    }

    #[test]
    fn dispatch_to_plain_element_handler() {
        let clicks = Rc::new(RefCell::new(0));
        let counter = clicks.clone();
        let mut container = Container::new("app");
        render(
            dom::button(Props::new().on("onClick", move |_| *counter.borrow_mut() += 1), "Go"),
            &mut container,
        )
        .unwrap();

        assert!(container.dispatch(&[], &Event::new("click")).unwrap());
        assert!(!container.dispatch(&[], &Event::new("focus")).unwrap());
        assert!(!container.dispatch(&[0], &Event::new("click")).unwrap());
        assert_eq!(*clicks.borrow(), 1);
    }

    #[test]
    fn invalid_paths_are_errors() {
        let mut container = Container::new("app");
        assert!(matches!(
            container.dispatch(&[], &Event::new("click")),
            Err(RenderError::NoSuchNode(_))
        ));

        render(dom::div(Props::new(), ()), &mut container).unwrap();
        assert!(matches!(
            container.value_at(&[3]),
            Err(RenderError::NoSuchNode(path)) if path == vec![3]
        ));
    }

    #[test]
    fn strict_mode_rejects_bad_props_and_keeps_tree() {
        let mut container = Container::with_config("app", RenderConfig::strict());
        assert_eq!(container.config().validation, Validation::Strict);
        render(dom::p(Props::new(), "kept"), &mut container).unwrap();

        let bad = dom::div(Props::new(), dom::span(Props::new().attr("bad name", "x"), ()));
        let result = render(bad, &mut container);

        assert!(matches!(
            result,
            Err(RenderError::InvalidProps { ref path, .. }) if *path == vec![0]
        ));
        assert_eq!(container.to_html(), "<p>kept</p>");
    }

    #[test]
    fn permissive_mode_accepts_anything() {
        let mut container = Container::new("app");
        render(dom::div(Props::new().attr("bad name", "x"), ()), &mut container).unwrap();
        assert!(container.is_mounted());
    }

    #[test]
    fn unmount_clears_container() {
        let mut container = Container::new("app");
        assert!(!container.unmount());

        render(dom::p(Props::new(), "x"), &mut container).unwrap();
        assert!(container.unmount());
        assert_eq!(container.to_html(), "");
    }
}
