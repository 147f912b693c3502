//! Element factory: builds a node from a tag, an options mapping and children.

use crate::node::{Element, IntoChildren, Node};
use crate::props::Props;
use crate::tags::Tag;

/// Builds renderable nodes. [`VirtualFactory`] is the default.
pub trait ElementFactory {
    /// Backend identifier (e.g., "virtual")
    fn name(&self) -> &'static str;

    /// Construct a node from a tag, its options and its ordered children.
    fn create_element(&self, tag: Tag, props: Props, children: Vec<Node>) -> Node;
}

/// Factory producing plain [`Node::Element`] values.
#[derive(Debug, Default, Clone, Copy)]
pub struct VirtualFactory;

impl ElementFactory for VirtualFactory {
    fn name(&self) -> &'static str {
        "virtual"
    }

    fn create_element(&self, tag: Tag, props: Props, children: Vec<Node>) -> Node {
        Node::Element(Element::new(tag, props, children))
    }
}

/// Normalize `children` and build a `tag` element with the default factory.
pub fn element(tag: Tag, props: Props, children: impl IntoChildren) -> Node {
    element_with(&VirtualFactory, tag, props, children)
}

/// Normalize `children` and forward to `factory`.
pub fn element_with(
    factory: &dyn ElementFactory,
    tag: Tag,
    props: Props,
    children: impl IntoChildren,
) -> Node {
    factory.create_element(tag, props, children.into_children())
}

/// Build an element from a tag name looked up in [`crate::TAGS`].
///
/// Controlled tags yield the same controlled node as their [`crate::dom`]
/// constructor.
pub fn create_element_by_name(
    name: &str,
    props: Props,
    children: impl IntoChildren,
) -> Result<Node, FactoryError> {
    let tag = Tag::lookup(name).ok_or_else(|| FactoryError::UnknownTag(name.to_string()))?;

    if tag.is_controlled() {
        Ok(crate::controlled::controlled(tag, props, children))
    } else {
        Ok(element(tag, props, children))
    }
}

/// Errors that can occur while constructing elements.
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    #[error("Unknown tag: {0}")]
    UnknownTag(String),
}
