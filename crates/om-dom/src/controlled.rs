//! Controlled form elements.
//!
//! `input`, `textarea` and `option` are not built as plain elements.
//! Their constructors return a [`ControlledNode`] that the runtime turns
//! into a [`Controlled`] instance on mount. The instance owns a single
//! piece of state, the displayed value:
//!
//! - construction copies `props.value` into it,
//! - every props update from the owner overwrites it (last writer wins),
//! - every local change event overwrites it, after the caller's
//!   `onChange` handler has seen the event.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::node::{Element, IntoChildren, Node};
use crate::props::{Event, Handler, PropValue, Props, ON_CHANGE, VALUE};
use crate::tags::Tag;

/// Unmounted description of a controlled form element.
#[derive(Debug, Clone)]
pub struct ControlledNode {
    tag: Tag,
    props: Props,
    children: Vec<Node>,
}

impl ControlledNode {
    pub fn new(tag: Tag, props: Props, children: Vec<Node>) -> Self {
        Self {
            tag,
            props,
            children,
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn into_parts(self) -> (Tag, Props, Vec<Node>) {
        (self.tag, self.props, self.children)
    }
}

/// Build a controlled node for `tag`.
pub fn controlled(tag: Tag, props: Props, children: impl IntoChildren) -> Node {
    Node::Controlled(ControlledNode::new(tag, props, children.into_children()))
}

/// A live controlled element. Cloning shares the same instance.
#[derive(Debug, Clone)]
pub struct Controlled {
    inner: Rc<Inner>,
}

#[derive(Debug)]
struct Inner {
    tag: Tag,
    props: RefCell<Props>,
    children: RefCell<Vec<Node>>,
    value: RefCell<Option<PropValue>>,
}

impl Inner {
    fn handle_change(&self, event: &Event) {
        // Clone out so no borrow is held while the caller's handler runs.
        let handler = self.props.borrow().handler(ON_CHANGE).cloned();
        if let Some(handler) = handler {
            handler(event);
        }

        tracing::trace!(tag = self.tag.name(), value = ?event.value(), "controlled change");
        *self.value.borrow_mut() = event.value().map(PropValue::from);
    }
}

impl Controlled {
    /// Instantiate a controlled element; its value starts as `props.value`.
    pub fn new(tag: Tag, props: Props, children: Vec<Node>) -> Self {
        let value = props.get(VALUE).cloned();
        tracing::trace!(tag = tag.name(), ?value, "controlled mount");

        Self {
            inner: Rc::new(Inner {
                tag,
                props: RefCell::new(props),
                children: RefCell::new(children),
                value: RefCell::new(value),
            }),
        }
    }

    /// Instantiate from an unmounted descriptor.
    pub fn from_node(node: ControlledNode) -> Self {
        let (tag, props, children) = node.into_parts();
        Self::new(tag, props, children)
    }

    pub fn tag(&self) -> Tag {
        self.inner.tag
    }

    /// The value currently displayed.
    pub fn value(&self) -> Option<PropValue> {
        self.inner.value.borrow().clone()
    }

    /// The owner re-rendered with new props. The incoming `value`
    /// replaces the current one unconditionally, local edits included.
    pub fn receive_props(&self, props: Props, children: Vec<Node>) {
        let value = props.get(VALUE).cloned();
        tracing::trace!(tag = self.inner.tag.name(), ?value, "controlled props update");

        *self.inner.value.borrow_mut() = value;
        *self.inner.props.borrow_mut() = props;
        *self.inner.children.borrow_mut() = children;
    }

    /// A local interaction. The caller's `onChange` (if any) receives the
    /// event first; the value is updated afterwards.
    pub fn handle_change(&self, event: &Event) {
        self.inner.handle_change(event);
    }

    /// Handler forwarding to [`Controlled::handle_change`]. It holds a weak
    /// reference and does nothing once the instance is dropped.
    pub fn change_handler(&self) -> Handler {
        let weak: Weak<Inner> = Rc::downgrade(&self.inner);
        Rc::new(move |event: &Event| {
            if let Some(inner) = weak.upgrade() {
                inner.handle_change(event);
            }
        })
    }

    /// Handler registered under `key` on the rendered element.
    pub fn handler(&self, key: &str) -> Option<Handler> {
        if key == ON_CHANGE {
            return Some(self.change_handler());
        }
        self.inner.props.borrow().handler(key).cloned()
    }

    /// The element to display: caller props with this instance's change
    /// handler and current value substituted.
    pub fn render(&self) -> Element {
        let mut props = self.inner.props.borrow().clone();
        let mut overrides = Props::new().with_handler(ON_CHANGE, self.change_handler());

        match self.value() {
            Some(value) => overrides = overrides.value(value),
            None => props.remove(VALUE),
        }

        Element::new(
            self.inner.tag,
            props.merge(overrides),
            self.inner.children.borrow().clone(),
        )
    }
}
