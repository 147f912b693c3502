//! Virtual nodes and child normalization.

use crate::controlled::ControlledNode;
use crate::props::Props;
use crate::tags::Tag;

/// A node of the virtual tree handed to the renderer.
#[derive(Debug, Clone)]
pub enum Node {
    /// A plain element
    Element(Element),
    /// A text node
    Text(String),
    /// A controlled form element, instantiated when mounted
    Controlled(ControlledNode),
}

impl Node {
    /// Tag of an element or controlled node; `None` for text.
    pub fn tag(&self) -> Option<Tag> {
        match self {
            Node::Element(el) => Some(el.tag),
            Node::Controlled(ctl) => Some(ctl.tag()),
            Node::Text(_) => None,
        }
    }

    pub fn props(&self) -> Option<&Props> {
        match self {
            Node::Element(el) => Some(&el.props),
            Node::Controlled(ctl) => Some(ctl.props()),
            Node::Text(_) => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(el) => &el.children,
            Node::Controlled(ctl) => ctl.children(),
            Node::Text(_) => &[],
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// An element with its options mapping and children.
#[derive(Debug, Clone)]
pub struct Element {
    pub(crate) tag: Tag,
    pub(crate) props: Props,
    pub(crate) children: Vec<Node>,
}

impl Element {
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
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<ControlledNode> for Node {
    fn from(ctl: ControlledNode) -> Self {
        Node::Controlled(ctl)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

/// Anything that can stand in the children position of a constructor.
///
/// Tuples take the place of variadic arguments: `div(props, ("a", b, c))`.
pub trait IntoChildren {
    fn into_children(self) -> Vec<Node>;

    /// Append the children to an existing sequence.
    fn push_into(self, out: &mut Vec<Node>)
    where
        Self: Sized,
    {
        out.extend(self.into_children());
    }
}

impl IntoChildren for () {
    fn into_children(self) -> Vec<Node> {
        Vec::new()
    }
}

macro_rules! single_child {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoChildren for $ty {
                fn into_children(self) -> Vec<Node> {
                    vec![Node::from(self)]
                }
            }
        )*
    };
}

single_child!(Node, Element, ControlledNode, String, &str);

macro_rules! display_child {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoChildren for $ty {
                fn into_children(self) -> Vec<Node> {
                    vec![Node::Text(self.to_string())]
                }
            }
        )*
    };
}

display_child!(&String, char, i32, i64, u32, u64, usize, f64);

impl<T: IntoChildren> IntoChildren for Option<T> {
    fn into_children(self) -> Vec<Node> {
        self.map(IntoChildren::into_children).unwrap_or_default()
    }
}

impl<T: IntoChildren> IntoChildren for Vec<T> {
    fn into_children(self) -> Vec<Node> {
        let mut out = Vec::with_capacity(self.len());
        for child in self {
            child.push_into(&mut out);
        }
        out
    }
}

impl<T: IntoChildren, const N: usize> IntoChildren for [T; N] {
    fn into_children(self) -> Vec<Node> {
        let mut out = Vec::with_capacity(N);
        for child in self {
            child.push_into(&mut out);
        }
        out
    }
}

macro_rules! tuple_children {
    ($($name:ident),+) => {
        impl<$($name: IntoChildren),+> IntoChildren for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_children(self) -> Vec<Node> {
                let ($($name,)+) = self;
                let mut out = Vec::new();
                $($name.push_into(&mut out);)+
                out
            }
        }
    };
}

tuple_children!(A);
tuple_children!(A, B);
tuple_children!(A, B, C);
tuple_children!(A, B, C, D);
tuple_children!(A, B, C, D, E);
tuple_children!(A, B, C, D, E, F);
tuple_children!(A, B, C, D, E, F, G);
tuple_children!(A, B, C, D, E, F, G, H);
tuple_children!(A, B, C, D, E, F, G, H, I);
tuple_children!(A, B, C, D, E, F, G, H, I, J);
tuple_children!(A, B, C, D, E, F, G, H, I, J, K);
tuple_children!(A, B, C, D, E, F, G, H, I, J, K, L);
