//! HTML/SVG element constructors and controlled form elements.
//!
//! Every standard tag has a constructor in [`dom`] taking an options
//! mapping and any number of children (a tuple, array, `Vec`, or single
//! value). `input`, `textarea` and `option` are controlled: the value in
//! their props is authoritative, and local change events are passed to
//! the caller's `onChange` before the displayed value follows them.
//!
//! ```
//! use om_dom::{dom, render, Container, Event, Props};
//!
//! let mut container = Container::new("app");
//! let tree = dom::div(
//!     Props::new().attr("className", "field"),
//!     (
//!         dom::label(Props::new(), "Name"),
//!         dom::input(Props::new().value("Ada"), ()),
//!     ),
//! );
//!
//! render(tree, &mut container).unwrap();
//! container.dispatch(&[1], &Event::change("Grace")).unwrap();
//!
//! assert_eq!(
//!     container.to_html(),
//!     r#"<div class="field"><label>Name</label><input value="Grace"></div>"#
//! );
//! ```

pub mod config;
pub mod controlled;
pub mod factory;
pub mod html;
pub mod node;
pub mod props;
pub mod runtime;
pub mod tags;

pub use config::{RenderConfig, Validation};
pub use controlled::{controlled, Controlled, ControlledNode};
pub use factory::{
    create_element_by_name, element, element_with, ElementFactory, FactoryError, VirtualFactory,
};
pub use html::render_to_string;
pub use node::{Element, IntoChildren, Node};
pub use props::{Event, Handler, PropValue, Props, PropsError, ON_CHANGE, VALUE};
pub use runtime::{render, Container, RenderError};
pub use tags::{dom, tag, Namespace, Tag, TAGS};
