//! The tag table and the element constructors generated from it.
//!
//! Every constructor in [`dom`] comes from the single [`define_tags!`]
//! invocation below: one line per tag, kept in byte order so that
//! [`Tag::lookup`] can binary-search [`TAGS`].

use crate::node::{IntoChildren, Node};
use crate::props::Props;

/// Markup namespace of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Html,
    Svg,
}

impl Namespace {
    pub fn uri(&self) -> &'static str {
        match self {
            Namespace::Html => "http://www.w3.org/1999/xhtml",
            Namespace::Svg => "http://www.w3.org/2000/svg",
        }
    }
}

/// Identity of an element: its tag name and namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag {
    name: &'static str,
    namespace: Namespace,
}

impl Tag {
    /// Create a tag. Use this for custom elements missing from [`TAGS`].
    pub const fn new(name: &'static str, namespace: Namespace) -> Self {
        Self { name, namespace }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// Find a tag in the table by name.
    pub fn lookup(name: &str) -> Option<Tag> {
        TAGS.binary_search_by(|tag| tag.name.cmp(name))
            .ok()
            .map(|i| TAGS[i])
    }

    /// Void elements never have children or a closing tag.
    pub fn is_void(&self) -> bool {
        matches!(
            self.name,
            "area"
                | "base"
                | "br"
                | "col"
                | "embed"
                | "hr"
                | "img"
                | "input"
                | "keygen"
                | "link"
                | "meta"
                | "param"
                | "source"
                | "track"
                | "wbr"
        )
    }

    /// Whether [`dom`] wraps this tag as a controlled form element.
    pub fn is_controlled(&self) -> bool {
        matches!(self.name, "input" | "option" | "textarea")
    }
}

macro_rules! construct {
    (element, $tag:expr, $props:expr, $children:expr) => {
        $crate::factory::element($tag, $props, $children)
    };
    (controlled, $tag:expr, $props:expr, $children:expr) => {
        $crate::controlled::controlled($tag, $props, $children)
    };
}

macro_rules! define_tags {
    ($($name:ident: $ns:ident => $kind:ident,)*) => {
        /// One constant per supported tag.
        #[allow(non_upper_case_globals)]
        pub mod tag {
            use super::{Namespace, Tag};

            $(pub const $name: Tag = Tag::new(stringify!($name), Namespace::$ns);)*
        }

        /// Every supported tag, sorted by name.
        pub static TAGS: &[Tag] = &[$(tag::$name),*];

        /// Element constructors, one per entry of [`TAGS`].
        pub mod dom {
            use super::{tag, IntoChildren, Node, Props};

            $(
                #[doc = concat!("Construct a `<", stringify!($name), ">` node.")]
                pub fn $name(props: Props, children: impl IntoChildren) -> Node {
                    construct!($kind, tag::$name, props, children)
                }
            )*
        }
    };
}

define_tags! {
    a: Html => element,
    abbr: Html => element,
    address: Html => element,
    area: Html => element,
    article: Html => element,
    aside: Html => element,
    audio: Html => element,
    b: Html => element,
    base: Html => element,
    bdi: Html => element,
    bdo: Html => element,
    big: Html => element,
    blockquote: Html => element,
    body: Html => element,
    br: Html => element,
    button: Html => element,
    canvas: Html => element,
    caption: Html => element,
    circle: Svg => element,
    cite: Html => element,
    code: Html => element,
    col: Html => element,
    colgroup: Html => element,
    data: Html => element,
    datalist: Html => element,
    dd: Html => element,
    del: Html => element,
    dfn: Html => element,
    div: Html => element,
    dl: Html => element,
    dt: Html => element,
    em: Html => element,
    embed: Html => element,
    fieldset: Html => element,
    figcaption: Html => element,
    figure: Html => element,
    footer: Html => element,
    form: Html => element,
    g: Svg => element,
    h1: Html => element,
    h2: Html => element,
    h3: Html => element,
    h4: Html => element,
    h5: Html => element,
    h6: Html => element,
    head: Html => element,
    header: Html => element,
    hr: Html => element,
    html: Html => element,
    i: Html => element,
    iframe: Html => element,
    img: Html => element,
    input: Html => controlled,
    ins: Html => element,
    kbd: Html => element,
    keygen: Html => element,
    label: Html => element,
    legend: Html => element,
    li: Html => element,
    line: Svg => element,
    link: Html => element,
    main: Html => element,
    map: Html => element,
    mark: Html => element,
    menu: Html => element,
    menuitem: Html => element,
    meta: Html => element,
    meter: Html => element,
    nav: Html => element,
    noscript: Html => element,
    object: Html => element,
    ol: Html => element,
    optgroup: Html => element,
    option: Html => controlled,
    output: Html => element,
    p: Html => element,
    param: Html => element,
    path: Svg => element,
    polyline: Svg => element,
    pre: Html => element,
    progress: Html => element,
    q: Html => element,
    rect: Svg => element,
    rp: Html => element,
    rt: Html => element,
    ruby: Html => element,
    s: Html => element,
    samp: Html => element,
    script: Html => element,
    section: Html => element,
    select: Html => element,
    small: Html => element,
    source: Html => element,
    span: Html => element,
    strong: Html => element,
    style: Html => element,
    sub: Html => element,
    summary: Html => element,
    sup: Html => element,
    svg: Svg => element,
    table: Html => element,
    tbody: Html => element,
    td: Html => element,
    text: Svg => element,
    textarea: Html => controlled,
    tfoot: Html => element,
    th: Html => element,
    thead: Html => element,
    time: Html => element,
    title: Html => element,
    tr: Html => element,
    track: Html => element,
    u: Html => element,
    ul: Html => element,
    var: Html => element,
    video: Html => element,
    wbr: Html => element,
}
