//! Options mapping passed to element constructors, and the events its
//! handlers receive.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

/// Key holding the displayed value of a form element.
pub const VALUE: &str = "value";

/// Key holding the change handler of a form element.
pub const ON_CHANGE: &str = "onChange";

/// A scalar attribute value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// Presence flag: disabled, checked
    Bool(bool),
    /// Numeric value: rows, width
    Number(f64),
    /// String literal: className, placeholder
    Str(String),
}

impl PropValue {
    /// Get as string if it's a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Bool(b) => write!(f, "{b}"),
            PropValue::Number(n) => write!(f, "{n}"),
            PropValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Number(f64::from(value))
    }
}

/// A user interaction delivered to an element's handler.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    kind: String,
    value: Option<String>,
}

impl Event {
    /// Create an event of the given kind (e.g. "click") with no target value.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: None,
        }
    }

    /// Create a change event reporting the target's new value.
    pub fn change(value: impl Into<String>) -> Self {
        Self::new("change").with_value(value)
    }

    /// Attach the target value reported by the interaction.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The target value reported by the interaction, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Props key of the handler for this event: "change" -> "onChange".
    pub fn handler_key(&self) -> String {
        let mut chars = self.kind.chars();
        match chars.next() {
            Some(c) => format!("on{}{}", c.to_uppercase(), chars.as_str()),
            None => "on".to_string(),
        }
    }
}

/// An event handler stored in a [`Props`] mapping.
pub type Handler = Rc<dyn Fn(&Event)>;

/// Caller-supplied element configuration: attributes and event handlers.
///
/// Element constructors never look inside; only the controlled form
/// elements read and replace the [`VALUE`] and [`ON_CHANGE`] keys.
#[derive(Clone, Default)]
pub struct Props {
    attrs: BTreeMap<String, PropValue>,
    handlers: BTreeMap<String, Handler>,
}

impl Props {
    /// Create an empty options mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Set the `value` attribute.
    pub fn value(self, value: impl Into<PropValue>) -> Self {
        self.attr(VALUE, value)
    }

    /// Register a handler under a props key such as "onClick".
    pub fn on(mut self, key: impl Into<String>, handler: impl Fn(&Event) + 'static) -> Self {
        self.handlers.insert(key.into(), Rc::new(handler));
        self
    }

    /// Register the `onChange` handler.
    pub fn on_change(self, handler: impl Fn(&Event) + 'static) -> Self {
        self.on(ON_CHANGE, handler)
    }

    /// Register an already shared handler.
    pub fn with_handler(mut self, key: impl Into<String>, handler: Handler) -> Self {
        self.handlers.insert(key.into(), handler);
        self
    }

    /// Look up an attribute.
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.attrs.get(key)
    }

    /// Look up a handler.
    pub fn handler(&self, key: &str) -> Option<&Handler> {
        self.handlers.get(key)
    }

    /// Remove an attribute or handler stored under `key`.
    pub fn remove(&mut self, key: &str) {
        self.attrs.remove(key);
        self.handlers.remove(key);
    }

    /// Overlay `other` on top of `self`; keys present in `other` win.
    pub fn merge(mut self, other: Props) -> Self {
        self.attrs.extend(other.attrs);
        self.handlers.extend(other.handlers);
        self
    }

    /// Attributes in key order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Handler keys in order.
    pub fn handler_keys(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty() && self.handlers.is_empty()
    }

    /// Check attribute names and handler keys for well-formedness.
    pub fn validate(&self) -> Result<(), PropsError> {
        static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[A-Za-z_:][-A-Za-z0-9_:.]*$").expect("Invalid attribute name regex")
        });
        static HANDLER_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^on[A-Z][A-Za-z]*$").expect("Invalid handler key regex")
        });

        if let Some(key) = self.attrs.keys().find(|k| !ATTR_RE.is_match(k)) {
            return Err(PropsError::InvalidAttributeName(key.clone()));
        }
        if let Some(key) = self.handlers.keys().find(|k| !HANDLER_RE.is_match(k)) {
            return Err(PropsError::InvalidHandlerKey(key.clone()));
        }

        Ok(())
    }
}

impl fmt::Debug for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Props")
            .field("attrs", &self.attrs)
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Build props from a JSON object. Scalars become attributes, `null`
/// entries are skipped, arrays and objects are rejected.
impl TryFrom<serde_json::Value> for Props {
    type Error = PropsError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        let Value::Object(map) = value else {
            return Err(PropsError::NotAnObject);
        };

        let mut props = Props::new();
        for (key, value) in map {
            if value.is_null() {
                continue;
            }
            let value = PropValue::deserialize(value).map_err(|e| PropsError::InvalidProp {
                key: key.clone(),
                reason: e.to_string(),
            })?;
            props.attrs.insert(key, value);
        }

        Ok(props)
    }
}

/// Errors raised when building or validating props.
#[derive(Debug, thiserror::Error)]
pub enum PropsError {
    #[error("Props must be a JSON object")]
    NotAnObject,

    #[error("Invalid prop {key}: {reason}")]
    InvalidProp { key: String, reason: String },

    #[error("Invalid attribute name: {0:?}")]
    InvalidAttributeName(String),

    #[error("Invalid handler key: {0:?} (expected onXxx)")]
    InvalidHandlerKey(String),
}
