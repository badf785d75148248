//! Host event contract for the dispatcher, plus an owned key event
//!
//! Any host (DOM, winit, tests) hands key-down events to the registry through
//! [`ShortcutEvent`]. [`KeyPress`] is the in-memory implementation used by
//! native hosts and the test suite.

use std::borrow::Cow;
use std::cell::Cell;

use serde::Deserialize;

use super::types::Modifiers;

/// Element names that accept text input; shortcuts never fire inside them
const INPUT_ELEMENTS: [&str; 3] = ["input", "textarea", "select"];

/// What the dispatcher needs to know about the element an event targets
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TargetElement {
    /// Lowercase tag name (`input`, `body`, `div`, ...)
    pub local_name: String,
    /// Whether the element is content-editable
    #[serde(default)]
    pub content_editable: bool,
}

impl TargetElement {
    pub fn new(local_name: impl Into<String>) -> Self {
        Self {
            local_name: local_name.into(),
            content_editable: false,
        }
    }

    /// The document body, the usual target when nothing is focused
    pub fn body() -> Self {
        Self::new("body")
    }

    /// Mark this element content-editable (builder pattern)
    pub fn editable(mut self) -> Self {
        self.content_editable = true;
        self
    }

    /// Whether typing into this element should take priority over shortcuts
    pub fn is_input_capable(&self) -> bool {
        self.content_editable || INPUT_ELEMENTS.contains(&self.local_name.as_str())
    }
}

/// A key-down event as delivered by the host runtime
pub trait ShortcutEvent {
    /// Physical key code in W3C `code` form (`KeyA`, `Digit1`, `ShiftLeft`)
    fn code(&self) -> Cow<'_, str>;

    /// Modifier flags held during the event
    fn modifiers(&self) -> Modifiers;

    /// Element the event is aimed at, if the host knows one
    fn target(&self) -> Option<TargetElement>;

    fn stop_propagation(&self);

    fn prevent_default(&self);

    /// Whether the event targets an element that accepts text input
    fn targets_input(&self) -> bool {
        self.target().is_some_and(|t| t.is_input_capable())
    }
}

/// An owned key-down event
///
/// Deserializes from the JSON shape used by the replay tool:
/// `{"code": "KeyA", "ctrl": true, "target": {"local_name": "input"}}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeyPress {
    pub code: String,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub meta: bool,
    #[serde(default)]
    pub target: Option<TargetElement>,
    #[serde(skip)]
    propagation_stopped: Cell<bool>,
    #[serde(skip)]
    default_prevented: Cell<bool>,
}

impl KeyPress {
    /// Create a key press with no modifiers aimed at the document body
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            target: Some(TargetElement::body()),
            ..Self::default()
        }
    }

    /// Set the held modifiers (builder pattern)
    pub fn with_mods(mut self, mods: Modifiers) -> Self {
        self.ctrl = mods.ctrl();
        self.shift = mods.shift();
        self.alt = mods.alt();
        self.meta = mods.meta();
        self
    }

    /// Aim the event at a different element (builder pattern)
    pub fn on(mut self, target: TargetElement) -> Self {
        self.target = Some(target);
        self
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

impl ShortcutEvent for KeyPress {
    fn code(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.code)
    }

    fn modifiers(&self) -> Modifiers {
        Modifiers::new(self.ctrl, self.shift, self.alt, self.meta)
    }

    fn target(&self) -> Option<TargetElement> {
        self.target.clone()
    }

    fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }
}
