//! Per-shortcut options and the listener target they name

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Event type every registration defaults to
pub const DEFAULT_EVENT_TYPE: &str = "keydown";

/// Where a shortcut listener is attached
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListenerTarget {
    /// The whole document
    #[default]
    Document,
    /// The browser window
    Window,
    /// A single element, by id
    Element(String),
}

/// Options a registration is stored with, after merging caller overrides
/// onto the defaults
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortcutOptions {
    /// Event type the shortcut was registered for
    #[serde(rename = "type")]
    pub event_type: String,
    /// Let the event continue to propagate and run its default action
    /// after the callback fires
    pub propagate: bool,
    pub target: ListenerTarget,
    /// Arbitrary caller-supplied keys, passed through to the callback
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ShortcutOptions {
    /// Defaults for a registry whose listener sits on `target`
    pub fn defaults(target: ListenerTarget) -> Self {
        Self {
            event_type: DEFAULT_EVENT_TYPE.to_string(),
            propagate: false,
            target,
            extra: Map::new(),
        }
    }

    /// Spread `overrides` on top of these options; supplied fields win
    pub fn merged(mut self, overrides: AddOptions) -> Self {
        if let Some(event_type) = overrides.event_type {
            self.event_type = event_type;
        }
        if let Some(propagate) = overrides.propagate {
            self.propagate = propagate;
        }
        if let Some(target) = overrides.target {
            self.target = target;
        }
        self.extra.extend(overrides.extra);
        self
    }

    /// Look up a caller-supplied extra option
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// Caller-supplied option overrides for `ShortcutRegistry::add`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AddOptions {
    #[serde(default, rename = "type")]
    pub event_type: Option<String>,
    #[serde(default)]
    pub propagate: Option<bool>,
    #[serde(default)]
    pub target: Option<ListenerTarget>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AddOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    pub fn propagate(mut self, propagate: bool) -> Self {
        self.propagate = Some(propagate);
        self
    }

    pub fn target(mut self, target: ListenerTarget) -> Self {
        self.target = Some(target);
        self
    }

    /// Attach an arbitrary extra option
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ShortcutOptions::defaults(ListenerTarget::Document);
        assert_eq!(opts.event_type, "keydown");
        assert!(!opts.propagate);
        assert_eq!(opts.target, ListenerTarget::Document);
        assert!(opts.extra.is_empty());
    }

    #[test]
    fn test_merge_caller_wins() {
        let opts = ShortcutOptions::defaults(ListenerTarget::Document).merged(
            AddOptions::new()
                .propagate(true)
                .target(ListenerTarget::Element("editor".into()))
                .with("label", "Save"),
        );

        assert_eq!(opts.event_type, "keydown");
        assert!(opts.propagate);
        assert_eq!(opts.target, ListenerTarget::Element("editor".into()));
        assert_eq!(opts.get("label"), Some(&Value::from("Save")));
    }

    #[test]
    fn test_merge_empty_keeps_defaults() {
        let defaults = ShortcutOptions::defaults(ListenerTarget::Window);
        let opts = defaults.clone().merged(AddOptions::default());
        assert_eq!(opts, defaults);
    }

    #[test]
    fn test_add_options_from_yaml() {
        let yaml = "type: keyup\npropagate: true\ntarget:\n  element: sidebar\nlabel: Toggle\n";
        let opts: AddOptions = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(opts.event_type.as_deref(), Some("keyup"));
        assert_eq!(opts.propagate, Some(true));
        assert_eq!(opts.target, Some(ListenerTarget::Element("sidebar".into())));
        assert_eq!(opts.extra.get("label"), Some(&Value::from("Toggle")));
    }

    #[test]
    fn test_options_serialize_flat() {
        let opts = ShortcutOptions::defaults(ListenerTarget::Document)
            .merged(AddOptions::new().with("id", 7));
        let json = serde_json::to_value(&opts).unwrap();

        assert_eq!(json["type"], "keydown");
        assert_eq!(json["propagate"], false);
        assert_eq!(json["target"], "document");
        assert_eq!(json["id"], 7);
    }
}
