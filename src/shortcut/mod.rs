//! Keyboard shortcut dispatching
//!
//! This module provides a small, host-agnostic shortcut registry that:
//! - Maps shortcut strings like `"ctrl+shift+a"` to callbacks
//! - Normalizes each key-down event into a canonical combination string
//! - Stands aside while the user is typing into an input element
//! - Suppresses the event's default action once a shortcut fires
//!
//! # Architecture
//!
//! ```text
//! host key event → ShortcutEvent → pressed_combination() → ShortcutRegistry::match_event() → Dispatch::fire()
//! ```
//!
//! Matching is plain string equality after uppercasing, so shortcuts must
//! list their modifiers in canonical order: CTRL, SHIFT, ALT, META, key.
//!
//! # Usage
//!
//! ```ignore
//! let mut registry = ShortcutRegistry::default();
//! registry.add("ctrl+shift+a", |event, options| {
//!     tracing::info!("Ctrl+Shift+A pressed: {:?} {:?}", event, options);
//! });
//!
//! // Or load bindings from a YAML file
//! let registry = load_shortcut_file(path)?.into_registry(&actions)?;
//! ```

mod config;
mod event;
mod options;
mod registry;
mod types;
mod winit_adapter;

pub use config::{
    load_shortcut_file, parse_shortcut_yaml, Actions, ShortcutEntry, ShortcutFile,
    ShortcutFileError,
};
pub use event::{KeyPress, ShortcutEvent, TargetElement};
pub use options::{AddOptions, ListenerTarget, ShortcutOptions, DEFAULT_EVENT_TYPE};
pub use registry::{Callback, Dispatch, Registration, ShortcutRegistry};
pub use types::{
    key_alias, normalize_shortcut, pressed_combination, primary_key_name, Modifiers, KEY_ALIASES,
};
pub use winit_adapter::{code_name, key_press_from_winit};
