//! Keyboard shortcut dispatcher
//!
//! Register symbolic key combinations like `"ctrl+shift+a"` with callbacks,
//! then feed key-down events from the host (browser DOM, winit, or tests)
//! through the registry.

pub mod config_paths;
pub mod shortcut;
pub mod tracing;
#[cfg(target_arch = "wasm32")]
pub mod web;

// Re-export commonly used types
pub use shortcut::{
    AddOptions, KeyPress, ListenerTarget, Modifiers, ShortcutEvent, ShortcutOptions,
    ShortcutRegistry, TargetElement,
};
