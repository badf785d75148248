//! YAML shortcut files
//!
//! A shortcut file binds shortcut strings to action names. The host supplies
//! the callbacks for those names through [`Actions`]:
//!
//! ```yaml
//! target: document
//! shortcuts:
//!   - keys: ctrl+s
//!     action: save
//!   - keys: ctrl+shift+p
//!     action: palette
//!     options:
//!       propagate: true
//!       label: Command palette
//! ```

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::Deserialize;
use thiserror::Error;

use super::options::{AddOptions, ListenerTarget, ShortcutOptions};
use super::registry::{Callback, ShortcutRegistry};

/// Errors that can occur when loading shortcut files
#[derive(Debug, Error)]
pub enum ShortcutFileError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse shortcut file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("unknown action `{action}` bound to `{keys}`")]
    UnknownAction { keys: String, action: String },
    #[error("shortcut for action `{0}` has no keys")]
    EmptyShortcut(String),
}

/// Root structure of a shortcut YAML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShortcutFile {
    /// Default listener target for every entry
    #[serde(default)]
    pub target: ListenerTarget,
    #[serde(default)]
    pub shortcuts: Vec<ShortcutEntry>,
}

/// A single shortcut entry from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ShortcutEntry {
    pub keys: String,
    pub action: String,
    #[serde(default)]
    pub options: AddOptions,
}

/// Named callbacks a shortcut file can refer to
pub struct Actions<E> {
    table: HashMap<String, Callback<E>>,
}

impl<E> Actions<E> {
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Register the callback for an action name (builder pattern)
    pub fn on(
        mut self,
        action: impl Into<String>,
        callback: impl Fn(&E, &ShortcutOptions) + 'static,
    ) -> Self {
        self.table.insert(action.into(), Rc::new(callback));
        self
    }

    pub fn get(&self, action: &str) -> Option<&Callback<E>> {
        self.table.get(action)
    }

    pub fn contains(&self, action: &str) -> bool {
        self.table.contains_key(action)
    }
}

impl<E> Default for Actions<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Actions<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.table.keys()).finish()
    }
}

impl ShortcutFile {
    /// Check every entry against the action table without registering anything
    pub fn validate<E>(&self, actions: &Actions<E>) -> Result<(), ShortcutFileError> {
        for entry in &self.shortcuts {
            if entry.keys.trim().is_empty() {
                return Err(ShortcutFileError::EmptyShortcut(entry.action.clone()));
            }
            if !actions.contains(&entry.action) {
                return Err(ShortcutFileError::UnknownAction {
                    keys: entry.keys.clone(),
                    action: entry.action.clone(),
                });
            }
        }
        Ok(())
    }

    /// Register every entry on `registry`
    ///
    /// The whole file is validated first; on error nothing is registered.
    pub fn apply<E: 'static>(
        &self,
        registry: &mut ShortcutRegistry<E>,
        actions: &Actions<E>,
    ) -> Result<(), ShortcutFileError> {
        self.validate(actions)?;

        for entry in &self.shortcuts {
            let Some(callback) = actions.get(&entry.action) else {
                continue;
            };
            let callback = Rc::clone(callback);
            registry.add_with_options(
                &entry.keys,
                move |event: &E, options: &ShortcutOptions| callback(event, options),
                entry.options.clone(),
            );
        }

        tracing::info!("Applied {} shortcuts", self.shortcuts.len());
        Ok(())
    }

    /// Build a fresh registry targeting this file's default target
    pub fn into_registry<E: 'static>(
        self,
        actions: &Actions<E>,
    ) -> Result<ShortcutRegistry<E>, ShortcutFileError> {
        let mut registry = ShortcutRegistry::new(self.target.clone());
        self.apply(&mut registry, actions)?;
        Ok(registry)
    }
}

/// Parse a shortcut file from a YAML string
pub fn parse_shortcut_yaml(yaml: &str) -> Result<ShortcutFile, ShortcutFileError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Load a shortcut file from disk
pub fn load_shortcut_file(path: &Path) -> Result<ShortcutFile, ShortcutFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| ShortcutFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file = parse_shortcut_yaml(&content)?;
    tracing::debug!(
        "Loaded {} shortcuts from {}",
        file.shortcuts.len(),
        path.display()
    );
    Ok(file)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::shortcut::event::KeyPress;
    use crate::shortcut::types::Modifiers;

    const SAMPLE: &str = r#"
target: window
shortcuts:
  - keys: ctrl+s
    action: save
  - keys: ctrl+shift+p
    action: palette
    options:
      propagate: true
      label: Command palette
"#;

    #[test]
    fn test_parse_sample() {
        let file = parse_shortcut_yaml(SAMPLE).unwrap();
        assert_eq!(file.target, ListenerTarget::Window);
        assert_eq!(file.shortcuts.len(), 2);
        assert_eq!(file.shortcuts[0].keys, "ctrl+s");
        assert_eq!(file.shortcuts[0].options, AddOptions::default());
        assert_eq!(file.shortcuts[1].options.propagate, Some(true));
        assert!(file.shortcuts[1].options.extra.contains_key("label"));
    }

    #[test]
    fn test_target_defaults_to_document() {
        let file = parse_shortcut_yaml("shortcuts: []").unwrap();
        assert_eq!(file.target, ListenerTarget::Document);
        assert!(file.shortcuts.is_empty());
    }

    #[test]
    fn test_parse_error() {
        let err = parse_shortcut_yaml("shortcuts: [keys").unwrap_err();
        assert!(matches!(err, ShortcutFileError::Parse(_)));
    }

    #[test]
    fn test_into_registry_dispatches_actions() {
        let saved = Rc::new(Cell::new(0));
        let hits = Rc::clone(&saved);
        let actions = Actions::new()
            .on("save", move |_: &KeyPress, _: &ShortcutOptions| {
                hits.set(hits.get() + 1)
            })
            .on("palette", |_: &KeyPress, options: &ShortcutOptions| {
                assert!(options.propagate);
            });

        let registry = parse_shortcut_yaml(SAMPLE)
            .unwrap()
            .into_registry(&actions)
            .unwrap();

        assert_eq!(registry.default_target(), &ListenerTarget::Window);
        assert!(registry.handle_key_press(&KeyPress::new("KeyS").with_mods(Modifiers::CTRL)));
        assert_eq!(saved.get(), 1);

        let palette = KeyPress::new("KeyP").with_mods(Modifiers::CTRL | Modifiers::SHIFT);
        assert!(registry.handle_key_press(&palette));
        assert!(!palette.default_prevented());
    }

    #[test]
    fn test_unknown_action_registers_nothing() {
        let actions = Actions::new().on("save", |_: &KeyPress, _: &ShortcutOptions| {});
        let file = parse_shortcut_yaml(SAMPLE).unwrap();
        let mut registry: ShortcutRegistry = ShortcutRegistry::default();

        let err = file.apply(&mut registry, &actions).unwrap_err();
        assert!(matches!(
            err,
            ShortcutFileError::UnknownAction { ref action, .. } if action == "palette"
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_empty_keys_rejected() {
        let actions = Actions::new().on("save", |_: &KeyPress, _: &ShortcutOptions| {});
        let file = parse_shortcut_yaml("shortcuts:\n  - keys: ''\n    action: save\n").unwrap();

        let err = file.validate(&actions).unwrap_err();
        assert!(matches!(err, ShortcutFileError::EmptyShortcut(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_shortcut_file(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ShortcutFileError::Io { .. }));
        assert!(err.to_string().contains("here.yaml"));
    }
}
