//! ShortcutRegistry: stores registrations and dispatches key events to them

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::event::{KeyPress, ShortcutEvent};
use super::options::{AddOptions, ListenerTarget, ShortcutOptions};
use super::types::{normalize_shortcut, pressed_combination};

/// Callback invoked when a shortcut fires
pub type Callback<E> = Rc<dyn Fn(&E, &ShortcutOptions)>;

/// A registered shortcut: its callback and merged options
pub struct Registration<E> {
    pub callback: Callback<E>,
    pub options: ShortcutOptions,
}

impl<E> Clone for Registration<E> {
    fn clone(&self) -> Self {
        Self {
            callback: Rc::clone(&self.callback),
            options: self.options.clone(),
        }
    }
}

impl<E> fmt::Debug for Registration<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// A matched shortcut, ready to run
///
/// Holds its own handle on the callback so the registry can be released
/// (e.g. a `RefCell` borrow dropped) before user code runs.
pub struct Dispatch<E> {
    /// The shortcut string as it was registered
    pub shortcut: String,
    registration: Registration<E>,
}

impl<E: ShortcutEvent> Dispatch<E> {
    pub fn options(&self) -> &ShortcutOptions {
        &self.registration.options
    }

    /// Run the callback, then stop propagation and prevent the default
    /// action unless the registration asked to propagate
    pub fn fire(self, event: &E) {
        let Registration { callback, options } = self.registration;
        callback(event, &options);

        if !options.propagate {
            event.stop_propagation();
            event.prevent_default();
        }
    }
}

impl<E> fmt::Debug for Dispatch<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatch")
            .field("shortcut", &self.shortcut)
            .field("registration", &self.registration)
            .finish()
    }
}

/// Registry of keyboard shortcuts for one listener target
///
/// Registrations are keyed by the shortcut string exactly as supplied.
/// The active set holds the uppercased form of every added shortcut and
/// points at the literal key it resolves to; only active shortcuts match.
pub struct ShortcutRegistry<E = KeyPress> {
    registrations: HashMap<String, Registration<E>>,
    active: HashMap<String, String>,
    default_target: ListenerTarget,
}

impl<E> ShortcutRegistry<E> {
    /// Create an empty registry whose shortcuts default to `default_target`
    pub fn new(default_target: ListenerTarget) -> Self {
        Self {
            registrations: HashMap::new(),
            active: HashMap::new(),
            default_target,
        }
    }

    pub fn default_target(&self) -> &ListenerTarget {
        &self.default_target
    }

    /// Register `shortcut` with default options
    pub fn add(&mut self, shortcut: &str, callback: impl Fn(&E, &ShortcutOptions) + 'static) {
        self.add_with_options(shortcut, callback, AddOptions::default());
    }

    /// Register `shortcut`, spreading `options` over the defaults
    ///
    /// Re-adding an identical string replaces the earlier callback and
    /// options. The string is not validated; one that does not follow the
    /// canonical `CTRL+SHIFT+ALT+META+key` order simply never matches.
    pub fn add_with_options(
        &mut self,
        shortcut: &str,
        callback: impl Fn(&E, &ShortcutOptions) + 'static,
        options: AddOptions,
    ) {
        let options = ShortcutOptions::defaults(self.default_target.clone()).merged(options);
        tracing::debug!(shortcut, ?options, "Adding shortcut");

        self.active
            .insert(normalize_shortcut(shortcut), shortcut.to_string());
        self.registrations.insert(
            shortcut.to_string(),
            Registration {
                callback: Rc::new(callback),
                options,
            },
        );
    }

    /// Deactivate `shortcut`
    ///
    /// Only the active-set entry is dropped; the registration stays and is
    /// reachable again once the shortcut is re-added.
    pub fn remove(&mut self, shortcut: &str) {
        if self.active.remove(&normalize_shortcut(shortcut)).is_some() {
            tracing::debug!(shortcut, "Removed shortcut");
        }
    }

    /// Drop every registration and active shortcut
    pub fn clear(&mut self) {
        self.registrations.clear();
        self.active.clear();
    }

    /// Whether a key event normalizing to `shortcut` would match
    pub fn is_active(&self, shortcut: &str) -> bool {
        self.active.contains_key(&normalize_shortcut(shortcut))
    }

    /// Whether a registration is stored under this exact string
    pub fn is_registered(&self, shortcut: &str) -> bool {
        self.registrations.contains_key(shortcut)
    }

    /// Options of the registration stored under this exact string
    pub fn options(&self, shortcut: &str) -> Option<&ShortcutOptions> {
        self.registrations.get(shortcut).map(|r| &r.options)
    }

    /// Active shortcuts, as registered, in no particular order
    pub fn active_shortcuts(&self) -> impl Iterator<Item = &str> {
        self.active.values().map(String::as_str)
    }

    /// Number of active shortcuts
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl<E: ShortcutEvent> ShortcutRegistry<E> {
    /// Find the registration a key-down event should dispatch to
    ///
    /// Returns `None` when no active shortcut matches or when the event
    /// targets an element that accepts text input.
    pub fn match_event(&self, event: &E) -> Option<Dispatch<E>> {
        let pressed = pressed_combination(event.modifiers(), &event.code());
        tracing::debug!(pressed_shortcut = %pressed);

        let literal = self.active.get(&normalize_shortcut(&pressed))?;
        if event.targets_input() {
            tracing::trace!(shortcut = %literal, "Ignoring shortcut in input element");
            return None;
        }

        let registration = self.registrations.get(literal)?;
        Some(Dispatch {
            shortcut: literal.clone(),
            registration: registration.clone(),
        })
    }

    /// Handle a key-down event, returning whether a callback fired
    pub fn handle_key_press(&self, event: &E) -> bool {
        match self.match_event(event) {
            Some(dispatch) => {
                dispatch.fire(event);
                true
            }
            None => false,
        }
    }
}

impl<E> Default for ShortcutRegistry<E> {
    fn default() -> Self {
        Self::new(ListenerTarget::Document)
    }
}

impl<E> fmt::Debug for ShortcutRegistry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutRegistry")
            .field("registrations", &self.registrations)
            .field("active", &self.active)
            .field("default_target", &self.default_target)
            .finish()
    }
}
