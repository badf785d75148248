//! Browser host for the shortcut registry
//!
//! Attaches exactly one `keydown` listener to an event target (the document
//! by default) and feeds every event through a [`ShortcutRegistry`]. The
//! listener is detached when the [`WebShortcuts`] value is dropped.

use std::borrow::Cow;
use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, EventTarget, HtmlElement, KeyboardEvent};

use crate::shortcut::{
    AddOptions, ListenerTarget, Modifiers, ShortcutEvent, ShortcutOptions, ShortcutRegistry,
    TargetElement,
};

const KEYDOWN: &str = "keydown";

/// Errors raised while wiring the registry into the page
#[derive(Debug, Error)]
pub enum WebError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("failed to attach keydown listener: {0}")]
    Listener(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        WebError::Listener(format!("{:?}", value))
    }
}

impl ShortcutEvent for KeyboardEvent {
    fn code(&self) -> Cow<'_, str> {
        Cow::Owned(KeyboardEvent::code(self))
    }

    fn modifiers(&self) -> Modifiers {
        Modifiers::new(
            self.ctrl_key(),
            self.shift_key(),
            self.alt_key(),
            self.meta_key(),
        )
    }

    fn target(&self) -> Option<TargetElement> {
        let element = Event::target(self)?.dyn_into::<Element>().ok()?;
        let content_editable = element
            .dyn_ref::<HtmlElement>()
            .is_some_and(|html| html.is_content_editable());

        Some(TargetElement {
            local_name: element.local_name(),
            content_editable,
        })
    }

    fn stop_propagation(&self) {
        Event::stop_propagation(self);
    }

    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}

/// Shared handle on a page's shortcut registry
pub type SharedRegistry = Rc<RefCell<ShortcutRegistry<KeyboardEvent>>>;

/// A shortcut registry with its keydown listener installed
pub struct WebShortcuts {
    registry: SharedRegistry,
    target: EventTarget,
    listener: Closure<dyn FnMut(KeyboardEvent)>,
}

impl WebShortcuts {
    /// Install on the page's document
    pub fn install() -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;
        Self::install_on(document.into(), ListenerTarget::Document)
    }

    /// Install on an arbitrary event target
    ///
    /// `listener_target` is what registrations report as their default
    /// `target` option.
    pub fn install_on(
        target: EventTarget,
        listener_target: ListenerTarget,
    ) -> Result<Self, WebError> {
        let registry: SharedRegistry =
            Rc::new(RefCell::new(ShortcutRegistry::new(listener_target)));

        let handle = Rc::clone(&registry);
        let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            // Release the borrow before user code runs so callbacks may
            // add or remove shortcuts
            let dispatch = handle.borrow().match_event(&event);
            if let Some(dispatch) = dispatch {
                dispatch.fire(&event);
            }
        });

        target.add_event_listener_with_callback(
            KEYDOWN,
            listener.as_ref().unchecked_ref::<js_sys::Function>(),
        )?;
        tracing::debug!("Installed keydown listener");

        Ok(Self {
            registry,
            target,
            listener,
        })
    }

    pub fn add(
        &self,
        shortcut: &str,
        callback: impl Fn(&KeyboardEvent, &ShortcutOptions) + 'static,
    ) {
        self.registry.borrow_mut().add(shortcut, callback);
    }

    pub fn add_with_options(
        &self,
        shortcut: &str,
        callback: impl Fn(&KeyboardEvent, &ShortcutOptions) + 'static,
        options: AddOptions,
    ) {
        self.registry
            .borrow_mut()
            .add_with_options(shortcut, callback, options);
    }

    pub fn remove(&self, shortcut: &str) {
        self.registry.borrow_mut().remove(shortcut);
    }

    /// Shared handle on the registry, for callbacks that manage shortcuts
    pub fn registry(&self) -> SharedRegistry {
        Rc::clone(&self.registry)
    }

    /// Detach the listener
    pub fn uninstall(self) {
        drop(self);
    }
}

impl Drop for WebShortcuts {
    fn drop(&mut self) {
        let result = self.target.remove_event_listener_with_callback(
            KEYDOWN,
            self.listener.as_ref().unchecked_ref::<js_sys::Function>(),
        );
        match result {
            Ok(()) => tracing::debug!("Removed keydown listener"),
            Err(e) => tracing::warn!("Failed to remove keydown listener: {:?}", e),
        }
    }
}
