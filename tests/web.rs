//! Browser host tests
//!
//! Run with: wasm-pack test --headless --firefox

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use shortcut_dispatch::web::WebShortcuts;
use shortcut_dispatch::ShortcutOptions;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, EventTarget, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn key_down(code: &str, ctrl: bool, shift: bool) -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_code(code);
    init.set_ctrl_key(ctrl);
    init.set_shift_key(shift);
    init.set_bubbles(true);
    init.set_cancelable(true);
    KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap()
}

fn element(tag: &str) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let el = document.create_element(tag).unwrap();
    document.body().unwrap().append_child(&el).unwrap();
    el
}

fn counter() -> (Rc<Cell<u32>>, impl Fn(&KeyboardEvent, &ShortcutOptions) + 'static) {
    let count = Rc::new(Cell::new(0));
    let hits = Rc::clone(&count);
    (count, move |_: &KeyboardEvent, _: &ShortcutOptions| {
        hits.set(hits.get() + 1)
    })
}

#[wasm_bindgen_test]
fn fires_on_body_and_prevents_default() {
    let shortcuts = WebShortcuts::install().unwrap();
    let (count, cb) = counter();
    shortcuts.add("ctrl+shift+a", cb);

    let event = key_down("KeyA", true, true);
    let target: EventTarget = element("div").unchecked_into();
    target.dispatch_event(&event).unwrap();

    assert_eq!(count.get(), 1);
    assert!(event.default_prevented());
}

#[wasm_bindgen_test]
fn ignores_input_elements() {
    let shortcuts = WebShortcuts::install().unwrap();
    let (count, cb) = counter();
    shortcuts.add("ctrl+shift+a", cb);

    let event = key_down("KeyA", true, true);
    element("input").dispatch_event(&event).unwrap();

    assert_eq!(count.get(), 0);
    assert!(!event.default_prevented());
}

#[wasm_bindgen_test]
fn removed_shortcut_does_not_fire() {
    let shortcuts = WebShortcuts::install().unwrap();
    let (count, cb) = counter();
    shortcuts.add("ctrl+shift+a", cb);
    shortcuts.remove("ctrl+shift+a");

    element("div")
        .dispatch_event(&key_down("KeyA", true, true))
        .unwrap();

    assert_eq!(count.get(), 0);
}

#[wasm_bindgen_test]
fn uninstall_detaches_listener() {
    let shortcuts = WebShortcuts::install().unwrap();
    let (count, cb) = counter();
    shortcuts.add("ctrl+shift+a", cb);
    shortcuts.uninstall();

    element("div")
        .dispatch_event(&key_down("KeyA", true, true))
        .unwrap();

    assert_eq!(count.get(), 0);
}
