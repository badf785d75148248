//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use shortcut_dispatch::{KeyPress, Modifiers, ShortcutOptions, ShortcutRegistry, TargetElement};

/// Register `shortcut` with a callback that counts its invocations
pub fn counting(registry: &mut ShortcutRegistry, shortcut: &str) -> Rc<Cell<u32>> {
    let count = Rc::new(Cell::new(0));
    let hits = Rc::clone(&count);
    registry.add(shortcut, move |_: &KeyPress, _: &ShortcutOptions| {
        hits.set(hits.get() + 1)
    });
    count
}

/// Register `shortcut` with a callback that records the options it received
pub fn recording(
    registry: &mut ShortcutRegistry,
    shortcut: &str,
) -> Rc<RefCell<Vec<ShortcutOptions>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    registry.add(shortcut, move |_: &KeyPress, options: &ShortcutOptions| {
        log.borrow_mut().push(options.clone())
    });
    seen
}

/// Key press for a letter key (`'a'` -> `KeyA`) on the document body
pub fn letter(c: char, mods: Modifiers) -> KeyPress {
    KeyPress::new(format!("Key{}", c.to_ascii_uppercase())).with_mods(mods)
}

/// Same as `letter`, aimed at an element
pub fn letter_on(c: char, mods: Modifiers, target: TargetElement) -> KeyPress {
    letter(c, mods).on(target)
}
