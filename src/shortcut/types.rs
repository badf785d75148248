//! Core types for the shortcut system: Modifiers, the modifier alias table,
//! and the canonical pressed-combination string

use std::fmt;

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    pub const META: Modifiers = Modifiers(0b1000); // Cmd on macOS, Win on Windows

    /// Create modifiers from individual event flags
    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= 0b0001;
        }
        if shift {
            bits |= 0b0010;
        }
        if alt {
            bits |= 0b0100;
        }
        if meta {
            bits |= 0b1000;
        }
        Modifiers(bits)
    }

    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b0001 != 0
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b0010 != 0
    }

    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b0100 != 0
    }

    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & 0b1000 != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Canonical names of the held modifiers, in dispatch order
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        [
            (self.ctrl(), CTRL),
            (self.shift(), SHIFT),
            (self.alt(), ALT),
            (self.meta(), META),
        ]
        .into_iter()
        .filter_map(|(held, name)| held.then_some(name))
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().collect::<Vec<_>>().join("+"))
    }
}

pub const CTRL: &str = "CTRL";
pub const SHIFT: &str = "SHIFT";
pub const ALT: &str = "ALT";
pub const META: &str = "META";

/// Physical key codes of modifier keys, left and right variants, mapped to
/// their canonical modifier name
pub const KEY_ALIASES: [(&str, &str); 8] = [
    ("ControlLeft", CTRL),
    ("ControlRight", CTRL),
    ("ShiftLeft", SHIFT),
    ("ShiftRight", SHIFT),
    ("AltLeft", ALT),
    ("AltRight", ALT),
    ("MetaLeft", META),
    ("MetaRight", META),
];

/// Look up a physical key code in the modifier alias table
pub fn key_alias(code: &str) -> Option<&'static str> {
    KEY_ALIASES
        .iter()
        .find(|(physical, _)| *physical == code)
        .map(|(_, name)| *name)
}

/// Name of the primary key for a physical code
///
/// Modifier codes resolve through the alias table; everything else is the
/// code itself with a leading `Key` stripped (`KeyA` -> `A`, `Digit1` stays).
pub fn primary_key_name(code: &str) -> &str {
    match key_alias(code) {
        Some(name) => name,
        None => code.strip_prefix("Key").unwrap_or(code),
    }
}

/// Build the pressed-combination string for a key event
///
/// Held modifiers come first in fixed order (CTRL, SHIFT, ALT, META), then
/// the primary key, joined with `+`. The primary key keeps the case of the
/// code; callers uppercase the result before matching.
pub fn pressed_combination(mods: Modifiers, code: &str) -> String {
    let mut parts: Vec<&str> = mods.names().collect();
    parts.push(primary_key_name(code));
    parts.join("+")
}

/// Normalize a shortcut string for active-set membership
pub fn normalize_shortcut(shortcut: &str) -> String {
    shortcut.to_uppercase()
}
