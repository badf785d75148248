//! Adapter to convert winit key input to our KeyPress type

use winit::keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey};

use super::event::{KeyPress, TargetElement};
use super::types::Modifiers;

/// W3C `code` name for a winit physical key
///
/// winit names its variants after the UI Events `code` values, except for
/// the logo keys, which it calls Super.
pub fn code_name(code: WinitKeyCode) -> String {
    match code {
        WinitKeyCode::SuperLeft => "MetaLeft".to_string(),
        WinitKeyCode::SuperRight => "MetaRight".to_string(),
        other => format!("{:?}", other),
    }
}

/// Convert winit keyboard input to a KeyPress
///
/// `target` describes whatever has focus in the host UI; pass an input-capable
/// element while a text field is being edited so shortcuts stand aside.
/// Returns None for keys winit could not identify.
pub fn key_press_from_winit(
    physical_key: PhysicalKey,
    modifiers: ModifiersState,
    target: Option<TargetElement>,
) -> Option<KeyPress> {
    let PhysicalKey::Code(code) = physical_key else {
        return None;
    };

    let mods = Modifiers::new(
        modifiers.control_key(),
        modifiers.shift_key(),
        modifiers.alt_key(),
        modifiers.super_key(), // super = meta = cmd on macOS
    );

    let mut press = KeyPress::new(code_name(code)).with_mods(mods);
    press.target = target;
    Some(press)
}
