//! Erkennung der Backlight-Steuerung
//!
//! Reihenfolge: Helligkeitsregler des Displays, dann benannte Pins.
//! Der erste Treffer gewinnt.

use crate::traits::{Display, PinRegistry};
use crate::types::{BACKLIGHT_PIN_NAMES, ControlMethod};

/// Bestimmt die Steuerungsmethode für das Backlight
///
/// Die Suche selbst schaltet keine Hardware. Erst der gewählte Pin wird
/// als Ausgang geöffnet. Kein Treffer ist kein Fehler, sondern `ControlMethod::None`.
pub fn probe<Dsp, R>(display: &mut Dsp, pins: &mut R) -> ControlMethod<Dsp::Brightness, R::Pin>
where
    Dsp: Display,
    R: PinRegistry,
{
    if let Some(brightness) = display.take_brightness() {
        return ControlMethod::Brightness(brightness);
    }

    let Some(name) = find_backlight_pin(pins) else {
        return ControlMethod::None;
    };

    match pins.open_output(name) {
        Some(pin) => ControlMethod::GpioPin(pin, name),
        None => ControlMethod::None,
    }
}

/// Erster vorhandener Kandidat aus `BACKLIGHT_PIN_NAMES`
pub fn find_backlight_pin<R: PinRegistry>(pins: &R) -> Option<&'static str> {
    BACKLIGHT_PIN_NAMES
        .iter()
        .copied()
        .find(|name| pins.contains(name))
}
