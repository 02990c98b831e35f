// Board-Anbindung: Display-Handle und Pin-Registry für den Core
//
// Verbindet esp-hal Peripherals mit den Traits aus blinky-core.

use blinky_core::{BrightnessControl, Display, PinRegistry};
use esp_hal::gpio::{AnyPin, Level, Output, OutputConfig};

// ============================================================================
// Display
// ============================================================================

/// Display des Boards
///
/// Hält optional den Helligkeitsregler (z.B. `PwmBrightness` über LEDC).
/// Boards ohne PWM-Backlight nutzen stattdessen `blinky_core::NoBrightness`.
pub struct BoardDisplay<B> {
    brightness: Option<B>,
}

impl<B: BrightnessControl> BoardDisplay<B> {
    pub fn with_brightness(brightness: B) -> Self {
        Self {
            brightness: Some(brightness),
        }
    }
}

impl<B: BrightnessControl> Display for BoardDisplay<B> {
    type Brightness = B;

    fn take_brightness(&mut self) -> Option<B> {
        self.brightness.take()
    }
}

// ============================================================================
// Pin-Registry
// ============================================================================

/// Benannte GPIOs des Boards
///
/// Ein Pin wird erst beim Öffnen in einen Output umgewandelt, vorher
/// bleibt die Hardware unberührt.
pub struct BoardPins<const N: usize> {
    pins: [(&'static str, Option<AnyPin<'static>>); N],
    initial_level: Level,
}

impl<const N: usize> BoardPins<N> {
    /// # Parameter
    /// - `pins`: Board-Name und Pin, z.B. `("TFT_BACKLIGHT", peripherals.GPIO22.into())`
    /// - `initial_high`: Pegel beim Öffnen als Ausgang
    pub fn new(pins: [(&'static str, AnyPin<'static>); N], initial_high: bool) -> Self {
        Self {
            pins: pins.map(|(name, pin)| (name, Some(pin))),
            initial_level: Level::from(initial_high),
        }
    }
}

impl<const N: usize> PinRegistry for BoardPins<N> {
    type Pin = Output<'static>;

    fn contains(&self, name: &str) -> bool {
        self.pins
            .iter()
            .any(|(pin_name, pin)| *pin_name == name && pin.is_some())
    }

    fn open_output(&mut self, name: &str) -> Option<Output<'static>> {
        let (_, slot) = self.pins.iter_mut().find(|(pin_name, _)| *pin_name == name)?;
        let pin = slot.take()?;
        Some(Output::new(pin, self.initial_level, OutputConfig::default()))
    }
}
