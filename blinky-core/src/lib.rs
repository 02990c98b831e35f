//! Blinky Core - Platform-agnostic Backlight Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie erkennt die Backlight-Steuerung eines Displays (Helligkeitsregler
//! oder Backlight-Pin), schaltet sie einheitlich und blinkt sie.

#![no_std]

pub mod blink;
pub mod controller;
pub mod device;
pub mod probe;
pub mod pwm;
#[cfg(test)]
mod testing;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use blink::{delay_for, run_blink};
pub use controller::BacklightController;
pub use device::BacklightDevice;
pub use probe::{find_backlight_pin, probe};
pub use pwm::{PwmBrightness, duty_for_level};
pub use traits::{BacklightError, BrightnessControl, Display, NoBrightness, PinRegistry};
pub use types::{
    BACKLIGHT_PIN_NAMES, BacklightConfig, BacklightState, BlinkSpec, ControlMethod,
    ControlMethodKind, OnLevel, OriginalState,
};
