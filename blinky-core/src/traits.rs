//! Hardware Abstraction Traits
//!
//! Diese Traits beschreiben, was der Core vom Board braucht:
//! ein Display-Handle (optional mit Helligkeitsregler) und eine
//! Pin-Registry mit benannten GPIOs. Konkrete Implementierungen
//! liegen in der Firmware bzw. als Mocks in den Tests.

use embedded_hal::digital::StatefulOutputPin;

/// Fehler-Typ für Backlight-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BacklightError {
    /// Keine Steuerungsmethode gefunden (ControlMethod::None)
    Unavailable,
    /// Hardware-Schreibzugriff fehlgeschlagen
    WriteFailed,
    /// Ursprünglicher Zustand konnte nicht gelesen werden
    ReadFailed,
    /// Blink-Timing negativ oder nicht endlich
    InvalidTiming,
}

/// Analoger Helligkeitsregler (0.0 = aus, 1.0 = volle Helligkeit)
///
/// # Implementierungen
/// - **Production:** `PwmBrightness` über einen LEDC-Kanal
/// - **Testing:** `MockBrightness` (in-memory Mock)
pub trait BrightnessControl {
    /// Liest die aktuelle Helligkeit
    fn brightness(&mut self) -> Result<f32, BacklightError>;

    /// Schreibt eine neue Helligkeit
    ///
    /// # Fehlerbehandlung
    /// Gibt `BacklightError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn set_brightness(&mut self, level: f32) -> Result<(), BacklightError>;
}

/// Display-Handle des Boards
pub trait Display {
    type Brightness: BrightnessControl;

    /// Gibt den Helligkeitsregler heraus, falls das Display einen hat.
    ///
    /// Darf die Hardware nicht verändern.
    fn take_brightness(&mut self) -> Option<Self::Brightness>;
}

/// Registry der benannten Board-Pins
pub trait PinRegistry {
    type Pin: StatefulOutputPin;

    /// Prüft ob ein Pin mit diesem Namen existiert (ohne Seiteneffekte)
    fn contains(&self, name: &str) -> bool;

    /// Öffnet den Pin als digitalen Ausgang
    fn open_output(&mut self, name: &str) -> Option<Self::Pin>;
}

/// Board ohne Display-Helligkeitsregler
///
/// Für Boards, deren Backlight nur über einen GPIO erreichbar ist.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoBrightness;

impl BrightnessControl for NoBrightness {
    fn brightness(&mut self) -> Result<f32, BacklightError> {
        Err(BacklightError::Unavailable)
    }

    fn set_brightness(&mut self, _level: f32) -> Result<(), BacklightError> {
        Err(BacklightError::Unavailable)
    }
}

impl Display for NoBrightness {
    type Brightness = NoBrightness;

    fn take_brightness(&mut self) -> Option<Self::Brightness> {
        None
    }
}
