//! Core Types für die Backlight-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::time::Duration;

use crate::traits::BacklightError;

/// Kandidaten für den Backlight-Pin, in Prioritäts-Reihenfolge
pub const BACKLIGHT_PIN_NAMES: [&str; 3] = ["DISPLAY_BACKLIGHT", "TFT_BACKLIGHT", "BACKLIGHT"];

/// Aufgelöste Steuerungsmethode
///
/// Wird einmal beim Start bestimmt und danach nie mehr geändert.
pub enum ControlMethod<B, P> {
    /// Keine nutzbare Hardware gefunden
    None,
    /// Analoger Helligkeitsregler des Displays
    Brightness(B),
    /// Digitaler Backlight-Pin mit seinem Board-Namen
    GpioPin(P, &'static str),
}

impl<B, P> ControlMethod<B, P> {
    /// Identität der Methode ohne Hardware-Handle
    pub fn kind(&self) -> Option<ControlMethodKind> {
        match self {
            ControlMethod::None => None,
            ControlMethod::Brightness(_) => Some(ControlMethodKind::Brightness),
            ControlMethod::GpioPin(..) => Some(ControlMethodKind::Gpio),
        }
    }

    pub fn pin_name(&self) -> Option<&'static str> {
        match self {
            ControlMethod::GpioPin(_, name) => Some(*name),
            _ => None,
        }
    }
}

/// Art der Steuerung, z.B. für Status-Ausgaben
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ControlMethodKind {
    Brightness,
    Gpio,
}

impl ControlMethodKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ControlMethodKind::Brightness => "brightness",
            ControlMethodKind::Gpio => "gpio",
        }
    }
}

/// Beim Start gelesener Hardware-Zustand
///
/// Beim Helligkeitsregler bleibt der Bruchwert erhalten, beim Pin nur an/aus.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OriginalState {
    Level(f32),
    Pin(bool),
}

impl OriginalState {
    pub fn is_on(self) -> bool {
        match self {
            OriginalState::Level(level) => level > 0.0,
            OriginalState::Pin(on) => on,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BacklightState {
    pub current: bool,
    pub original: OriginalState,
}

/// Helligkeit, die beim Einschalten über den Helligkeitsregler geschrieben wird
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OnLevel {
    /// Immer 1.0
    #[default]
    Full,
    /// Die beim Start gelesene Helligkeit (1.0 falls diese 0.0 war)
    Original,
    /// Fester Wert, wird auf 0.0..=1.0 begrenzt (nicht endlich → 1.0)
    Fixed(f32),
}

impl OnLevel {
    pub fn resolve(self, original: f32) -> f32 {
        match self {
            OnLevel::Full => 1.0,
            OnLevel::Original if original > 0.0 => original,
            OnLevel::Original => 1.0,
            OnLevel::Fixed(level) if level.is_finite() => level.clamp(0.0, 1.0),
            OnLevel::Fixed(_) => 1.0,
        }
    }
}

/// Laufzeit-Konfiguration des Controllers
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BacklightConfig {
    pub on_level: OnLevel,
    /// Nach erfolgreichem Blinken den ursprünglichen Zustand wiederherstellen
    pub restore_after_blink: bool,
}

impl Default for BacklightConfig {
    fn default() -> Self {
        Self {
            on_level: OnLevel::Full,
            restore_after_blink: true,
        }
    }
}

/// Blink-Muster: `count` Zyklen aus an/aus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlinkSpec {
    pub count: u32,
    pub on_time: Duration,
    pub off_time: Duration,
}

impl BlinkSpec {
    pub const fn new(count: u32, on_time: Duration, off_time: Duration) -> Self {
        Self {
            count,
            on_time,
            off_time,
        }
    }

    /// Erstellt ein BlinkSpec aus Sekundenwerten
    ///
    /// # Fehlerbehandlung
    /// Negative oder nicht endliche Zeiten ergeben `BacklightError::InvalidTiming`.
    /// Zu große endliche Werte werden auf `Duration::MAX` begrenzt.
    ///
    /// ```
    /// # use blinky_core::{BacklightError, BlinkSpec};
    /// let spec = BlinkSpec::from_secs(3, 0.5, 0.25).unwrap();
    /// assert_eq!(spec.off_time.as_millis(), 250);
    /// assert_eq!(BlinkSpec::from_secs(3, -1.0, 0.5), Err(BacklightError::InvalidTiming));
    /// ```
    pub fn from_secs(count: u32, on_secs: f32, off_secs: f32) -> Result<Self, BacklightError> {
        Ok(Self {
            count,
            on_time: secs_to_duration(on_secs)?,
            off_time: secs_to_duration(off_secs)?,
        })
    }
}

impl Default for BlinkSpec {
    fn default() -> Self {
        Self::new(5, Duration::from_secs(1), Duration::from_secs(1))
    }
}

fn secs_to_duration(secs: f32) -> Result<Duration, BacklightError> {
    if !secs.is_finite() || secs < 0.0 {
        return Err(BacklightError::InvalidTiming);
    }
    Ok(Duration::try_from_secs_f32(secs).unwrap_or(Duration::MAX))
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for BlinkSpec {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "BlinkSpec {{ count: {}, on: {} ms, off: {} ms }}",
            self.count,
            self.on_time.as_millis() as u64,
            self.off_time.as_millis() as u64
        )
    }
}
