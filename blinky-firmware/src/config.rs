// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use blinky_core::{BacklightConfig, OnLevel};

// ============================================================================
// Backlight Verdrahtung
// ============================================================================

/// Board-Name des Backlight-Pins
/// Muss einem der Kandidaten aus `blinky_core::BACKLIGHT_PIN_NAMES` entsprechen
pub const BACKLIGHT_PIN_NAME: &str = "TFT_BACKLIGHT";

/// Pegel, mit dem der Backlight-Pin als Ausgang geöffnet wird
/// Die meisten Displays starten mit eingeschaltetem Backlight
pub const BACKLIGHT_INITIAL_HIGH: bool = true;

// ============================================================================
// PWM Konfiguration (Feature "pwm-backlight")
// ============================================================================

/// LEDC PWM-Frequenz in kHz
/// 24 kHz liegt über dem hörbaren Bereich (kein Spulenfiepen)
pub const BACKLIGHT_PWM_FREQ_KHZ: u32 = 24;

/// Start-Helligkeit in Prozent (0-100)
/// Wird beim Konfigurieren des LEDC-Kanals geschrieben
pub const BACKLIGHT_INITIAL_DUTY_PCT: u8 = 80;

// ============================================================================
// Backlight Verhalten
// ============================================================================

/// Helligkeit beim Einschalten über PWM
pub const BACKLIGHT_ON_LEVEL: OnLevel = OnLevel::Full;

/// Controller-Konfiguration
pub const BACKLIGHT_CONFIG: BacklightConfig = BacklightConfig {
    on_level: BACKLIGHT_ON_LEVEL,
    restore_after_blink: true,
};

// ============================================================================
// Demo Blink-Muster
// ============================================================================

/// Anzahl der Blink-Zyklen
pub const BLINK_COUNT: u32 = 5;

/// Backlight an (Millisekunden)
pub const BLINK_ON_MS: u64 = 500;

/// Backlight aus (Millisekunden)
pub const BLINK_OFF_MS: u64 = 500;

/// Schlaf-Intervall der Hauptschleife nach der Demo (Sekunden)
pub const IDLE_INTERVAL_SECS: u32 = 3600;
