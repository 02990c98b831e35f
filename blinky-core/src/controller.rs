//! Backlight-Controller
//!
//! Fassade über Erkennung, Device und Blink-Logik. Nach der Erkennung
//! beim Start wird nur noch delegiert.

use embedded_hal::delay::DelayNs;

use crate::blink::run_blink;
use crate::device::BacklightDevice;
use crate::probe::probe;
use crate::traits::{BacklightError, Display, PinRegistry};
use crate::types::{BacklightConfig, BacklightState, BlinkSpec, ControlMethodKind};

/// Backlight-Controller für das eingebaute Display
///
/// # Generische Parameter
/// - `Dsp`: Display-Handle (Hardware oder Mock)
/// - `R`: Pin-Registry des Boards
/// - `D`: blockierender Delay-Provider
pub struct BacklightController<Dsp: Display, R: PinRegistry, D> {
    device: BacklightDevice<Dsp::Brightness, R::Pin>,
    delay: D,
    config: BacklightConfig,
}

impl<Dsp, R, D> BacklightController<Dsp, R, D>
where
    Dsp: Display,
    R: PinRegistry,
    D: DelayNs,
{
    /// Erkennt die Steuerungsmethode und liest den Ausgangszustand
    ///
    /// Kein Treffer ist kein Fehler: `control_method()` liefert dann `None`.
    /// Ein Fehler entsteht nur, wenn das Lesen des Ausgangszustands fehlschlägt.
    pub fn new(
        mut display: Dsp,
        mut pins: R,
        delay: D,
        config: BacklightConfig,
    ) -> Result<Self, BacklightError> {
        let method = probe(&mut display, &mut pins);
        let device = BacklightDevice::initialize(method, config.on_level)?;

        #[cfg(feature = "defmt")]
        match (device.kind(), device.pin_name()) {
            (Some(ControlMethodKind::Brightness), _) => {
                defmt::info!("Using display brightness control")
            }
            (Some(ControlMethodKind::Gpio), Some(name)) => {
                defmt::info!("Using {} pin for backlight control", name)
            }
            _ => defmt::warn!(
                "Could not find backlight control method. Please check your board documentation."
            ),
        }

        Ok(Self {
            device,
            delay,
            config,
        })
    }

    /// "brightness", "gpio" oder `None`
    pub fn control_method(&self) -> Option<ControlMethodKind> {
        self.device.kind()
    }

    pub fn pin_name(&self) -> Option<&'static str> {
        self.device.pin_name()
    }

    pub fn state(&self) -> Option<&BacklightState> {
        self.device.state()
    }

    pub fn config(&self) -> &BacklightConfig {
        &self.config
    }

    /// Blinkt `count` mal mit Zeiten in Sekunden
    ///
    /// Ungültige Zeiten werden abgelehnt, bevor die Hardware angefasst wird.
    pub fn blink(&mut self, count: u32, on_secs: f32, off_secs: f32) -> Result<(), BacklightError> {
        let spec = BlinkSpec::from_secs(count, on_secs, off_secs)?;
        self.blink_with(&spec)
    }

    pub fn blink_with(&mut self, spec: &BlinkSpec) -> Result<(), BacklightError> {
        run_blink(&mut self.device, &mut self.delay, spec)?;

        if self.config.restore_after_blink {
            self.restore_original_state()?;
        }
        Ok(())
    }

    pub fn set_backlight(&mut self, on: bool) -> Result<bool, BacklightError> {
        self.device.set(on)
    }

    pub fn backlight(&self) -> Result<bool, BacklightError> {
        self.device.get()
    }

    pub fn restore_original_state(&mut self) -> Result<(), BacklightError> {
        self.device.restore()?;

        #[cfg(feature = "defmt")]
        if let Some(state) = self.device.state() {
            defmt::info!("Restored original backlight state: {}", state.original);
        }

        Ok(())
    }

    /// Gibt Device und Delay-Provider frei
    pub fn into_parts(self) -> (BacklightDevice<Dsp::Brightness, R::Pin>, D) {
        (self.device, self.delay)
    }
}
