// Backlight Demo - Blinkt das Display-Backlight und stellt es wieder her
use blinky_core::{BacklightController, BacklightError, BlinkSpec, Display, PinRegistry};
use defmt::{error, info, warn};
use embedded_hal::delay::DelayNs;

/// Blink-Demo - Logik ohne direkte Hardware-Abhängigkeit
///
/// - Meldet die erkannte Steuerungsmethode
/// - Blinkt nach `spec` (blockierend)
/// - Der Controller stellt danach den Ausgangszustand wieder her
///
/// Gibt das Ergebnis weiter, damit der Aufrufer entscheiden kann,
/// was bei fehlender Steuerung passiert.
pub fn blink_demo<Dsp, R, D>(
    controller: &mut BacklightController<Dsp, R, D>,
    spec: &BlinkSpec,
) -> Result<(), BacklightError>
where
    Dsp: Display,
    R: PinRegistry,
    D: DelayNs,
{
    let Some(kind) = controller.control_method() else {
        warn!("No backlight control method available");
        return Err(BacklightError::Unavailable);
    };

    info!("Backlight control: {} -> blinking {}", kind.as_str(), spec);

    match controller.blink_with(spec) {
        Ok(()) => {
            info!("Blinking complete, display restored to original state");
            Ok(())
        }
        Err(e) => {
            error!("Blinking failed: {}", e);
            Err(e)
        }
    }
}
