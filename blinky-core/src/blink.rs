//! Blink-Logik - blockierend, ohne Abbruch
//!
//! Läuft einmal gestartet bis zum Ende durch. Nur ein Hardware-Fehler
//! beendet die Sequenz vorzeitig.

use core::time::Duration;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::StatefulOutputPin;

use crate::device::BacklightDevice;
use crate::traits::{BacklightError, BrightnessControl};
use crate::types::BlinkSpec;

/// Blinkt das Backlight `spec.count` mal
///
/// Ist das Device nicht verfügbar, liefert der Aufruf `Unavailable`,
/// auch bei `count == 0`. Dann wird weder geschrieben noch gewartet.
pub fn run_blink<B, P, D>(
    device: &mut BacklightDevice<B, P>,
    delay: &mut D,
    spec: &BlinkSpec,
) -> Result<(), BacklightError>
where
    B: BrightnessControl,
    P: StatefulOutputPin,
    D: DelayNs,
{
    device.get()?;

    for _ in 0..spec.count {
        device.set(true)?;
        delay_for(delay, spec.on_time);

        device.set(false)?;
        delay_for(delay, spec.off_time);
    }
    Ok(())
}

/// Wartet blockierend für `duration`
///
/// `DelayNs` nimmt nur `u32`, deshalb in Millisekunden-Stücken plus Rest in ns.
pub fn delay_for<D: DelayNs>(delay: &mut D, duration: Duration) {
    let mut millis = duration.as_millis();
    while millis > 0 {
        let chunk = millis.min(u128::from(u32::MAX));
        delay.delay_ms(chunk as u32);
        millis -= chunk;
    }

    let rest_ns = duration.subsec_nanos() % 1_000_000;
    if rest_ns > 0 {
        delay.delay_ns(rest_ns);
    }
}
