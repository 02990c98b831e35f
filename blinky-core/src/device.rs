//! Einheitliche Backlight-Ansteuerung
//!
//! `BacklightDevice` kapselt die aufgelöste `ControlMethod` und merkt sich
//! den Zustand, der beim Start auf der Hardware vorgefunden wurde.

use embedded_hal::digital::StatefulOutputPin;

use crate::traits::{BacklightError, BrightnessControl};
use crate::types::{BacklightState, ControlMethod, ControlMethodKind, OnLevel, OriginalState};

pub struct BacklightDevice<B, P> {
    method: ControlMethod<B, P>,
    state: Option<BacklightState>,
    on_level: OnLevel,
}

impl<B, P> BacklightDevice<B, P>
where
    B: BrightnessControl,
    P: StatefulOutputPin,
{
    /// Übernimmt die Steuerungsmethode und liest einmal den Ausgangszustand
    ///
    /// Bei `ControlMethod::None` gibt es keinen Ausgangszustand, jede
    /// spätere Operation liefert `BacklightError::Unavailable`.
    pub fn initialize(
        mut method: ControlMethod<B, P>,
        on_level: OnLevel,
    ) -> Result<Self, BacklightError> {
        let original = match &mut method {
            ControlMethod::None => None,
            ControlMethod::Brightness(control) => {
                Some(OriginalState::Level(control.brightness()?))
            }
            ControlMethod::GpioPin(pin, _) => Some(OriginalState::Pin(
                pin.is_set_high().map_err(|_| BacklightError::ReadFailed)?,
            )),
        };

        Ok(Self {
            method,
            state: original.map(|original| BacklightState {
                current: original.is_on(),
                original,
            }),
            on_level,
        })
    }

    pub fn kind(&self) -> Option<ControlMethodKind> {
        self.method.kind()
    }

    pub fn pin_name(&self) -> Option<&'static str> {
        self.method.pin_name()
    }

    pub fn state(&self) -> Option<&BacklightState> {
        self.state.as_ref()
    }

    /// Schaltet das Backlight an oder aus
    ///
    /// Gibt den tatsächlich gesetzten Zustand zurück.
    pub fn set(&mut self, on: bool) -> Result<bool, BacklightError> {
        let state = self.state.as_mut().ok_or(BacklightError::Unavailable)?;

        match &mut self.method {
            ControlMethod::None => return Err(BacklightError::Unavailable),
            ControlMethod::Brightness(control) => {
                let level = match (on, state.original) {
                    (false, _) => 0.0,
                    (true, OriginalState::Level(original)) => self.on_level.resolve(original),
                    (true, OriginalState::Pin(_)) => 1.0,
                };
                control.set_brightness(level)?;
            }
            ControlMethod::GpioPin(pin, _) => {
                pin.set_state(on.into())
                    .map_err(|_| BacklightError::WriteFailed)?;
            }
        }

        state.current = on;
        Ok(on)
    }

    pub fn get(&self) -> Result<bool, BacklightError> {
        self.state
            .as_ref()
            .map(|state| state.current)
            .ok_or(BacklightError::Unavailable)
    }

    /// Schreibt den Ausgangszustand zurück
    ///
    /// Beim Helligkeitsregler wird der exakte Bruchwert geschrieben,
    /// nicht nur an/aus.
    pub fn restore(&mut self) -> Result<(), BacklightError> {
        let state = self.state.as_mut().ok_or(BacklightError::Unavailable)?;

        match (&mut self.method, state.original) {
            (ControlMethod::Brightness(control), OriginalState::Level(level)) => {
                control.set_brightness(level)?;
            }
            (ControlMethod::GpioPin(pin, _), OriginalState::Pin(on)) => {
                pin.set_state(on.into())
                    .map_err(|_| BacklightError::WriteFailed)?;
            }
            _ => return Err(BacklightError::Unavailable),
        }

        state.current = state.original.is_on();
        Ok(())
    }

    /// Gibt die Steuerungsmethode mit ihrem Hardware-Handle zurück
    pub fn release(self) -> ControlMethod<B, P> {
        self.method
    }
}
