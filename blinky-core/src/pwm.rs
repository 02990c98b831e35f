//! Helligkeitsregler über einen PWM-Kanal

use embedded_hal::pwm::SetDutyCycle;

use crate::traits::{BacklightError, BrightnessControl};

/// PWM-Kanal als `BrightnessControl`
///
/// PWM-Hardware lässt sich nicht zurücklesen, deshalb merkt sich der
/// Adapter den zuletzt geschriebenen Wert.
pub struct PwmBrightness<P> {
    channel: P,
    level: f32,
}

impl<P: SetDutyCycle> PwmBrightness<P> {
    /// `level` ist die Helligkeit, mit der der Kanal konfiguriert wurde
    pub fn new(channel: P, level: f32) -> Self {
        Self {
            channel,
            level: level.clamp(0.0, 1.0),
        }
    }

    pub fn free(self) -> P {
        self.channel
    }
}

impl<P: SetDutyCycle> BrightnessControl for PwmBrightness<P> {
    fn brightness(&mut self) -> Result<f32, BacklightError> {
        Ok(self.level)
    }

    fn set_brightness(&mut self, level: f32) -> Result<(), BacklightError> {
        let level = level.clamp(0.0, 1.0);
        let duty = duty_for_level(level, self.channel.max_duty_cycle());
        self.channel
            .set_duty_cycle(duty)
            .map_err(|_| BacklightError::WriteFailed)?;
        self.level = level;
        Ok(())
    }
}

/// Rechnet eine Helligkeit (0.0..=1.0) in einen Duty-Cycle um
///
/// ```
/// # use blinky_core::duty_for_level;
/// assert_eq!(duty_for_level(0.5, 31), 16);
/// assert_eq!(duty_for_level(1.0, 31), 31);
/// ```
pub fn duty_for_level(level: f32, max_duty: u16) -> u16 {
    let duty = level.clamp(0.0, 1.0) * f32::from(max_duty) + 0.5;
    (duty as u16).min(max_duty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::pwm::ErrorType;

    struct FakeChannel {
        max: u16,
        duty: u16,
    }

    impl ErrorType for FakeChannel {
        type Error = Infallible;
    }

    impl SetDutyCycle for FakeChannel {
        fn max_duty_cycle(&self) -> u16 {
            self.max
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Infallible> {
            self.duty = duty;
            Ok(())
        }
    }

    #[test]
    fn test_duty_for_level_bounds() {
        assert_eq!(duty_for_level(0.0, 255), 0);
        assert_eq!(duty_for_level(1.0, 255), 255);
        assert_eq!(duty_for_level(-2.0, 255), 0);
        assert_eq!(duty_for_level(7.0, 255), 255);
    }

    #[test]
    fn test_pwm_brightness_remembers_exact_level() {
        let mut pwm = PwmBrightness::new(FakeChannel { max: 31, duty: 0 }, 0.3);
        assert_eq!(pwm.brightness(), Ok(0.3));

        pwm.set_brightness(0.5).unwrap();
        assert_eq!(pwm.brightness(), Ok(0.5));
        assert_eq!(pwm.free().duty, 16);
    }
}
