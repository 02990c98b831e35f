// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_hal::main bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

use core::time::Duration;

use defmt::{error, info};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::main;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use blinky_firmware::blinky::blink_demo;
use blinky_firmware::config::{
    BACKLIGHT_CONFIG, BACKLIGHT_INITIAL_HIGH, BLINK_COUNT, BLINK_OFF_MS, BLINK_ON_MS,
    IDLE_INTERVAL_SECS,
};
use blinky_firmware::hal::BoardPins;
use blinky_firmware::{BacklightController, BacklightError, BlinkSpec};
use blinky_core::{Display, PinRegistry};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, erkennt die Backlight-Steuerung und blinkt einmal.
/// Danach schläft main() - das Backlight bleibt im Ausgangszustand.
#[main]
fn main() -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Blockierender Delay (implementiert embedded_hal::delay::DelayNs)
    let delay = Delay::new();

    // Backlight an GPIO22: reiner Schalt-Pin
    #[cfg(not(feature = "pwm-backlight"))]
    let controller = {
        use blinky_firmware::NoBrightness;
        use blinky_firmware::config::BACKLIGHT_PIN_NAME;

        let pins = BoardPins::new(
            [(BACKLIGHT_PIN_NAME, peripherals.GPIO22.into())],
            BACKLIGHT_INITIAL_HIGH,
        );
        BacklightController::new(NoBrightness, pins, delay, BACKLIGHT_CONFIG)
    };

    // Backlight an GPIO22 über LEDC PWM: Helligkeitsregler
    #[cfg(feature = "pwm-backlight")]
    let controller = {
        use blinky_firmware::hal::BoardDisplay;

        let brightness = pwm::backlight(peripherals.LEDC, peripherals.GPIO22);
        BacklightController::new(
            BoardDisplay::with_brightness(brightness),
            BoardPins::<0>::new([], BACKLIGHT_INITIAL_HIGH),
            delay,
            BACKLIGHT_CONFIG,
        )
    };

    run(controller)
}

/// Führt die Demo aus und schläft danach endlos
fn run<Dsp, R>(controller: Result<BacklightController<Dsp, R, Delay>, BacklightError>) -> !
where
    Dsp: Display,
    R: PinRegistry,
{
    let mut controller = match controller {
        Ok(controller) => controller,
        Err(e) => {
            error!("Backlight initialization failed: {}", e);
            idle(Delay::new())
        }
    };

    let spec = BlinkSpec::new(
        BLINK_COUNT,
        Duration::from_millis(BLINK_ON_MS),
        Duration::from_millis(BLINK_OFF_MS),
    );

    if blink_demo(&mut controller, &spec).is_err() {
        info!("Please check your board documentation for the backlight wiring");
    }

    // Device muss am Leben bleiben, sonst wird der Pin freigegeben
    let (_device, delay) = controller.into_parts();
    idle(delay)
}

fn idle(mut delay: Delay) -> ! {
    loop {
        delay.delay_millis(IDLE_INTERVAL_SECS * 1000);
    }
}

// ============================================================================
// LEDC PWM Setup (Feature "pwm-backlight")
// ============================================================================

#[cfg(feature = "pwm-backlight")]
mod pwm {
    use blinky_firmware::PwmBrightness;
    use blinky_firmware::config::{BACKLIGHT_INITIAL_DUTY_PCT, BACKLIGHT_PWM_FREQ_KHZ};
    use esp_hal::gpio::DriveMode;
    use esp_hal::ledc::channel::{self, ChannelIFace};
    use esp_hal::ledc::timer::{self, TimerIFace};
    use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
    use esp_hal::peripherals::{GPIO22, LEDC};
    use esp_hal::time::Rate;
    use static_cell::StaticCell;

    /// Konfiguriert LEDC Timer0 + Channel0 für das Backlight
    ///
    /// Ledc und Timer müssen 'static sein, da der Kanal den Timer referenziert.
    pub fn backlight(
        ledc: LEDC<'static>,
        pin: GPIO22<'static>,
    ) -> PwmBrightness<channel::Channel<'static, LowSpeed>> {
        static LEDC_CELL: StaticCell<Ledc<'static>> = StaticCell::new();
        static TIMER_CELL: StaticCell<timer::Timer<'static, LowSpeed>> = StaticCell::new();

        let ledc = LEDC_CELL.init(Ledc::new(ledc));
        ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

        let timer = TIMER_CELL.init(ledc.timer::<LowSpeed>(timer::Number::Timer0));
        timer
            .configure(timer::config::Config {
                duty: timer::config::Duty::Duty8Bit,
                clock_source: timer::LSClockSource::APBClk,
                frequency: Rate::from_khz(BACKLIGHT_PWM_FREQ_KHZ),
            })
            .expect("Failed to configure LEDC timer");
        let timer: &'static timer::Timer<'static, LowSpeed> = timer;

        let mut channel = ledc.channel(channel::Number::Channel0, pin);
        channel
            .configure(channel::config::Config {
                timer,
                duty_pct: BACKLIGHT_INITIAL_DUTY_PCT,
                drive_mode: DriveMode::PushPull,
            })
            .expect("Failed to configure LEDC channel");

        PwmBrightness::new(channel, f32::from(BACKLIGHT_INITIAL_DUTY_PCT) / 100.0)
    }
}
