// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod blinky;
pub mod config;
pub mod hal;

// Re-exports von blinky-core
pub use blinky_core::{
    BacklightConfig, BacklightController, BacklightError, BlinkSpec, ControlMethodKind,
    NoBrightness, PwmBrightness,
};
