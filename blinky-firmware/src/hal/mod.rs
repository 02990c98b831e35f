// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul verbindet die esp-hal Peripherals mit den Traits
// aus blinky-core (Display, PinRegistry).

pub mod board;

pub use board::{BoardDisplay, BoardPins};
