//! ESP-IDF backends for the mirror firmware.
//!
//! Concrete implementations of the `dio` line traits and the `platform`
//! watchdog backend over ESP-IDF. Requires the ESP-IDF toolchain to build,
//! which is why this crate sits outside the host workspace.

pub use esp_idf_sys;

pub mod gpio;
pub mod watchdog;

pub use gpio::{EspDigitalIn, EspDigitalOut};
pub use watchdog::TaskWdt;
