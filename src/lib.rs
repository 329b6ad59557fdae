/*!
 * # ESP32 Wrover Camera Configuration Library
 *
 * Pin-mapped capture configuration for an OV2640 camera on the ESP32 Wrover
 * dev board: which GPIO carries which camera signal, plus the clocking,
 * frame-size, pixel-format and buffering parameters handed to the sensor
 * driver at initialization.
 *
 * ## Module layout
 * - `hardware`: wiring tables (`CameraPins`, `PinMap`) and the
 *   `CaptureConfig` bundle
 * - `core`: build-time configuration (`cfg.toml`) loading and validation
 *
 * The crate assembles and validates configuration only; register I/O, clock
 * generation and frame DMA belong to the external sensor driver.
 */

pub mod core;
pub mod hardware;

pub use crate::core::{AppConfig, ConfigError, ValidationError};
pub use hardware::camera::{CaptureConfig, CaptureConfigError, FrameSize, PixelFormat};
pub use hardware::pins::{
    CameraPins, CameraSignal, PinMap, PinMapError, GPIO_NUM_MAX, NOT_CONNECTED,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests;
