/// Camera capture configuration
///
/// This module provides the configuration bundle handed to the external
/// sensor driver at initialization time:
/// - Frame size and pixel format enums
/// - `CaptureConfig` aggregate (pin map + clocking + buffering)

pub mod config;

pub use config::*;
