use log::info;

use crate::core::config_validation::{
    parse_board, parse_frame_buffer_count, parse_frame_size, parse_pixel_format,
    parse_xclk_freq_hz, ValidationError,
};
use crate::hardware::camera::CaptureConfig;
use crate::hardware::pins::{PinMap, PinMapError};

/// Raw build-time configuration.
///
/// Values come from the `cfg.toml` file next to `Cargo.toml` (see
/// `cfg.toml.example`); fields keep their defaults when the file is absent.
#[toml_cfg::toml_config]
pub struct Config {
    #[default("esp32_wrover")]
    board: &'static str,

    #[default(20_000_000)]
    xclk_freq_hz: u32,

    #[default("SVGA")]
    frame_size: &'static str,

    #[default("JPEG")]
    pixel_format: &'static str,

    #[default(2)]
    frame_buffer_count: u8,
}

/// Configuration error. Any variant is fatal at startup: it reflects a
/// wiring or build-config mistake, never a transient fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid camera wiring: {0}")]
    PinMap(#[from] PinMapError),
    #[error("invalid capture parameter: {0}")]
    Validation(#[from] ValidationError),
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Validated capture bundle for the sensor driver.
    pub capture: CaptureConfig,
}

impl AppConfig {
    /// Resolves and validates the build-time configuration.
    ///
    /// The board name selects the wiring table, which is validated into a
    /// [`PinMap`] before the capture parameters are parsed around it.
    pub fn load() -> Result<Self, ConfigError> {
        let config = CONFIG;

        let pins = parse_board(config.board)?;
        let pin_map = PinMap::new(pins)?;

        let capture = CaptureConfig::new(pin_map)
            .with_xclk_freq_hz(parse_xclk_freq_hz(config.xclk_freq_hz)?)
            .with_frame_size(parse_frame_size(config.frame_size)?)
            .with_pixel_format(parse_pixel_format(config.pixel_format)?)
            .with_frame_buffer_count(parse_frame_buffer_count(config.frame_buffer_count)?);

        info!(
            "camera config: board={} xclk={}Hz frame_size={:?} pixel_format={:?} fb_count={}",
            config.board,
            capture.xclk_freq_hz(),
            capture.frame_size(),
            capture.pixel_format(),
            capture.frame_buffer_count()
        );

        Ok(Self { capture })
    }
}
