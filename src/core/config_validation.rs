use crate::hardware::camera::{
    FrameSize, PixelFormat, MAX_FRAME_BUFFERS, XCLK_FREQ_MAX_HZ, XCLK_FREQ_MIN_HZ,
};
use crate::hardware::pins::CameraPins;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown board '{0}' (supported: esp32_wrover)")]
    UnknownBoard(String),
    #[error("unknown frame size '{0}' (supported: QVGA, VGA, SVGA, XGA, SXGA, UXGA)")]
    UnknownFrameSize(String),
    #[error("unknown pixel format '{0}' (supported: JPEG, RGB565, YUV422, GRAYSCALE)")]
    UnknownPixelFormat(String),
    #[error("xclk_freq_hz must be {XCLK_FREQ_MIN_HZ}..={XCLK_FREQ_MAX_HZ}, got {0}")]
    InvalidXclkFreq(u32),
    #[error("frame_buffer_count must be 1..={MAX_FRAME_BUFFERS}, got {0}")]
    InvalidFrameBufferCount(u8),
}

/// Resolves a board name to its camera wiring table.
pub fn parse_board(board: &str) -> Result<CameraPins, ValidationError> {
    match board {
        "esp32_wrover" | "esp32-wrover" => Ok(CameraPins::esp32_wrover()),
        other => Err(ValidationError::UnknownBoard(other.to_string())),
    }
}

pub fn parse_frame_size(value: &str) -> Result<FrameSize, ValidationError> {
    match value.to_ascii_uppercase().as_str() {
        "QVGA" => Ok(FrameSize::Qvga),
        "VGA" => Ok(FrameSize::Vga),
        "SVGA" => Ok(FrameSize::Svga),
        "XGA" => Ok(FrameSize::Xga),
        "SXGA" => Ok(FrameSize::Sxga),
        "UXGA" => Ok(FrameSize::Uxga),
        _ => Err(ValidationError::UnknownFrameSize(value.to_string())),
    }
}

pub fn parse_pixel_format(value: &str) -> Result<PixelFormat, ValidationError> {
    match value.to_ascii_uppercase().as_str() {
        "JPEG" => Ok(PixelFormat::Jpeg),
        "RGB565" => Ok(PixelFormat::Rgb565),
        "YUV422" => Ok(PixelFormat::Yuv422),
        "GRAYSCALE" => Ok(PixelFormat::Grayscale),
        _ => Err(ValidationError::UnknownPixelFormat(value.to_string())),
    }
}

pub fn parse_xclk_freq_hz(value: u32) -> Result<u32, ValidationError> {
    if (XCLK_FREQ_MIN_HZ..=XCLK_FREQ_MAX_HZ).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidXclkFreq(value))
    }
}

pub fn parse_frame_buffer_count(value: u8) -> Result<u8, ValidationError> {
    if (1..=MAX_FRAME_BUFFERS).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidFrameBufferCount(value))
    }
}
