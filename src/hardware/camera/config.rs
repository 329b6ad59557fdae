use crate::hardware::pins::PinMap;

/// Default master clock for the OV2640 on ESP32 boards.
pub const DEFAULT_XCLK_FREQ_HZ: u32 = 20_000_000;

/// OV2640 input clock limits per datasheet (6..40 MHz).
pub const XCLK_FREQ_MIN_HZ: u32 = 6_000_000;
pub const XCLK_FREQ_MAX_HZ: u32 = 40_000_000;

/// Upper bound on DMA frame buffers (PSRAM-limited).
pub const MAX_FRAME_BUFFERS: u8 = 4;

/// Output resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSize {
    /// 320x240
    Qvga,
    /// 640x480
    Vga,
    /// 800x600
    Svga,
    /// 1024x768
    Xga,
    /// 1280x1024
    Sxga,
    /// 1600x1200
    Uxga,
}

impl FrameSize {
    pub fn dimensions(self) -> (u16, u16) {
        match self {
            FrameSize::Qvga => (320, 240),
            FrameSize::Vga => (640, 480),
            FrameSize::Svga => (800, 600),
            FrameSize::Xga => (1024, 768),
            FrameSize::Sxga => (1280, 1024),
            FrameSize::Uxga => (1600, 1200),
        }
    }
}

/// Pixel format delivered by the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Jpeg,
    Rgb565,
    Yuv422,
    Grayscale,
}

/// Capture parameter validation error. Like a bad wiring table, this is a
/// fatal startup configuration error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptureConfigError {
    #[error(
        "XCLK frequency {0} Hz is outside the OV2640 input range \
         {XCLK_FREQ_MIN_HZ}..={XCLK_FREQ_MAX_HZ}"
    )]
    XclkFreqOutOfRange(u32),
    #[error("frame buffer count must be 1..={MAX_FRAME_BUFFERS}, got {0}")]
    InvalidFrameBufferCount(u8),
}

/// Complete configuration bundle for sensor initialization.
///
/// Assembles the validated [`PinMap`] with the runtime capture parameters.
/// The external driver consumes this for register programming and DMA setup;
/// this type itself performs no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureConfig {
    pin_map: PinMap,
    xclk_freq_hz: u32,
    frame_size: FrameSize,
    pixel_format: PixelFormat,
    frame_buffer_count: u8,
}

impl CaptureConfig {
    /// New configuration with defaults: 20 MHz XCLK, SVGA JPEG, double
    /// buffering.
    pub fn new(pin_map: PinMap) -> Self {
        Self {
            pin_map,
            xclk_freq_hz: DEFAULT_XCLK_FREQ_HZ,
            frame_size: FrameSize::Svga,
            pixel_format: PixelFormat::Jpeg,
            frame_buffer_count: 2,
        }
    }

    pub fn with_xclk_freq_hz(mut self, xclk_freq_hz: u32) -> Self {
        self.xclk_freq_hz = xclk_freq_hz;
        self
    }

    pub fn with_frame_size(mut self, frame_size: FrameSize) -> Self {
        self.frame_size = frame_size;
        self
    }

    pub fn with_pixel_format(mut self, pixel_format: PixelFormat) -> Self {
        self.pixel_format = pixel_format;
        self
    }

    pub fn with_frame_buffer_count(mut self, frame_buffer_count: u8) -> Self {
        self.frame_buffer_count = frame_buffer_count;
        self
    }

    /// Bounds-checks the runtime parameters. The pin map was already
    /// validated at construction.
    pub fn validate(&self) -> Result<(), CaptureConfigError> {
        if self.xclk_freq_hz < XCLK_FREQ_MIN_HZ || self.xclk_freq_hz > XCLK_FREQ_MAX_HZ {
            return Err(CaptureConfigError::XclkFreqOutOfRange(self.xclk_freq_hz));
        }
        if self.frame_buffer_count == 0 || self.frame_buffer_count > MAX_FRAME_BUFFERS {
            return Err(CaptureConfigError::InvalidFrameBufferCount(
                self.frame_buffer_count,
            ));
        }
        Ok(())
    }

    pub fn pin_map(&self) -> &PinMap {
        &self.pin_map
    }

    pub fn xclk_freq_hz(&self) -> u32 {
        self.xclk_freq_hz
    }

    pub fn frame_size(&self) -> FrameSize {
        self.frame_size
    }

    pub fn pixel_format(&self) -> PixelFormat {
        self.pixel_format
    }

    pub fn frame_buffer_count(&self) -> u8 {
        self.frame_buffer_count
    }
}
