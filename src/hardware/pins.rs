use std::fmt;

/// Sentinel GPIO value meaning "signal intentionally not wired".
pub const NOT_CONNECTED: i32 = -1;

/// Highest addressable GPIO on the classic ESP32 (GPIO0..GPIO39).
pub const GPIO_NUM_MAX: i32 = 39;

/// Named signals of the OV2640 parallel (DVP) camera interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraSignal {
    /// Power-down control
    Pwdn,
    /// Hardware reset line
    Reset,
    /// Master clock to the sensor
    Xclk,
    /// SCCB (I2C-style) data line
    Siod,
    /// SCCB (I2C-style) clock line
    Sioc,
    Y9,
    Y8,
    Y7,
    Y6,
    Y5,
    Y4,
    Y3,
    Y2,
    /// Vertical sync strobe
    Vsync,
    /// Horizontal reference strobe
    Href,
    /// Pixel clock strobe
    Pclk,
}

impl CameraSignal {
    /// All camera signals, in wiring-table order.
    pub const ALL: [CameraSignal; 16] = [
        CameraSignal::Pwdn,
        CameraSignal::Reset,
        CameraSignal::Xclk,
        CameraSignal::Siod,
        CameraSignal::Sioc,
        CameraSignal::Y9,
        CameraSignal::Y8,
        CameraSignal::Y7,
        CameraSignal::Y6,
        CameraSignal::Y5,
        CameraSignal::Y4,
        CameraSignal::Y3,
        CameraSignal::Y2,
        CameraSignal::Vsync,
        CameraSignal::Href,
        CameraSignal::Pclk,
    ];

    /// PWDN and RESET may be left unwired; every other signal must have a GPIO.
    pub fn allows_not_connected(self) -> bool {
        matches!(self, CameraSignal::Pwdn | CameraSignal::Reset)
    }

    pub fn name(self) -> &'static str {
        match self {
            CameraSignal::Pwdn => "PWDN",
            CameraSignal::Reset => "RESET",
            CameraSignal::Xclk => "XCLK",
            CameraSignal::Siod => "SIOD",
            CameraSignal::Sioc => "SIOC",
            CameraSignal::Y9 => "Y9",
            CameraSignal::Y8 => "Y8",
            CameraSignal::Y7 => "Y7",
            CameraSignal::Y6 => "Y6",
            CameraSignal::Y5 => "Y5",
            CameraSignal::Y4 => "Y4",
            CameraSignal::Y3 => "Y3",
            CameraSignal::Y2 => "Y2",
            CameraSignal::Vsync => "VSYNC",
            CameraSignal::Href => "HREF",
            CameraSignal::Pclk => "PCLK",
        }
    }
}

impl fmt::Display for CameraSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Raw camera wiring table: one GPIO number per signal, `-1` for unwired.
///
/// This is board-specific data. Validate it through [`PinMap::new`] before
/// handing anything to the sensor driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraPins {
    pub pwdn: i32,
    pub reset: i32,
    pub xclk: i32,
    pub siod: i32,
    pub sioc: i32,
    pub y9: i32,
    pub y8: i32,
    pub y7: i32,
    pub y6: i32,
    pub y5: i32,
    pub y4: i32,
    pub y3: i32,
    pub y2: i32,
    pub vsync: i32,
    pub href: i32,
    pub pclk: i32,
}

impl CameraPins {
    /// OV2640 wiring of the ESP32 Wrover dev board.
    ///
    /// PWDN and RESET are not brought out on this board, so the camera stays
    /// powered and there is no hardware reset control.
    pub const fn esp32_wrover() -> Self {
        Self {
            pwdn: NOT_CONNECTED,
            reset: NOT_CONNECTED,
            xclk: 21,
            siod: 26,
            sioc: 27,
            y9: 35,
            y8: 34,
            y7: 39,
            y6: 36,
            y5: 19,
            y4: 18,
            y3: 5,
            y2: 4,
            vsync: 25,
            href: 23,
            pclk: 22,
        }
    }

    /// GPIO number assigned to `signal` (may be [`NOT_CONNECTED`]).
    pub fn gpio(&self, signal: CameraSignal) -> i32 {
        match signal {
            CameraSignal::Pwdn => self.pwdn,
            CameraSignal::Reset => self.reset,
            CameraSignal::Xclk => self.xclk,
            CameraSignal::Siod => self.siod,
            CameraSignal::Sioc => self.sioc,
            CameraSignal::Y9 => self.y9,
            CameraSignal::Y8 => self.y8,
            CameraSignal::Y7 => self.y7,
            CameraSignal::Y6 => self.y6,
            CameraSignal::Y5 => self.y5,
            CameraSignal::Y4 => self.y4,
            CameraSignal::Y3 => self.y3,
            CameraSignal::Y2 => self.y2,
            CameraSignal::Vsync => self.vsync,
            CameraSignal::Href => self.href,
            CameraSignal::Pclk => self.pclk,
        }
    }
}

/// Wiring-table validation error. Fatal at startup: a bad table means the
/// board description is wrong, so retrying cannot help.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PinMapError {
    #[error("required camera signal {0} is not connected (-1)")]
    RequiredSignalNotConnected(CameraSignal),
    #[error("signal {signal} is assigned GPIO {gpio}, outside 0..={GPIO_NUM_MAX}")]
    GpioOutOfRange { signal: CameraSignal, gpio: i32 },
    #[error("signals {first} and {second} are both assigned GPIO {gpio}")]
    DuplicateGpio {
        first: CameraSignal,
        second: CameraSignal,
        gpio: i32,
    },
}

/// Validated, read-only camera wiring table.
///
/// Constructed once at startup and never mutated afterwards, so it can be
/// shared across threads without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinMap {
    pins: CameraPins,
}

impl PinMap {
    /// Validates a raw wiring table.
    ///
    /// Checks, in order: every required signal has a GPIO, every assigned
    /// GPIO is within the chip's range, and no GPIO is assigned twice.
    pub fn new(pins: CameraPins) -> Result<Self, PinMapError> {
        for signal in CameraSignal::ALL {
            let gpio = pins.gpio(signal);
            if gpio == NOT_CONNECTED {
                if !signal.allows_not_connected() {
                    return Err(PinMapError::RequiredSignalNotConnected(signal));
                }
                continue;
            }
            if gpio < 0 || gpio > GPIO_NUM_MAX {
                return Err(PinMapError::GpioOutOfRange { signal, gpio });
            }
        }

        let signals = CameraSignal::ALL;
        for (i, &first) in signals.iter().enumerate() {
            let gpio = pins.gpio(first);
            if gpio == NOT_CONNECTED {
                continue;
            }
            for &second in &signals[i + 1..] {
                if pins.gpio(second) == gpio {
                    return Err(PinMapError::DuplicateGpio { first, second, gpio });
                }
            }
        }

        Ok(Self { pins })
    }

    /// GPIO number assigned to `signal` (may be [`NOT_CONNECTED`] for
    /// PWDN/RESET).
    pub fn gpio(&self, signal: CameraSignal) -> i32 {
        self.pins.gpio(signal)
    }

    /// Whether `signal` is wired to a GPIO at all.
    pub fn is_connected(&self, signal: CameraSignal) -> bool {
        self.pins.gpio(signal) != NOT_CONNECTED
    }

    pub fn pwdn(&self) -> i32 {
        self.pins.pwdn
    }

    pub fn reset(&self) -> i32 {
        self.pins.reset
    }

    pub fn xclk(&self) -> i32 {
        self.pins.xclk
    }

    pub fn siod(&self) -> i32 {
        self.pins.siod
    }

    pub fn sioc(&self) -> i32 {
        self.pins.sioc
    }

    /// The 8-bit parallel data bus, Y2 (D0) first.
    pub fn data_pins(&self) -> [i32; 8] {
        [
            self.pins.y2, self.pins.y3, self.pins.y4, self.pins.y5,
            self.pins.y6, self.pins.y7, self.pins.y8, self.pins.y9,
        ]
    }

    pub fn vsync(&self) -> i32 {
        self.pins.vsync
    }

    pub fn href(&self) -> i32 {
        self.pins.href
    }

    pub fn pclk(&self) -> i32 {
        self.pins.pclk
    }
}
