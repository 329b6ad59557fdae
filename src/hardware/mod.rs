/// Hardware description modules
pub mod camera;
pub mod pins;

pub use camera::{CaptureConfig, CaptureConfigError, FrameSize, PixelFormat};
pub use pins::{CameraPins, CameraSignal, PinMap, PinMapError};
