use log::{error, info};

use wrover_cam_config::{AppConfig, CameraSignal};

/// Loads the capture configuration and reports it.
///
/// A configuration error here means the wiring table or `cfg.toml` is wrong;
/// that is fatal, so the process exits non-zero instead of retrying.
fn main() -> anyhow::Result<()> {
    env_logger::try_init()?;

    let app_config = AppConfig::load().map_err(|e| {
        error!("configuration rejected: {}", e);
        anyhow::anyhow!("configuration rejected: {}", e)
    })?;

    let capture = &app_config.capture;
    let (width, height) = capture.frame_size().dimensions();
    info!(
        "capture config ready: {:?} ({}x{}) {:?}, XCLK {} Hz, {} frame buffer(s)",
        capture.frame_size(),
        width,
        height,
        capture.pixel_format(),
        capture.xclk_freq_hz(),
        capture.frame_buffer_count()
    );

    for signal in CameraSignal::ALL {
        let pin_map = capture.pin_map();
        if pin_map.is_connected(signal) {
            info!("  {:<5} -> GPIO {}", signal, pin_map.gpio(signal));
        } else {
            info!("  {:<5} -> not connected", signal);
        }
    }

    Ok(())
}
