/// ESP32 Wrover wiring table tests
///
/// Test items:
/// 1. Literal GPIO values of the board preset
/// 2. Validation of sentinels, GPIO range, and duplicate assignments
#[cfg(test)]
mod pin_map_tests {
    use crate::hardware::pins::{
        CameraPins, CameraSignal, PinMap, PinMapError, GPIO_NUM_MAX, NOT_CONNECTED,
    };

    #[test]
    fn test_wrover_pin_configuration() {
        let pin_map = PinMap::new(CameraPins::esp32_wrover()).unwrap();

        // ESP32 Wrover dev board wiring
        assert_eq!(pin_map.pwdn(), NOT_CONNECTED);
        assert_eq!(pin_map.reset(), NOT_CONNECTED);
        assert_eq!(pin_map.xclk(), 21);
        assert_eq!(pin_map.siod(), 26);
        assert_eq!(pin_map.sioc(), 27);
        assert_eq!(pin_map.data_pins(), [4, 5, 18, 19, 36, 39, 34, 35]);
        assert_eq!(pin_map.vsync(), 25);
        assert_eq!(pin_map.href(), 23);
        assert_eq!(pin_map.pclk(), 22);
    }

    #[test]
    fn test_wrover_signal_accessors_match_raw_table() {
        let raw = CameraPins::esp32_wrover();
        let pin_map = PinMap::new(raw).unwrap();

        for signal in CameraSignal::ALL {
            assert_eq!(pin_map.gpio(signal), raw.gpio(signal));
        }
    }

    #[test]
    fn test_reading_twice_returns_same_value() {
        let pin_map = PinMap::new(CameraPins::esp32_wrover()).unwrap();

        for signal in CameraSignal::ALL {
            assert_eq!(pin_map.gpio(signal), pin_map.gpio(signal));
        }
    }

    #[test]
    fn test_non_sentinel_pins_are_pairwise_distinct() {
        let pin_map = PinMap::new(CameraPins::esp32_wrover()).unwrap();

        let mut seen = std::collections::HashSet::new();
        for signal in CameraSignal::ALL {
            let gpio = pin_map.gpio(signal);
            if gpio != NOT_CONNECTED {
                assert!(seen.insert(gpio), "GPIO {} assigned twice", gpio);
            }
        }
    }

    #[test]
    fn test_non_sentinel_pins_are_in_gpio_range() {
        let pin_map = PinMap::new(CameraPins::esp32_wrover()).unwrap();

        for signal in CameraSignal::ALL {
            let gpio = pin_map.gpio(signal);
            if gpio != NOT_CONNECTED {
                assert!((0..=GPIO_NUM_MAX).contains(&gpio));
            }
        }
    }

    #[test]
    fn test_pwdn_and_reset_accept_sentinel() {
        let pin_map = PinMap::new(CameraPins::esp32_wrover()).unwrap();

        assert!(!pin_map.is_connected(CameraSignal::Pwdn));
        assert!(!pin_map.is_connected(CameraSignal::Reset));
        assert!(pin_map.is_connected(CameraSignal::Xclk));
    }

    #[test]
    fn test_required_signals_reject_sentinel() {
        for signal in CameraSignal::ALL {
            if signal.allows_not_connected() {
                continue;
            }

            let mut pins = CameraPins::esp32_wrover();
            match signal {
                CameraSignal::Xclk => pins.xclk = NOT_CONNECTED,
                CameraSignal::Siod => pins.siod = NOT_CONNECTED,
                CameraSignal::Sioc => pins.sioc = NOT_CONNECTED,
                CameraSignal::Y9 => pins.y9 = NOT_CONNECTED,
                CameraSignal::Y8 => pins.y8 = NOT_CONNECTED,
                CameraSignal::Y7 => pins.y7 = NOT_CONNECTED,
                CameraSignal::Y6 => pins.y6 = NOT_CONNECTED,
                CameraSignal::Y5 => pins.y5 = NOT_CONNECTED,
                CameraSignal::Y4 => pins.y4 = NOT_CONNECTED,
                CameraSignal::Y3 => pins.y3 = NOT_CONNECTED,
                CameraSignal::Y2 => pins.y2 = NOT_CONNECTED,
                CameraSignal::Vsync => pins.vsync = NOT_CONNECTED,
                CameraSignal::Href => pins.href = NOT_CONNECTED,
                CameraSignal::Pclk => pins.pclk = NOT_CONNECTED,
                CameraSignal::Pwdn | CameraSignal::Reset => unreachable!(),
            }

            assert_eq!(
                PinMap::new(pins),
                Err(PinMapError::RequiredSignalNotConnected(signal)),
                "{} should be required",
                signal
            );
        }
    }

    #[test]
    fn test_gpio_above_range_is_rejected() {
        let mut pins = CameraPins::esp32_wrover();
        pins.xclk = GPIO_NUM_MAX + 1;

        assert_eq!(
            PinMap::new(pins),
            Err(PinMapError::GpioOutOfRange {
                signal: CameraSignal::Xclk,
                gpio: GPIO_NUM_MAX + 1,
            })
        );
    }

    #[test]
    fn test_negative_gpio_other_than_sentinel_is_rejected() {
        let mut pins = CameraPins::esp32_wrover();
        pins.pclk = -2;

        assert_eq!(
            PinMap::new(pins),
            Err(PinMapError::GpioOutOfRange {
                signal: CameraSignal::Pclk,
                gpio: -2,
            })
        );
    }

    #[test]
    fn test_duplicate_gpio_is_rejected() {
        let mut pins = CameraPins::esp32_wrover();
        pins.href = pins.vsync; // 25 twice

        assert_eq!(
            PinMap::new(pins),
            Err(PinMapError::DuplicateGpio {
                first: CameraSignal::Vsync,
                second: CameraSignal::Href,
                gpio: 25,
            })
        );
    }

    #[test]
    fn test_pwdn_on_a_real_gpio_is_accepted() {
        // Other boards do wire PWDN; the sentinel is optional, not mandatory.
        let mut pins = CameraPins::esp32_wrover();
        pins.pwdn = 32;

        let pin_map = PinMap::new(pins).unwrap();
        assert_eq!(pin_map.pwdn(), 32);
        assert!(pin_map.is_connected(CameraSignal::Pwdn));
    }

    #[test]
    fn test_duplicate_against_pwdn_is_rejected() {
        let mut pins = CameraPins::esp32_wrover();
        pins.pwdn = 21; // collides with XCLK

        assert_eq!(
            PinMap::new(pins),
            Err(PinMapError::DuplicateGpio {
                first: CameraSignal::Pwdn,
                second: CameraSignal::Xclk,
                gpio: 21,
            })
        );
    }

    #[test]
    fn test_signal_names() {
        assert_eq!(CameraSignal::Pwdn.name(), "PWDN");
        assert_eq!(CameraSignal::Y2.name(), "Y2");
        assert_eq!(CameraSignal::Pclk.to_string(), "PCLK");
        assert_eq!(CameraSignal::ALL.len(), 16);
    }
}
