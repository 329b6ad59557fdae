/// Host-side test modules
///
/// Test items:
/// 1. Wiring-table correctness for the ESP32 Wrover board
/// 2. PinMap validation (sentinels, range, duplicates)
/// 3. Capture parameter bounds and config loading

pub mod pin_map_tests;
