//! Shared status documents.

/// Healthy dual-channel sensor, moderate smoke.
pub const DUAL_CHANNEL: &str = r#"{
    "SensorId": "84:f3:eb:7b:c8:ee",
    "DateTime": "2026/10/14T06:38:00z",
    "Geo": "PurpleAir-c8ee",
    "Mem": 19640,
    "lat": 40.44,
    "long": -79.99,
    "current_temp_f": 71,
    "current_humidity": 38,
    "p25aqic": "rgb(255,126,0)",
    "pm2.5_aqi": 118,
    "pm1_0_cf_1": 28.1,
    "pm2_5_cf_1": 40.2,
    "pm10_0_cf_1": 48.0,
    "pm1_0_atm": 22.4,
    "pm2_5_atm": 33.0,
    "pm10_0_atm": 39.6,
    "p25aqic_b": "rgb(255,126,0)",
    "pm2.5_aqi_b": 124,
    "pm1_0_cf_1_b": 30.0,
    "pm2_5_cf_1_b": 44.8,
    "pm10_0_cf_1_b": 52.0,
    "pm1_0_atm_b": 24.0,
    "pm2_5_atm_b": 35.1,
    "pm10_0_atm_b": 42.2,
    "wlstate": "Connected",
    "ssid": "home"
}"#;

/// Channel B laser has failed and reports zeros.
pub const FAILED_CHANNEL_B: &str = r#"{
    "SensorId": "84:f3:eb:00:11:22",
    "Geo": "PurpleAir-1122",
    "pm2_5_cf_1": 5.0,
    "pm10_0_cf_1": 25.0,
    "pm2_5_cf_1_b": 0.0,
    "pm10_0_cf_1_b": 0.0
}"#;
