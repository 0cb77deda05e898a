//! Fuzz target: `SensorStatus::from_json` → `annotate`
//!
//! Arbitrary bytes must either fail to decode with a typed error or
//! produce an annotation; nothing may panic.
//!
//! cargo fuzz run fuzz_status_document

#![no_main]

use epa_aqi::annotate::annotate;
use epa_aqi::config::{AnnotateConfig, ConcentrationSource};
use epa_aqi::status::SensorStatus;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    let Ok(status) = SensorStatus::from_json(text) else {
        return;
    };

    for source in [ConcentrationSource::Cf1, ConcentrationSource::Atm] {
        for average_channels in [true, false] {
            let config = AnnotateConfig {
                source,
                average_channels,
            };
            let out = annotate(&status, &config);
            if let Some(overall) = out.overall {
                assert_eq!(overall.fields().len(), 5);
                assert!(overall.aqi >= overall.pm25_aqi.min(overall.pm10_aqi));
            }
        }
    }
});
