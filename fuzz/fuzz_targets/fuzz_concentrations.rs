//! Fuzz target: the three AQI operations on raw bit patterns
//!
//! Every f64, NaN and infinities included, must yield a result whose
//! category agrees with its AQI.
//!
//! cargo fuzz run fuzz_concentrations

#![no_main]

use epa_aqi::{Category, calculate_overall_aqi, calculate_pm10_aqi, calculate_pm25_aqi};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [u8; 16]| {
    let (lo, hi) = data.split_at(8);
    let pm25 = f64::from_le_bytes(lo.try_into().unwrap_or_default());
    let pm10 = f64::from_le_bytes(hi.try_into().unwrap_or_default());

    let a = calculate_pm25_aqi(pm25);
    let b = calculate_pm10_aqi(pm10);
    let overall = calculate_overall_aqi(pm25, pm10);

    assert!(a.aqi >= 0 && b.aqi >= 0);
    assert_eq!(overall.aqi, a.aqi.max(b.aqi));
    for r in [a, b, overall] {
        assert_eq!(r.category, Category::classify(r.aqi));
    }
});
