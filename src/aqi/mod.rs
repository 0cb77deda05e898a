//! US EPA Air Quality Index engine for particulate matter.
//!
//! ```text
//!   concentration ──▶ truncate ──▶ breakpoint band ──▶ interpolate ──▶ AQI
//!                                                                      │
//!                                   category / colour / advisory ◀─────┘
//! ```
//!
//! Every function here is pure and infallible: any `f64` input produces a
//! defined [`AqiResult`].  The tables are immutable constants, safe to read
//! from any number of threads.

pub mod breakpoints;
pub mod category;
pub mod interpolate;

use serde::Serialize;

pub use breakpoints::{Breakpoint, Pollutant};
pub use category::{Category, SENSITIVE_GROUPS};

/// Outcome of one AQI evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AqiResult {
    pub aqi: i32,
    pub category: Category,
    /// CSS `rgb()` string for `category`.
    pub color: &'static str,
    /// Empty unless `aqi > 100`.
    pub sensitive_group: &'static str,
    /// Pollutant whose table produced `aqi`.
    pub pollutant: Pollutant,
}

impl AqiResult {
    /// True when the sensitive-group advisory applies.
    pub fn is_sensitive_group_alert(&self) -> bool {
        !self.sensitive_group.is_empty()
    }
}

/// Evaluate one pollutant reading.
pub fn evaluate(concentration: f64, pollutant: Pollutant) -> AqiResult {
    let aqi = interpolate::interpolate(concentration, pollutant);
    let category = Category::classify(aqi);
    AqiResult {
        aqi,
        category,
        color: category.color(),
        sensitive_group: category::sensitive_group_note(aqi),
        pollutant,
    }
}

/// PM2.5 AQI for a concentration in µg/m³.
pub fn calculate_pm25_aqi(concentration: f64) -> AqiResult {
    evaluate(concentration, Pollutant::Pm25)
}

/// PM10 AQI for a concentration in µg/m³.
pub fn calculate_pm10_aqi(concentration: f64) -> AqiResult {
    evaluate(concentration, Pollutant::Pm10)
}

/// Reporting AQI: the more severe of PM2.5 and PM10.  Ties go to PM2.5.
pub fn calculate_overall_aqi(pm25: f64, pm10: f64) -> AqiResult {
    let pm25_result = calculate_pm25_aqi(pm25);
    let pm10_result = calculate_pm10_aqi(pm10);
    if pm25_result.aqi >= pm10_result.aqi {
        pm25_result
    } else {
        pm10_result
    }
}
