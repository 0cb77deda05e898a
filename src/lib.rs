//! US EPA Air Quality Index for PurpleAir particulate readings.
//!
//! [`aqi`] is the pure conversion engine.  [`status`], [`annotate`] and
//! [`telemetry`] adapt a sensor's status document to it and flatten the
//! result into telemetry fields for whatever publisher sits downstream.

#![deny(unused_must_use)]

pub mod annotate;
pub mod aqi;
pub mod config;
pub mod error;
pub mod status;
pub mod telemetry;

pub use aqi::{
    AqiResult, Category, Pollutant, calculate_overall_aqi, calculate_pm10_aqi, calculate_pm25_aqi,
};
pub use error::{Error, Result};
