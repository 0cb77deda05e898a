//! Telemetry field mapping and poll summary logging.
//!
//! Writers on the other side (MQTT topics, line-protocol points) consume
//! the fixed field set produced by [`EpaAqi::fields`]; this module knows
//! nothing about transports.

use core::fmt;
use std::collections::BTreeMap;

use heapless::Vec;
use log::info;
use serde::Serialize;

use crate::annotate::{EpaAqi, StatusAqi};
use crate::status::SensorStatus;

pub const EPA_FIELD_COUNT: usize = 5;

/// A telemetry field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i32),
    Text(&'static str),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

pub type Field = (&'static str, FieldValue);

/// Field sets per reading name.
pub type FieldMap = BTreeMap<&'static str, BTreeMap<&'static str, FieldValue>>;

impl EpaAqi {
    /// `epa_aqi`, `epa_pm25_aqi`, `epa_pm10_aqi`, `epa_aqi_category`,
    /// `epa_aqi_color`, in that order.
    pub fn fields(&self) -> Vec<Field, EPA_FIELD_COUNT> {
        Vec::from_slice(&[
            ("epa_aqi", FieldValue::Int(self.aqi)),
            ("epa_pm25_aqi", FieldValue::Int(self.pm25_aqi)),
            ("epa_pm10_aqi", FieldValue::Int(self.pm10_aqi)),
            ("epa_aqi_category", FieldValue::Text(self.category.name())),
            ("epa_aqi_color", FieldValue::Text(self.color)),
        ])
        .unwrap_or_default()
    }
}

/// Field sets keyed `overall`, `a` and `b`; channels not reporting are left out.
pub fn field_map(aqi: &StatusAqi) -> FieldMap {
    [("overall", aqi.overall), ("a", aqi.a), ("b", aqi.b)]
        .into_iter()
        .filter_map(|(name, epa)| epa.map(|e| (name, e.fields().into_iter().collect())))
        .collect()
}

/// Log the per-poll summary at info level.
pub fn log_summary(status: &SensorStatus, aqi: &StatusAqi) {
    info!("Geo: {}", status.geo);
    info!("Sensor ID: {}", status.sensor_id);
    info!("Timestamp: {}", status.date_time);
    info!(
        "Sensor A: PurpleAir AQI {} ({})",
        status.a.purpleair_aqi, status.a.purpleair_color
    );
    info!(
        "Sensor B: PurpleAir AQI {} ({})",
        status.b.purpleair_aqi, status.b.purpleair_color
    );
    match &aqi.overall {
        Some(epa) => {
            info!(
                "US EPA AQI: {} ({} - {}) dominant={}",
                epa.aqi, epa.category, epa.color, epa.dominant
            );
            info!("US EPA PM2.5 AQI: {}, PM10 AQI: {}", epa.pm25_aqi, epa.pm10_aqi);
        }
        None => info!("US EPA AQI: no channel reporting"),
    }
}
