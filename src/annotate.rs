//! EPA AQI annotation of a sensor status document.
//!
//! For each laser channel, and for the combined reading, the reporting AQI
//! plus both per-pollutant sub-indices are computed.  Channels reporting
//! zeros for both PM2.5 and PM10 are skipped rather than scored as "Good".

use log::debug;
use serde::Serialize;

use crate::aqi::{self, Category, Pollutant};
use crate::config::AnnotateConfig;
use crate::status::{Channel, Concentrations, SensorStatus};

/// EPA AQI fields for one reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EpaAqi {
    /// Reporting AQI: max of `pm25_aqi` and `pm10_aqi`.
    pub aqi: i32,
    pub pm25_aqi: i32,
    pub pm10_aqi: i32,
    pub category: Category,
    pub color: &'static str,
    /// Pollutant that set `aqi`.
    pub dominant: Pollutant,
}

impl EpaAqi {
    pub fn from_concentrations(c: &Concentrations) -> Self {
        let overall = aqi::calculate_overall_aqi(c.pm2_5, c.pm10_0);
        Self {
            aqi: overall.aqi,
            pm25_aqi: aqi::calculate_pm25_aqi(c.pm2_5).aqi,
            pm10_aqi: aqi::calculate_pm10_aqi(c.pm10_0).aqi,
            category: overall.category,
            color: overall.color,
            dominant: overall.pollutant,
        }
    }
}

/// Annotation of a whole status document.  `None` = channel not reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusAqi {
    pub a: Option<EpaAqi>,
    pub b: Option<EpaAqi>,
    pub overall: Option<EpaAqi>,
}

pub fn annotate(status: &SensorStatus, config: &AnnotateConfig) -> StatusAqi {
    let a = status.a.concentrations(config.source);
    let b = status.b.concentrations(config.source);

    StatusAqi {
        a: annotate_channel(Channel::A, &a),
        b: annotate_channel(Channel::B, &b),
        overall: combined(&a, &b, config).map(|c| EpaAqi::from_concentrations(&c)),
    }
}

fn annotate_channel(channel: Channel, c: &Concentrations) -> Option<EpaAqi> {
    if c.is_reporting() {
        Some(EpaAqi::from_concentrations(c))
    } else {
        debug!("channel {channel} reports no particulate data; skipping");
        None
    }
}

/// The reading the combined AQI is computed from.
fn combined(
    a: &Concentrations,
    b: &Concentrations,
    config: &AnnotateConfig,
) -> Option<Concentrations> {
    if !config.average_channels {
        return a.is_reporting().then_some(*a);
    }
    match (a.is_reporting(), b.is_reporting()) {
        (true, true) => Some(Concentrations::mean(a, b)),
        (true, false) => Some(*a),
        (false, true) => Some(*b),
        (false, false) => None,
    }
}
