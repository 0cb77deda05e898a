//! PurpleAir local status document.
//!
//! The sensor's `/json` endpoint reports its two laser counters side by
//! side: channel A in the unsuffixed fields, channel B in the `_b` fields.
//! [`SensorStatus`] decodes that flat document and regroups it per channel.
//! Missing numeric fields decode as 0 and unknown fields are ignored.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ConcentrationSource;
use crate::error::{ReadingError, Result};

/// Laser counter channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Channel {
    A,
    B,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// Mass concentrations for one channel and one correction, in µg/m³.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Concentrations {
    pub pm1_0: f64,
    pub pm2_5: f64,
    pub pm10_0: f64,
}

impl Concentrations {
    /// A channel whose laser has failed reports zeros for everything.
    pub fn is_reporting(&self) -> bool {
        self.pm2_5 > 0.0 || self.pm10_0 > 0.0
    }

    pub fn mean(a: &Self, b: &Self) -> Self {
        Self {
            pm1_0: (a.pm1_0 + b.pm1_0) / 2.0,
            pm2_5: (a.pm2_5 + b.pm2_5) / 2.0,
            pm10_0: (a.pm10_0 + b.pm10_0) / 2.0,
        }
    }
}

/// Everything one laser channel reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChannelReading {
    pub cf_1: Concentrations,
    pub atm: Concentrations,
    /// The sensor's own PM2.5 AQI estimate.
    pub purpleair_aqi: i32,
    /// The sensor's own colour for `purpleair_aqi`.
    pub purpleair_color: String,
}

impl ChannelReading {
    pub fn concentrations(&self, source: ConcentrationSource) -> Concentrations {
        match source {
            ConcentrationSource::Cf1 => self.cf_1,
            ConcentrationSource::Atm => self.atm,
        }
    }

    fn validate(&self, channel: Channel, suffix: Suffix) -> Result<()> {
        let fields = [
            (self.cf_1.pm1_0, suffix.pick("pm1_0_cf_1", "pm1_0_cf_1_b")),
            (self.cf_1.pm2_5, suffix.pick("pm2_5_cf_1", "pm2_5_cf_1_b")),
            (self.cf_1.pm10_0, suffix.pick("pm10_0_cf_1", "pm10_0_cf_1_b")),
            (self.atm.pm1_0, suffix.pick("pm1_0_atm", "pm1_0_atm_b")),
            (self.atm.pm2_5, suffix.pick("pm2_5_atm", "pm2_5_atm_b")),
            (self.atm.pm10_0, suffix.pick("pm10_0_atm", "pm10_0_atm_b")),
        ];
        for (value, field) in fields {
            if !value.is_finite() {
                return Err(ReadingError::NonFinite { channel, field }.into());
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy)]
enum Suffix {
    None,
    B,
}

impl Suffix {
    fn pick(self, plain: &'static str, suffixed: &'static str) -> &'static str {
        match self {
            Self::None => plain,
            Self::B => suffixed,
        }
    }
}

/// A decoded status document, regrouped per channel.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(from = "RawStatus")]
pub struct SensorStatus {
    /// MAC address of the device.
    pub sensor_id: String,
    /// UTC timestamp as reported by the device.
    pub date_time: String,
    /// Device name.
    pub geo: String,
    pub a: ChannelReading,
    pub b: ChannelReading,
}

impl SensorStatus {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn channel(&self, channel: Channel) -> &ChannelReading {
        match channel {
            Channel::A => &self.a,
            Channel::B => &self.b,
        }
    }

    /// Reject documents carrying NaN or infinite concentrations.
    pub fn validate(&self) -> Result<()> {
        self.a.validate(Channel::A, Suffix::None)?;
        self.b.validate(Channel::B, Suffix::B)
    }
}

// ---------------------------------------------------------------------------
// Wire shape
// ---------------------------------------------------------------------------

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawStatus {
    #[serde(rename = "SensorId")]
    sensor_id: String,
    #[serde(rename = "DateTime")]
    date_time: String,
    #[serde(rename = "Geo")]
    geo: String,

    #[serde(rename = "p25aqic")]
    pm25_aqi_color: String,
    #[serde(rename = "pm2.5_aqi")]
    pm25_aqi: i32,
    pm1_0_cf_1: f64,
    pm2_5_cf_1: f64,
    pm10_0_cf_1: f64,
    pm1_0_atm: f64,
    pm2_5_atm: f64,
    pm10_0_atm: f64,

    #[serde(rename = "p25aqic_b")]
    pm25_aqi_color_b: String,
    #[serde(rename = "pm2.5_aqi_b")]
    pm25_aqi_b: i32,
    pm1_0_cf_1_b: f64,
    pm2_5_cf_1_b: f64,
    pm10_0_cf_1_b: f64,
    pm1_0_atm_b: f64,
    pm2_5_atm_b: f64,
    pm10_0_atm_b: f64,
}

impl From<RawStatus> for SensorStatus {
    fn from(raw: RawStatus) -> Self {
        Self {
            sensor_id: raw.sensor_id,
            date_time: raw.date_time,
            geo: raw.geo,
            a: ChannelReading {
                cf_1: Concentrations {
                    pm1_0: raw.pm1_0_cf_1,
                    pm2_5: raw.pm2_5_cf_1,
                    pm10_0: raw.pm10_0_cf_1,
                },
                atm: Concentrations {
                    pm1_0: raw.pm1_0_atm,
                    pm2_5: raw.pm2_5_atm,
                    pm10_0: raw.pm10_0_atm,
                },
                purpleair_aqi: raw.pm25_aqi,
                purpleair_color: raw.pm25_aqi_color,
            },
            b: ChannelReading {
                cf_1: Concentrations {
                    pm1_0: raw.pm1_0_cf_1_b,
                    pm2_5: raw.pm2_5_cf_1_b,
                    pm10_0: raw.pm10_0_cf_1_b,
                },
                atm: Concentrations {
                    pm1_0: raw.pm1_0_atm_b,
                    pm2_5: raw.pm2_5_atm_b,
                    pm10_0: raw.pm10_0_atm_b,
                },
                purpleair_aqi: raw.pm25_aqi_b,
                purpleair_color: raw.pm25_aqi_color_b,
            },
        }
    }
}
