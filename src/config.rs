//! Annotation configuration
//!
//! Selects which concentrations of a status document feed the AQI engine
//! and how the two laser channels are combined.

use serde::{Deserialize, Serialize};

/// PurpleAir reports each size fraction twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcentrationSource {
    /// `cf_1`: indoor / factory calibration.
    #[default]
    Cf1,
    /// `atm`: outdoor atmospheric correction.
    Atm,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotateConfig {
    pub source: ConcentrationSource,
    /// Combined reading = mean of A and B when both report.  When false
    /// (the default), the combined reading is channel A alone.
    pub average_channels: bool,
}

impl Default for AnnotateConfig {
    fn default() -> Self {
        Self {
            source: ConcentrationSource::Cf1,
            average_channels: false,
        }
    }
}
