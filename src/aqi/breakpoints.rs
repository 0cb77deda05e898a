//! EPA concentration breakpoint tables.
//!
//! Each pollutant owns one ordered, contiguous table of bands mapping a
//! closed concentration range onto a closed AQI range.  The literal values
//! are the regulatory breakpoints and must not be re-derived.
//!
//! ```text
//!   PM2.5 (µg/m³, 1 dp)        PM10 (µg/m³, integer)      AQI
//!   ─────────────────────      ─────────────────────      ─────────
//!     0.0 –  12.0                 0 –  54                   0 –  50
//!    12.1 –  35.4                55 – 154                  51 – 100
//!    35.5 –  55.4               155 – 254                 101 – 150
//!    55.5 – 150.4               255 – 354                 151 – 200
//!   150.5 – 250.4               355 – 424                 201 – 300
//!   250.5 – 350.4               425 – 504                 301 – 400
//!   350.5 – 500.4               505 – 604                 401 – 500
//! ```

use core::fmt;

use serde::Serialize;

/// Values this far below a truncation step are treated as the step itself,
/// so binary representation error never drops a reading into the band below.
const TRUNCATION_EPSILON: f64 = 1e-9;

/// One EPA band: `[conc_lo, conc_hi] → [aqi_lo, aqi_hi]`, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// Lowest concentration in the band (µg/m³).
    pub conc_lo: f64,
    /// Highest concentration in the band (µg/m³).
    pub conc_hi: f64,
    /// AQI at `conc_lo`.
    pub aqi_lo: i32,
    /// AQI at `conc_hi`.
    pub aqi_hi: i32,
}

impl Breakpoint {
    const fn new(conc_lo: f64, conc_hi: f64, aqi_lo: i32, aqi_hi: i32) -> Self {
        Self {
            conc_lo,
            conc_hi,
            aqi_lo,
            aqi_hi,
        }
    }

    /// True if `concentration` lies inside this band (inclusive).
    pub fn contains(&self, concentration: f64) -> bool {
        concentration >= self.conc_lo && concentration <= self.conc_hi
    }

    /// AQI units per µg/m³ across this band.
    pub fn slope(&self) -> f64 {
        f64::from(self.aqi_hi - self.aqi_lo) / (self.conc_hi - self.conc_lo)
    }
}

pub const PM25_BREAKPOINTS: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 12.0, 0, 50),      // Good
    Breakpoint::new(12.1, 35.4, 51, 100),   // Moderate
    Breakpoint::new(35.5, 55.4, 101, 150),  // Unhealthy for Sensitive Groups
    Breakpoint::new(55.5, 150.4, 151, 200), // Unhealthy
    Breakpoint::new(150.5, 250.4, 201, 300), // Very Unhealthy
    Breakpoint::new(250.5, 350.4, 301, 400), // Hazardous
    Breakpoint::new(350.5, 500.4, 401, 500), // Hazardous
];

pub const PM10_BREAKPOINTS: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 54.0, 0, 50),      // Good
    Breakpoint::new(55.0, 154.0, 51, 100),  // Moderate
    Breakpoint::new(155.0, 254.0, 101, 150), // Unhealthy for Sensitive Groups
    Breakpoint::new(255.0, 354.0, 151, 200), // Unhealthy
    Breakpoint::new(355.0, 424.0, 201, 300), // Very Unhealthy
    Breakpoint::new(425.0, 504.0, 301, 400), // Hazardous
    Breakpoint::new(505.0, 604.0, 401, 500), // Hazardous
];

/// Pollutant kind.  Each variant carries its own table and truncation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Pollutant {
    #[serde(rename = "pm2.5")]
    Pm25,
    #[serde(rename = "pm10")]
    Pm10,
}

impl Pollutant {
    /// The EPA breakpoint table for this pollutant.
    pub const fn breakpoints(self) -> &'static [Breakpoint] {
        match self {
            Self::Pm25 => &PM25_BREAKPOINTS,
            Self::Pm10 => &PM10_BREAKPOINTS,
        }
    }

    /// Truncation steps per µg/m³: PM2.5 keeps one decimal, PM10 none.
    const fn steps_per_unit(self) -> f64 {
        match self {
            Self::Pm25 => 10.0,
            Self::Pm10 => 1.0,
        }
    }

    /// Truncate (never round) a raw reading to the reporting precision.
    ///
    /// Negative readings and NaN clamp to zero so they land in the first
    /// band.
    pub fn truncate(self, concentration: f64) -> f64 {
        let steps = self.steps_per_unit();
        let clamped = concentration.max(0.0);
        (clamped * steps + TRUNCATION_EPSILON).floor() / steps
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pm25 => write!(f, "PM2.5"),
            Self::Pm10 => write!(f, "PM10"),
        }
    }
}
