//! Piecewise-linear breakpoint interpolation.
//!
//! ```text
//!   I = (I_hi - I_lo) / (C_hi - C_lo) * (C_p - C_lo) + I_lo
//! ```
//!
//! `C_p` is the truncated concentration.  Readings above the last band
//! reuse that band's slope, so the result is unbounded above.

use log::trace;

use super::breakpoints::{Breakpoint, Pollutant};

/// Interpolate `concentration` against `pollutant`'s table.
pub fn interpolate(concentration: f64, pollutant: Pollutant) -> i32 {
    let truncated = pollutant.truncate(concentration);
    interpolate_truncated(truncated, pollutant.breakpoints())
}

/// Interpolate an already-truncated concentration against `table`.
///
/// An empty table yields 0.
pub fn interpolate_truncated(truncated: f64, table: &[Breakpoint]) -> i32 {
    let band = match table.iter().find(|band| band.contains(truncated)) {
        Some(band) => band,
        None => match table.last() {
            Some(last) => {
                trace!(
                    "concentration {truncated} beyond table max {}; extrapolating",
                    last.conc_hi
                );
                last
            }
            None => return 0,
        },
    };

    let aqi = band.slope() * (truncated - band.conc_lo) + f64::from(band.aqi_lo);
    // f64::round is half-away-from-zero; the cast saturates on overflow.
    aqi.round() as i32
}
