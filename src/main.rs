//! epa-aqi: host CLI around the AQI engine
//!
//! ```text
//! epa-aqi <pm25> <pm10>                        overall AQI for two concentrations (µg/m³)
//! epa-aqi --status [--atm] [--average] < doc   annotate a PurpleAir status document
//! ```
//!
//! Results go to stdout as JSON; logs go to stderr, filtered by `RUST_LOG`
//! (default info).
#![deny(unused_must_use)]

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use epa_aqi::annotate::annotate;
use epa_aqi::config::{AnnotateConfig, ConcentrationSource};
use epa_aqi::status::SensorStatus;
use epa_aqi::telemetry::{field_map, log_summary};

// ── Arguments ─────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "epa-aqi",
    version,
    about = "US EPA AQI from PM2.5 / PM10 concentrations",
    allow_negative_numbers = true
)]
struct Cli {
    /// Read a PurpleAir status document from stdin
    #[arg(long, conflicts_with_all = ["pm25", "pm10"])]
    status: bool,

    /// Use atmospheric (`atm`) instead of `cf_1` concentrations
    #[arg(long, requires = "status")]
    atm: bool,

    /// Combined reading = mean of channels A and B
    #[arg(long, requires = "status")]
    average: bool,

    /// PM2.5 concentration in µg/m³
    #[arg(required_unless_present = "status")]
    pm25: Option<f64>,

    /// PM10 concentration in µg/m³
    #[arg(required_unless_present = "status")]
    pm10: Option<f64>,
}

impl Cli {
    fn annotate_config(&self) -> AnnotateConfig {
        AnnotateConfig {
            source: if self.atm {
                ConcentrationSource::Atm
            } else {
                ConcentrationSource::Cf1
            },
            average_channels: self.average,
        }
    }
}

// ── Modes ─────────────────────────────────────────────────────

fn run_concentrations(pm25: f64, pm10: f64) -> Result<String> {
    let result = epa_aqi::calculate_overall_aqi(pm25, pm10);
    debug!("pm25={pm25} pm10={pm10} -> {result:?}");
    Ok(serde_json::to_string_pretty(&result)?)
}

fn run_status(doc: &str, config: &AnnotateConfig) -> Result<String> {
    let status = SensorStatus::from_json(doc).context("decoding status document")?;
    status.validate().context("validating status document")?;

    let aqi = annotate(&status, config);
    log_summary(&status, &aqi);
    Ok(serde_json::to_string_pretty(&field_map(&aqi))?)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let output = match (cli.pm25, cli.pm10) {
        (Some(pm25), Some(pm10)) if !cli.status => run_concentrations(pm25, pm10)?,
        _ => {
            let mut doc = String::new();
            io::stdin()
                .read_to_string(&mut doc)
                .context("reading status document from stdin")?;
            run_status(&doc, &cli.annotate_config())?
        }
    };

    println!("{output}");
    Ok(())
}
