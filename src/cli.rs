//! Command-Line Interface Module
//!
//! Handles argument parsing and validation for suntimes.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use serde::Deserialize;

use crate::config::ConfigFile;
use crate::date::CalendarDate;
use crate::geo::{self, GeoPosition};
use crate::solar::TwilightKind;

// ===================== CLI =====================

/// Sunrise, sunset and twilight times in UTC.
#[derive(Parser, Debug)]
#[command(author, version, about, infer_long_args = true)]
#[command(group(ArgGroup::new("kind").args(["standard", "civil", "nautical", "astronomical"])))]
pub struct Args {
    /// Observer latitude in decimal degrees (-90 to 90) [default: from config]
    #[arg(long, allow_hyphen_values = true, env = "SUNTIMES_LATITUDE")]
    #[arg(value_parser = parse_latitude)]
    pub latitude: Option<f64>,
    /// Observer longitude in decimal degrees (-180 to 180) [default: from config]
    #[arg(long, allow_hyphen_values = true, env = "SUNTIMES_LONGITUDE")]
    #[arg(value_parser = parse_longitude)]
    pub longitude: Option<f64>,

    /// Calculate sunrise and sunset times (default)
    #[arg(short = '0')]
    pub standard: bool,
    /// Calculate civil twilight times
    #[arg(short = '1')]
    pub civil: bool,
    /// Calculate nautical twilight times
    #[arg(short = '2')]
    pub nautical: bool,
    /// Calculate astronomical twilight times
    #[arg(short = '3')]
    pub astronomical: bool,

    /// Date to calculate for [default: today, UTC]
    #[arg(num_args = 3, value_names = ["YYYY", "MM", "DD"])]
    pub date: Option<Vec<i32>>,

    /// Read only this config file instead of /etc/<name>.conf and ~/.<name>rc
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Show build info from Cargo.lock at time of building
    #[arg(long)]
    pub show_build_info: bool,
}

impl Args {
    pub fn twilight_kind(&self) -> TwilightKind {
        if self.civil {
            TwilightKind::Civil
        } else if self.nautical {
            TwilightKind::Nautical
        } else if self.astronomical {
            TwilightKind::Astronomical
        } else {
            TwilightKind::Standard
        }
    }
}

// ===================== HELP FOOTER =====================

/// Location and date a bare invocation would use, shown under `--help`.
///
/// Environment values and `file` are applied the same way as for a real run;
/// anything unusable falls back to the compiled-in location.
pub fn defaults_footer(file: &ConfigFile) -> String {
    let lat = std::env::var("SUNTIMES_LATITUDE").ok().and_then(|s| parse_latitude(&s).ok());
    let lon = std::env::var("SUNTIMES_LONGITUDE").ok().and_then(|s| parse_longitude(&s).ok());
    let pos = file.resolve_position(lat, lon).unwrap_or_default();
    format_defaults(&pos, CalendarDate::today_utc().ok().as_ref())
}

fn format_defaults(pos: &GeoPosition, today: Option<&CalendarDate>) -> String {
    let date = match today {
        Some(d) => format!("{:04} {:02} {:02}", d.year(), d.month(), d.day()),
        None => "unknown".to_string(),
    };
    format!(
        "Default latitude:  {:+07.3}\nDefault longitude: {:+08.3}\nDefault date:      {}",
        pos.latitude(),
        pos.longitude(),
        date
    )
}

// Matches what build.rs serializes
#[derive(Debug, Deserialize)]
pub struct DepInfo {
    pub name: String,
    pub version: String,
    pub checksum: Option<String>,
    pub source: Option<String>,
}

// ===================== CLI VALUE PARSERS =====================

fn parse_latitude(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    geo::check_latitude(v).map_err(|e| e.to_string())
}

fn parse_longitude(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    geo::check_longitude(v).map_err(|e| e.to_string())
}

// ===================== TESTS =====================
