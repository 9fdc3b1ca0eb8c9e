//! Output Formatting Module
//!
//! Renders a calculation result as the single stdout line, or as JSON.

use serde::Serialize;

use crate::cli::DepInfo;
use crate::date::CalendarDate;
use crate::solar::{SolarEvent, TwilightKind};

// ===================== PLAIN OUTPUT =====================

/// `HH:MM:SS,HH:MM:SS` for rise,set, or one of the two sentinel words.
pub fn format_event(event: &SolarEvent) -> String {
    match event {
        SolarEvent::Times { rise, set } => format!("{},{}", rise, set),
        SolarEvent::NeverRises => "NeverRises.".to_string(),
        SolarEvent::NeverSets => "NeverSets.".to_string(),
    }
}

// ===================== JSON OUTPUT =====================

/// One query and its answer, for `--json`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub kind: TwilightKind,
    pub date: &'a CalendarDate,
    pub latitude: f64,
    pub longitude: f64,
    pub event: &'a SolarEvent,
}

pub fn format_json(report: &Report<'_>) -> serde_json::Result<String> {
    serde_json::to_string(report)
}

// ===================== BUILD INFO =====================

pub fn print_build_info(git_hash: &str, deps: &[DepInfo]) {
    println!("Built from Git commit: {}\n", git_hash);
    println!("Found {} dependencies.", deps.len());
    for dep in deps {
        println!("- {} v{}", dep.name, dep.version);
        if let Some(sum) = &dep.checksum {
            println!("    Checksum: {}", sum);
        }
        if let Some(src) = &dep.source {
            println!("    Source:   {}", src);
        }
    }
}

// ===================== TESTS =====================
