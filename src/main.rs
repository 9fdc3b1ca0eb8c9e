use std::process;

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches};
use tracing::{debug, info};

mod cli;
mod config;
mod date;
mod error;
mod geo;
mod logging;
mod output;
mod solar;

use cli::{Args, DepInfo};
use date::CalendarDate;
use output::{Report, format_event, format_json};

// ===================== MAIN =====================

fn main() {
    let defaults = config::load(&config::default_search_paths()).unwrap_or_default();
    let matches = Args::command().after_help(cli::defaults_footer(&defaults)).get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    logging::init(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if args.show_build_info {
        const DEP_INFO_RAW: &str = include_str!(env!("LOCKED_DEPS_PATH"));
        let deps: Vec<DepInfo> =
            serde_json::from_str(DEP_INFO_RAW).context("embedded dependency list is corrupt")?;
        output::print_build_info(env!("APP_GIT_HASH"), &deps);
        return Ok(());
    }

    let file = match &args.config {
        Some(path) => config::read_required(path)?,
        None => config::load(&config::default_search_paths())?,
    };
    let pos = file.resolve_position(args.latitude, args.longitude)?;

    let date = match args.date.as_deref() {
        Some(&[y, m, d]) => CalendarDate::new(y, m, d).context("Invalid date!")?,
        Some(other) => anyhow::bail!("expected YYYY MM DD, got {} values", other.len()),
        None => CalendarDate::today_utc().context("system clock is outside the supported years")?,
    };

    let kind = args.twilight_kind();
    info!(lat = pos.latitude(), lon = pos.longitude(), %date, ?kind, "computing sun times");

    let event = solar::compute(kind, &pos, &date);
    debug!(?event, "computed");

    if args.json {
        let report = Report {
            kind,
            date: &date,
            latitude: pos.latitude(),
            longitude: pos.longitude(),
            event: &event,
        };
        println!("{}", format_json(&report)?);
    } else {
        println!("{}", format_event(&event));
    }
    Ok(())
}
