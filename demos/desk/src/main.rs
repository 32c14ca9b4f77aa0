//! desk — run one registration-desk day and print the result.
//!
//! ```text
//! desk                     # default profile: 1000 patrons, 5 windows, 10 h, 4m30s
//! desk config.json         # any subset of DeskConfig fields, rest default
//! desk config.json --json  # emit the final snapshot as JSON
//! RUST_LOG=trace desk      # log every processed event
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use rd_core::time::format_secs;
use rd_core::{DeskConfig, PatronId, SimTime, WindowId};
use rd_sim::{DeskSnapshot, DurationSummary, SimBuilder, SimObserver};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "desk", about = "Run one registration-desk day")]
struct Args {
    /// JSON file with any subset of the desk configuration fields.
    config: Option<PathBuf>,

    /// Print the final snapshot as JSON instead of the text summary.
    #[arg(long)]
    json: bool,
}

// ── Progress observer ─────────────────────────────────────────────────────────

/// Logs a line each time a new longest line appears.
#[derive(Default)]
struct PeakLogger {
    peak: usize,
}

impl SimObserver for PeakLogger {
    fn on_arrival(&mut self, time: SimTime, _patron: PatronId, window: WindowId, line_len: usize) {
        if line_len > self.peak {
            self.peak = line_len;
            info!("{time}: new longest line {line_len} at {window}");
        }
    }

    fn on_complete(&mut self, final_time: SimTime) {
        info!("last patron left at {final_time}");
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn render(snapshot: &DeskSnapshot) {
    for (i, line) in snapshot.windows.iter().enumerate() {
        let head = line.first().map(PatronId::to_string).unwrap_or_default();
        println!("W{i:02}] {head}{}", " @@@@".repeat(line.len().saturating_sub(1)));
    }
    println!("---------------------------");
    print_summary("Service", &snapshot.service);
    print_summary("Wait in line", &snapshot.wait);
    println!("Longest line : {}", snapshot.max_line_length);
    println!("Registrants  : {}", snapshot.departures);
}

fn print_summary(label: &str, s: &DurationSummary) {
    let fmt = |v: Option<u64>| v.map_or_else(|| "no data yet".to_string(), format_secs);
    println!("{label}");
    println!("  shortest   : {}", fmt(s.shortest));
    println!("  longest    : {}", fmt(s.longest));
    println!("  average    : {}", fmt(s.average.map(|a| a.round() as u64)));
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config: DeskConfig = match &args.config {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => DeskConfig::default(),
    };

    let mut sim = SimBuilder::new(config).build()?;
    info!(
        "{} patrons (expected {}), {} windows",
        sim.patron_count(),
        sim.config().expected_patrons,
        sim.config().window_count,
    );

    let t0 = Instant::now();
    let snapshot = sim.run(&mut PeakLogger::default())?;
    info!("simulated in {:.1} ms", t0.elapsed().as_secs_f64() * 1e3);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        render(&snapshot);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_accept_path_and_json_flag() {
        let args = Args::try_parse_from(["desk", "day.json", "--json"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("day.json")));
        assert!(args.json);

        let bare = Args::try_parse_from(["desk"]).unwrap();
        assert!(bare.config.is_none());
        assert!(!bare.json);
    }

    #[test]
    fn unknown_flag_rejected() {
        assert!(Args::try_parse_from(["desk", "--fast"]).is_err());
    }
}
