//! One-shot CLI: load a profile file, synthesize the current week's
//! spending, and print the day-by-hour heatmap.

use std::{env, path::PathBuf, process};

use chrono::{Datelike, Duration, Local, NaiveDate};
use colored::Colorize;
use rand::{rngs::StdRng, SeedableRng};

use spending_core::{
    errors::SpendingError,
    generator::{self, DEFAULT_PROFILE},
    heatmap::HeatmapGrid,
    profile::ProfileStore,
};

const USAGE: &str = "Usage: spending_core_cli [--profiles <path>] [--profile <name>] \
[--start <YYYY-MM-DD>] [--seed <u64>]";

struct CliArgs {
    profiles: PathBuf,
    profile: String,
    start: Option<NaiveDate>,
    seed: Option<u64>,
}

fn parse_args() -> Result<CliArgs, String> {
    let mut parsed = CliArgs {
        profiles: PathBuf::from("profiles.json"),
        profile: DEFAULT_PROFILE.to_string(),
        start: None,
        seed: None,
    };

    let mut args = env::args().skip(1);
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--profiles" => {
                let value = args.next().ok_or("--profiles needs a path")?;
                parsed.profiles = PathBuf::from(value);
            }
            "--profile" => {
                parsed.profile = args.next().ok_or("--profile needs a name")?;
            }
            "--start" => {
                let value = args.next().ok_or("--start needs a date")?;
                let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                    .map_err(|err| format!("invalid --start date `{value}`: {err}"))?;
                parsed.start = Some(date);
            }
            "--seed" => {
                let value = args.next().ok_or("--seed needs a number")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|err| format!("invalid --seed `{value}`: {err}"))?;
                parsed.seed = Some(seed);
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                process::exit(0);
            }
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(parsed)
}

/// Most recent Monday, today included.
fn current_week_start() -> NaiveDate {
    let today = Local::now().date_naive();
    today - Duration::days(i64::from(today.weekday().num_days_from_monday()))
}

fn run(args: CliArgs) -> Result<(), SpendingError> {
    let store = ProfileStore::load(&args.profiles)?;
    let start = args.start.unwrap_or_else(current_week_start);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let entries = generator::generate(&mut rng, &store, start, &args.profile, None)?;
    tracing::info!(
        profile = args.profile.as_str(),
        week_start = %start,
        count = entries.len(),
        "generated spending entries"
    );

    let grid = HeatmapGrid::from_entries(&entries);
    render_grid(&grid, start, &args.profile);
    Ok(())
}

fn render_grid(grid: &HeatmapGrid, start: NaiveDate, profile: &str) {
    println!(
        "{}",
        format!("Spending heatmap, profile `{profile}`, week of {start}").bold()
    );

    let mut header = format!("{:>10}", "");
    for hour in 0..24 {
        header.push_str(&format!("{:>7}", format!("{hour}:00")));
    }
    println!("{}", header.dimmed());

    let max = grid.max_cell();
    for (day, cells) in grid.rows() {
        let mut line = format!("{:>10}", day.as_str());
        for &amount in cells {
            line.push_str(&format!("{}", shade(amount, max)));
        }
        println!("{line}");
    }
    println!("week total: {:.2}", grid.week_total());
}

fn shade(amount: f64, max: f64) -> colored::ColoredString {
    if amount == 0.0 {
        return format!("{:>7}", "-").dimmed();
    }
    let cell = format!("{amount:>7.2}");
    let ratio = if max > 0.0 { amount / max } else { 0.0 };
    if ratio < 0.33 {
        cell.yellow()
    } else if ratio < 0.66 {
        cell.bright_yellow()
    } else {
        cell.bright_red()
    }
}

fn main() {
    spending_core::init();

    let args = parse_args().unwrap_or_else(|err| {
        eprintln!("{} {}", "ERROR:".red().bold(), err);
        process::exit(2);
    });

    if let Err(err) = run(args) {
        eprintln!("{} {}", "ERROR:".red().bold(), err);
        process::exit(1);
    }
}
