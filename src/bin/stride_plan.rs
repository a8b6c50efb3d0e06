// ABOUTME: stride-plan CLI building a training plan from a CSV plan file
// ABOUTME: Takes zone paces or reference performances, prints the plan or weekly summaries as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Command line front end for the planner.
//!
//! Usage:
//! ```bash
//! # Explicit zone paces
//! stride-plan plan.csv --start-date 2025-03-03 --mas 3:30 --easy 5:30 \
//!     --five-k 3:50 --ten-k 4:00 --semi-marathon 4:15 --marathon 4:30
//!
//! # Derive the profile from race results (distance in meters : time in seconds)
//! stride-plan plan.csv --start-date 2025-03-03 --performance 10000:2400 --performance 21097:5280
//!
//! # Only print weekly totals
//! stride-plan plan.csv --start-date 2025-03-03 --performance 5000:1140 --summary
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use stride_core::models::{AthletePaceProfile, PaceZone, Performance};
use stride_core::Pace;
use stride_planner::config::PlannerConfig;
use stride_planner::logging::{LogWriter, LoggingConfig};
use stride_planner::pace_calculator::{
    derive_pace_profile, HttpPaceCalculator, LocalPaceCalculator,
};
use stride_planner::parsers::PlanLoader;
use stride_planner::planning::PlanBuilder;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "stride-plan",
    about = "Build a running training plan",
    long_about = "Schedules the workouts of a CSV plan file week by week and estimates their distance and duration from an athlete pace profile."
)]
struct Cli {
    /// CSV plan file
    plan: PathBuf,

    /// First day of the plan (moved back to its Monday), YYYY-MM-DD
    #[arg(long)]
    start_date: NaiveDate,

    /// Maximal aerobic speed pace (m:ss per km)
    #[arg(long)]
    mas: Option<Pace>,

    /// 5K pace
    #[arg(long)]
    five_k: Option<Pace>,

    /// 10K pace
    #[arg(long)]
    ten_k: Option<Pace>,

    /// Half marathon pace
    #[arg(long)]
    semi_marathon: Option<Pace>,

    /// Marathon pace
    #[arg(long)]
    marathon: Option<Pace>,

    /// Easy pace
    #[arg(long)]
    easy: Option<Pace>,

    /// Reference performance as DISTANCE_METERS:SECONDS (repeatable)
    #[arg(long = "performance", value_parser = parse_performance)]
    performances: Vec<Performance>,

    /// Print weekly summaries instead of the full plan
    #[arg(long)]
    summary: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Cli {
    fn explicit_paces(&self) -> [(PaceZone, Option<Pace>); 6] {
        [
            (PaceZone::MasPace, self.mas),
            (PaceZone::FiveKPace, self.five_k),
            (PaceZone::TenKPace, self.ten_k),
            (PaceZone::SemiMarathonPace, self.semi_marathon),
            (PaceZone::MarathonPace, self.marathon),
            (PaceZone::EasyPace, self.easy),
        ]
    }
}

fn parse_performance(value: &str) -> Result<Performance, String> {
    let (distance, time) = value
        .split_once(':')
        .ok_or_else(|| format!("expected DISTANCE:SECONDS, got '{value}'"))?;
    let distance: f64 = distance
        .trim()
        .parse()
        .map_err(|_| format!("invalid distance '{distance}'"))?;
    let time: f64 = time
        .trim()
        .parse()
        .map_err(|_| format!("invalid time '{time}'"))?;
    Performance::new(distance, time).map_err(|e| e.to_string())
}

async fn resolve_profile(cli: &Cli, config: &PlannerConfig) -> Result<AthletePaceProfile> {
    let mut profile = if cli.performances.is_empty() {
        AthletePaceProfile::default()
    } else if let Some(remote) = HttpPaceCalculator::from_config(&config.pace_calculator)? {
        info!(url = remote.base_url(), "Deriving paces with the remote pace calculator");
        derive_pace_profile(&remote, &cli.performances, &config.profile).await?
    } else {
        info!("Deriving paces with the local Riegel model");
        derive_pace_profile(&LocalPaceCalculator, &cli.performances, &config.profile).await?
    };

    // explicit flags override derived paces
    for (zone, pace) in cli.explicit_paces() {
        if let Some(pace) = pace {
            profile = profile.with_pace(zone, pace);
        }
    }

    // other zones are checked per workout, only when a workout uses them
    if profile.require_zones([PaceZone::EasyPace]).is_err() {
        bail!("missing easy pace: pass --easy or at least one --performance");
    }
    Ok(profile)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env().with_writer(LogWriter::Stderr);
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let config = PlannerConfig::from_env();
    config.validate().context("invalid planner configuration")?;

    let report = PlanLoader::new(config.csv).load_file(&cli.plan)?;
    for row in &report.invalid_rows {
        warn!(line = row.line, error = %row.error, "Row skipped");
    }
    if report.descriptors.is_empty() {
        bail!("no valid workouts in {}", cli.plan.display());
    }

    let profile = resolve_profile(&cli, &config).await?;
    let plan = PlanBuilder::new(cli.start_date, profile)
        .with_estimator_config(&config.estimator)
        .build(&report.descriptors)?;

    let output = if cli.summary {
        serde_json::to_string_pretty(&plan.week_summaries())?
    } else {
        serde_json::to_string_pretty(&plan)?
    };
    println!("{output}");
    Ok(())
}
