// src/main.rs
use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod crs;
mod date;
mod error;
mod hemisphere;
mod io;
mod paths;
mod pipeline;
mod template;

use crate::cli::Cli;
use crate::config::Config;
use crate::date::date_range;
use crate::io::NcgenCompiler;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(dir) = &cli.input_dir {
        config.input_dir = dir.clone();
    }
    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(path) = &cli.template {
        config.template = Some(path.clone());
    }

    let template = match &config.template {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading template {}", path.display()))?,
        None => template::DEFAULT_TEMPLATE.to_string(),
    };

    if let Some(jobs) = cli.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .context("building worker pool")?;
    }

    let end_date = cli.end_date.unwrap_or(cli.start_date);
    let mut pairs = Vec::new();
    for date in date_range(cli.start_date, end_date) {
        for hemisphere in cli.hemisphere.hemispheres() {
            pairs.push((date, hemisphere));
        }
    }

    info!(
        input = %config.input_dir.display(),
        output = %config.output_dir.display(),
        conversions = pairs.len(),
        "processing {} through {}",
        cli.start_date,
        end_date,
    );

    let compiler = NcgenCompiler::default();

    // Pairs are independent: each writes one file under its own dated
    // directory, so the fan-out needs no shared state.
    let results: Vec<Result<()>> = pairs
        .par_iter()
        .map(|&(date, hemisphere)| {
            let record = paths::build_output_record(&config.output_dir, date, hemisphere);
            fs::create_dir_all(&record.directory)
                .with_context(|| format!("creating {}", record.directory.display()))?;

            pipeline::convert(&config, &template, date, hemisphere, &compiler)
                .map(|created| info!("created {}", created.path().display()))
                .with_context(|| format!("{hemisphere} {date}: conversion failed"))
        })
        .collect();

    let failures = results.iter().filter(|r| r.is_err()).count();
    for result in &results {
        if let Err(e) = result {
            error!("{e:#}");
        }
    }

    info!(
        "processing complete: {}/{} files created",
        results.len() - failures,
        results.len()
    );

    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}
