// src/cli.rs
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::date::DateSpec;
use crate::hemisphere::Hemisphere;

#[derive(Parser)]
#[command(name = "nsidc0803")]
#[command(about = "Generate NSIDC-0803 daily sea ice concentration NetCDF files")]
pub struct Cli {
    /// Directory searched for binary input files
    #[arg(short = 'b', long)]
    pub input_dir: Option<PathBuf>,

    /// Root directory for NetCDF output
    #[arg(short = 'o', long)]
    pub output_dir: Option<PathBuf>,

    /// CDL template file (bundled template when omitted)
    #[arg(short = 't', long)]
    pub template: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// First date to process (YYYYMMDD)
    #[arg(short = 's', long, value_parser = parse_date)]
    pub start_date: DateSpec,

    /// Last date to process (YYYYMMDD), defaults to start date
    #[arg(short = 'e', long, value_parser = parse_date)]
    pub end_date: Option<DateSpec>,

    /// Hemisphere to process
    #[arg(long, value_enum, default_value = "both")]
    pub hemisphere: HemisphereArg,

    /// Concurrent conversions (defaults to the available cores)
    #[arg(short = 'j', long)]
    pub jobs: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_date(s: &str) -> Result<DateSpec, String> {
    DateSpec::parse_compact(s).map_err(|e| format!("bad date {s:?} (expected YYYYMMDD): {e}"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HemisphereArg {
    North,
    South,
    Both,
}

impl HemisphereArg {
    pub fn hemispheres(self) -> Vec<Hemisphere> {
        match self {
            HemisphereArg::North => vec![Hemisphere::North],
            HemisphereArg::South => vec![Hemisphere::South],
            HemisphereArg::Both => Hemisphere::ALL.to_vec(),
        }
    }
}
