pub mod report;

use crate::error::SuvError;
use crate::types::{ReadOptions, Target};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for suvcalc
#[derive(Parser, Debug)]
#[command(name = "suvcalc")]
#[command(about = "Compute SUV volumes from FDG-PET DICOM series")]
#[command(version)]
pub struct Cli {
    /// DICOM directory or single DICOM file
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output target: raw, suv_bw or suv_lbm
    #[arg(short, long, default_value = "suv_bw", value_parser = parse_target)]
    pub target: Target,

    /// Patient height in meters (required for suv_lbm)
    #[arg(long, value_name = "METERS")]
    pub height: Option<f64>,

    /// Search subdirectories for DICOM files
    #[arg(short, long)]
    pub recursive: bool,

    /// Keep slices produced by zero-fill interpolation along z
    #[arg(long)]
    pub keep_zip: bool,

    /// Process slices on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Output format
    #[arg(short, long, default_value = "max")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Reader configuration selected on the command line
    pub fn read_options(&self) -> ReadOptions {
        let mut options = ReadOptions::default()
            .with_target(self.target)
            .recursive(self.recursive)
            .omit_slice_zip(!self.keep_zip)
            .parallel(!self.sequential);
        options.patient_height_m = self.height;
        options
    }
}

fn parse_target(s: &str) -> Result<Target, SuvError> {
    s.parse()
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Maximum voxel value only
    Max,
    /// Human-readable text report
    Text,
    /// JSON format
    Json,
}
