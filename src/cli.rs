use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "cytomotion", version, about = "Cell motility statistics and export")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Export a whole culture (raw data + aggregate statistics)
    Culture(CultureArgs),
    /// Export one cell's per-frame series and statistics
    Individual(IndividualArgs),
    /// Parse a track file and print a summary without exporting
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct CultureArgs {
    #[arg(long, help = "Tracker output JSON file (optionally gzipped)")]
    pub input: PathBuf,

    #[arg(long, help = "Output file; .xls/.xlsx for spreadsheet, .csv for raw data")]
    pub out: PathBuf,

    #[arg(long, help = "Minutes between frames (overrides the track file)")]
    pub time_between_frames: Option<f64>,

    #[arg(long, help = "Imaging frame area, units^2 (overrides the track file)")]
    pub frame_area: Option<f64>,

    #[arg(long, help = "Unit label for output headers (overrides the track file)")]
    pub units: Option<String>,
}

#[derive(Debug, Args)]
pub struct IndividualArgs {
    #[arg(long, help = "Tracker output JSON file (optionally gzipped)")]
    pub input: PathBuf,

    #[arg(long, help = "Output file; .xls/.xlsx for spreadsheet, .csv for raw data")]
    pub out: PathBuf,

    #[arg(long, help = "Cell id to export")]
    pub cell: String,

    #[arg(long, help = "Sheet name for spreadsheet output (defaults to the cell id)")]
    pub sheet: Option<String>,

    #[arg(long, help = "Minutes between frames (overrides the track file)")]
    pub time_between_frames: Option<f64>,

    #[arg(long, help = "Unit label for output headers (overrides the track file)")]
    pub units: Option<String>,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "Tracker output JSON file (optionally gzipped)")]
    pub input: PathBuf,
}
