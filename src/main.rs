use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cytomotion::cli::{Cli, Commands, CultureArgs, IndividualArgs, ValidateArgs};
use cytomotion::export;
use cytomotion::io::tracks;
use cytomotion::stats::{culture_statistics, individual_statistics, StatisticsReport};
use cytomotion::track::SeriesTable;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Culture(args) => run_culture(args),
        Commands::Individual(args) => run_individual(args),
        Commands::Validate(args) => run_validate(args),
    }
}

fn run_culture(args: CultureArgs) -> Result<()> {
    let file = tracks::read_track_file(&args.input)?;
    let meta = tracks::resolve_meta(
        &file,
        args.time_between_frames,
        args.frame_area,
        args.units,
    )?;
    let (culture, warnings) = tracks::build_culture(&file)?;
    for warning in &warnings {
        tracing::warn!(%warning, "track file");
    }

    export::export_culture(&args.out, &culture, &meta)
        .with_context(|| format!("failed to export {}", args.out.display()))?;

    let report = culture_statistics(&culture, &meta)?;
    print_report("culture statistics", &report);
    Ok(())
}

fn run_individual(args: IndividualArgs) -> Result<()> {
    let file = tracks::read_track_file(&args.input)?;
    let time = tracks::resolve_time(&file, args.time_between_frames)?;
    let units = tracks::resolve_units(&file, args.units);
    let (culture, warnings) = tracks::build_culture(&file)?;
    for warning in &warnings {
        tracing::warn!(%warning, "track file");
    }

    let cell = culture
        .get(&args.cell)
        .with_context(|| format!("cell {} not found in {}", args.cell, args.input.display()))?;
    let data = SeriesTable::from_cell(cell, &units);
    let sheet = args.sheet.unwrap_or_else(|| cell.id.clone());

    export::export_individual(&args.out, &data, &sheet, time, &units)
        .with_context(|| format!("failed to export {}", args.out.display()))?;

    if cell.positions.len() > 1 {
        let report = individual_statistics(&cell.positions, &cell.areas, time, &units)?;
        print_report(&format!("cell {} statistics", cell.id), &report);
    }
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<()> {
    let file = tracks::read_track_file(&args.input)?;
    let (culture, warnings) = tracks::build_culture(&file)?;
    println!("cytomotion validate ok");
    println!("cells: {}", culture.len());
    println!("frames: {}", culture.frame_count());
    println!(
        "tracked frames: {}",
        culture
            .cells()
            .iter()
            .flat_map(|c| c.positions.iter())
            .filter(|p| !p.is_placeholder())
            .count()
    );
    if !warnings.is_empty() {
        println!("warnings:");
        for warning in &warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn print_report(title: &str, report: &StatisticsReport) {
    println!("{title}:");
    for (label, value) in report.iter() {
        println!("{label}: {value}");
    }
}
