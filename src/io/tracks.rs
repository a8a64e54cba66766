//! Reader for tracker output files: JSON (optionally gzipped) holding the
//! per-cell position and area series plus optional session metadata.

use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::track::{CellRecord, Culture, Point, VideoMeta};

#[derive(Debug, Clone, Deserialize)]
pub struct TrackFile {
    pub time_between_frames: Option<f64>,
    pub area_of_frame: Option<f64>,
    pub units: Option<String>,
    pub cells: Vec<TrackedCell>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackedCell {
    pub id: String,
    pub positions: Vec<[f64; 2]>,
    pub areas: Vec<f64>,
}

pub fn read_track_file(path: &Path) -> Result<TrackFile> {
    let reader = crate::io::open_maybe_gz(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let file: TrackFile = serde_json::from_reader(BufReader::new(reader))
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(file)
}

/// Turn the parsed file into a validated [`Culture`], collecting warnings
/// for rows worth flagging without failing the run.
pub fn build_culture(file: &TrackFile) -> Result<(Culture, Vec<String>)> {
    let mut culture = Culture::new();
    let mut warnings = Vec::new();
    for cell in &file.cells {
        let positions: Vec<Point> = cell
            .positions
            .iter()
            .map(|p| Point::new(p[0], p[1]))
            .collect();
        if !positions.is_empty() && positions.iter().all(Point::is_placeholder) {
            warnings.push(format!("cell {} was never tracked", cell.id));
        }
        culture.push(CellRecord {
            id: cell.id.clone(),
            positions,
            areas: cell.areas.clone(),
        })?;
    }
    Ok((culture, warnings))
}

/// Minutes between frames: CLI flag wins over the track file.
pub fn resolve_time(file: &TrackFile, override_value: Option<f64>) -> Result<f64> {
    let time = override_value.or(file.time_between_frames).context(
        "time between frames not set: pass --time-between-frames or add it to the track file",
    )?;
    anyhow::ensure!(time > 0.0, "time between frames must be positive");
    Ok(time)
}

/// Unit label: CLI flag, then track file, then "mm".
pub fn resolve_units(file: &TrackFile, override_value: Option<String>) -> String {
    override_value
        .or_else(|| file.units.clone())
        .unwrap_or_else(|| "mm".to_string())
}

/// Full session metadata for culture-level statistics.
pub fn resolve_meta(
    file: &TrackFile,
    time_between_frames: Option<f64>,
    area_of_frame: Option<f64>,
    units: Option<String>,
) -> Result<VideoMeta> {
    let time = resolve_time(file, time_between_frames)?;
    let area = area_of_frame.or(file.area_of_frame).context(
        "frame area not set: pass --frame-area or add area_of_frame to the track file",
    )?;
    let units = resolve_units(file, units);
    Ok(VideoMeta::new(time, area, units)?)
}
