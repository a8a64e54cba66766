//! Tabular export adapters: translation of raw track data and statistics
//! reports into spreadsheet sheets or CSV rows. All the interesting logic
//! lives in `stats`; this layer only places values into rows and columns.

pub mod csv_writer;
pub mod xlsx_writer;

use std::path::Path;

use crate::error::{CytoError, Result};
use crate::track::{Culture, SeriesTable, VideoMeta};

/// Output family, decided by filename extension alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkFormat {
    Spreadsheet,
    Csv,
}

impl SinkFormat {
    pub fn detect(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("xls") | Some("xlsx") => Some(Self::Spreadsheet),
            Some("csv") => Some(Self::Csv),
            _ => None,
        }
    }
}

pub(crate) fn require_format(
    path: &Path,
    want: SinkFormat,
    expected: &'static str,
) -> Result<()> {
    if SinkFormat::detect(path) != Some(want) {
        return Err(CytoError::UnsupportedFormat {
            path: path.to_path_buf(),
            expected,
        });
    }
    Ok(())
}

/// Header row for the flattened positions table: cell id, then per-frame
/// x/y column pairs.
pub fn position_headers(frame_count: usize, units: &str) -> Vec<String> {
    let mut headers = Vec::with_capacity(1 + 2 * frame_count);
    headers.push("Cell ID".to_string());
    for frame in 1..=frame_count {
        headers.push(format!("Frame {frame} X ({units})"));
        headers.push(format!("Frame {frame} Y ({units})"));
    }
    headers
}

/// Header row for the per-frame area columns (no leading id column; the
/// culture raw CSV concatenates these after the position headers).
pub fn area_headers(frame_count: usize, units: &str) -> Vec<String> {
    (1..=frame_count)
        .map(|frame| format!("Frame {frame} Area ({units}^2)"))
        .collect()
}

/// Export a whole culture to the sink named by `path`: spreadsheet targets
/// get the Positions/Areas/Culture Stats workbook, CSV targets get the
/// create-only raw data table.
pub fn export_culture(path: &Path, culture: &Culture, meta: &VideoMeta) -> Result<()> {
    match SinkFormat::detect(path) {
        Some(SinkFormat::Spreadsheet) => xlsx_writer::write_culture(path, culture, meta),
        Some(SinkFormat::Csv) => {
            let positions = position_headers(culture.frame_count(), &meta.units);
            let areas = area_headers(culture.frame_count(), &meta.units);
            csv_writer::write_culture_raw(path, culture, &positions, &areas)
        }
        None => Err(CytoError::UnsupportedFormat {
            path: path.to_path_buf(),
            expected: "xls/xlsx or csv",
        }),
    }
}

/// Export one cell's per-frame series to the sink named by `path`.
pub fn export_individual(
    path: &Path,
    data: &SeriesTable,
    sheet_name: &str,
    time_between_frames: f64,
    units: &str,
) -> Result<()> {
    match SinkFormat::detect(path) {
        Some(SinkFormat::Spreadsheet) => {
            xlsx_writer::write_individual(path, data, sheet_name, time_between_frames, units)
        }
        Some(SinkFormat::Csv) => csv_writer::write_individual(path, data),
        None => Err(CytoError::UnsupportedFormat {
            path: path.to_path_buf(),
            expected: "xls/xlsx or csv",
        }),
    }
}
