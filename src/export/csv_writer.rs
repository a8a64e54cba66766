//! CSV sink: individual exports append to an existing file without
//! repeating headers; the culture raw export is create-only.

use std::fs::{File, OpenOptions};
use std::path::Path;

use tracing::info;

use crate::error::{CytoError, Result};
use crate::export::{require_format, SinkFormat};
use crate::track::{Culture, SeriesTable};

/// Write one cell's per-frame series, one row per frame.
///
/// A fresh file gets a header row equal to the column labels in order; an
/// existing file gets the data rows appended with no second header.
pub fn write_individual(path: &Path, data: &SeriesTable) -> Result<()> {
    require_format(path, SinkFormat::Csv, "csv")?;
    if data.is_empty() {
        return Err(CytoError::EmptyInput("series table has no columns"));
    }

    let appending = path.exists();
    let file = if appending {
        OpenOptions::new().append(true).open(path)?
    } else {
        File::create(path)?
    };
    let mut writer = csv::Writer::from_writer(file);

    if !appending {
        writer.write_record(data.labels())?;
    }
    for frame in 0..data.frame_count() {
        let row: Vec<String> = data
            .columns()
            .iter()
            .map(|(_, values)| values[frame].to_string())
            .collect();
        writer.write_record(&row)?;
    }
    writer.flush()?;

    info!(
        path = %path.display(),
        rows = data.frame_count(),
        appended = appending,
        "individual csv written"
    );
    Ok(())
}

/// Write the raw culture table: one row per cell holding the id, the
/// flattened x/y pairs, then the per-frame areas.
///
/// This export never appends and never overwrites; an existing target fails
/// with [`CytoError::FileAlreadyExists`] regardless of its content.
pub fn write_culture_raw(
    path: &Path,
    culture: &Culture,
    position_headers: &[String],
    area_headers: &[String],
) -> Result<()> {
    require_format(path, SinkFormat::Csv, "csv")?;
    if path.exists() {
        return Err(CytoError::FileAlreadyExists(path.to_path_buf()));
    }

    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);

    let headers: Vec<&str> = position_headers
        .iter()
        .chain(area_headers.iter())
        .map(String::as_str)
        .collect();
    writer.write_record(&headers)?;

    for cell in culture.cells() {
        let mut row = Vec::with_capacity(1 + 2 * cell.positions.len() + cell.areas.len());
        row.push(cell.id.clone());
        for point in &cell.positions {
            row.push(point.x.to_string());
            row.push(point.y.to_string());
        }
        for area in &cell.areas {
            row.push(area.to_string());
        }
        writer.write_record(&row)?;
    }
    writer.flush()?;

    info!(
        path = %path.display(),
        cells = culture.len(),
        "culture raw csv written"
    );
    Ok(())
}
