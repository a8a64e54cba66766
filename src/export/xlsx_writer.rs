//! Spreadsheet sink: named sheets in an xlsx workbook. An existing target
//! file is loaded and gains a new sheet; a missing one is created with its
//! first sheet renamed. The workbook is only written back after the whole
//! sheet has been assembled, so a failed call leaves no partial file.

use std::path::Path;

use tracing::info;
use umya_spreadsheet::Worksheet;

use crate::error::{CytoError, Result};
use crate::export::{area_headers, position_headers, require_format, SinkFormat};
use crate::stats::{culture_statistics, individual_statistics, StatValue, StatisticsReport};
use crate::track::{Culture, Point, SeriesTable, VideoMeta};

const POSITIONS_SHEET: &str = "Positions";
const AREAS_SHEET: &str = "Areas";
const CULTURE_STATS_SHEET: &str = "Culture Stats";

/// Convenience composite matching the upstream pipeline's culture export:
/// raw positions, raw areas, then the aggregate report.
pub fn write_culture(path: &Path, culture: &Culture, meta: &VideoMeta) -> Result<()> {
    let frames = culture.frame_count();
    write_positions(
        path,
        culture,
        &position_headers(frames, &meta.units),
        POSITIONS_SHEET,
    )?;
    let mut headers = vec!["Cell ID".to_string()];
    headers.extend(area_headers(frames, &meta.units));
    write_areas(path, culture, &headers, AREAS_SHEET)?;
    let report = culture_statistics(culture, meta)?;
    write_report(path, &report, CULTURE_STATS_SHEET)
}

/// One row per cell: id, then flattened x/y pairs per frame.
pub fn write_positions(
    path: &Path,
    culture: &Culture,
    headers: &[String],
    sheet_name: &str,
) -> Result<()> {
    require_format(path, SinkFormat::Spreadsheet, "xls/xlsx")?;
    with_sheet(path, sheet_name, |sheet| {
        let mut row: u32 = 1;
        write_header_row(sheet, row, headers);
        row += 1;

        for cell in culture.cells() {
            let mut col: u32 = 1;
            sheet.get_cell_mut((col, row)).set_value(cell.id.clone());
            col += 1;
            for point in &cell.positions {
                sheet.get_cell_mut((col, row)).set_value_number(point.x);
                col += 1;
                sheet.get_cell_mut((col, row)).set_value_number(point.y);
                col += 1;
            }
            row += 1;
        }
        Ok(())
    })?;
    info!(path = %path.display(), sheet = sheet_name, cells = culture.len(), "positions sheet written");
    Ok(())
}

/// One row per cell: id, per-frame areas, then two sheet-native formula
/// columns (total growth, largest single-interval change). The formula text
/// is opaque to this module and kept in the exact shape downstream
/// spreadsheets expect.
pub fn write_areas(
    path: &Path,
    culture: &Culture,
    headers: &[String],
    sheet_name: &str,
) -> Result<()> {
    require_format(path, SinkFormat::Spreadsheet, "xls/xlsx")?;
    with_sheet(path, sheet_name, |sheet| {
        let mut row: u32 = 1;
        write_header_row(sheet, row, headers);
        row += 1;

        for cell in culture.cells() {
            let mut col: u32 = 1;
            sheet.get_cell_mut((col, row)).set_value(cell.id.clone());
            col += 1;
            for area in &cell.areas {
                sheet.get_cell_mut((col, row)).set_value_number(*area);
                col += 1;
            }

            let growth_formula = format!(
                "=INDIRECT(ADDRESS({row}, {last})) - INDEX(INDIRECT(ADDRESS({row}, 2)):INDIRECT(ADDRESS({row}, {col})),MATCH(TRUE,INDEX((INDIRECT(ADDRESS({row}, 2)):INDIRECT(ADDRESS({row}, {col}))<>0),0),0))",
                last = col - 1,
            );
            sheet.get_cell_mut((col, row)).set_formula(growth_formula);
            col += 1;
            let change_formula = format!(
                "=_xlfn.AGGREGATE(14, 6, INDIRECT(ADDRESS({row}, 2)):INDIRECT(ADDRESS({row}, {a}))-INDIRECT(ADDRESS({row}, 3)):INDIRECT(ADDRESS({row}, {b})), 1)",
                a = col - 2,
                b = col - 1,
            );
            sheet.get_cell_mut((col, row)).set_formula(change_formula);
            row += 1;
        }
        Ok(())
    })?;
    info!(path = %path.display(), sheet = sheet_name, cells = culture.len(), "areas sheet written");
    Ok(())
}

/// Two-column Statistic/Value table, one row per report entry, preserving
/// the report's insertion order.
pub fn write_report(path: &Path, report: &StatisticsReport, sheet_name: &str) -> Result<()> {
    require_format(path, SinkFormat::Spreadsheet, "xls/xlsx")?;
    with_sheet(path, sheet_name, |sheet| {
        write_report_block(sheet, 1, 1, report);
        Ok(())
    })?;
    info!(path = %path.display(), sheet = sheet_name, entries = report.len(), "report sheet written");
    Ok(())
}

/// One column per data label (header then per-frame values). When the table
/// covers more than one frame, the individual statistics are computed from
/// its X/Y/Area columns and laid out beside the data.
pub fn write_individual(
    path: &Path,
    data: &SeriesTable,
    sheet_name: &str,
    time_between_frames: f64,
    units: &str,
) -> Result<()> {
    require_format(path, SinkFormat::Spreadsheet, "xls/xlsx")?;
    if data.is_empty() {
        return Err(CytoError::EmptyInput("series table has no columns"));
    }

    let report = if data.frame_count() > 1 {
        Some(individual_report_from_table(data, time_between_frames, units)?)
    } else {
        None
    };

    with_sheet(path, sheet_name, |sheet| {
        let mut col: u32 = 1;
        for (label, values) in data.columns() {
            let mut row: u32 = 1;
            sheet.get_cell_mut((col, row)).set_value(label.clone());
            row += 1;
            for value in values {
                sheet.get_cell_mut((col, row)).set_value_number(*value);
                row += 1;
            }
            col += 1;
        }

        if let Some(report) = &report {
            write_report_block(sheet, col, 1, report);
        }
        Ok(())
    })?;
    info!(path = %path.display(), sheet = sheet_name, frames = data.frame_count(), "individual sheet written");
    Ok(())
}

fn individual_report_from_table(
    data: &SeriesTable,
    time_between_frames: f64,
    units: &str,
) -> Result<StatisticsReport> {
    let xs = require_column(data, &format!("X Position ({units})"))?;
    let ys = require_column(data, &format!("Y Position ({units})"))?;
    let areas = require_column(data, &format!("Area ({units}^2)"))?;
    let positions: Vec<Point> = xs
        .iter()
        .zip(ys.iter())
        .map(|(x, y)| Point::new(*x, *y))
        .collect();
    individual_statistics(&positions, areas, time_between_frames, units)
}

fn require_column<'a>(data: &'a SeriesTable, label: &str) -> Result<&'a [f64]> {
    data.column(label)
        .ok_or_else(|| CytoError::MissingColumn(label.to_string()))
}

fn write_header_row(sheet: &mut Worksheet, row: u32, headers: &[String]) {
    for (i, header) in headers.iter().enumerate() {
        sheet
            .get_cell_mut((1 + i as u32, row))
            .set_value(header.clone());
    }
}

fn write_report_block(sheet: &mut Worksheet, start_col: u32, start_row: u32, report: &StatisticsReport) {
    let mut row = start_row;
    sheet.get_cell_mut((start_col, row)).set_value("Statistic");
    sheet.get_cell_mut((start_col + 1, row)).set_value("Value");
    row += 1;

    for (label, value) in report.iter() {
        sheet.get_cell_mut((start_col, row)).set_value(label.clone());
        match value {
            StatValue::Number(v) => {
                sheet.get_cell_mut((start_col + 1, row)).set_value_number(*v);
            }
            StatValue::Text(s) => {
                sheet.get_cell_mut((start_col + 1, row)).set_value(s.clone());
            }
        }
        row += 1;
    }
}

/// Open-or-create the workbook at `path`, hand the named sheet to `fill`,
/// then write the workbook back. Creation renames the default sheet; an
/// existing workbook gains a new sheet (duplicate names are rejected by the
/// underlying library).
fn with_sheet<F>(path: &Path, sheet_name: &str, fill: F) -> Result<()>
where
    F: FnOnce(&mut Worksheet) -> Result<()>,
{
    let mut book;
    if path.exists() {
        book = umya_spreadsheet::reader::xlsx::read(path)
            .map_err(|e| CytoError::Spreadsheet(e.to_string()))?;
        let sheet = book
            .new_sheet(sheet_name)
            .map_err(|e| CytoError::Spreadsheet(e.to_string()))?;
        fill(sheet)?;
    } else {
        book = umya_spreadsheet::new_file();
        let sheet = book
            .get_sheet_mut(&0)
            .ok_or_else(|| CytoError::Spreadsheet("new workbook has no sheet".to_string()))?;
        sheet.set_name(sheet_name);
        fill(sheet)?;
    }
    umya_spreadsheet::writer::xlsx::write(&book, path)
        .map_err(|e| CytoError::Spreadsheet(e.to_string()))
}
