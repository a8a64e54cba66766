//! Data model for tracked cells: per-frame positions, per-frame areas, and
//! the ordered collection of cells that makes up one imaging session.

use serde::{Deserialize, Serialize};

use crate::error::{CytoError, Result};

/// One (x, y) sample from the tracker. The tracker emits exactly (0, 0) for
/// frames where the cell was not detected; that sentinel is only ever
/// interpreted through [`Point::is_placeholder`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// "Cell not tracked this frame" sentinel.
    pub fn is_placeholder(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn distance(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Per-frame position sequence for one cell. Index 0 is the origin frame.
pub type Trajectory = Vec<Point>;

/// Per-frame area sequence for one cell, aligned with its trajectory.
/// A 0.0 entry means "not measured this frame".
pub type AreaSeries = Vec<f64>;

/// One cell's full record across the video.
#[derive(Debug, Clone)]
pub struct CellRecord {
    pub id: String,
    pub positions: Trajectory,
    pub areas: AreaSeries,
}

/// All tracked cells of one imaging session, in a fixed order.
///
/// The record order is the row order of every export, so this is an explicit
/// list rather than a map. All cells share one frame count; [`Culture::push`]
/// enforces that and the per-cell positions/areas length agreement, so
/// downstream code never re-validates.
#[derive(Debug, Clone, Default)]
pub struct Culture {
    cells: Vec<CellRecord>,
}

impl Culture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: CellRecord) -> Result<()> {
        if record.positions.is_empty() {
            return Err(CytoError::EmptyInput("cell has no frames"));
        }
        if record.positions.len() != record.areas.len() {
            return Err(CytoError::LengthMismatch {
                id: record.id,
                positions: record.positions.len(),
                areas: record.areas.len(),
            });
        }
        if let Some(first) = self.cells.first() {
            if record.positions.len() != first.positions.len() {
                return Err(CytoError::FrameCountMismatch {
                    id: record.id,
                    expected: first.positions.len(),
                    got: record.positions.len(),
                });
            }
        }
        self.cells.push(record);
        Ok(())
    }

    pub fn cells(&self) -> &[CellRecord] {
        &self.cells
    }

    pub fn get(&self, id: &str) -> Option<&CellRecord> {
        self.cells.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Frame count shared by every cell (0 for an empty culture).
    pub fn frame_count(&self) -> usize {
        self.cells.first().map_or(0, |c| c.positions.len())
    }
}

/// Imaging-session parameters used by the statistics engine.
///
/// `units` is a label spliced into output headers, never a conversion factor.
#[derive(Debug, Clone)]
pub struct VideoMeta {
    pub time_between_frames: f64,
    pub area_of_frame: f64,
    pub units: String,
}

impl VideoMeta {
    pub fn new(time_between_frames: f64, area_of_frame: f64, units: impl Into<String>) -> Result<Self> {
        if !(time_between_frames > 0.0) {
            return Err(CytoError::InvalidParameter(
                "time between frames must be positive",
            ));
        }
        if !(area_of_frame > 0.0) {
            return Err(CytoError::InvalidParameter("frame area must be positive"));
        }
        Ok(Self {
            time_between_frames,
            area_of_frame,
            units: units.into(),
        })
    }
}

/// Ordered labeled columns of per-frame values, the unit handed to the
/// individual-cell exporters. Column order is the output column order.
#[derive(Debug, Clone, Default)]
pub struct SeriesTable {
    columns: Vec<(String, Vec<f64>)>,
}

impl SeriesTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard three-column table (X, Y, Area) for one cell.
    pub fn from_cell(cell: &CellRecord, units: &str) -> Self {
        let mut table = Self::new();
        table.columns.push((
            format!("X Position ({units})"),
            cell.positions.iter().map(|p| p.x).collect(),
        ));
        table.columns.push((
            format!("Y Position ({units})"),
            cell.positions.iter().map(|p| p.y).collect(),
        ));
        table
            .columns
            .push((format!("Area ({units}^2)"), cell.areas.clone()));
        table
    }

    pub fn push_column(&mut self, label: impl Into<String>, values: Vec<f64>) -> Result<()> {
        let label = label.into();
        if let Some((_, first)) = self.columns.first() {
            if values.len() != first.len() {
                return Err(CytoError::ColumnLengthMismatch {
                    label,
                    expected: first.len(),
                    got: values.len(),
                });
            }
        }
        self.columns.push((label, values));
        Ok(())
    }

    pub fn columns(&self) -> &[(String, Vec<f64>)] {
        &self.columns
    }

    pub fn column(&self, label: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_slice())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(l, _)| l.as_str())
    }

    pub fn frame_count(&self) -> usize {
        self.columns.first().map_or(0, |(_, v)| v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
