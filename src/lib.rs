//! Motion and morphology statistics for tracked cell cultures.
//!
//! The statistics engine ([`stats`]) turns per-cell position and area time
//! series into ordered label/value reports, for a single cell or aggregated
//! across a culture. The export adapters ([`export`]) place raw data and
//! reports into spreadsheet sheets or CSV files. Input is the upstream
//! tracker's per-cell series; tracking itself is out of scope.

pub mod cli;
pub mod error;
pub mod export;
pub mod io;
pub mod stats;
pub mod track;

pub use error::{CytoError, Result};
pub use stats::{StatValue, StatisticsReport};
pub use track::{AreaSeries, CellRecord, Culture, Point, SeriesTable, Trajectory, VideoMeta};
