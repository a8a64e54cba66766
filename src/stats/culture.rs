use crate::error::{CytoError, Result};
use crate::stats::motion::{compass_direction, heading_degrees};
use crate::stats::StatisticsReport;
use crate::track::{Culture, VideoMeta};

/// Running largest/smallest cell, threaded explicitly through the area scan.
/// First cell wins ties: largest uses strict `>`, smallest strict `<`.
/// The smallest-cell track only considers non-placeholder (non-zero) areas.
#[derive(Debug, Default)]
struct SizeExtrema {
    largest: f64,
    largest_id: Option<String>,
    smallest: Option<(f64, String)>,
}

impl SizeExtrema {
    fn update(&mut self, id: &str, areas: &[f64]) {
        let cell_max = areas.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if cell_max > self.largest {
            self.largest = cell_max;
            self.largest_id = Some(id.to_string());
        }
        let cell_min = areas
            .iter()
            .copied()
            .filter(|a| *a != 0.0)
            .fold(f64::INFINITY, f64::min);
        if cell_min.is_finite() {
            match &self.smallest {
                Some((current, _)) if cell_min >= *current => {}
                _ => self.smallest = Some((cell_min, id.to_string())),
            }
        }
    }
}

/// Aggregate motion and growth statistics across a whole culture.
///
/// Placeholder (0,0) frames never contribute steps: a step is skipped when
/// its endpoint is the placeholder, and a cell whose final frame is a
/// placeholder contributes step speeds but no final-frame values. When no
/// cell produced any displacement (single-frame data), the movement block of
/// keys is omitted entirely; the confluency/size block is always present.
pub fn culture_statistics(culture: &Culture, meta: &VideoMeta) -> Result<StatisticsReport> {
    if culture.is_empty() {
        return Err(CytoError::EmptyInput("culture has no cells"));
    }

    let units = meta.units.as_str();

    let mut displacements = Vec::new();
    let mut final_distances = Vec::new();
    let mut speeds = Vec::new();
    let mut final_angles = Vec::new();

    for cell in culture.cells() {
        let positions = &cell.positions;
        let origin = positions[0];
        let mut distances = Vec::new();

        for i in 1..positions.len() {
            let curr = positions[i];
            if curr.is_placeholder() {
                continue;
            }
            let prev = positions[i - 1];
            let distance = prev.distance(curr);
            distances.push(distance);
            speeds.push(distance / meta.time_between_frames);

            if i == positions.len() - 1 {
                final_angles.push(heading_degrees(origin, curr));
                final_distances.push(origin.distance(curr));
                displacements.push(distances.iter().sum());
            }
        }
    }

    let mut extrema = SizeExtrema::default();
    let mut final_sizes = Vec::new();
    let mut growth = Vec::new();

    for cell in culture.cells() {
        let areas = &cell.areas;
        extrema.update(&cell.id, areas);
        final_sizes.push(areas[areas.len() - 1]);
        // Growth is measured from the first frame where the area was actually
        // recorded; all-placeholder cells contribute no growth sample.
        if let Some(first) = areas.iter().copied().find(|a| *a != 0.0) {
            growth.push(areas[areas.len() - 1] - first);
        }
    }

    let mut report = StatisticsReport::new();

    if !displacements.is_empty() {
        report.push_number(
            format!("Average Total Displacement ({units})"),
            mean_of(&displacements),
        );
        report.push_number(
            format!("Max Distance Traveled by one Cell ({units})"),
            max_of(&displacements),
        );
        report.push_number(
            format!("Min Distance Traveled by one Cell ({units})"),
            min_of(&displacements),
        );
        report.push_number(
            format!("Average Final Distance from Origin ({units})"),
            mean_of(&final_distances),
        );
        report.push_number(format!("Average Speed ({units}/min)"), mean_of(&speeds));
        report.push_number(
            format!("Maximum Recorded Speed ({units}/min)"),
            max_of(&speeds),
        );
        report.push_number(
            format!("Minimum Recorded Speed ({units}/min)"),
            min_of(&speeds),
        );
        let average_angle = mean_of(&final_angles);
        report.push_number(
            "Average Angle of Direction between Origin and Final Point (degrees)",
            average_angle,
        );
        report.push_text(
            "Average Compass Direction Moved",
            compass_direction(average_angle),
        );
        if !growth.is_empty() {
            report.push_number(
                format!("Average Change in Cell Size ({units}^2)"),
                mean_of(&growth),
            );
        }
    }

    // The label says percent but the value has always been the raw fraction;
    // downstream consumers rely on that.
    report.push_number(
        "Final Frame's Confluency (%)",
        final_sizes.iter().sum::<f64>() / meta.area_of_frame,
    );
    report.push_number(format!("Largest Cell ({units}^2)"), extrema.largest);
    report.push_text(
        "Largest Cell's ID",
        extrema.largest_id.unwrap_or_default(),
    );
    if let Some((size, id)) = extrema.smallest {
        report.push_number(format!("Smallest Cell ({units}^2)"), size);
        report.push_text("Smallest Cell's ID", id);
    }
    report.push_number(
        format!("Average Final Size of Cell ({units}^2)"),
        mean_of(&final_sizes),
    );

    Ok(report)
}

fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn min_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn mean_of(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
