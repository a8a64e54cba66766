use crate::error::{CytoError, Result};
use crate::stats::motion::{compass_direction, heading_degrees};
use crate::stats::StatisticsReport;
use crate::track::Point;

/// Motion and growth statistics for one fully-tracked cell.
///
/// Walks every consecutive frame pair of the trajectory; placeholder frames
/// are not skipped here (the individual export path only ever sees cells
/// tracked in every frame). Report keys appear in a fixed order with the
/// caller's unit label spliced in.
pub fn individual_statistics(
    positions: &[Point],
    areas: &[f64],
    time_between_frames: f64,
    units: &str,
) -> Result<StatisticsReport> {
    if positions.len() < 2 {
        return Err(CytoError::EmptyInput(
            "trajectory needs at least two frames",
        ));
    }
    if areas.is_empty() {
        return Err(CytoError::EmptyInput("area series is empty"));
    }
    if !(time_between_frames > 0.0) {
        return Err(CytoError::InvalidParameter(
            "time between frames must be positive",
        ));
    }

    let origin = positions[0];
    let last = positions[positions.len() - 1];

    let mut distances = Vec::with_capacity(positions.len() - 1);
    let mut origin_distances = Vec::with_capacity(positions.len() - 1);
    let mut speeds = Vec::with_capacity(positions.len() - 1);
    let mut headings = Vec::with_capacity(positions.len() - 1);

    for pair in positions.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        let distance = prev.distance(curr);
        distances.push(distance);
        origin_distances.push(origin.distance(curr));
        speeds.push(distance / time_between_frames);
        headings.push(heading_degrees(prev, curr));
    }

    let final_angle = heading_degrees(origin, last);

    let mut report = StatisticsReport::new();
    report.push_number(
        format!("Total Displacement ({units})"),
        distances.iter().sum(),
    );
    report.push_number(
        format!("Final Distance from Origin ({units})"),
        origin.distance(last),
    );
    report.push_number(
        format!("Maximum Distance from Origin ({units})"),
        max_of(&origin_distances),
    );
    report.push_number(
        format!("Average Distance from Origin ({units})"),
        mean_of(&origin_distances),
    );
    report.push_number(
        format!("Maximum Distance Traveled in one Interval ({units})"),
        max_of(&distances),
    );
    report.push_number(format!("Maximum Speed ({units}/min)"), max_of(&speeds));
    report.push_number(format!("Average Speed ({units}/min)"), mean_of(&speeds));
    report.push_number(
        "Average Angle of Direction from Origin (degrees)",
        mean_of(&headings),
    );
    report.push_number(
        "Angle of Direction between Origin and Final Point (degrees)",
        final_angle,
    );
    report.push_text("Compass Direction Moved", compass_direction(final_angle));

    report.push_number(format!("Maximum Size ({units}^2)"), max_of(areas));
    report.push_number(format!("Minimum Size ({units}^2)"), min_of(areas));
    report.push_number(format!("Average Size ({units}^2)"), mean_of(areas));
    report.push_number(
        format!("Change in Cell Size ({units}^2)"),
        areas[areas.len() - 1] - areas[0],
    );
    // Per-interval deltas telescope to last - first; the divisor is the frame
    // count, not the interval count. That formula is an external contract.
    let total_change: f64 = areas.windows(2).map(|w| w[1] - w[0]).sum();
    report.push_number(
        format!("Average Change in Cell Size Between one Interval ({units}^2)"),
        total_change / areas.len() as f64,
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
