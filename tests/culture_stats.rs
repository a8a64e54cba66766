use cytomotion::error::CytoError;
use cytomotion::stats::culture_statistics;
use cytomotion::track::{CellRecord, Culture, Point, VideoMeta};

fn cell(id: &str, positions: &[(f64, f64)], areas: &[f64]) -> CellRecord {
    CellRecord {
        id: id.to_string(),
        positions: positions.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        areas: areas.to_vec(),
    }
}

fn culture_of(cells: Vec<CellRecord>) -> Culture {
    let mut culture = Culture::new();
    for c in cells {
        culture.push(c).unwrap();
    }
    culture
}

fn meta() -> VideoMeta {
    VideoMeta::new(1.0, 100.0, "mm").unwrap()
}

fn number(report: &cytomotion::StatisticsReport, label: &str) -> f64 {
    report
        .get(label)
        .unwrap_or_else(|| panic!("missing key {label:?}"))
        .as_number()
        .unwrap_or_else(|| panic!("{label:?} is not numeric"))
}

#[test]
fn placeholder_frames_contribute_no_steps() {
    // Frame 1 is untracked; the only real step is frame 0 -> frame 2's
    // position measured from the placeholder, as the tracker data arrives.
    let culture = culture_of(vec![cell(
        "a",
        &[(1.0, 1.0), (0.0, 0.0), (4.0, 5.0)],
        &[2.0, 0.0, 3.0],
    )]);
    let report = culture_statistics(&culture, &meta()).unwrap();

    let expected_step = 41.0_f64.sqrt();
    assert!((number(&report, "Average Total Displacement (mm)") - expected_step).abs() < 1e-9);
    assert!((number(&report, "Average Final Distance from Origin (mm)") - 5.0).abs() < 1e-9);
    assert!((number(&report, "Maximum Recorded Speed (mm/min)") - expected_step).abs() < 1e-9);
}

#[test]
fn single_frame_culture_omits_movement_keys() {
    let culture = culture_of(vec![
        cell("a", &[(1.0, 2.0)], &[4.0]),
        cell("b", &[(3.0, 4.0)], &[6.0]),
    ]);
    let report = culture_statistics(&culture, &meta()).unwrap();

    assert!(!report.contains("Average Total Displacement (mm)"));
    assert!(!report.contains("Average Speed (mm/min)"));
    assert!(!report.contains("Average Compass Direction Moved"));
    assert!(!report.contains("Average Change in Cell Size (mm^2)"));

    assert!((number(&report, "Final Frame's Confluency (%)") - 0.1).abs() < 1e-9);
    assert!((number(&report, "Largest Cell (mm^2)") - 6.0).abs() < 1e-9);
    assert_eq!(
        report.get("Largest Cell's ID").unwrap().as_text(),
        Some("b")
    );
    assert!((number(&report, "Smallest Cell (mm^2)") - 4.0).abs() < 1e-9);
    assert!((number(&report, "Average Final Size of Cell (mm^2)") - 5.0).abs() < 1e-9);
}

#[test]
fn final_placeholder_frame_yields_no_displacement() {
    // The cell moves, then disappears on the last frame: its step speed
    // counts, but it never reaches the final-frame accumulators, so the
    // whole movement block is absent for this one-cell culture.
    let culture = culture_of(vec![cell(
        "a",
        &[(1.0, 1.0), (2.0, 2.0), (0.0, 0.0)],
        &[1.0, 1.0, 0.0],
    )]);
    let report = culture_statistics(&culture, &meta()).unwrap();
    assert!(!report.contains("Average Total Displacement (mm)"));
    assert!(!report.contains("Maximum Recorded Speed (mm/min)"));
    assert!(report.contains("Final Frame's Confluency (%)"));
}

#[test]
fn growth_uses_first_measured_area() {
    let culture = culture_of(vec![cell(
        "a",
        &[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)],
        &[0.0, 0.0, 5.0, 8.0],
    )]);
    let report = culture_statistics(&culture, &meta()).unwrap();
    assert!((number(&report, "Average Change in Cell Size (mm^2)") - 3.0).abs() < 1e-9);
}

#[test]
fn largest_cell_tie_goes_to_first() {
    let culture = culture_of(vec![
        cell("first", &[(1.0, 1.0)], &[5.0]),
        cell("second", &[(2.0, 2.0)], &[5.0]),
    ]);
    let report = culture_statistics(&culture, &meta()).unwrap();
    assert_eq!(
        report.get("Largest Cell's ID").unwrap().as_text(),
        Some("first")
    );
}

#[test]
fn smallest_cell_ignores_placeholder_areas() {
    let culture = culture_of(vec![
        cell("a", &[(1.0, 1.0), (2.0, 2.0)], &[5.0, 5.0]),
        cell("b", &[(3.0, 3.0), (4.0, 4.0)], &[0.0, 2.0]),
    ]);
    let report = culture_statistics(&culture, &meta()).unwrap();
    assert!((number(&report, "Smallest Cell (mm^2)") - 2.0).abs() < 1e-9);
    assert_eq!(
        report.get("Smallest Cell's ID").unwrap().as_text(),
        Some("b")
    );
}

#[test]
fn all_placeholder_areas_omit_smallest_cell() {
    let culture = culture_of(vec![cell("a", &[(1.0, 1.0)], &[0.0])]);
    let report = culture_statistics(&culture, &meta()).unwrap();
    assert!(!report.contains("Smallest Cell (mm^2)"));
    assert!(!report.contains("Smallest Cell's ID"));
    assert!((number(&report, "Largest Cell (mm^2)") - 0.0).abs() < 1e-9);
    assert!((number(&report, "Final Frame's Confluency (%)") - 0.0).abs() < 1e-9);
}

#[test]
fn confluency_is_a_fraction_of_frame_area() {
    let culture = culture_of(vec![
        cell("a", &[(1.0, 1.0)], &[30.0]),
        cell("b", &[(2.0, 2.0)], &[20.0]),
    ]);
    let report = culture_statistics(&culture, &meta()).unwrap();
    // 50 units^2 over a 100 units^2 frame: raw fraction, not a percentage.
    assert!((number(&report, "Final Frame's Confluency (%)") - 0.5).abs() < 1e-9);
}

#[test]
fn empty_culture_is_empty_input() {
    let culture = Culture::new();
    let err = culture_statistics(&culture, &meta()).unwrap_err();
    assert!(matches!(err, CytoError::EmptyInput(_)));
}

#[test]
fn culture_rejects_mismatched_cells() {
    let mut culture = Culture::new();
    let err = culture
        .push(CellRecord {
            id: "a".to_string(),
            positions: vec![Point::new(1.0, 1.0)],
            areas: vec![1.0, 2.0],
        })
        .unwrap_err();
    assert!(matches!(err, CytoError::LengthMismatch { .. }));

    culture.push(cell("a", &[(1.0, 1.0)], &[1.0])).unwrap();
    let err = culture
        .push(cell("b", &[(1.0, 1.0), (2.0, 2.0)], &[1.0, 2.0]))
        .unwrap_err();
    assert!(matches!(err, CytoError::FrameCountMismatch { .. }));
}
