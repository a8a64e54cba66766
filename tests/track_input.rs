use std::fs;
use std::io::Write;

use cytomotion::io::tracks::{build_culture, read_track_file, resolve_meta, resolve_time, resolve_units};
use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::TempDir;

const SAMPLE: &str = r#"{
    "time_between_frames": 5.0,
    "area_of_frame": 1000.0,
    "units": "mm",
    "cells": [
        {"id": "c1", "positions": [[1.0, 2.0], [3.0, 4.0]], "areas": [10.0, 12.0]},
        {"id": "c2", "positions": [[0.0, 0.0], [0.0, 0.0]], "areas": [0.0, 0.0]}
    ]
}"#;

#[test]
fn reads_plain_json() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tracks.json");
    fs::write(&path, SAMPLE).unwrap();

    let file = read_track_file(&path).unwrap();
    assert_eq!(file.cells.len(), 2);
    assert_eq!(file.cells[0].id, "c1");

    let (culture, warnings) = build_culture(&file).unwrap();
    assert_eq!(culture.len(), 2);
    assert_eq!(culture.frame_count(), 2);
    // c2 is placeholder in every frame.
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("c2"));
}

#[test]
fn reads_gzipped_json() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tracks.json.gz");
    let mut encoder = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::default());
    encoder.write_all(SAMPLE.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let file = read_track_file(&path).unwrap();
    assert_eq!(file.cells.len(), 2);
}

#[test]
fn meta_resolution_prefers_overrides() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tracks.json");
    fs::write(&path, SAMPLE).unwrap();
    let file = read_track_file(&path).unwrap();

    assert_eq!(resolve_time(&file, None).unwrap(), 5.0);
    assert_eq!(resolve_time(&file, Some(2.0)).unwrap(), 2.0);
    assert_eq!(resolve_units(&file, None), "mm");
    assert_eq!(resolve_units(&file, Some("um".to_string())), "um");

    let meta = resolve_meta(&file, None, Some(500.0), None).unwrap();
    assert_eq!(meta.time_between_frames, 5.0);
    assert_eq!(meta.area_of_frame, 500.0);
    assert_eq!(meta.units, "mm");
}

#[test]
fn missing_metadata_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tracks.json");
    fs::write(
        &path,
        r#"{"cells": [{"id": "c1", "positions": [[1.0, 1.0]], "areas": [1.0]}]}"#,
    )
    .unwrap();
    let file = read_track_file(&path).unwrap();

    assert!(resolve_time(&file, None).is_err());
    assert!(resolve_meta(&file, Some(1.0), None, None).is_err());
    assert!(resolve_meta(&file, Some(1.0), Some(100.0), None).is_ok());
}

#[test]
fn mismatched_series_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tracks.json");
    fs::write(
        &path,
        r#"{"cells": [{"id": "c1", "positions": [[1.0, 1.0], [2.0, 2.0]], "areas": [1.0]}]}"#,
    )
    .unwrap();
    let file = read_track_file(&path).unwrap();
    assert!(build_culture(&file).is_err());
}

#[test]
fn nonpositive_time_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tracks.json");
    fs::write(&path, SAMPLE).unwrap();
    let file = read_track_file(&path).unwrap();
    assert!(resolve_time(&file, Some(0.0)).is_err());
    assert!(resolve_meta(&file, Some(-1.0), None, None).is_err());
}
