//! Integration tests for whole runs, including file input and output.
//!
//! Tests cover:
//! - Zero detections still write both outputs unchanged
//! - Missing input writes nothing
//! - Debug overlay colors per classification
//! - Extra sinks see the same candidates as the pipeline output
//! - Stage dumps into a debug directory

mod common;

use tablefeet::detection::overlay::{to_rgb, ACCEPTED_COLOR, CANDIDATE_COLOR, REJECTED_COLOR};
use tablefeet::io;
use tablefeet::ConsoleReport;
use tempfile::TempDir;

use common::*;

#[test]
fn test_zero_detections_write_unchanged_outputs() -> anyhow::Result<()> {
    // Only a small obstacle, well below the minimum table size
    let map = map_with_block(100, 80, 10, 10, 10, 10);
    let (dir, input) = write_temp_map(&map);
    let output = dir.path().join("new_map.pgm");
    let debug_image = dir.path().join("debug_contours.png");

    let pipeline = Pipeline::new(TableConfig::driver())?;
    let result = pipeline.run_files(&input, &output, &debug_image, &mut [])?;

    assert_eq!(result.accepted_count(), 0);
    assert_eq!(result.candidate_count(), 0);

    let written = io::load_map(&output)?;
    assert_eq!(written, map);

    let debug = image::open(&debug_image)?.to_rgb8();
    assert_eq!(debug, to_rgb(&map));
    Ok(())
}

#[test]
fn test_missing_input_writes_nothing() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("map.pgm");
    let output = dir.path().join("new_map.pgm");
    let debug_image = dir.path().join("debug_contours.png");

    let pipeline = Pipeline::new(TableConfig::driver())?;
    let result = pipeline.run_files(&input, &output, &debug_image, &mut []);

    match result {
        Err(MapError::InputNotFound { path }) => assert_eq!(path, input),
        other => panic!("Expected InputNotFound, got {:?}", other.map(|r| r.candidates)),
    }
    assert!(!output.exists());
    assert!(!debug_image.exists());

    let message = MapError::InputNotFound { path: input.clone() }.to_string();
    assert!(message.contains("not found"));
    Ok(())
}

#[test]
fn test_garbage_input_is_unreadable() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("map.pgm");
    std::fs::write(&input, b"definitely not an image")?;

    let result = io::load_map(&input);

    assert!(matches!(result, Err(MapError::Unreadable { .. })));
    Ok(())
}

#[test]
fn test_edited_map_round_trips_through_pgm() -> anyhow::Result<()> {
    let map = map_with_block(160, 160, 30, 30, 60, 45);
    let (dir, input) = write_temp_map(&map);
    let output = dir.path().join("new_map.pgm");
    let debug_image = dir.path().join("debug_contours.png");

    let pipeline = Pipeline::new(TableConfig::driver())?;
    let result = pipeline.run_files(&input, &output, &debug_image, &mut [])?;

    assert_eq!(result.accepted_count(), 1);
    let bytes = std::fs::read(&output)?;
    assert!(bytes.starts_with(b"P5"), "binary graymap header");
    assert_eq!(io::load_map(&output)?, result.map);
    Ok(())
}

#[test]
fn test_debug_overlay_colors_follow_classification() -> anyhow::Result<()> {
    let mut map = blank_map(300, 200);
    // Accepted table
    fill_block(&mut map, 20, 20, 50, 50, OCCUPIED);
    // Table-sized but too elongated for the library default
    fill_block(&mut map, 120, 20, 40, 100, OCCUPIED);
    // Too small to be considered at all
    fill_block(&mut map, 220, 150, 10, 10, OCCUPIED);

    let pipeline = Pipeline::new(TableConfig::default())?;
    let result = pipeline.run(&map)?;

    assert_eq!(*result.debug.get_pixel(20, 20), ACCEPTED_COLOR);
    assert_eq!(*result.debug.get_pixel(70, 45), ACCEPTED_COLOR);
    assert_eq!(*result.debug.get_pixel(120, 20), REJECTED_COLOR);
    assert_eq!(*result.debug.get_pixel(160, 70), REJECTED_COLOR);
    assert_ne!(*result.debug.get_pixel(20, 20), CANDIDATE_COLOR);

    // Small obstacle is neither drawn nor edited
    assert_eq!(result.debug.get_pixel(220, 150).0, [0, 0, 0]);
    assert_eq!(result.map.get_pixel(225, 155)[0], OCCUPIED);
    Ok(())
}

#[derive(Default)]
struct RecordingSink {
    seen: Vec<Candidate>,
}

impl CandidateSink for RecordingSink {
    fn consume(&mut self, candidate: &Candidate) -> tablefeet::Result<()> {
        self.seen.push(*candidate);
        Ok(())
    }

    fn name(&self) -> &str {
        "Recording"
    }
}

#[test]
fn test_extra_sinks_see_every_candidate() -> anyhow::Result<()> {
    let mut map = map_with_block(300, 200, 20, 20, 50, 50);
    fill_block(&mut map, 120, 20, 50, 100, OCCUPIED);
    fill_block(&mut map, 220, 150, 10, 10, OCCUPIED);

    let mut recorder = RecordingSink::default();
    let mut report = ConsoleReport::new();
    let pipeline = Pipeline::new(TableConfig::driver())?;

    let result = pipeline.run_with_sinks(&map, &mut [&mut recorder, &mut report])?;

    assert_eq!(recorder.seen, result.candidates);
    assert_eq!(result.candidates.len(), 3);
    assert_eq!(report.candidates(), 2);
    assert_eq!(result.accepted_count(), 2, "driver max_ar accepts the 50x100 table");
    Ok(())
}

#[test]
fn test_stage_dumps_are_written() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let debug_dir = dir.path().join("stages");
    let map = map_with_block(100, 100, 20, 20, 40, 40);

    let pipeline = Pipeline::new(TableConfig::driver())?.with_debug(debug_dir.clone())?;
    pipeline.run(&map)?;

    for name in ["00_input.png", "01_mask.png", "02_contours.png", "03_classified.png"] {
        assert!(debug_dir.join(name).exists(), "missing {}", name);
    }
    Ok(())
}

#[test]
fn test_stage_dump_directory_must_be_empty() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("leftover.txt"), b"old run")?;

    let result = Pipeline::new(TableConfig::driver())?.with_debug(dir.path().to_path_buf());

    assert!(matches!(result, Err(MapError::DebugDirNotEmpty(_))));
    Ok(())
}

#[test]
fn test_detector_matches_pipeline_classification() -> anyhow::Result<()> {
    let mut map = map_with_block(300, 200, 20, 20, 50, 50);
    fill_block(&mut map, 120, 20, 40, 100, OCCUPIED);

    let detector = TableDetector::new(TableConfig::default());
    let pipeline = Pipeline::new(TableConfig::default())?;

    let tables = detector.get_tables(&map);
    let result = pipeline.run(&map)?;

    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].bbox, BoundingBox::new(20, 20, 50, 50));
    assert_eq!(detector.get_candidates(&map), result.candidates);
    Ok(())
}

#[test]
fn test_inner_border_of_small_room_is_a_candidate() -> anyhow::Result<()> {
    // Closed walls around a 100x80 room: the hole border is table-sized too
    let mut map = map_with_block(140, 120, 10, 10, 120, 100);
    fill_block(&mut map, 20, 20, 100, 80, FREE);

    let result = Pipeline::new(TableConfig::driver())?.run(&map)?;

    assert_eq!(result.candidates.len(), 2);
    assert!(result.candidates.iter().any(|c| c.bbox == BoundingBox::new(10, 10, 120, 100)));
    // The hole border runs along the wall pixels around the room
    let hole = result
        .candidates
        .iter()
        .find(|c| c.bbox == BoundingBox::new(19, 19, 102, 82))
        .expect("hole border of the room");
    assert!(hole.classification.passed_dimensions());
    Ok(())
}
