//! End-to-end pipeline tests: image in, pattern files out.

mod common;

use std::sync::Arc;

use common::fixtures;
use perler_gen::assets::AssetLoader;
use perler_gen::error::{ImageError, PipelineError};
use perler_gen::services::PatternPipeline;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn pipeline() -> PatternPipeline {
    PatternPipeline::new(Arc::new(AssetLoader::default()))
}

#[test]
fn test_row_pattern_with_full_palette() {
    let dir = TempDir::new().unwrap();
    let input = fixtures::write_split_png(dir.path(), 6, 4, 3);
    let request = fixtures::request(dir.path(), &input, 6, 4);

    let report = pipeline().run(&request).unwrap();

    assert_eq!(report.palette_name, "Perler Basic");
    assert_eq!(report.colors_used, 2);
    assert_eq!(report.total_beads, 24);
    assert_eq!(report.steps, 2);
    assert_eq!(report.svg, None);

    assert_eq!(common::assert_png(&report.preview), (18, 12));
    common::assert_bead_list(&report.bead_list, &["P01,White,12", "P18,Black,12"]);

    let pdf = common::assert_pdf(&report.pdf);
    // cover, legend, two row bands
    assert_eq!(common::pdf_page_count(&pdf), 4);
    assert!(common::pdf_shows_text(&pdf, "split"));
    assert!(common::pdf_shows_text(&pdf, "Step 1: Rows 1-2"));
    assert!(common::pdf_shows_text(&pdf, "Step 2: Rows 3-4"));
}

#[test]
fn test_quadrant_pattern_with_reduction_and_svg() {
    let dir = TempDir::new().unwrap();
    let input = fixtures::write_split_png(dir.path(), 6, 4, 4);
    let mut request = fixtures::request(dir.path(), &input, 6, 4);
    request.steps = "Quadrant".to_string();
    request.max_colors = Some(1);
    request.export_svg = true;

    let report = pipeline().run(&request).unwrap();

    // White covers 16 of 24 cells, so it is the one color kept
    assert_eq!(report.palette_name, "Perler Basic Top 1");
    assert_eq!(report.colors_used, 1);
    assert_eq!(report.steps, 4);
    common::assert_bead_list(&report.bead_list, &["P01,White,24"]);

    let pdf = common::assert_pdf(&report.pdf);
    assert_eq!(common::pdf_page_count(&pdf), 6);
    assert!(common::pdf_shows_text(&pdf, "Step 4: Quadrant 4 (Bottom-Right)"));

    let svg_path = report.svg.as_deref().unwrap();
    let svg = std::fs::read_to_string(svg_path).unwrap();
    assert!(svg.contains(r#"width="60" height="40""#));
    assert_eq!(svg.matches("<rect").count(), 24);
    assert_eq!(svg.matches(r##"fill="#f1f1f1""##).count(), 24);
}

#[test]
fn test_resamples_to_requested_grid() {
    let dir = TempDir::new().unwrap();
    let input = fixtures::write_split_png(dir.path(), 40, 20, 20);
    let request = fixtures::request(dir.path(), &input, 8, 4);

    let report = pipeline().run(&request).unwrap();

    assert_eq!(report.total_beads, 32);
    assert_eq!(common::assert_png(&report.preview), (24, 12));
    let csv = std::fs::read_to_string(&report.bead_list).unwrap();
    assert!(csv.contains("P01,White,"));
    assert!(csv.contains("P18,Black,"));
}

#[test]
fn test_rerun_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let input = fixtures::write_split_png(dir.path(), 10, 6, 7);
    let request = fixtures::request(dir.path(), &input, 10, 6);

    let first = pipeline().run(&request).unwrap();
    let csv = std::fs::read(&first.bead_list).unwrap();
    let pdf = std::fs::read(&first.pdf).unwrap();

    let second = pipeline().run(&request).unwrap();
    assert_eq!(first, second);
    assert_eq!(std::fs::read(&second.bead_list).unwrap(), csv);
    assert_eq!(std::fs::read(&second.pdf).unwrap(), pdf);
}

#[test]
fn test_unknown_mode_is_reported_before_writing() {
    let dir = TempDir::new().unwrap();
    let input = fixtures::write_split_png(dir.path(), 4, 4, 2);
    let mut request = fixtures::request(dir.path(), &input, 4, 4);
    request.steps = "diagonal".to_string();

    let err = pipeline().run(&request).unwrap_err();

    assert!(err.to_string().contains("unknown step mode 'diagonal'"));
    assert!(!request.outdir.exists());
}

#[test]
fn test_zero_rows_per_step_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = fixtures::write_split_png(dir.path(), 4, 4, 2);
    let mut request = fixtures::request(dir.path(), &input, 4, 4);
    request.rows_per_step = 0;

    let result = pipeline().run(&request);
    assert!(matches!(result, Err(PipelineError::Pattern(_))));
    assert!(!request.outdir.exists());
}

#[test]
fn test_missing_input_image() {
    let dir = TempDir::new().unwrap();
    let request = fixtures::request(dir.path(), &dir.path().join("nope.png"), 4, 4);

    let result = pipeline().run(&request);
    assert!(matches!(
        result,
        Err(PipelineError::Image(ImageError::Decode { .. }))
    ));
    assert!(!request.outdir.exists());
}
