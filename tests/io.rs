mod common;

use common::synthetic_image::checkerboard_rgb;
use edge_mask::config::edge::load_config;
use edge_mask::image::io::{load_color_image, save_gray_u8, save_magnitude_preview, write_json_file};
use edge_mask::image::{GrayImageU8, ImageF32};
use edge_mask::{process_path, EdgeError, PipelineParams};
use std::fs;

fn write_rgb_png(path: &std::path::Path, width: usize, height: usize) {
    let img = checkerboard_rgb(width, height, 8);
    image::RgbImage::from_raw(width as u32, height as u32, img.into_raw())
        .expect("buffer matches size")
        .save(path)
        .expect("write fixture");
}

#[test]
fn load_reports_missing_file_as_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.png");
    match load_color_image(&path) {
        Err(EdgeError::InputNotFound(p)) => assert_eq!(p, path),
        other => panic!("expected InputNotFound, got {other:?}"),
    }
}

#[test]
fn pipeline_short_circuits_when_load_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("bird.jpg");
    assert!(matches!(
        process_path(&missing, PipelineParams::default()),
        Err(EdgeError::InputNotFound(_))
    ));

    let garbage = dir.path().join("garbage.png");
    fs::write(&garbage, b"definitely not a png").unwrap();
    assert!(matches!(
        process_path(&garbage, PipelineParams::default()),
        Err(EdgeError::Decode { .. })
    ));
}

#[test]
fn bad_parameters_are_rejected_before_loading() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("never_read.png");
    let params = PipelineParams::default().with_histogram_bins(0);
    assert!(matches!(
        process_path(&missing, params),
        Err(EdgeError::ParameterOutOfRange { .. })
    ));
}

#[test]
fn loads_rgb_and_saves_single_channel_mask() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("board.png");
    write_rgb_png(&input, 32, 24);

    let loaded = load_color_image(&input).unwrap();
    assert_eq!((loaded.width(), loaded.height(), loaded.channels()), (32, 24, 3));

    let out = process_path(&input, PipelineParams::default()).unwrap();
    let mask_path = dir.path().join("nested/out/my_edges.png");
    save_gray_u8(&out.mask, &mask_path).unwrap();

    let reread = image::open(&mask_path).unwrap();
    assert_eq!(reread.color(), image::ColorType::L8);
    let reread = reread.into_luma8();
    assert_eq!((reread.width(), reread.height()), (32, 24));
    assert_eq!(reread.as_raw().as_slice(), out.mask.data());
    assert!(reread.as_raw().iter().all(|&v| v == 0 || v == 255));
}

#[test]
fn magnitude_preview_scales_to_full_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mag.png");
    let field = ImageF32::from_vec(3, 1, vec![0.0, 1.0, 2.0]);
    save_magnitude_preview(&field, &path).unwrap();
    let reread = image::open(&path).unwrap().into_luma8();
    assert_eq!(reread.as_raw().as_slice(), &[0, 128, 255]);

    let flat = dir.path().join("flat.png");
    save_magnitude_preview(&ImageF32::new(2, 2), &flat).unwrap();
    let reread = image::open(&flat).unwrap().into_luma8();
    assert!(reread.as_raw().iter().all(|&v| v == 0));
}

#[test]
fn tool_config_and_report_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.json");
    fs::write(
        &cfg_path,
        r#"{
            "input": "bird.jpg",
            "pipeline": {"histogramBins": 20},
            "output": {"maskImage": "my_edges.png", "magnitudeImage": "mag.png"}
        }"#,
    )
    .unwrap();
    let cfg = load_config(&cfg_path).unwrap();
    assert_eq!(cfg.pipeline.histogram_bins, 20);
    assert_eq!(cfg.pipeline.threshold, 50.0);
    assert!(cfg.output.magnitude_image.is_some());

    let json_path = dir.path().join("reports/mask.json");
    let mask = GrayImageU8::new(2, 1, vec![0, 255]);
    write_json_file(&json_path, &mask.data()).unwrap();
    let text = fs::read_to_string(&json_path).unwrap();
    let back: Vec<u8> = serde_json::from_str(&text).unwrap();
    assert_eq!(back, vec![0, 255]);

    assert!(matches!(
        load_config(&dir.path().join("absent.json")),
        Err(EdgeError::Io(_))
    ));
}
