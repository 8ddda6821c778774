//! Test fixtures and constants.

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use perler_gen::models::{GridSpec, PatternRequest};

/// Colors taken verbatim from the embedded Perler Basic palette
pub mod colors {
    /// P01 White
    pub const WHITE: [u8; 3] = [241, 241, 241];

    /// P18 Black
    pub const BLACK: [u8; 3] = [46, 47, 50];
}

/// A small palette in the on-disk JSON format
pub const TWO_TONE_PALETTE: &str = r##"{
  "name": "Two Tone",
  "colors": [
    { "code": "T1", "name": "Snow", "hex": "#FFFFFF" },
    { "code": "T2", "name": "Ink, Deep", "rgb": [0, 0, 0] }
  ]
}"##;

/// Write a PNG whose left `split` columns are white and the rest black
pub fn write_split_png(dir: &Path, width: u32, height: u32, split: u32) -> PathBuf {
    let path = dir.join("split.png");
    RgbImage::from_fn(width, height, |x, _| {
        if x < split {
            Rgb(colors::WHITE)
        } else {
            Rgb(colors::BLACK)
        }
    })
    .save(&path)
    .unwrap();
    path
}

/// Request writing into `<dir>/out` with a grid matching the input image
pub fn request(dir: &Path, input: &Path, width: u32, height: u32) -> PatternRequest {
    PatternRequest {
        input: input.to_path_buf(),
        outdir: dir.join("out"),
        grid: GridSpec::new(width, height).unwrap(),
        max_colors: None,
        palette: "perler_basic".to_string(),
        steps: "row".to_string(),
        rows_per_step: 2,
        preview_scale: 3,
        svg_cell_size: 10,
        export_svg: false,
    }
}

/// Write a palette file into `dir` and return its path
pub fn write_palette(dir: &Path, file_name: &str, json: &str) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, json).unwrap();
    path
}
