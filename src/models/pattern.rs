use std::path::{Path, PathBuf};

use bead_core::CountEntry;

use super::{AppConfig, GridSpec};
use crate::error::PipelineError;

/// One pattern generation job
#[derive(Debug, Clone, PartialEq)]
pub struct PatternRequest {
    pub input: PathBuf,
    pub outdir: PathBuf,
    pub grid: GridSpec,
    pub max_colors: Option<usize>,
    pub palette: String,
    pub steps: String,
    pub rows_per_step: usize,
    pub preview_scale: u32,
    pub svg_cell_size: u32,
    pub export_svg: bool,
}

impl PatternRequest {
    /// Build a request from resolved configuration, validating the grid
    pub fn from_config(
        input: impl Into<PathBuf>,
        outdir: impl Into<PathBuf>,
        config: &AppConfig,
    ) -> Result<Self, PipelineError> {
        Ok(Self {
            input: input.into(),
            outdir: outdir.into(),
            grid: GridSpec::new(config.grid.width, config.grid.height)?,
            max_colors: config.max_colors,
            palette: config.palette.clone(),
            steps: config.steps.clone(),
            rows_per_step: config.rows_per_step,
            preview_scale: config.preview_scale,
            svg_cell_size: config.svg_cell_size,
            export_svg: config.export_svg,
        })
    }

    /// Pattern title: the input file name without extension
    pub fn title(&self) -> String {
        self.input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Pattern".to_string())
    }
}

/// Descriptive data printed on the cover page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMeta {
    pub title: String,
    pub grid: GridSpec,
    pub palette_name: String,
}

/// What a pipeline run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternReport {
    pub preview: PathBuf,
    pub bead_list: PathBuf,
    pub pdf: PathBuf,
    pub svg: Option<PathBuf>,
    pub palette_name: String,
    pub colors_used: usize,
    pub total_beads: usize,
    pub steps: usize,
    /// Bead usage in palette order
    pub counts: Vec<CountEntry>,
}

impl PatternReport {
    /// All written files, in write order
    pub fn files(&self) -> Vec<&Path> {
        let mut files = vec![
            self.preview.as_path(),
            self.bead_list.as_path(),
            self.pdf.as_path(),
        ];
        files.extend(self.svg.as_deref());
        files
    }
}
