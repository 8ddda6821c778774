use std::sync::Arc;

use bead_core::{compute_counts, plan_steps_by_name, quantize, total_count};

use crate::assets::AssetLoader;
use crate::error::PipelineError;
use crate::models::{PatternMeta, PatternReport, PatternRequest};
use crate::rendering::{
    preview_dimensions, write_bead_list_csv, write_pattern_pdf, write_preview_png, write_svg,
};
use crate::services::{image_source, palette_loader};

pub const PREVIEW_FILE: &str = "preview.png";
pub const BEAD_LIST_FILE: &str = "bead_list.csv";
pub const PDF_FILE: &str = "pattern.pdf";
pub const SVG_FILE: &str = "pattern.svg";

/// Pattern pipeline that orchestrates image → quantize → count → steps → exports
pub struct PatternPipeline {
    assets: Arc<AssetLoader>,
}

impl PatternPipeline {
    pub fn new(assets: Arc<AssetLoader>) -> Self {
        Self { assets }
    }

    /// Run one generation job.
    ///
    /// Everything that can be rejected (grid, step mode, preview size,
    /// palette, image, color limit) is checked before the output directory
    /// is touched.
    pub fn run(&self, request: &PatternRequest) -> Result<PatternReport, PipelineError> {
        let grid = request.grid;
        let (width, height) = (grid.width as usize, grid.height as usize);

        let plan = plan_steps_by_name(width, height, &request.steps, request.rows_per_step)?;
        preview_dimensions(width, height, request.preview_scale)?;
        let palette = palette_loader::load_palette(&self.assets, &request.palette)?;

        let image = image_source::load_image(&request.input)?;
        let pixels = image_source::resample_to_grid(&image, grid)?;
        tracing::info!(
            input = %request.input.display(),
            grid = %grid,
            "Resampled input image"
        );

        let result = quantize(&pixels, &palette, request.max_colors)?;
        let counts = compute_counts(result.indices(), result.palette())?;
        let total_beads = total_count(&counts);
        tracing::info!(
            palette = %result.palette().name(),
            colors_used = counts.len(),
            total_beads,
            steps = plan.len(),
            "Quantized pattern"
        );

        let outdir = &request.outdir;
        std::fs::create_dir_all(outdir).map_err(|source| PipelineError::Io {
            path: outdir.clone(),
            source,
        })?;

        let preview = outdir.join(PREVIEW_FILE);
        write_preview_png(&preview, &result, request.preview_scale)?;

        let bead_list = outdir.join(BEAD_LIST_FILE);
        write_bead_list_csv(&bead_list, &counts)?;

        let meta = PatternMeta {
            title: request.title(),
            grid,
            palette_name: result.palette().name().to_string(),
        };
        let pdf = outdir.join(PDF_FILE);
        write_pattern_pdf(&pdf, &meta, &result, &counts, &plan)?;

        let svg = if request.export_svg {
            let path = outdir.join(SVG_FILE);
            write_svg(&path, result.rgb(), request.svg_cell_size)?;
            Some(path)
        } else {
            None
        };

        let report = PatternReport {
            preview,
            bead_list,
            pdf,
            svg,
            palette_name: meta.palette_name,
            colors_used: counts.len(),
            total_beads,
            steps: plan.len(),
            counts,
        };
        tracing::info!(outdir = %outdir.display(), files = report.files().len(), "Pattern written");
        Ok(report)
    }
}
