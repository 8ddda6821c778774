use std::fmt::Write as _;
use std::path::Path;

use bead_core::PixelGrid;

use crate::error::RenderError;

/// Render the color grid as SVG, one `cell_size` square `<rect>` per bead.
pub fn render_svg(grid: &PixelGrid, cell_size: u32) -> String {
    let cell = cell_size as usize;
    let width = grid.width() * cell;
    let height = grid.height() * cell;

    let mut svg = String::with_capacity(80 * (grid.len() + 2));
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    for (y, row) in grid.rows().enumerate() {
        for (x, [r, g, b]) in row.iter().enumerate() {
            let _ = writeln!(
                svg,
                r##"<rect x="{}" y="{}" width="{cell}" height="{cell}" fill="#{r:02x}{g:02x}{b:02x}"/>"##,
                x * cell,
                y * cell,
            );
        }
    }
    svg.push_str("</svg>\n");
    svg
}

/// Write pattern.svg
pub fn write_svg(path: &Path, grid: &PixelGrid, cell_size: u32) -> Result<(), RenderError> {
    std::fs::write(path, render_svg(grid, cell_size))?;
    tracing::debug!(path = %path.display(), "Wrote SVG");
    Ok(())
}
