//! Printable pattern PDF
//!
//! Page order: cover (title, grid size, colors used, preview image), legend
//! (symbol, swatch, code, name, count; continues over as many pages as it
//! needs), then one page per assembly step showing the full grid with the
//! symbols of that step's cells filled in.
//!
//! Pages are US Letter in PDF points, origin bottom-left.

use std::path::Path;

use bead_core::{symbol_for_index, CountEntry, IndexGrid, QuantizeResult, Rgb, Step, StepPlan};
use miniz_oxide::deflate::compress_to_vec_zlib;
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::error::RenderError;
use crate::models::PatternMeta;

const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;
const INCH: f32 = 72.0;

const FONT_REGULAR: Name<'static> = Name(b"F1");
const FONT_BOLD: Name<'static> = Name(b"F2");
const PREVIEW_IMAGE: Name<'static> = Name(b"Im0");

const LEGEND_LINE: f32 = 14.0;
const LEGEND_BOTTOM: f32 = INCH;
/// Symbol, swatch, code, name, count
const LEGEND_COLUMNS: [f32; 5] = [0.75 * INCH, 1.5 * INCH, 2.0 * INCH, 3.2 * INCH, 5.6 * INCH];

const STEP_MARGIN: f32 = 0.5 * INCH;
const AXIS_GUTTER: f32 = 16.0;
const GRID_LINE_GRAY: f32 = 0.8;

/// One legend line
#[derive(Debug, Clone, PartialEq, Eq)]
struct LegendRow {
    symbol: String,
    rgb: Rgb,
    code: String,
    name: String,
    count: usize,
}

/// Content of one page; `preview` pages reference the preview image
struct PageContent {
    data: Vec<u8>,
    preview: bool,
}

/// Build the full pattern PDF in memory.
///
/// `counts` must come from `result` (see [`bead_core::compute_counts`]).
pub fn render_pattern_pdf(
    meta: &PatternMeta,
    result: &QuantizeResult,
    counts: &[CountEntry],
    plan: &StepPlan,
) -> Result<Vec<u8>, RenderError> {
    if (plan.width(), plan.height()) != (result.width(), result.height()) {
        return Err(RenderError::GridMismatch {
            pattern_w: result.width(),
            pattern_h: result.height(),
            steps_w: plan.width(),
            steps_h: plan.height(),
        });
    }

    let legend = legend_rows(result, counts);
    let symbols: Vec<String> = (0..result.palette().len()).map(symbol_for_index).collect();

    let mut pages = vec![PageContent {
        data: cover_page(meta, legend.len(), result.width(), result.height()),
        preview: true,
    }];
    pages.extend(legend_pages(&legend).into_iter().map(|data| PageContent {
        data,
        preview: false,
    }));
    pages.extend(plan.iter().enumerate().map(|(i, step)| PageContent {
        data: step_page(i + 1, step, result.indices(), &symbols),
        preview: false,
    }));

    let mut refs = RefAlloc::default();
    let catalog_id = refs.next();
    let pages_id = refs.next();
    let info_id = refs.next();
    let regular_id = refs.next();
    let bold_id = refs.next();
    let image_id = refs.next();
    let page_ids: Vec<(Ref, Ref)> = pages.iter().map(|_| (refs.next(), refs.next())).collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(pages_id);
    pdf.document_info(info_id).title(TextStr(&meta.title));
    pdf.pages(pages_id)
        .kids(page_ids.iter().map(|&(page_id, _)| page_id))
        .count(pages.len() as i32);

    pdf.type1_font(regular_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    pdf.type1_font(bold_id)
        .base_font(Name(b"Helvetica-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    let raw: Vec<u8> = result.rgb().cells().iter().flatten().copied().collect();
    let compressed = compress_to_vec_zlib(&raw, 6);
    let mut image = pdf.image_xobject(image_id, &compressed);
    image.filter(Filter::FlateDecode);
    image.width(result.width() as i32);
    image.height(result.height() as i32);
    image.color_space().device_rgb();
    image.bits_per_component(8);
    image.finish();

    for (page, &(page_id, contents_id)) in pages.iter().zip(&page_ids) {
        pdf.stream(contents_id, &page.data);

        let mut pdf_page = pdf.page(page_id);
        pdf_page.parent(pages_id);
        pdf_page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
        pdf_page.contents(contents_id);
        let mut resources = pdf_page.resources();
        resources
            .fonts()
            .pair(FONT_REGULAR, regular_id)
            .pair(FONT_BOLD, bold_id);
        if page.preview {
            resources.x_objects().pair(PREVIEW_IMAGE, image_id);
        }
        resources.finish();
        pdf_page.finish();
    }

    tracing::debug!(pages = pages.len(), "Rendered pattern PDF");
    Ok(pdf.finish())
}

/// Write pattern.pdf
pub fn write_pattern_pdf(
    path: &Path,
    meta: &PatternMeta,
    result: &QuantizeResult,
    counts: &[CountEntry],
    plan: &StepPlan,
) -> Result<(), RenderError> {
    let bytes = render_pattern_pdf(meta, result, counts, plan)?;
    std::fs::write(path, &bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote pattern PDF");
    Ok(())
}

#[derive(Default)]
struct RefAlloc(i32);

impl RefAlloc {
    fn next(&mut self) -> Ref {
        self.0 += 1;
        Ref::new(self.0)
    }
}

/// Used colors in palette order, each with the symbol of its palette index
fn legend_rows(result: &QuantizeResult, counts: &[CountEntry]) -> Vec<LegendRow> {
    result
        .palette()
        .colors()
        .iter()
        .enumerate()
        .filter_map(|(idx, color)| {
            let entry = counts.iter().find(|e| e.code == color.code())?;
            (entry.count > 0).then(|| LegendRow {
                symbol: symbol_for_index(idx),
                rgb: color.rgb(),
                code: entry.code.clone(),
                name: entry.name.clone(),
                count: entry.count,
            })
        })
        .collect()
}

fn cover_page(meta: &PatternMeta, colors_used: usize, grid_w: usize, grid_h: usize) -> Vec<u8> {
    let mut content = Content::new();
    let left = 0.75 * INCH;

    show_text(&mut content, FONT_BOLD, 18.0, left, PAGE_HEIGHT - INCH, &meta.title);
    let lines = [
        format!("Grid: {} x {}", meta.grid.width, meta.grid.height),
        format!("Colors used: {colors_used}"),
        format!("Palette: {}", meta.palette_name),
    ];
    for (i, line) in lines.iter().enumerate() {
        let y = PAGE_HEIGHT - 1.4 * INCH - i as f32 * 0.3 * INCH;
        show_text(&mut content, FONT_REGULAR, 12.0, left, y, line);
    }

    // Preview keeps the grid's aspect ratio inside the box below the text
    let box_top = PAGE_HEIGHT - 2.5 * INCH;
    let box_w = PAGE_WIDTH - 2.0 * left;
    let box_h = box_top - left;
    let scale = (box_w / grid_w as f32).min(box_h / grid_h as f32);
    let (img_w, img_h) = (grid_w as f32 * scale, grid_h as f32 * scale);

    content.save_state();
    content.transform([img_w, 0.0, 0.0, img_h, left, box_top - img_h]);
    content.x_object(PREVIEW_IMAGE);
    content.restore_state();

    content.finish().to_vec()
}

fn legend_pages(rows: &[LegendRow]) -> Vec<Vec<u8>> {
    let header_y = PAGE_HEIGHT - 1.5 * INCH;
    let start_page = |title: &str| {
        let mut content = Content::new();
        show_text(&mut content, FONT_BOLD, 16.0, LEGEND_COLUMNS[0], PAGE_HEIGHT - INCH, title);
        for (x, label) in LEGEND_COLUMNS
            .iter()
            .zip(["Symbol", "", "Code", "Name", "Count"])
            .filter(|(_, label)| !label.is_empty())
        {
            show_text(&mut content, FONT_BOLD, 10.0, *x, header_y, label);
        }
        content
    };

    let mut pages = Vec::new();
    let mut content = start_page("Legend");
    let mut y = header_y - LEGEND_LINE;

    for row in rows {
        if y < LEGEND_BOTTOM {
            pages.push(content.finish().to_vec());
            content = start_page("Legend (continued)");
            y = header_y - LEGEND_LINE;
        }

        let [r, g, b] = row.rgb.map(|c| c as f32 / 255.0);
        content.save_state();
        content.set_fill_rgb(r, g, b);
        content.set_stroke_gray(0.5);
        content.set_line_width(0.5);
        content.rect(LEGEND_COLUMNS[1], y - 1.0, 16.0, 9.0);
        content.fill_nonzero_and_stroke();
        content.restore_state();

        show_text(&mut content, FONT_REGULAR, 10.0, LEGEND_COLUMNS[0], y, &row.symbol);
        show_text(&mut content, FONT_REGULAR, 10.0, LEGEND_COLUMNS[2], y, &row.code);
        show_text(&mut content, FONT_REGULAR, 10.0, LEGEND_COLUMNS[3], y, &row.name);
        show_text(&mut content, FONT_REGULAR, 10.0, LEGEND_COLUMNS[4], y, &row.count.to_string());
        y -= LEGEND_LINE;
    }

    pages.push(content.finish().to_vec());
    pages
}

fn step_page(number: usize, step: &Step, indices: &IndexGrid, symbols: &[String]) -> Vec<u8> {
    let (w, h) = (indices.width(), indices.height());
    let mut content = Content::new();

    show_text(
        &mut content,
        FONT_BOLD,
        14.0,
        STEP_MARGIN,
        PAGE_HEIGHT - 0.75 * INCH,
        &format!("Step {number}: {}", step.name),
    );

    let area_w = PAGE_WIDTH - 2.0 * STEP_MARGIN - AXIS_GUTTER;
    let area_h = PAGE_HEIGHT - 2.5 * INCH;
    let cell = (area_w / w as f32).min(area_h / h as f32);
    let origin_x = STEP_MARGIN + AXIS_GUTTER;
    let origin_y = STEP_MARGIN;
    let top = origin_y + h as f32 * cell;
    // Top-left corner of the cell at (row, col)
    let cell_x = |col: usize| origin_x + col as f32 * cell;
    let cell_y = |row: usize| origin_y + (h - 1 - row) as f32 * cell;

    content.save_state();
    content.set_stroke_gray(GRID_LINE_GRAY);
    content.set_line_width(0.5);
    for col in 0..=w {
        let x = origin_x + col as f32 * cell;
        content.move_to(x, origin_y);
        content.line_to(x, top);
    }
    for row in 0..=h {
        let y = origin_y + row as f32 * cell;
        content.move_to(origin_x, y);
        content.line_to(origin_x + w as f32 * cell, y);
    }
    content.stroke();
    content.restore_state();

    let every = label_every(cell);
    for col in (0..w).filter(|c| (c + 1) % every == 0 || *c == 0) {
        let x = cell_x(col) + cell * 0.3;
        show_text(&mut content, FONT_REGULAR, 6.0, x, top + 2.0, &(col + 1).to_string());
    }
    for row in (0..h).filter(|r| (r + 1) % every == 0 || *r == 0) {
        let y = cell_y(row) + cell * 0.25;
        show_text(&mut content, FONT_REGULAR, 6.0, STEP_MARGIN, y, &(row + 1).to_string());
    }

    let font_size = (cell * 0.6).floor().clamp(4.0, 12.0);
    for (row, cells) in indices.rows().enumerate() {
        for (col, &idx) in cells.iter().enumerate() {
            if !step.contains(row, col) {
                continue;
            }
            let x = cell_x(col) + cell * 0.25;
            let y = cell_y(row) + cell * 0.2;
            show_text(&mut content, FONT_REGULAR, font_size, x, y, &symbols[idx]);
        }
    }

    content.finish().to_vec()
}

/// Label every n-th row/column so 6pt numbers do not overlap on small cells.
fn label_every(cell: f32) -> usize {
    [1, 2, 5, 10, 20, 50, 100]
        .into_iter()
        .find(|&n| n as f32 * cell >= 8.0)
        .unwrap_or(100)
}

fn show_text(content: &mut Content, font: Name, size: f32, x: f32, y: f32, text: &str) {
    let encoded = win_ansi(text);
    content
        .begin_text()
        .set_font(font, size)
        .next_line(x, y)
        .show(Str(&encoded))
        .end_text();
}

/// Encode for the standard fonts' WinAnsiEncoding; unmappable chars become '?'.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E | 0xA0..=0xFF => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}
