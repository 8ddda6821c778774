use std::io::Cursor;
use std::path::Path;

use bead_core::QuantizeResult;

use crate::error::RenderError;

/// Largest palette that fits an indexed PNG
const MAX_INDEXED_COLORS: usize = 256;

/// Largest preview side in pixels (a full 256-bead grid at scale 32)
pub const MAX_PREVIEW_SIDE: u32 = 8192;

/// Pixel size of the preview for a `width x height` grid at `scale`.
///
/// Fails for a zero scale, or when either side would exceed
/// [`MAX_PREVIEW_SIDE`].
pub fn preview_dimensions(width: usize, height: usize, scale: u32) -> Result<(u32, u32), RenderError> {
    if scale == 0 {
        return Err(RenderError::InvalidScale(scale));
    }
    let side = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|c| c.checked_mul(scale))
            .filter(|&px| px <= MAX_PREVIEW_SIDE)
    };
    match (side(width), side(height)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(RenderError::PreviewTooLarge {
            scale,
            width,
            height,
            max: MAX_PREVIEW_SIDE,
        }),
    }
}

/// Encode the quantized grid as a PNG, each cell drawn as a `scale` x `scale` block.
///
/// Uses an indexed PNG whose PLTE is the result palette (truecolor only for
/// palettes beyond 256 colors), then re-compresses with oxipng.
pub fn encode_preview_png(result: &QuantizeResult, scale: u32) -> Result<Vec<u8>, RenderError> {
    let (width, height) = preview_dimensions(result.width(), result.height(), scale)?;
    let palette = result.palette();

    let (color_type, bit_depth, plte, packed) = if palette.len() <= MAX_INDEXED_COLORS {
        let cells: Vec<u8> = result.indices().cells().iter().map(|&idx| idx as u8).collect();
        let indices = upscale(&cells, result.width(), scale);
        let (depth, bits) = match palette.len() {
            0..=2 => (png::BitDepth::One, 1),
            3..=4 => (png::BitDepth::Two, 2),
            5..=16 => (png::BitDepth::Four, 4),
            _ => (png::BitDepth::Eight, 8),
        };
        let plte: Vec<u8> = palette.colors().iter().flat_map(|c| c.rgb()).collect();
        let packed = if bits == 8 {
            indices
        } else {
            pack_nbits(&indices, width, bits)
        };
        (png::ColorType::Indexed, depth, Some(plte), packed)
    } else {
        let rgb: Vec<u8> = upscale(result.rgb().cells(), result.width(), scale)
            .into_iter()
            .flatten()
            .collect();
        (png::ColorType::Rgb, png::BitDepth::Eight, None, rgb)
    };

    // Fast settings, oxipng does the real compression
    let png_bytes = encode_png(width, height, color_type, bit_depth, plte.as_deref(), &packed)?;

    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or_else(|e| {
        tracing::debug!(%e, "oxipng failed, keeping unoptimized preview");
        png_bytes
    });

    Ok(optimized)
}

/// Write preview.png
pub fn write_preview_png(path: &Path, result: &QuantizeResult, scale: u32) -> Result<(), RenderError> {
    let bytes = encode_preview_png(result, scale)?;
    std::fs::write(path, &bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote preview PNG");
    Ok(())
}

/// Nearest-neighbour upscale of a row-major grid by an integer factor.
fn upscale<T: Copy>(cells: &[T], width: usize, scale: u32) -> Vec<T> {
    let scale = scale as usize;
    let mut out = Vec::with_capacity(cells.len() * scale * scale);
    for row in cells.chunks_exact(width) {
        let start = out.len();
        for &cell in row {
            out.extend(std::iter::repeat(cell).take(scale));
        }
        let end = out.len();
        for _ in 1..scale {
            out.extend_from_within(start..end);
        }
    }
    out
}

/// Encode packed pixel data as a PNG.
fn encode_png(
    width: u32,
    height: u32,
    color_type: png::ColorType,
    bit_depth: png::BitDepth,
    plte: Option<&[u8]>,
    packed: &[u8],
) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(bit_depth);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        if let Some(plte) = plte {
            encoder.set_palette(plte);
        }
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(packed)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Pack pixel values into N-bit PNG row data (1, 2, or 4 bits per pixel).
fn pack_nbits(indices: &[u8], width: u32, bits: u8) -> Vec<u8> {
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = (width as usize).div_ceil(pixels_per_byte);
    let height = indices.len() / width as usize;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width as usize) {
        let mut byte = 0u8;
        for (i, &idx) in row.iter().enumerate() {
            let shift = (8 - bits) - (i % pixels_per_byte) as u8 * bits;
            byte |= (idx & mask) << shift;

            if (i % pixels_per_byte) == pixels_per_byte - 1 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}
