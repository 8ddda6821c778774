//! Top-K palette selection by usage.

use crate::palette::Palette;

/// Pick up to `k` palette indices ordered by `(count desc, index asc)`.
///
/// Unused colors are never selected. If nothing is used at all the result
/// is `[0]`, so the reduced palette is never empty.
pub(crate) fn top_colors(counts: &[usize], k: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..counts.len()).collect();
    order.sort_by(|&a, &b| counts[b].cmp(&counts[a]).then(a.cmp(&b)));

    let mut top: Vec<usize> = order
        .into_iter()
        .filter(|&i| counts[i] > 0)
        .take(k)
        .collect();
    if top.is_empty() {
        top.push(0);
    }
    top
}

/// Derive the reduced palette `"{name} Top {n}"` from usage counts.
pub(crate) fn reduced_palette(palette: &Palette, counts: &[usize], k: usize) -> Palette {
    let top = top_colors(counts, k);
    let name = format!("{} Top {}", palette.name(), top.len());
    palette.subset(name, &top)
}
