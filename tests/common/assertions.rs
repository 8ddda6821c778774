//! Assertion helpers for tests.

use std::path::Path;

use pretty_assertions::assert_eq;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Assert the file is a PNG and return its (width, height)
pub fn assert_png(path: &Path) -> (u32, u32) {
    let bytes = std::fs::read(path).unwrap();
    assert!(
        bytes.starts_with(PNG_SIGNATURE),
        "Expected PNG image at {}, got {} bytes starting with {:?}",
        path.display(),
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );

    let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
    let reader = decoder.read_info().unwrap();
    let info = reader.info();
    (info.width, info.height)
}

/// Assert the file is a PDF and return its raw bytes
pub fn assert_pdf(path: &Path) -> Vec<u8> {
    let bytes = std::fs::read(path).unwrap();
    assert!(
        bytes.starts_with(b"%PDF-"),
        "Expected PDF at {}, got {:?}",
        path.display(),
        &bytes[..8.min(bytes.len())]
    );
    bytes
}

/// Number of page objects in an uncompressed-structure PDF
pub fn pdf_page_count(pdf: &[u8]) -> usize {
    let text = String::from_utf8_lossy(pdf);
    text.matches("/Type /Page").count() - text.matches("/Type /Pages").count()
}

/// Whether a PDF content stream draws `needle` as text
pub fn pdf_shows_text(pdf: &[u8], needle: &str) -> bool {
    let escaped = format!("({needle})");
    pdf.windows(escaped.len()).any(|w| w == escaped.as_bytes())
}

/// Assert the CSV file has exactly these data rows (header checked too)
pub fn assert_bead_list(path: &Path, rows: &[&str]) {
    let csv = std::fs::read_to_string(path).unwrap();
    let mut lines: Vec<&str> = csv.split("\r\n").collect();
    assert_eq!(lines.pop(), Some(""), "CSV should end with CRLF");
    assert_eq!(lines[0], "color_code,color_name,count");
    assert_eq!(&lines[1..], rows);
}
