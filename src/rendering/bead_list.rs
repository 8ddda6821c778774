use std::borrow::Cow;
use std::path::Path;

use bead_core::CountEntry;

use crate::error::RenderError;

const HEADER: &str = "color_code,color_name,count";

/// Format counts as CSV: header, then one row per entry in the given order.
///
/// Rows end in CRLF as RFC 4180 asks.
pub fn format_bead_list(entries: &[CountEntry]) -> String {
    let mut out = String::with_capacity(32 * (entries.len() + 1));
    out.push_str(HEADER);
    out.push_str("\r\n");
    for entry in entries {
        out.push_str(&csv_field(&entry.code));
        out.push(',');
        out.push_str(&csv_field(&entry.name));
        out.push(',');
        out.push_str(&entry.count.to_string());
        out.push_str("\r\n");
    }
    out
}

/// Write bead_list.csv
pub fn write_bead_list_csv(path: &Path, entries: &[CountEntry]) -> Result<(), RenderError> {
    std::fs::write(path, format_bead_list(entries))?;
    tracing::debug!(path = %path.display(), rows = entries.len(), "Wrote bead list");
    Ok(())
}

/// Quote a field if it contains a delimiter, quote or line break.
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(code: &str, name: &str, count: usize) -> CountEntry {
        CountEntry {
            code: code.to_string(),
            name: name.to_string(),
            rgb: [0, 0, 0],
            count,
        }
    }

    #[test]
    fn test_format_bead_list() {
        let csv = format_bead_list(&[entry("P01", "White", 12), entry("P18", "Black", 3)]);
        assert_eq!(
            csv,
            "color_code,color_name,count\r\nP01,White,12\r\nP18,Black,3\r\n"
        );
    }

    #[test]
    fn test_empty_list_has_header_only() {
        assert_eq!(format_bead_list(&[]), "color_code,color_name,count\r\n");
    }

    #[test]
    fn test_fields_are_quoted_when_needed() {
        let csv = format_bead_list(&[entry("X1", "Red, \"Fire\" Engine", 1)]);
        assert_eq!(
            csv.lines().nth(1),
            Some("X1,\"Red, \"\"Fire\"\" Engine\",1")
        );
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("two\nlines"), "\"two\nlines\"");
    }
}
