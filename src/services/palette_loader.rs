use bead_core::{Palette, PaletteColor, Rgb};
use serde::Deserialize;

use crate::assets::AssetLoader;
use crate::error::PaletteLoadError;

/// On-disk palette format
#[derive(Debug, Deserialize)]
struct PaletteFile {
    #[serde(default = "default_palette_name")]
    name: String,
    #[serde(default)]
    colors: Vec<ColorEntry>,
}

#[derive(Debug, Deserialize)]
struct ColorEntry {
    #[serde(default)]
    code: String,
    #[serde(default)]
    name: String,
    rgb: Option<Vec<i64>>,
    hex: Option<String>,
}

fn default_palette_name() -> String {
    "Palette".to_string()
}

/// Load a palette by name or path through the asset loader
pub fn load_palette(loader: &AssetLoader, name: &str) -> Result<Palette, PaletteLoadError> {
    let data = loader.read_palette(name).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PaletteLoadError::NotFound(name.to_string())
        } else {
            PaletteLoadError::Io {
                origin: name.to_string(),
                source: e,
            }
        }
    })?;

    let palette = parse_palette(&data, name)?;
    tracing::debug!(
        palette = %palette.name(),
        colors = palette.len(),
        "Loaded palette"
    );
    Ok(palette)
}

/// Parse palette JSON; `origin` only appears in error messages
pub fn parse_palette(json: &[u8], origin: &str) -> Result<Palette, PaletteLoadError> {
    let file: PaletteFile =
        serde_json::from_slice(json).map_err(|source| PaletteLoadError::Json {
            origin: origin.to_string(),
            source,
        })?;

    if file.colors.is_empty() {
        return Err(PaletteLoadError::NoColors);
    }

    let colors = file
        .colors
        .into_iter()
        .enumerate()
        .map(|(index, entry)| color_from_entry(index, entry))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Palette::new(file.name, colors)?)
}

fn color_from_entry(index: usize, entry: ColorEntry) -> Result<PaletteColor, PaletteLoadError> {
    let code = entry.code.trim();
    if code.is_empty() {
        return Err(PaletteLoadError::MissingField {
            index,
            field: "code",
        });
    }
    let name = entry.name.trim();
    if name.is_empty() {
        return Err(PaletteLoadError::MissingField {
            index,
            field: "name",
        });
    }

    let rgb = match (entry.rgb, entry.hex) {
        (Some(values), _) => rgb_from_values(code, &values)?,
        (None, Some(hex)) => parse_hex_color(&hex).ok_or_else(|| PaletteLoadError::InvalidHex {
            code: code.to_string(),
            value: hex.clone(),
        })?,
        (None, None) => {
            return Err(PaletteLoadError::MissingField {
                index,
                field: "rgb",
            })
        }
    };

    Ok(PaletteColor::new(code, name, rgb))
}

fn rgb_from_values(code: &str, values: &[i64]) -> Result<Rgb, PaletteLoadError> {
    let invalid = |reason: String| PaletteLoadError::InvalidRgb {
        code: code.to_string(),
        reason,
    };

    let [r, g, b] = values else {
        return Err(invalid(format!("expected 3 values, got {}", values.len())));
    };

    let channel = |v: i64| {
        u8::try_from(v).map_err(|_| invalid(format!("{v} is outside 0..=255")))
    };
    Ok([channel(*r)?, channel(*g)?, channel(*b)?])
}

/// Parse `#RRGGBB`, `RRGGBB` or `#RGB`
pub fn parse_hex_color(value: &str) -> Option<Rgb> {
    let hex = value.trim();
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.is_ascii() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        6 => {
            let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
            Some([channel(0)?, channel(2)?, channel(4)?])
        }
        // Short form needs the '#' so bare three-digit strings are not guessed at
        3 if digits.len() != hex.len() => {
            let channel = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok().map(|v| v * 17);
            Some([channel(0)?, channel(1)?, channel(2)?])
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bead_core::PaletteError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_rgb_palette() {
        let json = br##"{
            "name": "Tiny",
            "colors": [
                {"code": "P01", "name": "White", "rgb": [255, 255, 255]},
                {"code": "P18", "name": "Black", "hex": "#000000"}
            ]
        }"##;

        let palette = parse_palette(json, "tiny").unwrap();
        assert_eq!(palette.name(), "Tiny");
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.color(0).code(), "P01");
        assert_eq!(palette.color(1).rgb(), [0, 0, 0]);
    }

    #[test]
    fn test_name_defaults() {
        let json = br#"{"colors": [{"code": "A", "name": "Red", "rgb": [255, 0, 0]}]}"#;
        assert_eq!(parse_palette(json, "x").unwrap().name(), "Palette");
    }

    #[test]
    fn test_rgb_wins_over_hex() {
        let json =
            br##"{"colors": [{"code": "A", "name": "Red", "rgb": [255, 0, 0], "hex": "#00FF00"}]}"##;
        assert_eq!(parse_palette(json, "x").unwrap().color(0).rgb(), [255, 0, 0]);
    }

    #[test]
    fn test_invalid_json() {
        let result = parse_palette(b"{not json", "broken.json");
        match result {
            Err(PaletteLoadError::Json { origin, .. }) => assert_eq!(origin, "broken.json"),
            other => panic!("Expected Json error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_colors() {
        assert!(matches!(
            parse_palette(br#"{"name": "None", "colors": []}"#, "x"),
            Err(PaletteLoadError::NoColors)
        ));
        assert!(matches!(
            parse_palette(br#"{"name": "None"}"#, "x"),
            Err(PaletteLoadError::NoColors)
        ));
    }

    #[test]
    fn test_rgb_arity_and_range() {
        let short = br#"{"colors": [{"code": "A", "name": "Red", "rgb": [255, 0]}]}"#;
        match parse_palette(short, "x") {
            Err(PaletteLoadError::InvalidRgb { code, reason }) => {
                assert_eq!(code, "A");
                assert_eq!(reason, "expected 3 values, got 2");
            }
            other => panic!("Expected InvalidRgb, got {other:?}"),
        }

        let high = br#"{"colors": [{"code": "A", "name": "Red", "rgb": [256, 0, 0]}]}"#;
        assert!(matches!(
            parse_palette(high, "x"),
            Err(PaletteLoadError::InvalidRgb { .. })
        ));

        let negative = br#"{"colors": [{"code": "A", "name": "Red", "rgb": [0, -1, 0]}]}"#;
        assert!(matches!(
            parse_palette(negative, "x"),
            Err(PaletteLoadError::InvalidRgb { .. })
        ));
    }

    #[test]
    fn test_missing_fields() {
        let no_code = br#"{"colors": [{"name": "Red", "rgb": [255, 0, 0]}]}"#;
        assert!(matches!(
            parse_palette(no_code, "x"),
            Err(PaletteLoadError::MissingField { index: 0, field: "code" })
        ));

        let blank_name = br#"{"colors": [
            {"code": "A", "name": "Red", "rgb": [255, 0, 0]},
            {"code": "B", "name": "  ", "rgb": [0, 0, 0]}
        ]}"#;
        assert!(matches!(
            parse_palette(blank_name, "x"),
            Err(PaletteLoadError::MissingField { index: 1, field: "name" })
        ));

        let no_color = br#"{"colors": [{"code": "A", "name": "Red"}]}"#;
        assert!(matches!(
            parse_palette(no_color, "x"),
            Err(PaletteLoadError::MissingField { index: 0, field: "rgb" })
        ));
    }

    #[test]
    fn test_duplicate_code() {
        let json = br#"{"colors": [
            {"code": "A", "name": "Red", "rgb": [255, 0, 0]},
            {"code": "A", "name": "Blue", "rgb": [0, 0, 255]}
        ]}"#;
        match parse_palette(json, "x") {
            Err(PaletteLoadError::Invalid(e)) => assert_eq!(
                e,
                PaletteError::DuplicateCode {
                    code: "A".to_string()
                }
            ),
            other => panic!("Expected duplicate code error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF8000"), Some([255, 128, 0]));
        assert_eq!(parse_hex_color("ff8000"), Some([255, 128, 0]));
        assert_eq!(parse_hex_color("#f80"), Some([255, 136, 0]));
        assert_eq!(parse_hex_color(" #000000 "), Some([0, 0, 0]));
        assert_eq!(parse_hex_color("f80"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn test_load_embedded_palettes() {
        let loader = AssetLoader::default();
        for (name, _) in loader.list_palettes() {
            let palette = load_palette(&loader, &name).unwrap();
            assert!(!palette.is_empty(), "palette {name} is empty");
        }

        let basic = load_palette(&loader, "perler_basic").unwrap();
        assert_eq!(basic.name(), "Perler Basic");
        assert_eq!(basic.color(0).name(), "White");
    }

    #[test]
    fn test_load_unknown_palette() {
        let result = load_palette(&AssetLoader::default(), "does_not_exist");
        assert!(matches!(result, Err(PaletteLoadError::NotFound(name)) if name == "does_not_exist"));
    }
}
