use crate::assets::AssetLoader;
use serde::Deserialize;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Target bead grid
    pub grid: GridConfig,

    /// Palette reduction limit (`null` keeps the whole palette)
    #[serde(default = "default_max_colors")]
    pub max_colors: Option<usize>,

    /// Palette name or path to a palette JSON file
    pub palette: String,

    /// Step mode token ("row" or "quadrant")
    pub steps: String,

    /// Band height for row mode
    pub rows_per_step: usize,

    /// Nearest-neighbour upscale factor of preview.png (each side at most 8192 px)
    pub preview_scale: u32,

    /// Cell size in pattern.svg
    pub svg_cell_size: u32,

    /// Also write pattern.svg
    pub export_svg: bool,
}

/// Grid section of the config
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct GridConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 48,
            height: 48,
        }
    }
}

fn default_max_colors() -> Option<usize> {
    Some(24)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            max_colors: default_max_colors(),
            palette: "perler_basic".to_string(),
            steps: "row".to_string(),
            rows_per_step: 2,
            preview_scale: 10,
            svg_cell_size: 10,
            export_svg: false,
        }
    }
}

/// Values given on the command line; `None` keeps the config value
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub grid: Option<(u32, u32)>,
    pub max_colors: Option<usize>,
    pub no_reduce: bool,
    pub palette: Option<String>,
    pub steps: Option<String>,
    pub rows_per_step: Option<usize>,
    pub export_svg: bool,
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => Self::parse_or_default(&content),
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse YAML, falling back to defaults (with a warning) on error
    pub fn parse_or_default(content: &str) -> Self {
        match serde_yaml::from_str::<Option<Self>>(content) {
            Ok(config) => {
                let config = config.unwrap_or_default();
                tracing::debug!(
                    grid_width = config.grid.width,
                    grid_height = config.grid.height,
                    palette = %config.palette,
                    steps = %config.steps,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }

    /// Apply command line values on top of the loaded config
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some((width, height)) = overrides.grid {
            self.grid = GridConfig { width, height };
        }
        if overrides.no_reduce {
            self.max_colors = None;
        } else if let Some(max_colors) = overrides.max_colors {
            self.max_colors = Some(max_colors);
        }
        if let Some(ref palette) = overrides.palette {
            self.palette = palette.clone();
        }
        if let Some(ref steps) = overrides.steps {
            self.steps = steps.clone();
        }
        if let Some(rows_per_step) = overrides.rows_per_step {
            self.rows_per_step = rows_per_step;
        }
        self.export_svg |= overrides.export_svg;
        self
    }
}
