//! Asset loading with embedded fallbacks
//!
//! Palettes and the default config ship inside the binary. Two env vars
//! point at filesystem overrides:
//!
//! - `PALETTES_DIR`: palette JSON files there shadow embedded palettes of the same name
//! - `CONFIG_FILE`: used instead of the embedded `config.yaml` when it exists
//!
//! With neither set, only embedded assets are used and nothing is read from disk.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded palette files
#[derive(RustEmbed)]
#[folder = "palettes/"]
#[include = "*.json"]
struct EmbeddedPalettes;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

const PALETTE_EXT: &str = ".json";

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Palettes,
    Config,
}

/// Where a listed palette comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSource {
    Embedded,
    External,
}

impl std::fmt::Display for AssetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetSource::Embedded => f.write_str("embedded"),
            AssetSource::External => f.write_str("external"),
        }
    }
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with merge behavior and optional filesystem override
#[derive(Debug, Default, Clone)]
pub struct AssetLoader {
    /// External palettes directory (from PALETTES_DIR env var)
    palettes_dir: Option<PathBuf>,
    /// External config file path (from CONFIG_FILE env var or --config)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the corresponding override was given.
    pub fn new(palettes_dir: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            palettes_dir,
            config_file,
        }
    }

    /// Create a loader from `PALETTES_DIR` and `CONFIG_FILE`
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("PALETTES_DIR").ok().map(PathBuf::from),
            std::env::var("CONFIG_FILE").ok().map(PathBuf::from),
        )
    }

    /// Replace the config file path (the `--config` flag wins over `CONFIG_FILE`)
    pub fn with_config_file(mut self, config_file: Option<PathBuf>) -> Self {
        if config_file.is_some() {
            self.config_file = config_file;
        }
        self
    }

    pub fn palettes_dir(&self) -> Option<&Path> {
        self.palettes_dir.as_deref()
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Read a palette file
    ///
    /// `name` is tried as a filesystem path first. Otherwise it is a palette
    /// name, with or without `.json`, looked up in `PALETTES_DIR` and then in
    /// the embedded palettes.
    pub fn read_palette(&self, name: &str) -> io::Result<Cow<'static, [u8]>> {
        let direct = Path::new(name);
        if direct.is_file() {
            tracing::trace!(path = %direct.display(), "Loading palette from path");
            return Ok(Cow::Owned(fs::read(direct)?));
        }

        let file_name = if name.ends_with(PALETTE_EXT) {
            name.to_string()
        } else {
            format!("{name}{PALETTE_EXT}")
        };

        if let Some(ref dir) = self.palettes_dir {
            let full_path = dir.join(&file_name);
            if full_path.is_file() {
                tracing::trace!(path = %full_path.display(), "Loading palette from filesystem");
                return Ok(Cow::Owned(fs::read(&full_path)?));
            }
        }

        EmbeddedPalettes::get(&file_name)
            .map(|f| {
                tracing::trace!(palette = %file_name, "Loading palette from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Palette not found: {name}"),
                )
            })
    }

    /// List palette names (merged view of embedded + external, sorted)
    pub fn list_palettes(&self) -> Vec<(String, AssetSource)> {
        let mut palettes: BTreeMap<String, AssetSource> = EmbeddedPalettes::iter()
            .filter_map(|f| f.strip_suffix(PALETTE_EXT).map(str::to_string))
            .map(|name| (name, AssetSource::Embedded))
            .collect();

        if let Some(ref dir) = self.palettes_dir {
            if let Ok(entries) = fs::read_dir(dir) {
                for entry in entries.flatten() {
                    if let Some(name) = entry.file_name().to_str() {
                        if let Some(stem) = name.strip_suffix(PALETTE_EXT) {
                            palettes.insert(stem.to_string(), AssetSource::External);
                        }
                    }
                }
            }
        }

        palettes.into_iter().collect()
    }

    /// Read the config file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to embedded config.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
            tracing::debug!(path = %path.display(), "Config file missing, using embedded config");
        }

        EmbeddedConfig::get("config.yaml")
            .map(|f| {
                tracing::trace!("Loading config from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
            })
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Extract embedded assets to filesystem (init command)
    ///
    /// Uses the configured paths, or `./palettes` and `./config.yaml`.
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for category in categories {
            match category {
                AssetCategory::Palettes => {
                    let dir = self
                        .palettes_dir
                        .clone()
                        .unwrap_or_else(|| PathBuf::from("./palettes"));
                    fs::create_dir_all(&dir)?;

                    for file in EmbeddedPalettes::iter() {
                        let path = dir.join(file.as_ref());
                        if !force && path.exists() {
                            report.skipped.push(path.display().to_string());
                            continue;
                        }
                        if let Some(data) = EmbeddedPalettes::get(&file) {
                            fs::write(&path, &*data.data)?;
                            report.written.push(path.display().to_string());
                        }
                    }
                }
                AssetCategory::Config => {
                    let path = self
                        .config_file
                        .clone()
                        .unwrap_or_else(|| PathBuf::from("./config.yaml"));

                    if !force && path.exists() {
                        report.skipped.push(path.display().to_string());
                        continue;
                    }
                    if let Some(parent) = path.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    if let Some(data) = EmbeddedConfig::get("config.yaml") {
                        fs::write(&path, &*data.data)?;
                        report.written.push(path.display().to_string());
                    }
                }
            }
        }

        Ok(report)
    }

    /// List embedded assets by category (for display)
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        match category {
            AssetCategory::Palettes => EmbeddedPalettes::iter().map(|s| s.to_string()).collect(),
            AssetCategory::Config => vec!["config.yaml".to_string()],
        }
    }
}
