use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use perler_gen::assets::{AssetCategory, AssetLoader, AssetSource};
use perler_gen::models::config::ConfigOverrides;
use perler_gen::models::{AppConfig, PatternRequest};
use perler_gen::services::PatternPipeline;

/// Number of colors listed in the generate summary
const SUMMARY_COLORS: usize = 5;

#[derive(Parser)]
#[command(name = "perler-gen")]
#[command(about = "Turn images into fuse-bead patterns with bead counts and step-by-step PDFs")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate preview, bead list and pattern PDF from an image
    Generate(GenerateArgs),
    /// List available palettes
    Palettes,
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract palette JSON files
        #[arg(long)]
        palettes: bool,

        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract all assets
        #[arg(long)]
        all: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Input image (PNG or JPEG)
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory (created if missing)
    #[arg(short, long)]
    outdir: PathBuf,

    /// Grid size in beads
    #[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    grid: Option<Vec<u32>>,

    /// Reduce the palette to at most this many colors
    #[arg(long)]
    max_colors: Option<usize>,

    /// Keep the whole palette
    #[arg(long, conflicts_with = "max_colors")]
    no_reduce: bool,

    /// Palette name or path to a palette JSON file
    #[arg(long)]
    palette: Option<String>,

    /// Step mode: "row" or "quadrant"
    #[arg(long)]
    steps: Option<String>,

    /// Rows per step in row mode
    #[arg(long)]
    rows_per_step: Option<usize>,

    /// Also write pattern.svg
    #[arg(long)]
    export_svg: bool,

    /// Config file (overrides CONFIG_FILE)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl GenerateArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            grid: self.grid.as_deref().and_then(|g| match g {
                [width, height] => Some((*width, *height)),
                _ => None,
            }),
            max_colors: self.max_colors,
            no_reduce: self.no_reduce,
            palette: self.palette.clone(),
            steps: self.steps.clone(),
            rows_per_step: self.rows_per_step,
            export_svg: self.export_svg,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "perler_gen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Generate(args)) => run_generate_command(args),
        Some(Commands::Palettes) => {
            run_palettes_command();
            Ok(())
        }
        Some(Commands::Init {
            palettes,
            config,
            all,
            force,
            list,
        }) => run_init_command(palettes, config, all, force, list),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Run the full pattern pipeline for one image
fn run_generate_command(args: GenerateArgs) -> anyhow::Result<()> {
    let loader = AssetLoader::from_env().with_config_file(args.config.clone());
    let config = AppConfig::load_from_assets(&loader).with_overrides(&args.overrides());
    let request = PatternRequest::from_config(&args.input, &args.outdir, &config)?;

    let report = PatternPipeline::new(Arc::new(loader)).run(&request)?;

    println!("Wrote {} files:", report.files().len());
    for file in report.files() {
        println!("  + {}", file.display());
    }
    println!("\nPalette:     {}", report.palette_name);
    println!("Colors used: {}", report.colors_used);
    println!("Total beads: {}", report.total_beads);
    println!("Steps:       {}", report.steps);

    println!("\nMost used colors:");
    for entry in bead_core::by_frequency(&report.counts)
        .into_iter()
        .take(SUMMARY_COLORS)
    {
        println!("  {:<6} {:<20} {:>6}", entry.code, entry.name, entry.count);
    }

    Ok(())
}

fn run_palettes_command() {
    let loader = AssetLoader::from_env();
    let palettes = loader.list_palettes();

    if palettes.is_empty() {
        println!("No palettes found.");
        return;
    }

    println!("Available palettes:");
    for (name, source) in palettes {
        println!("  {name:<24} ({source})");
    }
}

fn run_init_command(
    palettes: bool,
    config: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        println!("Palettes:");
        for f in AssetLoader::list_embedded(AssetCategory::Palettes) {
            println!("  {f}");
        }
        println!("\nConfig:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        return Ok(());
    }

    let mut categories = Vec::new();
    if all || palettes {
        categories.push(AssetCategory::Palettes);
    }
    if all || config {
        categories.push(AssetCategory::Config);
    }

    if categories.is_empty() {
        eprintln!("No categories specified. Use --all, --palettes, or --config");
        eprintln!("\nRun 'perler-gen init --list' to see embedded assets.");
        std::process::exit(1);
    }

    let loader = AssetLoader::from_env();
    let report = loader.init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let palettes_dir = std::env::var("PALETTES_DIR").ok();
    let rust_log = std::env::var("RUST_LOG").ok();

    println!("perler-gen v{VERSION}");
    println!("Fuse-bead pattern generator\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE  = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  PALETTES_DIR = {}",
        palettes_dir.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG     = {}",
        rust_log.as_deref().unwrap_or("perler_gen=info (default)")
    );

    println!("\nAsset Sources:");

    let loader = AssetLoader::from_env();

    let config_source = match loader.config_file() {
        Some(path) if path.exists() => path.display().to_string(),
        Some(_) => "embedded (file not found)".to_string(),
        None => "embedded".to_string(),
    };
    println!("  Config:   {config_source}");

    fn plural(n: usize) -> &'static str {
        if n == 1 {
            "palette"
        } else {
            "palettes"
        }
    }

    let embedded_count = AssetLoader::list_embedded(AssetCategory::Palettes).len();
    let external_count = loader
        .list_palettes()
        .iter()
        .filter(|(_, source)| *source == AssetSource::External)
        .count();

    match loader.palettes_dir() {
        Some(dir) if dir.is_dir() => println!(
            "  Palettes: {} ({external_count} {}, {embedded_count} embedded)",
            dir.display(),
            plural(external_count)
        ),
        _ => println!(
            "  Palettes: embedded ({embedded_count} {})",
            plural(embedded_count)
        ),
    }

    let config = AppConfig::load_from_assets(&loader);
    println!("\nDefaults:");
    println!("  Grid:       {} x {}", config.grid.width, config.grid.height);
    match config.max_colors {
        Some(n) => println!("  Max colors: {n}"),
        None => println!("  Max colors: (no reduction)"),
    }
    println!("  Palette:    {}", config.palette);
    println!("  Steps:      {}", config.steps);

    println!("\nCommands:");
    println!("  perler-gen generate   Generate a bead pattern from an image");
    println!("  perler-gen palettes   List available palettes");
    println!("  perler-gen init       Extract embedded assets");
    println!("\nRun 'perler-gen --help' for more details.");
}
