//! Logomark CLI
//!
//! Usage:
//!   logomark [OPTIONS] <COMMAND>
//!
//! Commands:
//!   brands    List available brands
//!   render    Render a logo as HTML
//!   export    Print the standalone icon markup
//!   url       Print the remote image URL of a raster brand
//!   showcase  Generate the showcase page for a brand
//!   assets    Write downloadable assets for a brand
//!
//! Options:
//!   -b, --brand-file <FILE>  Additional brand definition (TOML format)
//!   -v, --verbose            Increase log verbosity (repeatable)
//!   -h, --help               Print help

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use logomark::renderer::DEFAULT_EXPORT_SIZE;
use logomark::showcase::{export_assets, HttpFetcher};
use logomark::{
    image_url, render_with_config, serialize_logo_markup, svg_document, Brand, BrandRegistry,
    LogoConfig, LogomarkError, MarkupConfig, Showcase, ShowcaseConfig, Size, Theme, Variant,
};

#[derive(Parser)]
#[command(name = "logomark")]
#[command(about = "Render brand logos, export icon markup and build showcase pages")]
struct Cli {
    /// Additional brand definition files (TOML format)
    #[arg(short, long = "brand-file", global = true)]
    brand_file: Vec<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available brands
    Brands,

    /// Render a logo as HTML
    Render {
        /// Brand id
        #[arg(long)]
        brand: String,

        #[arg(long, default_value_t = Variant::default())]
        variant: Variant,

        #[arg(long, default_value_t = Size::default())]
        size: Size,

        #[arg(long, default_value_t = Theme::default())]
        theme: Theme,

        /// Class string passed through to the outer container
        #[arg(long = "class", default_value = "")]
        container_class: String,

        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the standalone icon markup
    Export {
        /// Brand id
        #[arg(long)]
        brand: String,

        #[arg(long, default_value_t = Theme::default())]
        theme: Theme,

        /// Output width and height in pixels
        #[arg(long, default_value_t = DEFAULT_EXPORT_SIZE)]
        px: u32,

        /// Emit a complete .svg file with an XML declaration
        #[arg(long)]
        document: bool,
    },

    /// Print the remote image URL of a raster brand
    Url {
        /// Brand id
        #[arg(long)]
        brand: String,
    },

    /// Generate the showcase page for a brand
    Showcase {
        /// Brand id
        #[arg(long)]
        brand: String,

        /// Output file (prints to stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pixel size of the downloadable icons
        #[arg(long, default_value_t = 200)]
        download_px: u32,

        /// Leave out the Tailwind CDN script
        #[arg(long)]
        no_tailwind: bool,
    },

    /// Write downloadable assets for a brand
    Assets {
        /// Brand id
        #[arg(long)]
        brand: String,

        /// Output directory
        #[arg(short, long)]
        out: PathBuf,

        /// Pixel size of exported SVG files
        #[arg(long, default_value_t = 200)]
        px: u32,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut registry = BrandRegistry::with_builtins();
    for path in &cli.brand_file {
        let brand = match load_brand(path) {
            Ok(brand) => brand,
            Err(message) => {
                eprintln!("{}", message);
                std::process::exit(1);
            }
        };
        if let Err(e) = registry.register(brand) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = run(cli.command, &registry) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load a brand file, formatting errors with source context
fn load_brand(path: &Path) -> Result<Brand, String> {
    let source = fs::read_to_string(path)
        .map_err(|e| format!("Error reading brand file '{}': {}", path.display(), e))?;
    source
        .parse::<Brand>()
        .map_err(|e| e.format(&source, &path.display().to_string()))
}

fn run(command: Command, registry: &BrandRegistry) -> Result<(), LogomarkError> {
    match command {
        Command::Brands => {
            for brand in registry.iter() {
                let kind = if brand.image_url().is_some() {
                    "raster"
                } else {
                    "vector"
                };
                println!("{:<12} {:<20} {}", brand.id, brand.name, kind);
            }
        }
        Command::Render {
            brand,
            variant,
            size,
            theme,
            container_class,
            pretty,
        } => {
            let brand = registry.get(&brand)?;
            let config = LogoConfig::new()
                .with_variant(variant)
                .with_size(size)
                .with_theme(theme)
                .with_container_class(container_class);
            let markup = MarkupConfig::new().with_pretty_print(pretty);
            println!("{}", render_with_config(brand, &config, &markup));
        }
        Command::Export {
            brand,
            theme,
            px,
            document,
        } => {
            let brand = registry.get(&brand)?;
            let output = if document {
                svg_document(brand, theme, px)
            } else {
                None
            };
            match output {
                Some(svg) => println!("{}", svg),
                None => {
                    if document {
                        tracing::warn!(
                            brand = %brand.id,
                            "raster brand has no SVG document, printing inline markup"
                        );
                    }
                    println!("{}", serialize_logo_markup(brand, theme, px));
                }
            }
        }
        Command::Url { brand } => {
            let brand = registry.get(&brand)?;
            println!("{}", image_url(brand)?);
        }
        Command::Showcase {
            brand,
            output,
            download_px,
            no_tailwind,
        } => {
            let brand = registry.get(&brand)?;
            let config = ShowcaseConfig::new()
                .with_download_size(download_px)
                .with_tailwind(!no_tailwind);
            let html = Showcase::with_config(brand, config).render_html();
            match output {
                Some(path) => {
                    fs::write(&path, html).map_err(|e| LogomarkError::io(&path, e))?;
                    tracing::info!(path = %path.display(), "wrote showcase page");
                }
                None => print!("{}", html),
            }
        }
        Command::Assets { brand, out, px } => {
            let brand = registry.get(&brand)?;
            let fetcher = HttpFetcher::new()?;
            let report = export_assets(brand, &out, px, &fetcher)?;
            for path in &report.written {
                println!("{}", path.display());
            }
            for (file, reason) in &report.failed {
                eprintln!("Skipped {}: {}", file, reason);
            }
        }
    }
    Ok(())
}
