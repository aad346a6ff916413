use clap::{Parser, Subcommand};
use photo_montage::loader::{CdnLoader, ImageLoader, LoaderProps, MobileLoader};
use photo_montage::shuffle::RandomShuffler;
use photo_montage::viewport::Viewport;
use photo_montage::{config, layout, montage, output, types};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Viewport flags shared by commands that choose a layout.
#[derive(clap::Args, Clone)]
struct ViewportArgs {
    /// Treat the viewport as mobile (single-image layout)
    #[arg(long, conflicts_with = "viewport_width")]
    mobile: bool,

    /// Viewport width in CSS pixels; classified with viewport.mobile_max_width
    #[arg(long)]
    viewport_width: Option<u32>,

    /// Seed the shuffle for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

impl ViewportArgs {
    fn viewport(&self, config: &config::ViewportConfig) -> Viewport {
        match self.viewport_width {
            Some(width) => Viewport::from_width(width, config),
            None => Viewport::from_mobile_flag(self.mobile),
        }
    }

    fn shuffler(&self) -> RandomShuffler<rand::rngs::StdRng> {
        match self.seed {
            Some(seed) => RandomShuffler::seeded(seed),
            None => RandomShuffler::from_entropy(),
        }
    }
}

#[derive(Parser)]
#[command(name = "photo-montage")]
#[command(about = "Render responsive photo montages with CDN image URLs")]
#[command(long_about = "\
Render responsive photo montages with CDN image URLs

Input is a JSON array of media items:

  [
    { \"id\": \"crag-01\", \"url\": \"/u/alice/crag-01.jpg\" },
    { \"id\": \"crag-02\", \"url\": \"/u/alice/crag-02.jpg\" }
  ]

Layouts:
  Mobile             1 random photo, full-bleed, 640px rendition
  Desktop, 1-4       first 2 of a shuffled list (1 photo: rounded cell)
  Desktop, 5+        2x2 hero + 4 cells

Image URLs: {base_url}{url}?format=webp&w={width}&q={quality}

Run 'photo-montage gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Directory holding config.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    /// CDN base URL (overrides cdn.base_url)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a montage as HTML
    Render {
        /// JSON file with media items
        input: PathBuf,
        #[command(flatten)]
        viewport: ViewportArgs,
        /// Montage is above the fold: load images eagerly at high priority
        #[arg(long)]
        hero: bool,
        /// Write HTML here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Emit only the montage element, not a full document
        #[arg(long)]
        fragment: bool,
    },
    /// Show which layout and items a render would use
    Select {
        /// JSON file with media items
        input: PathBuf,
        #[command(flatten)]
        viewport: ViewportArgs,
    },
    /// Build a single image URL
    Url {
        /// Media source path, e.g. /u/alice/crag-01.jpg
        src: String,
        /// Requested width in pixels
        #[arg(long, default_value_t = 1080)]
        width: u32,
        /// Quality (defaults to 90)
        #[arg(long)]
        quality: Option<u32>,
        /// Use the fixed-width mobile loader
        #[arg(long)]
        mobile: bool,
    },
    /// Validate a media item file
    Check {
        /// JSON file with media items
        input: PathBuf,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            input,
            viewport,
            hero,
            output,
            fragment,
        } => {
            let config = load_config(&cli.config_dir, cli.base_url)?;
            let items = types::load_items(&input)?;
            let rendered = montage::photo_montage(
                &items,
                hero,
                viewport.viewport(&config.viewport),
                &mut viewport.shuffler(),
                &config,
            );
            let Some(markup) = rendered else {
                eprintln!("No items in {}, nothing rendered", input.display());
                return Ok(());
            };
            let html = if fragment {
                markup.into_string()
            } else {
                montage::render_document("Photo Montage", markup).into_string()
            };
            match output {
                Some(path) => {
                    write_output(&path, &html)?;
                    println!("Generated {}", path.display());
                }
                None => println!("{}", html),
            }
        }
        Command::Select { input, viewport } => {
            let config = load_config(&cli.config_dir, cli.base_url)?;
            let items = types::load_items(&input)?;
            let selected = layout::select(
                &items,
                viewport.viewport(&config.viewport),
                &mut viewport.shuffler(),
            );
            output::print_selection(selected.as_ref(), items.len());
        }
        Command::Url {
            src,
            width,
            quality,
            mobile,
        } => {
            let config = load_config(&cli.config_dir, cli.base_url)?;
            let base_url = config.cdn.base_url.as_str();
            let props = LoaderProps {
                src: &src,
                width,
                quality,
            };
            let url = if mobile {
                MobileLoader::new(base_url).url(&props)
            } else {
                CdnLoader::new(base_url).url(&props)
            };
            println!("{}", url);
        }
        Command::Check { input } => {
            println!("==> Checking {}", input.display());
            let items = types::load_items(&input)?;
            output::print_check(&items);
            println!("==> Items are valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load config and apply CLI overrides.
fn load_config(
    dir: &Path,
    base_url: Option<String>,
) -> Result<config::MontageConfig, config::ConfigError> {
    let mut config = config::load_config(dir)?;
    if let Some(base_url) = base_url {
        config.cdn.base_url = base_url;
    }
    tracing::debug!(base_url = %config.cdn.base_url, "config loaded");
    Ok(config)
}

fn write_output(path: &Path, html: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    tracing::info!(path = %path.display(), bytes = html.len(), "wrote montage");
    Ok(())
}
