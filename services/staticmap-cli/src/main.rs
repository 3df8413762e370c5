//! Static map renderer CLI.
//!
//! Renders a WKT geometry to a main map and a zoom-0 world view, or renders
//! a built-in gallery of sample locations into an HTML report:
//! - `staticmap render --wkt 'POINT(151.2093 -33.8688)' --output out/`
//! - `staticmap gallery --output out/`
//!
//! Tiles come from OpenStreetMap unless `TILE_URL_TEMPLATE` points elsewhere.

mod gallery;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use renderer::MapStyle;
use staticmap::{MapOutput, MapRequest, StaticMapRenderer};
use tile_fetcher::{FetcherConfig, HttpTileSource};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "staticmap")]
#[command(about = "Render WKT geometries onto OpenStreetMap tiles")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// JSON style file overriding the default colors and sizes
    #[arg(long, env = "STATICMAP_STYLE", global = true)]
    style: Option<PathBuf>,

    /// Tile URL template with {z}, {x} and {y} placeholders
    #[arg(long, env = "TILE_URL_TEMPLATE", global = true)]
    tile_url: Option<String>,

    /// Log level
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one geometry to `<name>.png` and `<name>-world.png`
    Render {
        /// Geometry as WKT (POINT, LINESTRING or POLYGON)
        #[arg(long)]
        wkt: String,

        #[arg(long, default_value = "300")]
        width: u32,

        #[arg(long, default_value = "300")]
        height: u32,

        /// Zoom level (derived from the geometry when omitted)
        #[arg(long)]
        zoom: Option<u8>,

        #[arg(long, default_value = "256")]
        tile_size: u32,

        /// Skip the zoom-0 world view
        #[arg(long)]
        no_world: bool,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Base name of the output files
        #[arg(long, default_value = "map")]
        name: String,
    },

    /// Render the sample gallery and write `index.html`
    Gallery {
        /// Output directory
        #[arg(short, long, default_value = "gallery")]
        output: PathBuf,
    },
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

fn build_renderer(args: &Args) -> Result<StaticMapRenderer> {
    let mut config = FetcherConfig::from_env();
    if let Some(template) = &args.tile_url {
        config = config.with_url_template(template.clone());
    }
    let source = HttpTileSource::new(&config).context("Failed to create tile client")?;
    info!(url_template = %config.url_template, "Using tile source");

    let mut renderer = StaticMapRenderer::new(Arc::new(source));
    if let Some(path) = &args.style {
        let style = MapStyle::from_file(path)
            .with_context(|| format!("Failed to load style {}", path.display()))?;
        renderer = renderer.with_style(style);
    }
    Ok(renderer)
}

/// Write the images of `output` as `<name>.png` and `<name>-world.png`.
async fn write_output(dir: &Path, name: &str, output: &MapOutput) -> Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let mut written = Vec::new();
    let mut images = vec![(format!("{}.png", name), &output.main)];
    if let Some(world) = &output.world {
        images.push((format!("{}-world.png", name), world));
    }
    for (file, image) in images {
        let path = dir.join(file);
        tokio::fs::write(&path, image.as_bytes())
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.log_json)?;

    let renderer = build_renderer(&args)?;

    match &args.command {
        Command::Render {
            wkt,
            width,
            height,
            zoom,
            tile_size,
            no_world,
            output,
            name,
        } => {
            let request = MapRequest {
                width: *width,
                height: *height,
                zoom: *zoom,
                tile_size: *tile_size,
                include_world_view: !no_world,
            };
            let result = renderer
                .render(wkt, &request)
                .await
                .context("Failed to render map")?;

            for path in write_output(output, name, &result).await? {
                info!(path = %path.display(), zoom = result.zoom, "Wrote map");
            }
        }
        Command::Gallery { output } => {
            let report = gallery::render_gallery(&renderer).await;
            let path = gallery::write_gallery(output, &report).await?;
            info!(
                path = %path.display(),
                rendered = report.rendered(),
                failed = report.failed(),
                "Wrote gallery"
            );
        }
    }

    Ok(())
}
