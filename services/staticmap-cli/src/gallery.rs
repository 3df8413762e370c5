//! Sample gallery: renders a fixed set of locations and writes an HTML page
//! embedding every result as data URLs.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use map_common::MapError;
use staticmap::{MapOutput, MapRequest, StaticMapRenderer};
use tracing::{info, warn};

/// One gallery entry.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub name: &'static str,
    pub wkt: &'static str,
    /// `None` lets the renderer pick a zoom from the geometry.
    pub zoom: Option<u8>,
}

const fn sample(name: &'static str, wkt: &'static str, zoom: Option<u8>) -> Sample {
    Sample { name, wkt, zoom }
}

pub const AUSTRALIA: &[Sample] = &[
    sample("Sydney", "POINT(151.2093 -33.8688)", Some(12)),
    sample("Melbourne", "POINT(144.9631 -37.8136)", Some(12)),
    sample("Brisbane", "POINT(153.0251 -27.4698)", Some(12)),
    sample("Perth", "POINT(115.8575 -31.9505)", Some(12)),
    sample("Uluru", "POINT(131.0369 -25.3444)", Some(12)),
];

/// Elsewhere in the world, including the dateline and polar regions.
pub const WORLD: &[Sample] = &[
    sample("New York", "POINT(-74.0060 40.7128)", Some(12)),
    sample("Tokyo", "POINT(139.6917 35.6895)", Some(12)),
    sample("London", "POINT(-0.1278 51.5074)", Some(12)),
    sample("Fiji", "POINT(178.4417 -18.1248)", Some(12)),
    sample("Kiribati", "POINT(172.9794 1.8709)", Some(12)),
    sample("Longyearbyen", "POINT(15.6455 78.2232)", Some(12)),
    sample("McMurdo Station", "POINT(166.6682 -77.8460)", Some(12)),
    sample("Easter Island", "POINT(-109.3673 -27.1127)", Some(12)),
    sample("Marrakesh", "POINT(-8.0083 31.6295)", Some(12)),
    sample("Kathmandu", "POINT(85.3240 27.7172)", Some(12)),
];

pub const SHAPES: &[Sample] = &[
    sample(
        "Sydney-Melbourne LineString",
        "LINESTRING(151.2093 -33.8688, 144.9631 -37.8136)",
        None,
    ),
    sample(
        "Eastern Australia Polygon",
        "POLYGON((153.0 -28.0, 150.0 -37.0, 145.0 -35.0, 148.0 -25.0, 153.0 -28.0))",
        None,
    ),
    sample(
        "Antimeridian Polygon",
        "POLYGON((170 -10, -170 -10, -170 10, 170 10, 170 -10))",
        Some(4),
    ),
];

pub const SECTIONS: &[(&str, &[Sample])] = &[
    ("Australian Locations", AUSTRALIA),
    ("World Locations", WORLD),
    ("LineString and Polygon Examples", SHAPES),
];

/// Result of rendering one sample.
#[derive(Debug)]
pub struct GalleryEntry {
    pub sample: Sample,
    pub outcome: Result<MapOutput, MapError>,
}

#[derive(Debug, Default)]
pub struct GalleryReport {
    pub sections: Vec<(&'static str, Vec<GalleryEntry>)>,
}

impl GalleryReport {
    fn entries(&self) -> impl Iterator<Item = &GalleryEntry> {
        self.sections.iter().flat_map(|(_, entries)| entries)
    }

    pub fn rendered(&self) -> usize {
        self.entries().filter(|e| e.outcome.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.entries().filter(|e| e.outcome.is_err()).count()
    }
}

/// Render every sample, one at a time. A failing sample is recorded in the
/// report and does not stop the others.
pub async fn render_gallery(renderer: &StaticMapRenderer) -> GalleryReport {
    let mut report = GalleryReport::default();

    for &(title, samples) in SECTIONS {
        let mut entries = Vec::with_capacity(samples.len());
        for &sample in samples {
            let request = MapRequest {
                zoom: sample.zoom,
                ..MapRequest::default()
            };
            let outcome = renderer.render(sample.wkt, &request).await;
            match &outcome {
                Ok(output) => info!(name = sample.name, zoom = output.zoom, "Rendered sample"),
                Err(e) => warn!(name = sample.name, error = %e, "Sample failed"),
            }
            entries.push(GalleryEntry { sample, outcome });
        }
        report.sections.push((title, entries));
    }

    report
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

const STYLE: &str = r#"
    body { font-family: Arial, sans-serif; margin: 20px; }
    h1 { color: #333; }
    h2 { color: #555; margin-top: 30px; }
    .map-container { display: flex; flex-wrap: wrap; gap: 20px; }
    .map-item { border: 1px solid #ddd; border-radius: 5px; padding: 10px; width: 650px; }
    .map-item h3 { margin-top: 0; margin-bottom: 10px; }
    .map-item p { font-family: monospace; font-size: 12px; color: #666;
                  white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
    .map-images { display: flex; gap: 10px; }
    .map-img-container { text-align: center; }
    .map-img-container span { display: block; margin-top: 5px; font-size: 12px; color: #555; }
    .error { color: #c00; font-family: monospace; }
"#;

fn write_entry(html: &mut String, entry: &GalleryEntry) -> std::fmt::Result {
    let name = escape_html(entry.sample.name);
    writeln!(html, "    <div class=\"map-item\">")?;
    writeln!(html, "      <h3>{}</h3>", name)?;
    writeln!(html, "      <p>{}</p>", escape_html(entry.sample.wkt))?;

    match &entry.outcome {
        Ok(output) => {
            writeln!(html, "      <div class=\"map-images\">")?;
            writeln!(
                html,
                "        <div class=\"map-img-container\"><img src=\"{}\" alt=\"{}\" width=\"{}\" height=\"{}\"><span>Zoom Level: {}</span></div>",
                output.main_data_url(),
                name,
                output.main.width,
                output.main.height,
                output.zoom
            )?;
            if let Some(world) = &output.world {
                writeln!(
                    html,
                    "        <div class=\"map-img-container\"><img src=\"{}\" alt=\"{} (World View)\" width=\"{}\" height=\"{}\"><span>Zoom Level: 0 (World View)</span></div>",
                    world.to_data_url(),
                    name,
                    world.width,
                    world.height
                )?;
            }
            writeln!(html, "      </div>")?;
        }
        Err(e) => {
            writeln!(
                html,
                "      <p class=\"error\">Error: {}</p>",
                escape_html(&e.to_string())
            )?;
        }
    }

    writeln!(html, "    </div>")
}

/// The gallery as a standalone HTML page.
pub fn render_html(report: &GalleryReport) -> String {
    let mut html = String::new();
    // Writing into a String cannot fail.
    let _ = write_page(&mut html, report);
    html
}

fn write_page(html: &mut String, report: &GalleryReport) -> std::fmt::Result {
    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"en\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "  <meta charset=\"UTF-8\">")?;
    writeln!(html, "  <title>Static Map Gallery</title>")?;
    writeln!(html, "  <style>{}</style>", STYLE)?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    writeln!(html, "  <h1>Static Map Gallery</h1>")?;

    for (title, entries) in &report.sections {
        writeln!(html, "  <h2>{}</h2>", escape_html(title))?;
        writeln!(html, "  <div class=\"map-container\">")?;
        for entry in entries {
            write_entry(html, entry)?;
        }
        writeln!(html, "  </div>")?;
    }

    writeln!(html, "</body>")?;
    writeln!(html, "</html>")
}

/// Write `index.html` for `report` into `dir`.
pub async fn write_gallery(dir: &Path, report: &GalleryReport) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join("index.html");
    tokio::fs::write(&path, render_html(report))
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
