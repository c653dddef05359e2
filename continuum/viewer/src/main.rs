//! `continuum` command-line front end: render heatmaps and manage markers.
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro, clippy::large_enum_variant)]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use engine::aggregate::readouts;
use engine::board::MarkerBoard;
use engine::geometry::{AreaRect, PointerPos};
use engine::grid::{catalog::GridCatalog, MetricGrid};
use engine::resize::ResizeHandle;
use engine::store::FileStore;
use viewer::colormap::{Blend, PaletteName};
use viewer::config::ViewConfig;
use viewer::{export, overlay, raster};

#[derive(Parser)]
#[command(name = "continuum", version, about = "Computing continuum heatmap with placeable markers")]
struct Cli {
    /// Configuration file
    #[arg(long, default_value = "continuum.toml")]
    config: PathBuf,
    /// Override the configured palette
    #[arg(long)]
    palette: Option<PaletteName>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List metrics and axis labels, or every cell of one metric
    Metrics {
        /// Print the hover text of each cell of this metric
        #[arg(long)]
        cells: Option<String>,
    },
    /// Render a metric to PNG
    Render {
        #[arg(long)]
        metric: Option<String>,
        #[arg(long, conflicts_with = "cells")]
        width: Option<usize>,
        #[arg(long, conflicts_with = "cells")]
        height: Option<usize>,
        /// Flat cells instead of the interpolated field, sized by `cell_px`
        #[arg(long)]
        cells: bool,
        /// Outline placed markers
        #[arg(long)]
        markers: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Create an unplaced marker
    Add { name: String },
    /// Delete a marker
    Remove { id: String },
    /// Show markers with their footprint-averaged values
    List {
        #[arg(long)]
        metric: Option<String>,
    },
    /// Drop a marker at pixel coordinates of the data area
    #[command(allow_negative_numbers = true)]
    Place { id: String, px: f64, py: f64 },
    /// Drag one resize handle of a marker by a pixel offset
    #[command(allow_negative_numbers = true)]
    Resize { id: String, handle: ResizeHandle, dx: f64, dy: f64 },
    /// Write marker readouts as CSV
    Export {
        #[arg(long)]
        metric: Option<String>,
        #[arg(long)]
        out: PathBuf,
    },
}

fn pick_metric<'a>(catalog: &'a GridCatalog, name: Option<&str>) -> Result<&'a MetricGrid> {
    match name {
        None => Ok(catalog.default_metric()),
        Some(n) => match catalog.metric(n) {
            Some(m) => Ok(m),
            None => {
                let known: Vec<&str> = catalog.metric_names().collect();
                bail!("unknown metric '{n}' (known: {})", known.join(", "))
            }
        },
    }
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).try_init();
    let cli = Cli::parse();
    let cfg = ViewConfig::load_or_default(&cli.config);
    let palette = cli.palette.unwrap_or(cfg.palette).palette();
    let blend: Blend = cfg.blend;

    let loaded;
    let catalog: &GridCatalog = match &cfg.catalog_path {
        Some(p) => {
            loaded = GridCatalog::load(p).with_context(|| format!("loading catalog {}", p.display()))?;
            &loaded
        }
        None => GridCatalog::builtin(),
    };
    let (rows, cols) = catalog.shape();
    let (data_w, data_h) = cfg.data_size(rows, cols);
    let area = AreaRect::from_size(data_w as f64, data_h as f64);
    let open_board = || MarkerBoard::open(Box::new(FileStore::new(&cfg.store_dir)), cfg.store_key.clone());

    match cli.command {
        Command::Metrics { cells: Some(name) } => {
            let grid = pick_metric(catalog, Some(&name))?;
            for row in 0..rows {
                for col in 0..cols {
                    if let Some(text) = catalog.cell_tooltip(grid, row, col) {
                        println!("{}\n", text);
                    }
                }
            }
        }
        Command::Metrics { cells: None } => {
            for name in catalog.metric_names() {
                println!("{name}");
            }
            println!();
            for l in catalog.levels() {
                println!("{}  {}", l.id, l.name);
            }
            for t in catalog.tiers() {
                println!("{}  {}", t.id, t.name);
            }
        }
        Command::Render { metric, width, height, cells, markers, out } => {
            let grid = pick_metric(catalog, metric.as_deref().or(cfg.metric.as_deref()))?;
            let mut img = if cells {
                raster::render_cells(grid, palette, blend, cfg.cell_px)
            } else {
                raster::render_field(grid, palette, blend, width.unwrap_or(data_w), height.unwrap_or(data_h))
            };
            if markers {
                let board = open_board();
                overlay::paint_outlines(&mut img, &readouts(board.list(), grid), egui::Color32::WHITE);
            }
            export::write_png(&img, &out).with_context(|| format!("writing {}", out.display()))?;
            info!(metric = grid.name(), path = %out.display(), "rendered");
        }
        Command::Add { name } => {
            let mut board = open_board();
            match board.add(&name) {
                Some(m) => println!("{}", m.id),
                None => bail!("marker name must not be blank"),
            }
        }
        Command::Remove { id } => {
            if !open_board().remove(&id) {
                info!(%id, "no such marker");
            }
        }
        Command::List { metric } => {
            let grid = pick_metric(catalog, metric.as_deref().or(cfg.metric.as_deref()))?;
            let board = open_board();
            for m in board.list() {
                match (m.center, engine::aggregate::value_for(m, grid)) {
                    (Some(c), Some(v)) => println!(
                        "{}  {:<24} at ({:.3}, {:.3}) size {:.2}x{:.2}  {} {:.1}",
                        m.id,
                        m.name,
                        c.x,
                        c.y,
                        m.footprint.width,
                        m.footprint.height,
                        grid.name(),
                        v
                    ),
                    _ => println!("{}  {:<24} (unplaced)", m.id, m.name),
                }
            }
        }
        Command::Place { id, px, py } => {
            let mut board = open_board();
            if board.begin_drag(&id) {
                board.drop_at(&id, PointerPos::new(px, py), &area);
            } else {
                info!(%id, "no such marker");
            }
        }
        Command::Resize { id, handle, dx, dy } => {
            let mut board = open_board();
            let Some(center) = board.get(&id).and_then(|m| m.center) else {
                bail!("marker {id} is unknown or not placed");
            };
            let start = area.to_pixels(center);
            board.begin_resize(&id, handle, start);
            board.pointer_move(PointerPos::new(start.x + dx, start.y + dy), &area);
            board.pointer_up();
            if let Some(m) = board.get(&id) {
                println!("{:.3}x{:.3}", m.footprint.width, m.footprint.height);
            }
        }
        Command::Export { metric, out } => {
            let grid = pick_metric(catalog, metric.as_deref().or(cfg.metric.as_deref()))?;
            let board = open_board();
            export::write_readouts_csv(&out, grid.name(), &readouts(board.list(), grid))
                .with_context(|| format!("writing {}", out.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn cell_render_rejects_explicit_size() {
        let err = Cli::try_parse_from(["continuum", "render", "--cells", "--width", "10", "--out", "a.png"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
        assert!(Cli::try_parse_from(["continuum", "render", "--cells", "--out", "a.png"]).is_ok());
        assert!(Cli::try_parse_from(["continuum", "render", "--width", "10", "--height", "5", "--out", "a.png"]).is_ok());
    }

    #[test]
    fn metrics_accepts_cell_listing() {
        let cli = Cli::try_parse_from(["continuum", "metrics", "--cells", "Latency"]).unwrap();
        assert!(matches!(cli.command, Command::Metrics { cells: Some(ref m) } if m == "Latency"));
    }
}
