#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use gallery_core::{Catalog, GalleryError};
use tracing_subscriber::EnvFilter;

/// Artwork Gallery - desktop viewer
#[derive(Parser, Debug)]
#[command(name = "gallery-desktop")]
#[command(about = "Artwork Gallery - browse a catalog of artworks")]
struct Args {
    /// JSON catalog of artworks (defaults to <data dir>/artwork-gallery/catalog.json)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Default catalog location inside the platform data directory
fn default_catalog_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("artwork-gallery")
        .join("catalog.json")
}

/// Loads the catalog.
///
/// An explicit path must exist. Without one, the default location is tried
/// and the built-in sample catalog is used if nothing is there.
fn load_catalog(explicit: Option<&Path>) -> anyhow::Result<Catalog> {
    if let Some(path) = explicit {
        return Catalog::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()));
    }

    let path = default_catalog_path();
    match Catalog::load(&path) {
        Ok(catalog) => Ok(catalog),
        Err(GalleryError::CatalogNotFound(_)) => {
            tracing::info!(path = %path.display(), "No catalog found, using sample artworks");
            Ok(Catalog::sample())
        }
        Err(e) => {
            Err(e).with_context(|| format!("Failed to load catalog from {}", path.display()))
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let catalog = load_catalog(args.catalog.as_deref())?;
    tracing::info!(count = catalog.len(), "Starting Artwork Gallery");
    context::set_catalog(catalog);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Artwork Gallery")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
