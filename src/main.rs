#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use habitgallery_core::{GalleryConfig, HttpBackend, Page};

/// Habit Gallery - share habit scorecards and comics
#[derive(Parser, Debug)]
#[command(name = "habitgallery-desktop")]
#[command(about = "Habit Gallery - browse and share habit scorecards")]
struct Args {
    /// Base URL of the gallery server
    #[arg(short, long, default_value = "http://127.0.0.1:5000/")]
    server_url: String,

    /// Keep-alive ping interval in minutes (minimum 5)
    #[arg(short, long, default_value_t = 10)]
    ping_interval_mins: u64,

    /// Do not ping the server to keep it awake
    #[arg(long)]
    no_keep_alive: bool,

    /// Debug logging (RUST_LOG still takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    habitgallery_core::logging::init(args.verbose);

    let config = GalleryConfig::new(&args.server_url)
        .context("invalid --server-url")?
        .with_ping_interval(Duration::from_secs(args.ping_interval_mins * 60))
        .with_keep_alive(!args.no_keep_alive);
    let backend = HttpBackend::new(config.clone()).context("failed to create HTTP client")?;
    let page: context::SharedPage = Arc::new(Page::new(config, Arc::new(backend)));

    tracing::info!("Starting Habit Gallery against {}", args.server_url);

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("習慣養成畫廊")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(page)
        .launch(app::App);
    Ok(())
}
