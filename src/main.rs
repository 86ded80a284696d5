mod catalog;
mod color;
mod config;
mod error;
mod query;
mod server;
mod view;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "showcase", version, about = "App catalog site with icon color stats")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Override the catalog JSON path.
    #[arg(long)]
    catalog: Option<std::path::PathBuf>,

    /// Override the listen port.
    #[arg(long, short)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default).
    Serve,
    /// Print the app list view-model as JSON (headless).
    Apps {
        /// Only apps in this category.
        #[arg(long)]
        category: Option<String>,
    },
    /// Print one app's detail view-model as JSON (headless).
    App { slug: String },
    /// Print the colors view-model as JSON (headless).
    Colors,
    /// Print the color statistics for one hex color.
    Stats { hex: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut cfg = config::load(cli.config.as_deref()).context("load config")?;
    cfg.apply_env().context("apply environment")?;
    if let Some(port) = cli.port {
        cfg.server.port = port;
    }
    if let Some(path) = cli.catalog {
        cfg.paths.catalog = path;
    }
    cfg.finalize();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let catalog = load_catalog(&cfg)?;
            server::serve(&cfg, catalog).await?;
        }
        Command::Apps { category } => {
            let catalog = load_catalog(&cfg)?;
            let url = match &category {
                Some(c) => format!("/apps?category={}", urlencoding::encode(c)),
                None => "/apps".to_string(),
            };
            let page = view::assemble_list_page(&catalog, category.as_deref(), &url, &cfg.site);
            print_json(&page)?;
        }
        Command::App { slug } => {
            let catalog = load_catalog(&cfg)?;
            let url = format!("/apps/{}", urlencoding::encode(&slug));
            let page = view::detail_page(&catalog, &slug, &url, &cfg.site)?;
            print_json(&page)?;
        }
        Command::Colors => {
            let catalog = load_catalog(&cfg)?;
            print_json(&view::assemble_colors_page(&catalog)?)?;
        }
        Command::Stats { hex } => print_json(&color::stats_for(&hex)?)?,
    }

    Ok(())
}

fn load_catalog(cfg: &config::Config) -> anyhow::Result<catalog::Catalog> {
    catalog::load(&cfg.paths.catalog).context("load catalog")
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
