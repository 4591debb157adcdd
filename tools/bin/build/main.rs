use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use sitegen::generate_site;
use store::backup;
use tools::write_site;

/// Build the static storefront from an exported backup file.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// backup JSON exported from the builder
    #[arg(short, long)]
    input: PathBuf,

    /// output directory for the generated site
    #[arg(short, long, default_value = "dist")]
    outdir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let cli = Cli::parse();

    let raw = tokio::fs::read_to_string(&cli.input)
        .await
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let data = backup::import_json(&raw).context("parsing backup file")?;

    info!(
        store = %data.settings.name,
        products = data.products.len(),
        pages = data.custom_pages.len(),
        "building site"
    );

    let site = generate_site(&data);
    write_site(&site, &cli.outdir).await?;

    info!(
        "done: {} files, {} assets in {}",
        site.files.len(),
        site.assets.len(),
        cli.outdir.display()
    );
    Ok(())
}
