use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use sitegen::site::Site;

/// Write a generated site to disk: pages and stylesheets at the root,
/// extracted images under assets/.
pub async fn write_site(site: &Site, outdir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(outdir)
        .await
        .with_context(|| format!("creating {}", outdir.display()))?;

    for file in site.files.iter() {
        let path = outdir.join(&file.path);
        tokio::fs::write(&path, &file.contents)
            .await
            .with_context(|| format!("writing {}", path.display()))?;
        info!("wrote {} ({} bytes)", file.path, file.contents.len());
    }

    if !site.assets.is_empty() {
        tokio::fs::create_dir_all(outdir.join("assets"))
            .await
            .context("creating assets directory")?;
        for asset in site.assets.iter() {
            let path = outdir.join(&asset.path);
            tokio::fs::write(&path, &asset.bytes)
                .await
                .with_context(|| format!("writing {}", path.display()))?;
            info!("wrote {} ({} bytes)", asset.path, asset.bytes.len());
        }
    }

    Ok(())
}
