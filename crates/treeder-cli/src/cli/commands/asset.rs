//! `treeder asset <url>` – resolve a request against the asset bundle.

use anyhow::{Context, Result};
use std::path::PathBuf;
use treeder_core::assets::{AssetLoader, AssetResponse};
use treeder_core::config::ShellConfig;
use url::Url;

pub fn run_asset(cfg: &ShellConfig, url: &str, dir: Option<PathBuf>) -> Result<()> {
    let root = dir
        .or_else(|| cfg.asset_dir.clone())
        .context("no bundle directory: pass --dir or set asset_dir in config")?;
    let loader = AssetLoader::new(cfg.asset_host.clone(), cfg.asset_prefix.clone(), root);
    let url = Url::parse(url).with_context(|| format!("invalid URL: {url}"))?;

    match loader.should_intercept(&url) {
        None => println!("not intercepted"),
        Some(resp) => {
            let status = resp.status();
            match resp {
                AssetResponse::Found { mime, body } => {
                    println!("{status} {mime} {} bytes", body.len())
                }
                AssetResponse::NotFound => println!("{status} not found"),
            }
        }
    }
    Ok(())
}
