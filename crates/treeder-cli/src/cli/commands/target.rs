//! `treeder target` – print the destination URL for a launch or share.

use anyhow::Result;
use treeder_core::config::{Shape, ShellConfig};
use treeder_core::target::NavigationTarget;

use super::intent_from_text;

pub fn run_target(cfg: &ShellConfig, text: Option<String>, shape: Option<Shape>) -> Result<()> {
    let mut cfg = cfg.clone();
    if let Some(shape) = shape {
        cfg.shape = shape;
    }
    let target = NavigationTarget::from_config(&cfg)?;
    let intent = intent_from_text(text);
    let dest = target.build(intent.extracted_url());
    tracing::info!(shape = ?cfg.shape, url = %dest, "destination built");
    println!("{dest}");
    Ok(())
}
