//! `treeder share` – redirect-only shape: open the hosted app with the shared URL.

use anyhow::Result;
use treeder_core::config::ShellConfig;
use treeder_core::shell::{redirect_share, SystemOpener};
use treeder_core::target::NavigationTarget;

use super::intent_from_text;

pub fn run_share(cfg: &ShellConfig, text: Option<String>, dry_run: bool) -> Result<()> {
    let hosted = NavigationTarget::new(cfg.hosted_app_base()?, cfg.query_param.clone());
    let intent = intent_from_text(text);

    if dry_run {
        println!("{}", hosted.build(intent.extracted_url()));
        return Ok(());
    }

    let url = redirect_share(&hosted, &intent, &mut SystemOpener::default())?;
    println!("Opened {url}");
    Ok(())
}
