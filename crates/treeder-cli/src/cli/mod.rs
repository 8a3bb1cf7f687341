//! CLI for the Treeder shell core.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use treeder_core::config::{self, Shape};

use commands::{run_app, run_asset, run_classify, run_extract, run_share, run_target};

/// Top-level CLI for the Treeder shell.
#[derive(Debug, Parser)]
#[command(name = "treeder")]
#[command(about = "Treeder: share-intent and navigation shell for the Tree Reader web app", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Deployment shape selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
    Embedded,
    Redirect,
}

impl From<ShapeArg> for Shape {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Embedded => Shape::Embedded,
            ShapeArg::Redirect => Shape::Redirect,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the URL found in shared text.
    Extract {
        /// Free-form shared text.
        text: String,
    },

    /// Print the destination URL the shell would navigate to.
    Target {
        /// Shared text (omit for a plain launch).
        #[arg(long)]
        text: Option<String>,
        /// Override the configured deployment shape.
        #[arg(long, value_enum)]
        shape: Option<ShapeArg>,
    },

    /// Classify a navigation request the way the embedded WebView would.
    Classify {
        /// Target URL of the navigation.
        url: String,
        /// The navigation is a redirect.
        #[arg(long)]
        redirect: bool,
        /// The navigation targets the top-level frame.
        #[arg(long)]
        main_frame: bool,
        /// The navigation was triggered by a user gesture.
        #[arg(long)]
        gesture: bool,
    },

    /// Resolve a request URL against the packaged asset bundle.
    Asset {
        /// Request URL, e.g. https://appassets.androidplatform.net/assets/index.html.
        url: String,
        /// Bundle directory (overrides `asset_dir` from config).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Redirect shared text to the hosted app in the default browser.
    Share {
        /// Shared text (omit to just open the hosted app).
        #[arg(long)]
        text: Option<String>,
        /// Print the destination instead of opening it.
        #[arg(long)]
        dry_run: bool,
    },

    /// Look up (or register) the OAuth app for a Mastodon instance.
    App {
        /// Instance host, e.g. mastodon.social.
        instance: String,
        /// Apps cache file (overrides config and the XDG default).
        #[arg(long, value_name = "FILE")]
        apps_file: Option<PathBuf>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Extract { text } => run_extract(&text),
            CliCommand::Target { text, shape } => run_target(&cfg, text, shape.map(Shape::from))?,
            CliCommand::Classify {
                url,
                redirect,
                main_frame,
                gesture,
            } => run_classify(&cfg, &url, redirect, main_frame, gesture)?,
            CliCommand::Asset { url, dir } => run_asset(&cfg, &url, dir)?,
            CliCommand::Share { text, dry_run } => run_share(&cfg, text, dry_run)?,
            CliCommand::App {
                instance,
                apps_file,
            } => run_app(&cfg, instance, apps_file).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
