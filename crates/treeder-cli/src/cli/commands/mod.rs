//! CLI command handlers, one per file.

mod app;
mod asset;
mod classify;
mod extract;
mod share;
mod target;

pub use app::run_app;
pub use asset::run_asset;
pub use classify::run_classify;
pub use extract::run_extract;
pub use share::run_share;
pub use target::run_target;

use treeder_core::share::ShareIntent;

/// `--text` given means a share intent; none means a plain launch.
fn intent_from_text(text: Option<String>) -> ShareIntent {
    match text {
        Some(t) => ShareIntent::send(t),
        None => ShareIntent::launch(),
    }
}
