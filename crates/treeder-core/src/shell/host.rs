//! Host runtime boundary.

use std::io;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use url::Url;

use crate::error::ShellError;

/// Operations the shell needs from the platform WebView.
pub trait WebViewHost {
    fn load_url(&mut self, url: &Url);
    fn can_go_back(&self) -> bool;
    fn go_back(&mut self);
    fn clear_history(&mut self);
}

/// The OS mechanism that opens a URL in the user's default handler.
pub trait UrlOpener {
    fn open(&mut self, url: &Url) -> Result<(), ShellError>;
}

/// Opens URLs with the desktop's default handler (`xdg-open` on Linux,
/// `open` on macOS). The call does not block: the child is waited on from a
/// background thread so it does not linger as a zombie.
#[derive(Debug, Clone)]
pub struct SystemOpener {
    program: String,
}

impl Default for SystemOpener {
    fn default() -> Self {
        let program = if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        };
        Self::with_program(program)
    }
}

impl SystemOpener {
    /// Opener that runs `program <url>` instead of the platform default.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl UrlOpener for SystemOpener {
    fn open(&mut self, url: &Url) -> Result<(), ShellError> {
        let program = self.program.as_str();
        tracing::info!(%url, program, "opening url externally");
        let child = Command::new(program)
            .arg(url.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ShellError::OpenUrl {
                url: url.to_string(),
                reason: format!("{program}: {e}"),
            })?;
        if let Err(e) = reap_in_background(child, program.to_string()) {
            tracing::warn!(program, "could not start reaper thread: {}", e);
        }
        Ok(())
    }
}

fn reap_in_background(
    mut child: Child,
    program: String,
) -> io::Result<JoinHandle<Option<ExitStatus>>> {
    thread::Builder::new()
        .name("treeder-opener-reaper".to_string())
        .spawn(move || match child.wait() {
            Ok(status) => {
                if !status.success() {
                    tracing::debug!(program = %program, %status, "opener exited with failure");
                }
                Some(status)
            }
            Err(e) => {
                tracing::warn!(program = %program, "waiting on opener failed: {}", e);
                None
            }
        })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn default_uses_platform_opener() {
        let opener = SystemOpener::default();
        assert!(opener.program() == "xdg-open" || opener.program() == "open");
    }

    #[test]
    fn missing_program_is_open_error() {
        let mut opener = SystemOpener::with_program("/nonexistent/treeder-opener");
        let url = Url::parse("https://example.com/").unwrap();
        assert!(matches!(opener.open(&url), Err(ShellError::OpenUrl { .. })));
    }

    #[test]
    fn opener_process_is_reaped() {
        let child = Command::new("true").spawn().unwrap();
        let status = reap_in_background(child, "true".to_string())
            .unwrap()
            .join()
            .unwrap();
        assert!(status.is_some_and(|s| s.success()));
    }

    #[test]
    fn open_returns_without_waiting() {
        let mut opener = SystemOpener::with_program("true");
        let url = Url::parse("https://example.com/").unwrap();
        assert!(opener.open(&url).is_ok());
    }
}
