//! Link openers.

use crate::error::LinkError;
use std::process::{Command, Stdio};

/// Hands a deep link to whatever should open it.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<(), LinkError>;
}

/// Logs the link and leaves opening it to the caller.
///
/// MCP clients receive the link in the tool result and open it themselves.
#[derive(Debug, Clone, Default)]
pub struct LoggedLinkOpener;

impl LinkOpener for LoggedLinkOpener {
    fn open(&self, url: &str) -> Result<(), LinkError> {
        tracing::info!(link = %url, "Deep link ready");
        Ok(())
    }
}

/// Opens links with the platform URL handler in a fresh, detached process.
///
/// The child gets no stdio and no referrer; nothing of the caller leaks
/// into the opened page.
#[derive(Debug, Clone, Default)]
pub struct SystemLinkOpener;

impl SystemLinkOpener {
    fn command(url: &str) -> Command {
        if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            // Empty title argument so `start` does not treat the URL as one
            cmd.args(["/C", "start", "", url]);
            cmd
        } else if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> Result<(), LinkError> {
        let mut child = Self::command(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| LinkError::OpenFailed(e.to_string()))?;
        tracing::info!(link = %url, "Deep link opened");

        // Reap the handler off the caller's thread so no zombie is left behind
        std::thread::Builder::new()
            .name("link-opener-reaper".to_string())
            .spawn(move || {
                if let Err(e) = child.wait() {
                    tracing::warn!("Failed to reap link handler: {}", e);
                }
            })
            .map_err(|e| LinkError::OpenFailed(e.to_string()))?;

        Ok(())
    }
}
