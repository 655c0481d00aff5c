//! Browser launcher
//!
//! Opens the web view with the platform's default URL handler. Launching is
//! best-effort: callers log failures and carry on.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::{Error, Result};

/// Something that can show a URL to the user
#[async_trait]
pub trait UrlOpener: Send + Sync {
    /// Open the URL
    ///
    /// # Errors
    ///
    /// Returns error if the opener could not be started
    async fn open(&self, url: &str) -> Result<()>;
}

/// Opens URLs with the OS default browser
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl SystemBrowser {
    /// Program and arguments that open `url` on this platform
    #[must_use]
    pub fn command_for(url: &str) -> (&'static str, Vec<String>) {
        #[cfg(target_os = "macos")]
        return ("open", vec![url.to_string()]);

        #[cfg(target_os = "windows")]
        return (
            "cmd",
            vec![
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                url.to_string(),
            ],
        );

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        ("xdg-open", vec![url.to_string()])
    }
}

#[async_trait]
impl UrlOpener for SystemBrowser {
    async fn open(&self, url: &str) -> Result<()> {
        let (program, args) = Self::command_for(url);

        // stdout carries MCP traffic, keep the child away from it
        let mut child = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Browser(format!("failed to run {program}: {e}")))?;

        let url = url.to_string();
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if status.success() => {
                    tracing::info!(%url, "browser opened");
                }
                Ok(status) => {
                    tracing::warn!(%url, %status, "failed to open browser");
                }
                Err(e) => {
                    tracing::warn!(%url, error = %e, "failed to open browser");
                }
            }
        });

        Ok(())
    }
}

/// Opener that only logs the URL (for `--no-browser`)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBrowser;

#[async_trait]
impl UrlOpener for NoBrowser {
    async fn open(&self, url: &str) -> Result<()> {
        tracing::info!(%url, "browser launch disabled, view the pokemon at this url");
        Ok(())
    }
}
