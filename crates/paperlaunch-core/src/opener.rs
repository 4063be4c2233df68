//! Platform-conditional file opening after a successful run.
//!
//! Resolved once at startup to a small enum instead of inline platform string
//! checks. Opening is best-effort: a missing opener never changes the
//! reported outcome of the run.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Platforms the launcher distinguishes for the post-action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS: `open <path>`.
    MacOs,
    /// Linux desktops: `xdg-open <path>`.
    Linux,
    /// Anything else: no post-action, silently skipped.
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            Platform::Other
        }
    }

    /// Opener command for this platform, if any.
    pub fn opener_program(self) -> Option<&'static str> {
        match self {
            Platform::MacOs => Some("open"),
            Platform::Linux => Some("xdg-open"),
            Platform::Other => None,
        }
    }
}

/// Seam between the launcher flow and the real opener process.
pub trait Opener {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Opens files with the platform's default-application opener. The child is
/// spawned detached and not waited on.
#[derive(Debug, Clone, Copy)]
pub struct PlatformOpener {
    platform: Platform,
}

impl PlatformOpener {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl Opener for PlatformOpener {
    fn open(&self, path: &Path) -> Result<()> {
        let Some(program) = self.platform.opener_program() else {
            tracing::debug!("no opener for this platform, skipping");
            return Ok(());
        };
        Command::new(program)
            .arg(path)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to spawn {}", program))?;
        Ok(())
    }
}
