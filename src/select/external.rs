use anyhow::{bail, Context, Result};
use std::io::{self, Write};
use std::process::{Command, Stdio};

use super::PathSelector;
use crate::prompt::Prompter;

/// Delegates selection to an external fuzzy finder such as fzf
///
/// Options are piped to the finder's stdin one per line; the trimmed stdout
/// is the selection when the finder exits successfully.
#[derive(Debug, Clone)]
pub struct ExternalFinder {
    command: String,
    args: Vec<String>,
}

impl ExternalFinder {
    /// Build from a command line such as `fzf --height 40%`
    pub fn new(command_line: &str) -> Self {
        let mut parts = command_line.split_whitespace().map(str::to_owned);
        Self {
            command: parts.next().unwrap_or_default(),
            args: parts.collect(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Check that the finder can be launched at all
    pub fn probe(&self) -> bool {
        Command::new(&self.command)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

impl PathSelector for ExternalFinder {
    fn select(&self, options: &[String], _prompter: &dyn Prompter) -> Result<Option<String>> {
        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .with_context(|| format!("Failed to launch {}", self.command))?;

        {
            let mut stdin = child
                .stdin
                .take()
                .context("Finder stdin was not captured")?;
            // The finder may exit before reading everything
            if let Err(e) = stdin.write_all(options.join("\n").as_bytes()) {
                if e.kind() != io::ErrorKind::BrokenPipe {
                    return Err(e)
                        .with_context(|| format!("Failed to send options to {}", self.command));
                }
            }
        }

        let output = child
            .wait_with_output()
            .with_context(|| format!("Failed to wait for {}", self.command))?;

        if !output.status.success() {
            bail!("{} exited with {}", self.command, output.status);
        }

        let selected = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok((!selected.is_empty()).then_some(selected))
    }
}
