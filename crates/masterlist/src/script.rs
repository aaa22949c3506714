//! Runner for the external master playlist script.
//!
//! The script is an opaque child process. Its output is only logged; the
//! caller learns whether the run succeeded.

use std::{process::Stdio, time::Duration};

use thiserror::Error;
use tokio::process::Command;

use crate::config::Config;

/// Errors from a playlist script run.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Script did not finish within {0:?}")]
    Timeout(Duration),

    #[error("Script exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },
}

/// Captured output of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOutput {
    pub stdout: String,
    pub stderr: String,
}

/// The command that rebuilds the master playlist.
#[derive(Debug, Clone)]
pub struct PlaylistScript {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl PlaylistScript {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.playlist_script.clone(),
            config.playlist_script_args.clone(),
            config.script_timeout(),
        )
    }

    /// Run the script to completion and log what it printed.
    ///
    /// The child is killed if the timeout elapses or the returned future is
    /// dropped.
    pub async fn run(&self) -> Result<ScriptOutput, ScriptError> {
        tracing::info!(program = %self.program, args = ?self.args, "Running playlist script");

        let child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ScriptError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| ScriptError::Timeout(self.timeout))?
            .map_err(|source| ScriptError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        for line in stdout.lines() {
            tracing::info!(target: "masterlist::script", "{line}");
        }
        for line in stderr.lines() {
            tracing::warn!(target: "masterlist::script", "{line}");
        }

        if !output.status.success() {
            return Err(ScriptError::Failed {
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(ScriptOutput { stdout, stderr })
    }
}
