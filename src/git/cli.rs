use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::domain::CommitTagSet;
use crate::error::{BuildVersionError, Result};
use crate::git::Repository;

/// Runs the git executable directly (no shell) for each query.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    work_dir: Option<PathBuf>,
}

impl GitCli {
    /// Create a runner for `program`, executed in the process working directory.
    pub fn new(program: impl Into<String>) -> Self {
        GitCli {
            program: program.into(),
            work_dir: None,
        }
    }

    /// Run every query from `dir` instead of the process working directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }

    pub fn work_dir(&self) -> Option<&Path> {
        self.work_dir.as_deref()
    }

    /// Run the program with `args` and return its standard output.
    ///
    /// # Returns
    /// * `Ok(String)` - Standard output, decoded as UTF-8
    /// * `Err(Launch)` - If the program cannot be started
    /// * `Err(ExternalTool)` - If it exits with a non-zero status
    /// * `Err(Encoding)` - If its output is not UTF-8
    fn run(&self, args: &[&str]) -> Result<String> {
        let command = format!("{} {}", self.program, args.join(" "));

        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(dir) = &self.work_dir {
            cmd.current_dir(dir);
        }

        debug!(command = %command, "running");
        let output = cmd.output().map_err(|error| BuildVersionError::Launch {
            command: command.clone(),
            error,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BuildVersionError::external_tool(
                command,
                output.status.code().unwrap_or(-1),
                stderr.trim(),
            ));
        }

        let stdout =
            String::from_utf8(output.stdout).map_err(|_| BuildVersionError::Encoding {
                command: command.clone(),
            })?;
        debug!(command = %command, stdout = %stdout.trim_end(), "finished");
        Ok(stdout)
    }
}

impl Default for GitCli {
    fn default() -> Self {
        GitCli::new("git")
    }
}

/// Remove every line break from the output, wherever it occurs.
fn strip_line_breaks(output: &str) -> String {
    output.chars().filter(|c| *c != '\r' && *c != '\n').collect()
}

impl Repository for GitCli {
    fn toplevel(&self) -> Result<PathBuf> {
        let output = self.run(&["rev-parse", "--show-toplevel"])?;
        Ok(PathBuf::from(strip_line_breaks(&output)))
    }

    fn tags_at_head(&self) -> Result<CommitTagSet> {
        let output = self.run(&["tag", "--points-at", "HEAD"])?;
        Ok(CommitTagSet::from_output(&output))
    }

    fn head_commit_date(&self) -> Result<String> {
        let output = self.run(&["log", "-1", "--format=%cd", "--date=short"])?;
        Ok(output.trim().to_string())
    }

    fn head_short_hash(&self) -> Result<String> {
        let output = self.run(&["rev-parse", "--short", "HEAD"])?;
        Ok(output.trim().to_string())
    }
}
