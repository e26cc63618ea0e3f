//! Main workflow orchestration logic
//!
//! Keeps CLI argument parsing in main.rs apart from the version workflow so
//! the workflow can be driven programmatically, with any [Repository].

use tracing::info;

use crate::config::Settings;
use crate::error::Result;
use crate::git::Repository;
use crate::resolver::VersionResolver;
use crate::ui::format_version_output;

/// Arguments for the version workflow
///
/// Mirrors the CLI flags without depending on clap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VersionArgs {
    /// Break line after printing the version
    pub newline: bool,

    /// Print only the declared project version
    pub project: bool,
}

/// Main version workflow
///
/// 1. Project mode: read the declared base version only
/// 2. Otherwise: resolve the release or snapshot version of HEAD
/// 3. Render it, with a trailing newline if requested
///
/// # Returns
///
/// The exact text to write to standard output
pub fn run_version_workflow(
    repo: &dyn Repository,
    settings: &Settings,
    args: VersionArgs,
) -> Result<String> {
    let resolver = VersionResolver::new(repo, &settings.project);

    let version = if args.project {
        info!("printing project version");
        resolver.resolve_project_version()?.to_string()
    } else {
        resolver.resolve_display_version()?.to_string()
    };

    Ok(format_version_output(&version, args.newline))
}
