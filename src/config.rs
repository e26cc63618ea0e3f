use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{BuildVersionError, Result};

/// Represents the complete configuration for build-version.
///
/// Every field has a default, so an empty file (or no file at all) yields the
/// stock behavior: `VERSION "X.Y.Z.${BUILD_NUMBER}"` read from `CMakeLists.txt`
/// and git queried through the `git` executable.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub project: ProjectSettings,

    #[serde(default)]
    pub git: GitSettings,
}

fn default_declaration_file() -> String {
    "CMakeLists.txt".to_string()
}

fn default_marker() -> String {
    "VERSION \"".to_string()
}

fn default_suffix() -> String {
    ".${BUILD_NUMBER}\"".to_string()
}

fn default_program() -> String {
    "git".to_string()
}

/// Where the declared project version lives and how it is spelled.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProjectSettings {
    /// Build-configuration file, relative to the checkout's top level.
    #[serde(default = "default_declaration_file")]
    pub file: String,

    /// Literal text that introduces the declaration.
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Literal build-number placeholder that terminates the version.
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        ProjectSettings {
            file: default_declaration_file(),
            marker: default_marker(),
            suffix: default_suffix(),
        }
    }
}

/// Which implementation answers the repository queries.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Run the git executable as a subprocess.
    #[default]
    Cli,
    /// Query the repository in-process through libgit2.
    Libgit2,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GitSettings {
    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default)]
    pub backend: Backend,
}

impl Default for GitSettings {
    fn default() -> Self {
        GitSettings {
            program: default_program(),
            backend: Backend::default(),
        }
    }
}

/// Loads settings from file or returns defaults.
///
/// There is no implicit lookup: without an explicit path the defaults are
/// used, so the computed version never depends on files outside the checkout.
///
/// # Arguments
/// * `config_path` - Optional path to a TOML settings file
///
/// # Returns
/// * `Ok(Settings)` - Loaded or default settings
/// * `Err` - If the file cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Settings> {
    let Some(path) = config_path else {
        return Ok(Settings::default());
    };

    let config_str = fs::read_to_string(path).map_err(|e| {
        BuildVersionError::settings(format!("cannot read {}: {}", path.display(), e))
    })?;

    let settings: Settings = toml::from_str(&config_str).map_err(|e| {
        BuildVersionError::settings(format!("cannot parse {}: {}", path.display(), e))
    })?;

    if settings.project.marker.is_empty() || settings.project.suffix.is_empty() {
        return Err(BuildVersionError::settings(
            "project marker and suffix must not be empty",
        ));
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_declaration() {
        let settings = Settings::default();
        assert_eq!(settings.project.file, "CMakeLists.txt");
        assert_eq!(settings.project.marker, "VERSION \"");
        assert_eq!(settings.project.suffix, ".${BUILD_NUMBER}\"");
        assert_eq!(settings.git.program, "git");
        assert_eq!(settings.git.backend, Backend::Cli);
    }

    #[test]
    fn test_no_path_returns_defaults() {
        assert_eq!(load_config(None).unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let settings: Settings = toml::from_str("[git]\nbackend = \"libgit2\"\n").unwrap();
        assert_eq!(settings.git.backend, Backend::Libgit2);
        assert_eq!(settings.git.program, "git");
        assert_eq!(settings.project, ProjectSettings::default());
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let result: std::result::Result<Settings, _> =
            toml::from_str("[git]\nbackend = \"svn\"\n");
        assert!(result.is_err());
    }
}
