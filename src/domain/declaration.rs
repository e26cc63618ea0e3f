use std::fs;
use std::path::Path;

use crate::config::ProjectSettings;
use crate::domain::version::BaseVersion;
use crate::error::{BuildVersionError, Result};

/// Extract the declared version from a single line.
///
/// A line matches when it contains both `marker` and `suffix`. Every
/// occurrence of the marker is removed, the text before the first remaining
/// suffix is kept and trimmed. Returns `None` for lines that do not match.
///
/// # Example
/// ```ignore
/// let v = parse_declaration_line("  VERSION \"1.4.0.${BUILD_NUMBER}\"", "VERSION \"", ".${BUILD_NUMBER}\"");
/// assert_eq!(v.as_deref(), Some("1.4.0"));
/// ```
pub fn parse_declaration_line(line: &str, marker: &str, suffix: &str) -> Option<String> {
    if !line.contains(marker) || !line.contains(suffix) {
        return None;
    }

    let stripped = line.replace(marker, "");
    let end = stripped.find(suffix).unwrap_or(stripped.len());
    Some(stripped[..end].trim().to_string())
}

/// Scan declaration text and return the base version of the first matching line.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. The first matching line wins
/// even when its value is rejected afterwards.
pub fn parse_project_version(text: &str, settings: &ProjectSettings) -> Result<BaseVersion> {
    // Splitting on both characters only adds empty lines, and those never match.
    for line in text.split(['\n', '\r']) {
        if let Some(value) = parse_declaration_line(line, &settings.marker, &settings.suffix) {
            return BaseVersion::new(value);
        }
    }

    Err(missing_declaration(settings))
}

/// Read the declaration file at `path` and extract the base version.
pub fn read_project_version(path: &Path, settings: &ProjectSettings) -> Result<BaseVersion> {
    let text = fs::read_to_string(path).map_err(|e| BuildVersionError::read_file(path, e))?;
    parse_project_version(&text, settings)
}

fn missing_declaration(settings: &ProjectSettings) -> BuildVersionError {
    BuildVersionError::config_parse(format!(
        "Unable to read version from {}",
        settings.file
    ))
}
