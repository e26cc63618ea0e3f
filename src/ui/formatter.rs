//! Pure formatting functions for UI output.

use console::style;

/// Text written to standard output for `version`.
///
/// Exactly one trailing newline with `newline`, none otherwise.
pub fn format_version_output(version: &str, newline: bool) -> String {
    if newline {
        format!("{}\n", version)
    } else {
        version.to_string()
    }
}

/// Format an error line; the label is colored only when stderr is a terminal.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold().for_stderr(), message)
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_without_newline() {
        assert_eq!(
            format_version_output("1.3.0~2020-07-02~g4f336a2~snapshot", false),
            "1.3.0~2020-07-02~g4f336a2~snapshot"
        );
    }

    #[test]
    fn test_output_with_newline() {
        assert_eq!(format_version_output("1.3.0", true), "1.3.0\n");
    }

    #[test]
    fn test_error_keeps_message() {
        let line = format_error("Encountered commit with multiple tags: a, b");
        assert!(line.contains("ERROR:"));
        assert!(line.ends_with("Encountered commit with multiple tags: a, b"));
    }
}
