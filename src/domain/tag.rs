use crate::error::{BuildVersionError, Result};

/// Tags pointing at the current commit
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitTagSet {
    pub names: Vec<String>,
}

impl CommitTagSet {
    /// Create a tag set from tag names
    pub fn new(names: Vec<String>) -> Self {
        CommitTagSet { names }
    }

    /// Parse the line-oriented output of `git tag --points-at HEAD`.
    ///
    /// Blank lines are dropped and a trailing carriage return is not part of
    /// a tag name.
    pub fn from_output(output: &str) -> Self {
        let names = output
            .split('\n')
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        CommitTagSet { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The release tag, if any.
    ///
    /// # Returns
    /// * `Ok(None)` - Untagged commit (snapshot)
    /// * `Ok(Some(tag))` - Exactly one tag (release)
    /// * `Err(AmbiguousTags)` - More than one tag
    pub fn into_release_tag(self) -> Result<Option<String>> {
        if self.names.len() > 1 {
            return Err(BuildVersionError::AmbiguousTags(self.names));
        }
        Ok(self.names.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_output_skips_blank_lines() {
        let tags = CommitTagSet::from_output("1.3.0\n\n");
        assert_eq!(tags.names, vec!["1.3.0".to_string()]);
    }

    #[test]
    fn test_from_output_empty() {
        let tags = CommitTagSet::from_output("");
        assert!(tags.is_empty());
        assert_eq!(tags.into_release_tag().unwrap(), None);
    }

    #[test]
    fn test_from_output_strips_carriage_returns() {
        let tags = CommitTagSet::from_output("1.3.0\r\n");
        assert_eq!(tags.into_release_tag().unwrap(), Some("1.3.0".to_string()));
    }

    #[test]
    fn test_single_tag_is_release() {
        let tags = CommitTagSet::new(vec!["v1.4.0".to_string()]);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags.into_release_tag().unwrap(), Some("v1.4.0".to_string()));
    }

    #[test]
    fn test_multiple_tags_are_ambiguous() {
        let tags = CommitTagSet::from_output("1.3.0\n1.3.0-rc1\n");
        match tags.into_release_tag() {
            Err(BuildVersionError::AmbiguousTags(names)) => {
                assert_eq!(names, vec!["1.3.0".to_string(), "1.3.0-rc1".to_string()]);
            }
            other => panic!("expected AmbiguousTags, got {:?}", other),
        }
    }
}
