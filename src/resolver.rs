//! Version resolution for the current checkout.
//!
//! A commit with exactly one tag is a release and its tag is the version.
//! Any other commit is a snapshot of the declared base version, stamped with
//! the commit date and abbreviated hash. More than one tag is an error: the
//! tool never guesses which one was meant.

use tracing::{debug, info};

use crate::config::ProjectSettings;
use crate::domain::{read_project_version, BaseVersion, VersionString};
use crate::error::Result;
use crate::git::Repository;

/// Derives version strings from a repository and the project declaration.
pub struct VersionResolver<'a> {
    repo: &'a dyn Repository,
    project: &'a ProjectSettings,
}

impl<'a> VersionResolver<'a> {
    pub fn new(repo: &'a dyn Repository, project: &'a ProjectSettings) -> Self {
        VersionResolver { repo, project }
    }

    /// Read the declared base version from the checkout's declaration file.
    ///
    /// Only asks the repository for its top-level directory.
    ///
    /// # Returns
    /// * `Ok(BaseVersion)` - The version before the build-number suffix
    /// * `Err(ConfigParse)` - No matching line, or an empty/undotted value
    /// * `Err(ReadFile)` - The declaration file cannot be read
    pub fn resolve_project_version(&self) -> Result<BaseVersion> {
        let path = self.repo.toplevel()?.join(&self.project.file);
        debug!(path = %path.display(), "reading project version");

        let version = read_project_version(&path, self.project)?;
        debug!(version = %version, "project version");
        Ok(version)
    }

    /// Resolve the version string for HEAD.
    ///
    /// # Returns
    /// * `Ok(VersionString::Release)` - HEAD carries exactly one tag
    /// * `Ok(VersionString::Snapshot)` - HEAD is untagged
    /// * `Err(AmbiguousTags)` - HEAD carries more than one tag
    pub fn resolve_display_version(&self) -> Result<VersionString> {
        let tags = self.repo.tags_at_head()?;

        if let Some(tag) = tags.into_release_tag()? {
            info!(tag = %tag, "HEAD is a tagged release");
            return Ok(VersionString::Release(tag));
        }

        let base = self.resolve_project_version()?;
        let date = self.repo.head_commit_date()?;
        let short_hash = self.repo.head_short_hash()?;
        info!(base = %base, date = %date, hash = %short_hash, "HEAD is a snapshot");

        Ok(VersionString::Snapshot {
            base,
            date,
            short_hash,
        })
    }
}
