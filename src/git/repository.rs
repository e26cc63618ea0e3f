use crate::domain::CommitTagSet;
use crate::error::Result;
use chrono::{DateTime, FixedOffset};
use git2::{Oid, Repository as Git2Repo};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn head_oid(&self) -> Result<Oid> {
        let head = self.repo.head()?.peel_to_commit()?;
        Ok(head.id())
    }

    /// Whether `core.abbrev` pins the abbreviation length.
    fn abbrev_is_explicit(&self) -> Result<bool> {
        match self.repo.config()?.get_string("core.abbrev") {
            Ok(value) => Ok(!value.eq_ignore_ascii_case("auto")),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn object_count(&self) -> Result<usize> {
        let mut count = 0usize;
        self.repo.odb()?.foreach(|_| {
            count += 1;
            true
        })?;
        Ok(count)
    }
}

/// Abbreviation length `git rev-parse --short` picks for `count` objects:
/// half the bit length of the count, rounded up, never below 7.
fn auto_abbrev_len(count: usize) -> usize {
    let bits = (usize::BITS - count.leading_zeros()) as usize;
    ((bits + 1) / 2).max(7)
}

/// Render a commit time as `YYYY-MM-DD` in the commit's own offset.
fn short_date(time: git2::Time) -> Result<String> {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60)
        .ok_or_else(|| git2::Error::from_str("commit time offset out of range"))?;
    let utc = DateTime::from_timestamp(time.seconds(), 0)
        .ok_or_else(|| git2::Error::from_str("commit time out of range"))?;
    Ok(utc.with_timezone(&offset).format("%Y-%m-%d").to_string())
}

impl super::Repository for Git2Repository {
    fn toplevel(&self) -> Result<PathBuf> {
        let workdir = self
            .repo
            .workdir()
            .ok_or_else(|| git2::Error::from_str("repository has no working directory"))?;
        Ok(workdir.to_path_buf())
    }

    fn tags_at_head(&self) -> Result<CommitTagSet> {
        let head = self.head_oid()?;
        let tag_names = self.repo.tag_names(None)?;

        let mut names = Vec::new();
        for name in tag_names.iter().flatten() {
            let reference = self.repo.find_reference(&format!("refs/tags/{}", name))?;
            // Tags of trees or blobs never point at HEAD.
            match reference.peel_to_commit() {
                Ok(commit) if commit.id() == head => names.push(name.to_string()),
                _ => {}
            }
        }
        names.sort();

        debug!(tags = ?names, "tags at HEAD");
        Ok(CommitTagSet::new(names))
    }

    fn head_commit_date(&self) -> Result<String> {
        let commit = self.repo.find_commit(self.head_oid()?)?;
        let when = commit.committer().when();
        short_date(when)
    }

    fn head_short_hash(&self) -> Result<String> {
        let oid = self.head_oid()?;
        let object = self.repo.find_object(oid, None)?;

        if self.abbrev_is_explicit()? {
            let short = object.short_id()?;
            let short = short
                .as_str()
                .ok_or_else(|| git2::Error::from_str("abbreviated id is not valid UTF-8"))?;
            return Ok(short.to_string());
        }

        // libgit2 starts from 7 digits; git scales the length with the repository.
        let unique_len = object
            .short_id()
            .ok()
            .and_then(|short| short.as_str().map(str::len))
            .unwrap_or(0);
        let len = auto_abbrev_len(self.object_count()?).max(unique_len);
        let full = oid.to_string();
        Ok(full[..len.min(full.len())].to_string())
    }
}
