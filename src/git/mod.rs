//! Git operations abstraction layer
//!
//! Version resolution needs four read-only facts about the current checkout.
//! The [Repository] trait exposes exactly those, so the resolver can run
//! against a real checkout or a test double.
//!
//! # Implementations
//!
//! - [cli::GitCli]: runs the `git` executable as a subprocess (default)
//! - [repository::Git2Repository]: answers the same queries through `git2`
//! - [mock::MockRepository]: fixed answers for tests
//!
//! ```rust
//! # use build_version::git::Repository;
//! # fn example(repo: &dyn Repository) -> build_version::Result<()> {
//! let tags = repo.tags_at_head()?;
//! if tags.is_empty() {
//!     println!("{} {}", repo.head_commit_date()?, repo.head_short_hash()?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod mock;
pub mod repository;

pub use cli::GitCli;
pub use mock::{MockRepository, Query};
pub use repository::Git2Repository;

use std::path::{Path, PathBuf};

use crate::config::{Backend, GitSettings};
use crate::domain::CommitTagSet;
use crate::error::Result;

/// Read-only queries against the current checkout.
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map their
/// underlying failures (subprocess exit status, `git2::Error`) to the
/// matching [crate::error::BuildVersionError] variant.
pub trait Repository {
    /// Absolute path of the checkout's top-level directory
    fn toplevel(&self) -> Result<PathBuf>;

    /// Tags whose target is the HEAD commit
    fn tags_at_head(&self) -> Result<CommitTagSet>;

    /// Committer date of HEAD as `YYYY-MM-DD`, in the committer's time zone
    fn head_commit_date(&self) -> Result<String>;

    /// Abbreviated id of the HEAD commit
    fn head_short_hash(&self) -> Result<String>;
}

/// Open the backend selected in `settings` for the checkout containing `dir`.
///
/// # Arguments
/// * `settings` - Git section of the settings
/// * `dir` - Directory inside the checkout; `None` means the process working directory
pub fn open_backend(settings: &GitSettings, dir: Option<&Path>) -> Result<Box<dyn Repository>> {
    match settings.backend {
        Backend::Cli => {
            let mut git = GitCli::new(&settings.program);
            if let Some(dir) = dir {
                git = git.in_dir(dir);
            }
            Ok(Box::new(git))
        }
        Backend::Libgit2 => {
            let repo = Git2Repository::open(dir.unwrap_or_else(|| Path::new(".")))?;
            Ok(Box::new(repo))
        }
    }
}
