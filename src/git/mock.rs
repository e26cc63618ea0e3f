use crate::domain::CommitTagSet;
use crate::error::{BuildVersionError, Result};
use crate::git::Repository;
use std::cell::RefCell;
use std::path::PathBuf;

/// A query issued against a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Toplevel,
    TagsAtHead,
    CommitDate,
    ShortHash,
}

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    toplevel: PathBuf,
    tags: Vec<String>,
    commit_date: String,
    short_hash: String,
    failure: Option<(Query, i32, String)>,
    queries: RefCell<Vec<Query>>,
}

impl MockRepository {
    /// Create a mock checkout rooted at `toplevel` with an untagged HEAD
    pub fn new(toplevel: impl Into<PathBuf>) -> Self {
        MockRepository {
            toplevel: toplevel.into(),
            tags: Vec::new(),
            commit_date: "2020-07-02".to_string(),
            short_hash: "4f336a2".to_string(),
            failure: None,
            queries: RefCell::new(Vec::new()),
        }
    }

    /// Add a tag pointing at HEAD
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Set the HEAD commit date and short hash
    pub fn set_head(&mut self, date: impl Into<String>, short_hash: impl Into<String>) {
        self.commit_date = date.into();
        self.short_hash = short_hash.into();
    }

    /// Make `query` fail like a git subprocess exiting with `status`
    pub fn fail_on(&mut self, query: Query, status: i32, stderr: impl Into<String>) {
        self.failure = Some((query, status, stderr.into()));
    }

    /// Queries issued so far, in order
    pub fn queries(&self) -> Vec<Query> {
        self.queries.borrow().clone()
    }

    fn record(&self, query: Query) -> Result<()> {
        self.queries.borrow_mut().push(query);
        match &self.failure {
            Some((failing, status, stderr)) if *failing == query => Err(
                BuildVersionError::external_tool(format!("{:?}", query), *status, stderr.clone()),
            ),
            _ => Ok(()),
        }
    }
}

impl Repository for MockRepository {
    fn toplevel(&self) -> Result<PathBuf> {
        self.record(Query::Toplevel)?;
        Ok(self.toplevel.clone())
    }

    fn tags_at_head(&self) -> Result<CommitTagSet> {
        self.record(Query::TagsAtHead)?;
        Ok(CommitTagSet::new(self.tags.clone()))
    }

    fn head_commit_date(&self) -> Result<String> {
        self.record(Query::CommitDate)?;
        Ok(self.commit_date.clone())
    }

    fn head_short_hash(&self) -> Result<String> {
        self.record(Query::ShortHash)?;
        Ok(self.short_hash.clone())
    }
}
