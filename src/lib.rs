pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod resolver;
pub mod ui;

pub use error::{BuildVersionError, Result};
pub use resolver::VersionResolver;
