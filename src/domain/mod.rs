//! Domain logic - pure version rules independent of git operations

pub mod declaration;
pub mod tag;
pub mod version;

pub use declaration::{parse_declaration_line, parse_project_version, read_project_version};
pub use tag::CommitTagSet;
pub use version::{BaseVersion, VersionString};
