//! Git operations using git2-rs.

pub mod range;

pub use range::commits_in_range;
