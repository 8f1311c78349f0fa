//! Health scanning for directories of version-controlled working copies.
//!
//! Given a root directory, `drift` inspects each immediate subdirectory,
//! determines whether it is a git working copy, and reports uncommitted
//! changes, merge conflicts, and branches that are out of sync with their
//! upstream.

pub mod areas;
pub mod artifacts;
pub mod commands;
