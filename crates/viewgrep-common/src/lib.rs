//! Common infrastructure for viewgrep.
//!
//! This crate provides the shared plumbing used by the query tool:
//! - **Network fetch** - blocking HTTP GET for view-hierarchy documents
//! - **Warning sink** - colored, deduplicated terminal warnings

pub mod net;
pub mod warning;
