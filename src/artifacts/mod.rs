//! Explanation data and output plumbing
//!
//! - `catalog`: the Git and Docker explanation tables and request resolution
//! - `core`: shared utilities (pager wrapper, logging)

pub mod catalog;
pub mod core;
