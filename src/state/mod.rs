//! State module for tracking harvest progress
//!
//! # Components
//!
//! - `Aggregate`: every facet result of one run plus the visited-page registry
//! - `PageExtraction`: the owned results of one page, folded into the aggregate

mod aggregate;

// Re-export main types
pub use aggregate::{Aggregate, PageExtraction};
