//! PDF merging.
//!
//! [`Merger`] drives the merge over the collection's entries; [`compose`]
//! holds the page-level document operations it is built on.

pub mod compose;
mod merger;

pub use compose::{OutputDocument, PageHandle, SourceDocument};
pub use merger::{MergeProgress, MergeStatistics, MergedDocument, Merger};
