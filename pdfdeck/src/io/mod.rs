//! Byte-level I/O: reading entry sources and writing the merged artifact.

mod reader;
mod writer;

pub use reader::{LoadedBytes, SourceReader, collect_candidates};
pub use writer::{ArtifactWriter, WriteOptions, WriteStatistics};
