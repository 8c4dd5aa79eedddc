//! pdfdeck - Assemble PDF documents into an ordered deck and merge them.
//!
//! This library keeps one ordered collection of PDF documents in sync with a
//! grid view model. It supports:
//!
//! - Ingesting files by path or from memory, skipping anything not a PDF
//! - Reordering by pointer drag, touch drag or explicit positions
//! - Removing documents by drag-to-delete, long press or a delete control
//! - First-page previews through a pluggable renderer
//! - Merging every page, in deck order, into one document
//!
//! # Examples
//!
//! ## Basic Merge
//!
//! ```no_run
//! use pdfdeck::collection::Candidate;
//! use pdfdeck::{Config, Deck};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut deck = Deck::new(Config::default());
//! deck.ingest([Candidate::from_path("a.pdf"), Candidate::from_path("b.pdf")])
//!     .await;
//!
//! let (stats, write) = deck.merge_and_save().await?;
//! println!("Created {} page document at {}", stats.total_pages, write.output_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Driving the Deck with Input Events
//!
//! ```no_run
//! use pdfdeck::interaction::InteractionEvent;
//! use pdfdeck::Deck;
//!
//! # async fn example(deck: &mut Deck) -> pdfdeck::Result<()> {
//! let last = deck.grid().tiles[deck.grid().len() - 1].id;
//! deck.handle(InteractionEvent::DragStart { id: last }).await?;
//! deck.handle(InteractionEvent::DragOver { y: 0.0 }).await?;
//! deck.handle(InteractionEvent::Drop).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collection;
pub mod config;
pub mod deck;
pub mod error;
pub mod interaction;
pub mod io;
pub mod merge;
pub mod output;
pub mod utils;
pub mod view;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::Config;
pub use deck::Deck;
pub use error::{DeckError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
