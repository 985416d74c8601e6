//! # sitemap-stream
//!
//! Streaming generator for XML sitemaps and sitemap indexes, per the
//! [sitemaps.org](https://www.sitemaps.org/protocol.html) protocol.
//!
//! ## Design Philosophy
//!
//! sitemap-stream is designed to be:
//! - **Streaming** - entries flow from a pull-based source straight to the
//!   output; no DOM, no per-document buffering, sites of any size
//! - **Paginating** - urlset files split at the protocol's 50 000-entry
//!   ceiling (or a configured capacity), with an index referencing every
//!   page and no entry lost or duplicated at a page boundary
//! - **Pluggable** - entry production and output destinations sit behind
//!   small traits; databases, crawlers, files and buffers all plug in
//! - **Library-first** - no CLI or UI, purely a Rust crate for embedding
//!
//! ## Quick Start
//!
//! ```
//! use sitemap_stream::{DirSink, UrlEntry, VecSource, write_all};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let entries = vec![
//!         UrlEntry::new("https://example.com/"),
//!         UrlEntry::new("https://example.com/about")
//!             .with_images(["https://example.com/team.jpg"]),
//!     ];
//!     let mut source = VecSource::new(entries, |page| {
//!         format!("https://example.com/sitemap-{page}.xml")
//!     });
//!
//!     let dir = tempfile::tempdir()?;
//!     let mut sink = DirSink::new(dir.path());
//!     let summary = write_all(&mut sink, &mut source)?;
//!     assert_eq!(summary.pages, 1);
//!     Ok(())
//! }
//! ```
//!
//! Concurrent producers feed the writer through a bounded channel instead;
//! see [`ChannelSource`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// URL entry data model
pub mod entry;
/// Error types
pub mod error;
/// Output sink abstraction and provided sinks
pub mod sink;
/// Entry source abstraction and provided sources
pub mod source;
/// The paginating sitemap writer
pub mod writer;

// Re-export commonly used types
pub use config::{IndexRecord, WriteOptions};
pub use entry::{UrlEntry, min_lastmod};
pub use error::{Error, Result};
pub use sink::{DirSink, MemorySink, OutputSink};
pub use source::{ChannelFeeder, ChannelSource, EntrySource, VecSource, WithPageUrls};
pub use writer::{SitemapWriter, WriteSummary, write_all};
