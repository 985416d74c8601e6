//! Traits for output sinks

use std::io::{self, Write};

/// Destination for the generated sitemap documents
///
/// The writer requests one fresh writable destination per urlset page,
/// in page order and before any byte of that page is written, and one
/// destination for the index after all pages are complete. A sink that
/// retains its buffers can lend them out; a file-backed sink hands over
/// owned handles. Either way each destination is written front to back
/// and dropped before the next is requested.
///
/// Both methods are fallible: failing to produce a destination (e.g. file
/// creation) aborts the write operation the same way a failed write does.
pub trait OutputSink {
    /// Open the destination for the next urlset page
    fn page_sink(&mut self) -> io::Result<Box<dyn Write + '_>>;

    /// Open the destination for the index document
    ///
    /// Called at most once, after every page has been written. Not called
    /// at all when the single-page index policy skips the index.
    fn index_sink(&mut self) -> io::Result<Box<dyn Write + '_>>;
}
