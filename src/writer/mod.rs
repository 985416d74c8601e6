//! The paginating sitemap writer
//!
//! ## Architecture
//!
//! [`SitemapWriter`] drives one complete generation pass: it drains an
//! [`EntrySource`] into urlset pages of at most
//! [`capacity`](crate::WriteOptions::capacity) entries each, then writes
//! the index referencing every page. Documents stream straight to the
//! sink's writers; nothing is buffered beyond one reusable escape buffer
//! and the single carried-over entry.
//!
//! ## Pagination
//!
//! The page loop pulls entries one at a time. The pull that would overflow
//! the current page is not written there; the entry is *carried over* and
//! becomes the first entry of the next page, so the capacity check never
//! loses or duplicates an entry. A page that finishes without a carry-over
//! is the final page. A source that is exhausted up front still produces
//! one valid, empty urlset.
//!
//! ## Failure
//!
//! The first sink error wins: the current document stops writing
//! immediately, no further pages or index are attempted, and the error is
//! returned from
//! [`write_all`](SitemapWriter::write_all). Output already flushed to
//! earlier pages is undefined from the caller's perspective and should be
//! discarded.

mod abort;
mod xml;

use crate::config::{IndexRecord, WriteOptions};
use crate::entry::UrlEntry;
use crate::error::{Error, Result};
use crate::sink::OutputSink;
use crate::source::EntrySource;
use abort::AbortWriter;
use std::io::Write;
use tracing::{debug, info};

/// Counts reported by a completed [`write_all`](SitemapWriter::write_all)
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteSummary {
    /// Number of urlset pages written (at least 1, even for an empty
    /// source)
    pub pages: usize,
    /// Total entries written across all pages
    pub entries: usize,
    /// Whether the index document was written
    ///
    /// False only under the single-page policy of
    /// [`WriteOptions::single_page_index`].
    pub index_written: bool,
}

/// Streaming writer for paginated sitemaps
///
/// Holds the options and the reusable escape buffer; the entry stream and
/// destinations are borrowed per call, so one writer can serve several
/// generation passes. The writer is synchronous and single-threaded; it
/// blocks only on the source's `next` and on sink writes.
///
/// # Examples
///
/// ```
/// use sitemap_stream::{MemorySink, SitemapWriter, UrlEntry, VecSource, WriteOptions};
///
/// let mut writer = SitemapWriter::new(WriteOptions {
///     capacity: 2,
///     ..Default::default()
/// })
/// .unwrap();
///
/// let mut source = VecSource::new(
///     vec![
///         UrlEntry::new("https://example.com/a"),
///         UrlEntry::new("https://example.com/b"),
///         UrlEntry::new("https://example.com/c"),
///     ],
///     |page| format!("https://example.com/sitemap-{page}.xml"),
/// );
/// let mut sink = MemorySink::new();
///
/// let summary = writer.write_all(&mut sink, &mut source).unwrap();
/// assert_eq!(summary.pages, 2);
/// assert_eq!(summary.entries, 3);
/// ```
#[derive(Debug)]
pub struct SitemapWriter {
    options: WriteOptions,
    /// Scratch buffer for escaped text and formatted timestamps
    buf: Vec<u8>,
}

impl SitemapWriter {
    /// Create a writer with the given options
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `capacity` is zero.
    pub fn new(options: WriteOptions) -> Result<Self> {
        if options.capacity == 0 {
            return Err(Error::Config {
                message: "capacity must be at least 1".to_string(),
                key: Some("capacity".to_string()),
            });
        }
        Ok(Self {
            options,
            buf: Vec::with_capacity(256),
        })
    }

    /// Drain the source into paginated urlset pages, then write the index
    ///
    /// Pages are requested from the sink one at a time and fully written
    /// before the next begins; the index is requested last, after every
    /// page is complete, and records each page's
    /// [`page_url`](EntrySource::page_url) in page order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] on the first sink failure; nothing further is
    /// written and already-written output should be discarded.
    pub fn write_all<O, S>(&mut self, sink: &mut O, source: &mut S) -> Result<WriteSummary>
    where
        O: OutputSink + ?Sized,
        S: EntrySource + ?Sized,
    {
        let mut pages = 0;
        let mut entries = 0;
        let mut carry: Option<UrlEntry> = None;

        loop {
            let page = sink.page_sink()?;
            let (written, next_carry) = self.write_urlset_page(page, source, carry.take())?;
            debug!(page = pages, entries = written, "urlset page complete");
            pages += 1;
            entries += written;

            carry = next_carry;
            if carry.is_none() {
                break;
            }
        }

        let index_written = self.options.single_page_index || pages > 1;
        if index_written {
            let index = sink.index_sink()?;
            self.write_index(index, source, pages)?;
        }

        info!(pages, entries, index_written, "sitemap write complete");
        Ok(WriteSummary {
            pages,
            entries,
            index_written,
        })
    }

    /// Write the entire source as one urlset document, without pagination
    /// or index
    ///
    /// The convenience path for sources known to fit a single file; the
    /// source's `page_url` is never called. Returns the number of entries
    /// written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] on the first write failure.
    pub fn write_urlset<W, S>(&mut self, writer: W, source: &mut S) -> Result<usize>
    where
        W: Write,
        S: EntrySource + ?Sized,
    {
        let mut w = AbortWriter::new(writer);
        w.write(xml::URLSET_HEADER);
        let mut count = 0;
        while let Some(entry) = source.next() {
            self.write_url_entry(&mut w, &entry);
            count += 1;
        }
        w.write(xml::URLSET_FOOTER);
        w.finish()?;
        Ok(count)
    }

    /// Write one urlset page, seeded with the previous page's carry-over.
    ///
    /// Returns the number of entries written and the entry carried over to
    /// the next page, if the capacity boundary was hit. A write failure
    /// discards any pending carry-over; the operation is over anyway.
    fn write_urlset_page<W, S>(
        &mut self,
        writer: W,
        source: &mut S,
        carry: Option<UrlEntry>,
    ) -> Result<(usize, Option<UrlEntry>)>
    where
        W: Write,
        S: EntrySource + ?Sized,
    {
        let mut w = AbortWriter::new(writer);
        w.write(xml::URLSET_HEADER);

        let mut count = 0;
        // Continuation of the previous page: the carry-over was already
        // pulled from the source and must be written without calling
        // next() again.
        if let Some(entry) = carry {
            self.write_url_entry(&mut w, &entry);
            count += 1;
        }

        let mut carry_over = None;
        while let Some(entry) = source.next() {
            if count >= self.options.capacity {
                carry_over = Some(entry);
                break;
            }
            self.write_url_entry(&mut w, &entry);
            count += 1;
        }
        w.write(xml::URLSET_FOOTER);

        w.finish()?;
        Ok((count, carry_over))
    }

    /// Write the index document for `npages` urlset pages.
    fn write_index<W, S>(&mut self, writer: W, source: &S, npages: usize) -> Result<()>
    where
        W: Write,
        S: EntrySource + ?Sized,
    {
        let (record_open, record_close) = match self.options.index_record {
            IndexRecord::Sitemap => (xml::TAG_SITEMAP_OPEN, xml::TAG_SITEMAP_CLOSE),
            IndexRecord::Url => (xml::TAG_URL_OPEN, xml::TAG_URL_CLOSE),
        };

        let mut w = AbortWriter::new(writer);
        w.write(xml::INDEX_HEADER);
        for page in 0..npages {
            let url = source.page_url(page);
            w.write(record_open);
            w.write(xml::TAG_LOC_OPEN);
            self.write_text(&mut w, &url);
            w.write(xml::TAG_LOC_CLOSE);
            w.write(record_close);
        }
        w.write(xml::INDEX_FOOTER);

        w.finish()?;
        Ok(())
    }

    fn write_url_entry<W: Write>(&mut self, w: &mut AbortWriter<W>, entry: &UrlEntry) {
        w.write(xml::TAG_URL_OPEN);
        w.write(xml::TAG_LOC_OPEN);
        self.write_text(w, &entry.loc);
        w.write(xml::TAG_LOC_CLOSE);
        if let Some(last_mod) = entry.effective_lastmod() {
            w.write(xml::TAG_LASTMOD_OPEN);
            xml::format_lastmod(&mut self.buf, last_mod);
            w.write(&self.buf);
            w.write(xml::TAG_LASTMOD_CLOSE);
        }
        for image in &entry.images {
            w.write(xml::TAG_IMAGE_OPEN);
            self.write_text(w, image);
            w.write(xml::TAG_IMAGE_CLOSE);
        }
        w.write(xml::TAG_URL_CLOSE);
    }

    fn write_text<W: Write>(&mut self, w: &mut AbortWriter<W>, text: &str) {
        xml::escape_into(&mut self.buf, text);
        w.write(&self.buf);
    }
}

/// Write a complete paginated sitemap with default [`WriteOptions`]
///
/// Drains `source` into urlset pages of up to 50 000 entries and writes a
/// `<sitemap>`-record index referencing each page.
///
/// # Errors
///
/// Returns [`Error::Io`] on the first sink failure.
///
/// # Examples
///
/// ```
/// use sitemap_stream::{MemorySink, UrlEntry, VecSource, write_all};
///
/// let mut source = VecSource::new(
///     vec![UrlEntry::new("https://example.com/")],
///     |page| format!("https://example.com/sitemap-{page}.xml"),
/// );
/// let mut sink = MemorySink::new();
/// let summary = write_all(&mut sink, &mut source).unwrap();
/// assert_eq!(summary.pages, 1);
/// ```
pub fn write_all<O, S>(sink: &mut O, source: &mut S) -> Result<WriteSummary>
where
    O: OutputSink + ?Sized,
    S: EntrySource + ?Sized,
{
    SitemapWriter::new(WriteOptions::default())?.write_all(sink, source)
}
