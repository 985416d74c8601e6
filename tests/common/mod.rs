//! Common test utilities for sitemap-stream end-to-end tests

use quick_xml::Reader;
use quick_xml::events::Event;
use sitemap_stream::{EntrySource, OutputSink, UrlEntry};
use std::io::{self, Write};

/// Entry source generating `size` entries from a closure, with page URLs
/// from a second closure. Mirrors producers that synthesize entries on the
/// fly (database cursors, crawlers) rather than holding them in memory.
pub struct SequenceSource<E, U> {
    size: usize,
    next_idx: usize,
    entry: E,
    page_urls: U,
}

impl<E, U> SequenceSource<E, U>
where
    E: Fn(usize) -> UrlEntry,
    U: Fn(usize) -> String,
{
    pub fn new(size: usize, entry: E, page_urls: U) -> Self {
        Self {
            size,
            next_idx: 0,
            entry,
            page_urls,
        }
    }
}

impl<E, U> EntrySource for SequenceSource<E, U>
where
    E: Fn(usize) -> UrlEntry,
    U: Fn(usize) -> String,
{
    fn next(&mut self) -> Option<UrlEntry> {
        if self.next_idx >= self.size {
            return None;
        }
        let entry = (self.entry)(self.next_idx);
        self.next_idx += 1;
        Some(entry)
    }

    fn page_url(&self, index: usize) -> String {
        (self.page_urls)(index)
    }
}

/// The standard generated source used by the pagination tests: numbered
/// locations, a fixed post-2000 lastmod, one image each.
pub fn numbered_source(
    size: usize,
) -> SequenceSource<impl Fn(usize) -> UrlEntry, impl Fn(usize) -> String> {
    use chrono::{TimeZone, Utc};
    SequenceSource::new(
        size,
        |idx| {
            UrlEntry::new(format!("https://example.com/{idx}"))
                .with_last_mod(
                    Utc.with_ymd_and_hms(2001, 3, 4, 0, 0, 0)
                        .unwrap()
                        .fixed_offset(),
                )
                .with_images([format!("https://img.example.com/{idx}.jpg")])
        },
        |page| format!("urlset {page:03}"),
    )
}

/// Writer failing every write call.
pub struct FailWriter;

impl Write for FailWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("fail writer error"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer accepting writes until the Nth call (1-based), failing from then
/// on.
pub struct FlakyWriter {
    calls: usize,
    fail_from_call: usize,
}

impl FlakyWriter {
    pub fn failing_from(call: usize) -> Self {
        Self {
            calls: 0,
            fail_from_call: call,
        }
    }
}

impl Write for FlakyWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls += 1;
        if self.calls >= self.fail_from_call {
            return Err(io::Error::other("fail writer error"));
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink with configurable failure behavior, recording whether the index
/// destination was ever requested.
#[derive(Default)]
pub struct FailingSink {
    pub fail_pages: bool,
    pub fail_index: bool,
    /// Fail page writes from the Nth write call (1-based) instead of
    /// outright
    pub fail_page_from_call: Option<usize>,
    pub index_requested: bool,
}

impl OutputSink for FailingSink {
    fn page_sink(&mut self) -> io::Result<Box<dyn Write + '_>> {
        if self.fail_pages {
            Ok(Box::new(FailWriter))
        } else if let Some(call) = self.fail_page_from_call {
            Ok(Box::new(FlakyWriter::failing_from(call)))
        } else {
            Ok(Box::new(io::sink()))
        }
    }

    fn index_sink(&mut self) -> io::Result<Box<dyn Write + '_>> {
        self.index_requested = true;
        if self.fail_index {
            Ok(Box::new(FailWriter))
        } else {
            Ok(Box::new(io::sink()))
        }
    }
}

/// Parse a generated document and collect the unescaped text of every
/// `<loc_name>` element inside a `<parent>` record, in document order.
///
/// Element names are matched fully qualified, so `loc` does not pick up
/// `image:loc` and vice versa. Re-parsing with a real XML reader is the
/// round-trip check: whatever the writer escaped must come back out of
/// `unescape()` unchanged.
pub fn collect_locs(xml: &[u8], parent: &str, loc_name: &str) -> Vec<String> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();

    let mut locs = Vec::new();
    let mut in_record = false;
    let mut current_loc: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if name == parent {
                    in_record = true;
                } else if name == loc_name && in_record {
                    current_loc = Some(String::new());
                }
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if name == loc_name {
                    if let Some(loc) = current_loc.take() {
                        locs.push(loc);
                    }
                } else if name == parent {
                    in_record = false;
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(loc) = current_loc.as_mut() {
                    loc.push_str(&e.unescape().expect("unescape loc text"));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("XML parse error: {e}"),
            _ => {}
        }
        buf.clear();
    }

    locs
}

/// `<loc>` values of the `<url>` records in a urlset page.
pub fn urlset_locs(xml: &[u8]) -> Vec<String> {
    collect_locs(xml, "url", "loc")
}

/// `<image:loc>` values of a urlset page, in document order.
pub fn image_locs(xml: &[u8]) -> Vec<String> {
    collect_locs(xml, "image:image", "image:loc")
}
