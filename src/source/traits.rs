//! Traits for entry sources

use crate::entry::UrlEntry;

/// Pull-based source of sitemap entries
///
/// This is the writer-facing seam for entry producers. Anything that can
/// hand out entries one at a time can drive the writer: an in-memory
/// vector, a database cursor, a crawler feeding a channel. Whatever
/// concurrency the producer uses stays hidden behind this trait; the
/// writer only ever calls it from one thread.
///
/// # Contract
///
/// - [`next`](EntrySource::next) returns `None` exactly when the source is
///   exhausted, and keeps returning `None` on every call after that.
/// - [`page_url`](EntrySource::page_url) is called once per generated
///   urlset page, in increasing page order, and only after that page's
///   content has been fully written. The returned URL is what the index
///   file records for the page.
///
/// # Examples
///
/// ```
/// use sitemap_stream::{EntrySource, UrlEntry, VecSource};
///
/// let mut source = VecSource::new(
///     vec![UrlEntry::new("https://example.com/")],
///     |page| format!("https://example.com/sitemap-{page}.xml"),
/// );
/// assert!(source.next().is_some());
/// assert!(source.next().is_none());
/// assert!(source.next().is_none());
/// ```
pub trait EntrySource {
    /// Pull the next entry, or `None` when the source is exhausted
    fn next(&mut self) -> Option<UrlEntry>;

    /// Externally reachable URL of the urlset page with the given 0-based
    /// index
    fn page_url(&self, index: usize) -> String;

    /// Override page URL naming with a closure, leaving entry production
    /// untouched
    ///
    /// Models a separate URL-naming collaborator as a wrapper, for sources
    /// whose own [`page_url`](EntrySource::page_url) is a placeholder or
    /// needs to differ per deployment.
    ///
    /// # Examples
    ///
    /// ```
    /// use sitemap_stream::{EntrySource, UrlEntry, VecSource};
    ///
    /// let source = VecSource::new(vec![UrlEntry::new("a")], |_| String::new())
    ///     .with_page_urls(|page| format!("https://cdn.example.com/maps/{page}.xml"));
    /// assert_eq!(source.page_url(2), "https://cdn.example.com/maps/2.xml");
    /// ```
    fn with_page_urls<F>(self, page_urls: F) -> WithPageUrls<Self, F>
    where
        Self: Sized,
        F: Fn(usize) -> String,
    {
        WithPageUrls {
            inner: self,
            page_urls,
        }
    }
}

/// Source wrapper substituting a page URL naming closure
///
/// Created by [`EntrySource::with_page_urls`].
#[derive(Debug)]
pub struct WithPageUrls<S, F> {
    inner: S,
    page_urls: F,
}

impl<S, F> EntrySource for WithPageUrls<S, F>
where
    S: EntrySource,
    F: Fn(usize) -> String,
{
    fn next(&mut self) -> Option<UrlEntry> {
        self.inner.next()
    }

    fn page_url(&self, index: usize) -> String {
        (self.page_urls)(index)
    }
}
