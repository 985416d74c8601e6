//! URL entry data model

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Seconds since the Unix epoch at 2000-01-01T00:00:00Z.
const MIN_LASTMOD_UNIX: i64 = 946_684_800;

/// Earliest last-modified instant that is emitted as a `<lastmod>` element.
///
/// Timestamps before this instant are treated as "unset" and suppressed from
/// the output, exactly like a `last_mod` of `None`. This keeps entries with
/// placeholder or zero-valued timestamps from advertising a bogus
/// modification date to crawlers.
///
/// # Examples
///
/// ```
/// use sitemap_stream::min_lastmod;
///
/// assert_eq!(min_lastmod().to_rfc3339(), "2000-01-01T00:00:00+00:00");
/// ```
pub fn min_lastmod() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(MIN_LASTMOD_UNIX)
}

/// One sitemap record: a canonical URL, an optional last-modified time, and
/// any number of associated image URLs.
///
/// Entries are plain values. The writer takes ownership of each entry as it
/// is pulled from the source and retains nothing afterwards.
///
/// The location is written verbatim (escaped, never validated); an empty
/// `loc` produces an empty `<loc></loc>` element. Image URLs are emitted in
/// input order, one `<image:image>` block each.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use sitemap_stream::UrlEntry;
///
/// let entry = UrlEntry::new("https://example.com/showcase")
///     .with_last_mod(Utc.with_ymd_and_hms(2025, 7, 22, 15, 48, 2).unwrap().fixed_offset())
///     .with_images(["https://example.com/showcase/thumb.jpg"]);
/// assert_eq!(entry.images.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlEntry {
    /// Canonical URL of the page
    pub loc: String,

    /// Last modification time; `None` (or any instant before
    /// [`min_lastmod`]) emits no `<lastmod>` element
    #[serde(default)]
    pub last_mod: Option<DateTime<FixedOffset>>,

    /// Image URLs associated with the page, in output order
    #[serde(default)]
    pub images: Vec<String>,
}

impl UrlEntry {
    /// Create an entry for the given location with no timestamp and no images
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            last_mod: None,
            images: Vec::new(),
        }
    }

    /// Set the last modification time
    ///
    /// UTC callers can convert with [`chrono::DateTime::fixed_offset`];
    /// non-UTC offsets are preserved in the output (`2021-07-31T23:59:59-05:00`).
    #[must_use]
    pub fn with_last_mod(mut self, last_mod: DateTime<FixedOffset>) -> Self {
        self.last_mod = Some(last_mod);
        self
    }

    /// Set the associated image URLs
    #[must_use]
    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    /// The timestamp to write as `<lastmod>`, if any
    ///
    /// `Some` only for a set timestamp at or after [`min_lastmod`]; earlier
    /// instants count as unset.
    pub(crate) fn effective_lastmod(&self) -> Option<&DateTime<FixedOffset>> {
        self.last_mod.as_ref().filter(|t| **t >= min_lastmod())
    }
}
