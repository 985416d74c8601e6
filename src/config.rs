//! Configuration types for sitemap-stream

use serde::{Deserialize, Serialize};

/// Element name used for records in the sitemap index file
///
/// The sitemaps.org protocol specifies `<sitemap>` entries inside
/// `<sitemapindex>`; some deployed generators emit `<url>` records instead
/// and some consumers expect that form. Both appear in the wild, so the
/// element name is an explicit option.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexRecord {
    /// `<sitemap>` records, the sitemaps.org form (default)
    #[default]
    Sitemap,
    /// `<url>` records, for compatibility with legacy index consumers
    Url,
}

/// Options controlling pagination and index output
///
/// All fields have defaults matching the sitemaps.org protocol; a plain
/// `WriteOptions::default()` produces protocol-compliant output.
///
/// # Examples
///
/// ```
/// use sitemap_stream::WriteOptions;
///
/// let options = WriteOptions {
///     capacity: 10_000,
///     ..Default::default()
/// };
/// assert!(options.single_page_index);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteOptions {
    /// Maximum number of entries per urlset page (default: 50 000, the
    /// protocol ceiling)
    ///
    /// Once a page holds this many entries, the next entry pulled from the
    /// source is carried over to open the following page. Zero is rejected
    /// as a configuration error.
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Element name for index records (default: `sitemap`)
    #[serde(default)]
    pub index_record: IndexRecord,

    /// Write the index file even when only a single urlset page was
    /// produced (default: true)
    ///
    /// When false, a one-page result skips the index entirely and the
    /// sink's index destination is never requested.
    #[serde(default = "default_true")]
    pub single_page_index: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            index_record: IndexRecord::default(),
            single_page_index: true,
        }
    }
}

fn default_capacity() -> usize {
    50_000
}

fn default_true() -> bool {
    true
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = WriteOptions::default();
        assert_eq!(options.capacity, 50_000);
        assert_eq!(options.index_record, IndexRecord::Sitemap);
        assert!(options.single_page_index);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let options: WriteOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, WriteOptions::default());
    }

    #[test]
    fn test_index_record_serde_form() {
        let options: WriteOptions =
            serde_json::from_str(r#"{"index_record":"url","capacity":3}"#).unwrap();
        assert_eq!(options.index_record, IndexRecord::Url);
        assert_eq!(options.capacity, 3);
        assert!(options.single_page_index);
    }
}
