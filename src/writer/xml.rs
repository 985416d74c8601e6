//! Low-level XML emission: constant tag fragments and text escaping
//!
//! Documents are assembled from pre-built byte fragments plus escaped
//! dynamic text; no DOM or intermediate document buffer is ever built.
//! Dynamic strings are escaped into a reusable scratch buffer owned by the
//! writer so steady-state emission does not allocate per entry.

use chrono::{DateTime, FixedOffset, SecondsFormat};

/// XML declaration plus the urlset root open tag, with the sitemap 0.9 and
/// image 1.1 namespaces.
pub(crate) const URLSET_HEADER: &[u8] = b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
    <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
    xmlns:image=\"http://www.google.com/schemas/sitemap-image/1.1\">\n";

/// Urlset root close tag; no trailing newline.
pub(crate) const URLSET_FOOTER: &[u8] = b"</urlset>";

/// XML declaration plus the sitemapindex root open tag.
pub(crate) const INDEX_HEADER: &[u8] = b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
    <sitemapindex xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n";

/// Sitemapindex root close tag; no trailing newline.
pub(crate) const INDEX_FOOTER: &[u8] = b"</sitemapindex>";

pub(crate) const TAG_SITEMAP_OPEN: &[u8] = b"  <sitemap>\n";
pub(crate) const TAG_SITEMAP_CLOSE: &[u8] = b"  </sitemap>\n";
pub(crate) const TAG_URL_OPEN: &[u8] = b"  <url>\n";
pub(crate) const TAG_URL_CLOSE: &[u8] = b"  </url>\n";
pub(crate) const TAG_LOC_OPEN: &[u8] = b"    <loc>";
pub(crate) const TAG_LOC_CLOSE: &[u8] = b"</loc>\n";
pub(crate) const TAG_LASTMOD_OPEN: &[u8] = b"    <lastmod>";
pub(crate) const TAG_LASTMOD_CLOSE: &[u8] = b"</lastmod>\n";
pub(crate) const TAG_IMAGE_OPEN: &[u8] = b"    <image:image>\n      <image:loc>";
pub(crate) const TAG_IMAGE_CLOSE: &[u8] = b"</image:loc>\n    </image:image>\n";

/// Escape `text` for XML character data into `buf`, replacing its contents.
///
/// Escapes `&`, `<`, `>`, `"`, `'` and the whitespace control characters
/// tab, LF and CR (as `&#x9;`, `&#xA;`, `&#xD;`). Everything else,
/// including multi-byte UTF-8, is copied through untouched. Unescaped runs
/// are copied in slices rather than byte-at-a-time; URLs without special
/// characters cost a single copy.
pub(crate) fn escape_into(buf: &mut Vec<u8>, text: &str) {
    buf.clear();
    let bytes = text.as_bytes();
    let mut unescaped_from = 0;
    for (i, b) in bytes.iter().enumerate() {
        let replacement: &[u8] = match b {
            b'&' => b"&amp;",
            b'<' => b"&lt;",
            b'>' => b"&gt;",
            b'"' => b"&#34;",
            b'\'' => b"&#39;",
            b'\t' => b"&#x9;",
            b'\n' => b"&#xA;",
            b'\r' => b"&#xD;",
            _ => continue,
        };
        buf.extend_from_slice(&bytes[unescaped_from..i]);
        buf.extend_from_slice(replacement);
        unescaped_from = i + 1;
    }
    buf.extend_from_slice(&bytes[unescaped_from..]);
}

/// Format a last-modified timestamp as RFC 3339 into `buf`, replacing its
/// contents.
///
/// Seconds precision, `Z` for UTC and `±HH:MM` for other offsets. RFC 3339
/// output contains no characters that need XML escaping.
pub(crate) fn format_lastmod(buf: &mut Vec<u8>, t: &DateTime<FixedOffset>) {
    buf.clear();
    buf.extend_from_slice(t.to_rfc3339_opts(SecondsFormat::Secs, true).as_bytes());
}
