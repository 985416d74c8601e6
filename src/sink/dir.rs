//! File-system output sink

use super::traits::OutputSink;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Output sink writing one file per document into a directory
///
/// Pages are written to `sitemap-<n>.xml` (0-based, in page order) and the
/// index to `sitemap.xml`. The directory must exist; files are created
/// (truncating any previous generation) and buffered. Creation failures
/// surface through [`OutputSink`] and abort the write.
///
/// The file naming is exposed through [`page_file_name`](DirSink::page_file_name)
/// so the entry source's page URLs can be derived from the same scheme:
///
/// ```
/// use sitemap_stream::DirSink;
///
/// let page_urls =
///     |page: usize| format!("https://example.com/{}", DirSink::page_file_name(page));
/// assert_eq!(page_urls(1), "https://example.com/sitemap-1.xml");
/// ```
#[derive(Debug)]
pub struct DirSink {
    dir: PathBuf,
    pages: usize,
}

impl DirSink {
    /// Create a sink writing into `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            pages: 0,
        }
    }

    /// File name of the urlset page with the given 0-based index
    pub fn page_file_name(index: usize) -> String {
        format!("sitemap-{index}.xml")
    }

    /// Path of the urlset page with the given 0-based index
    pub fn page_path(&self, index: usize) -> PathBuf {
        self.dir.join(Self::page_file_name(index))
    }

    /// Path of the index file
    pub fn index_path(&self) -> PathBuf {
        self.dir.join("sitemap.xml")
    }

    fn create(path: &Path) -> io::Result<BufWriter<File>> {
        Ok(BufWriter::new(File::create(path)?))
    }
}

impl OutputSink for DirSink {
    fn page_sink(&mut self) -> io::Result<Box<dyn Write + '_>> {
        let path = self.page_path(self.pages);
        self.pages += 1;
        Ok(Box::new(Self::create(&path)?))
    }

    fn index_sink(&mut self) -> io::Result<Box<dyn Write + '_>> {
        Ok(Box::new(Self::create(&self.index_path())?))
    }
}
