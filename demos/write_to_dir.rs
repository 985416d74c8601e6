//! Generate a paginated sitemap for a small site into ./sitemaps/
//!
//! Run with: cargo run --example write_to_dir

use chrono::Utc;
use sitemap_stream::{DirSink, SitemapWriter, UrlEntry, VecSource, WriteOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let entries = vec![
        UrlEntry::new("https://example.com/").with_last_mod(Utc::now().fixed_offset()),
        UrlEntry::new("https://example.com/pricing"),
        UrlEntry::new("https://example.com/gallery").with_images([
            "https://example.com/gallery/1.jpg",
            "https://example.com/gallery/2.jpg",
            "https://example.com/gallery/3.jpg",
        ]),
    ];
    let mut source = VecSource::new(entries, |page| {
        format!("https://example.com/{}", DirSink::page_file_name(page))
    });

    std::fs::create_dir_all("sitemaps")?;
    let mut sink = DirSink::new("sitemaps");

    // A tiny capacity so the demo actually paginates
    let mut writer = SitemapWriter::new(WriteOptions {
        capacity: 2,
        ..Default::default()
    })?;
    let summary = writer.write_all(&mut sink, &mut source)?;

    println!(
        "wrote {} entries across {} page(s), index: {}",
        summary.entries,
        summary.pages,
        sink.index_path().display()
    );
    Ok(())
}
