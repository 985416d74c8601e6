//! Channel-backed entry source for concurrent producers

use super::traits::EntrySource;
use crate::entry::UrlEntry;
use tokio::sync::mpsc;

/// Entry source fed through a bounded channel by one or more producers
///
/// The consumer half: the writer pulls entries with a blocking receive, so
/// it must run on a thread that may block; from async code, wrap the
/// write in [`tokio::task::spawn_blocking`]. Producers hold a
/// [`ChannelFeeder`] and push entries concurrently from async tasks or
/// plain threads; the bounded channel applies backpressure, so a slow sink
/// throttles the producers instead of buffering the whole site in memory.
///
/// End-of-stream is signalled by closing the feeder (explicitly or by
/// dropping every clone). After that, [`next`](EntrySource::next) keeps
/// returning `None`.
///
/// # Examples
///
/// ```
/// use sitemap_stream::{ChannelSource, MemorySink, UrlEntry, write_all};
///
/// # #[tokio::main(flavor = "multi_thread", worker_threads = 2)]
/// # async fn main() {
/// let (feeder, mut source) =
///     ChannelSource::bounded(64, |page| format!("https://example.com/sitemap-{page}.xml"));
///
/// let writer = tokio::task::spawn_blocking(move || {
///     let mut sink = MemorySink::new();
///     write_all(&mut sink, &mut source).map(|summary| summary.entries)
/// });
///
/// feeder.feed(UrlEntry::new("https://example.com/")).await;
/// feeder.close();
///
/// assert_eq!(writer.await.unwrap().unwrap(), 1);
/// # }
/// ```
#[derive(Debug)]
pub struct ChannelSource<F> {
    receiver: mpsc::Receiver<UrlEntry>,
    page_urls: F,
}

impl<F> ChannelSource<F>
where
    F: Fn(usize) -> String,
{
    /// Create a channel source holding at most `capacity` in-flight
    /// entries, plus the feeder half for producers
    pub fn bounded(capacity: usize, page_urls: F) -> (ChannelFeeder, Self) {
        let (sender, receiver) = mpsc::channel(capacity);
        (
            ChannelFeeder { sender },
            Self {
                receiver,
                page_urls,
            },
        )
    }
}

impl<F> EntrySource for ChannelSource<F>
where
    F: Fn(usize) -> String,
{
    fn next(&mut self) -> Option<UrlEntry> {
        self.receiver.blocking_recv()
    }

    fn page_url(&self, index: usize) -> String {
        (self.page_urls)(index)
    }
}

/// Producer half of a [`ChannelSource`]
///
/// Cloneable; the stream ends once every clone has been dropped or
/// [`close`](ChannelFeeder::close)d.
#[derive(Clone, Debug)]
pub struct ChannelFeeder {
    sender: mpsc::Sender<UrlEntry>,
}

impl ChannelFeeder {
    /// Feed one entry, waiting for channel space
    ///
    /// Returns false if the consumer is gone (the write failed or was
    /// dropped); the entry is discarded in that case.
    pub async fn feed(&self, entry: UrlEntry) -> bool {
        self.sender.send(entry).await.is_ok()
    }

    /// Blocking variant of [`feed`](ChannelFeeder::feed) for producers on
    /// plain threads
    pub fn blocking_feed(&self, entry: UrlEntry) -> bool {
        self.sender.blocking_send(entry).is_ok()
    }

    /// Signal end-of-stream from this feeder
    ///
    /// Equivalent to dropping it; other clones keep the stream open until
    /// they are closed or dropped too.
    pub fn close(self) {}
}
