//! Abort-on-first-error writer decorator

use std::io::{self, Write};

/// Writer wrapper that remembers the first I/O error and silently drops
/// every write after it.
///
/// Document emission is a long run of small writes; threading a `Result`
/// through each of them would let a later failure shadow the one that
/// actually broke the sink. This wrapper makes the individual writes
/// infallible, stops touching the sink once anything fails, and hands the
/// original error back from a single [`finish`](AbortWriter::finish) check
/// at the end of the document.
pub(crate) struct AbortWriter<W> {
    inner: W,
    first_err: Option<io::Error>,
}

impl<W: Write> AbortWriter<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self {
            inner,
            first_err: None,
        }
    }

    /// Write all of `bytes`, unless a previous write already failed.
    pub(crate) fn write(&mut self, bytes: &[u8]) {
        if self.first_err.is_none() {
            if let Err(e) = self.inner.write_all(bytes) {
                self.first_err = Some(e);
            }
        }
    }

    /// Consume the wrapper: the first recorded error if any, otherwise the
    /// result of flushing the underlying writer.
    ///
    /// The flush matters for buffered sinks; without it a short document
    /// could sit in a `BufWriter` whose drop swallows the write error.
    pub(crate) fn finish(mut self) -> io::Result<()> {
        match self.first_err {
            Some(e) => Err(e),
            None => self.inner.flush(),
        }
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    /// Writer failing from the Nth write call on; records bytes accepted
    /// and calls attempted.
    struct FlakyWriter {
        accepted: Vec<u8>,
        calls: usize,
        fail_from_call: usize,
    }

    impl FlakyWriter {
        fn failing_from(call: usize) -> Self {
            Self {
                accepted: Vec::new(),
                calls: 0,
                fail_from_call: call,
            }
        }
    }

    impl Write for &mut FlakyWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.calls += 1;
            if self.calls >= self.fail_from_call {
                return Err(io::Error::other("sink burst"));
            }
            self.accepted.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_clean_writes_pass_through() {
        let mut sink = FlakyWriter::failing_from(usize::MAX);
        let mut w = AbortWriter::new(&mut sink);
        w.write(b"one");
        w.write(b"two");
        w.finish().unwrap();
        assert_eq!(sink.accepted, b"onetwo");
    }

    #[test]
    fn test_first_error_is_kept_and_later_writes_dropped() {
        let mut sink = FlakyWriter::failing_from(2);
        let mut w = AbortWriter::new(&mut sink);
        w.write(b"one");
        w.write(b"two");
        w.write(b"three");
        let err = w.finish().unwrap_err();
        assert_eq!(err.to_string(), "sink burst");
        // the failed call and everything after it never reached the sink
        assert_eq!(sink.accepted, b"one");
        assert_eq!(sink.calls, 2);
    }

    #[test]
    fn test_finish_flushes_buffered_sinks() {
        let mut out = Vec::new();
        let buffered = io::BufWriter::new(&mut out);
        let mut w = AbortWriter::new(buffered);
        w.write(b"payload");
        w.finish().unwrap();
        assert_eq!(out, b"payload");
    }
}
