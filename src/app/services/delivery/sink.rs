//! Delivery sinks for encoded observations

use std::io::Write;
use tracing::debug;

use crate::{Error, Result};

/// Destination for encoded observation payloads
pub trait ObservationSink {
    fn deliver(&mut self, payload: &[u8]) -> Result<()>;

    /// Flush anything buffered; called once per processed file
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes one payload per line to any writer
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    delivered: usize,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            delivered: 0,
        }
    }

    /// Number of payloads written so far
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ObservationSink for WriterSink<W> {
    fn deliver(&mut self, payload: &[u8]) -> Result<()> {
        self.writer
            .write_all(payload)
            .and_then(|_| self.writer.write_all(b"\n"))
            .map_err(|e| Error::delivery("failed to write observation", e))?;
        self.delivered += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| Error::delivery("failed to flush observations", e))
    }
}

/// Accepts payloads without sending them anywhere
#[derive(Debug, Default)]
pub struct DryRunSink {
    discarded: usize,
}

impl DryRunSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn discarded(&self) -> usize {
        self.discarded
    }
}

impl ObservationSink for DryRunSink {
    fn deliver(&mut self, payload: &[u8]) -> Result<()> {
        debug!("dry run: {}", String::from_utf8_lossy(payload));
        self.discarded += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_sink_writes_lines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.deliver(b"{\"a\":1}").unwrap();
        sink.deliver(b"{\"a\":2}").unwrap();
        sink.flush().unwrap();

        assert_eq!(sink.delivered(), 2);
        assert_eq!(sink.into_inner(), b"{\"a\":1}\n{\"a\":2}\n".to_vec());
    }

    #[test]
    fn test_dry_run_sink_counts_only() {
        let mut sink = DryRunSink::new();
        sink.deliver(b"payload").unwrap();
        sink.flush().unwrap();
        assert_eq!(sink.discarded(), 1);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_failure_is_delivery_error() {
        let mut sink = WriterSink::new(FailingWriter);
        let err = sink.deliver(b"payload").unwrap_err();

        assert!(matches!(err, Error::Delivery { .. }));
        assert!(!err.is_file_scoped());
        assert_eq!(sink.delivered(), 0);
    }
}
