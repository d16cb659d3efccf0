//! Sink helpers
//!
//! The logger accepts any `Write + Send` pair; this module adds the piece an
//! embedding application most often needs beyond the console: a cloneable
//! in-memory sink for capturing and asserting on output.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Cloneable in-memory sink; every clone appends to the same buffer.
///
/// Hand one clone to the logger and keep another for inspection.
#[derive(Debug, Clone, Default)]
pub struct SharedSink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything written so far.
    pub fn contents(&self) -> Vec<u8> {
        self.buffer.lock().clone()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents_utf8(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Written output split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents_utf8().lines().map(String::from).collect()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let sink = SharedSink::new();
        let mut writer = sink.clone();
        writer.write_all(b"hello\n").unwrap();
        assert_eq!(sink.contents_utf8(), "hello\n");
        assert_eq!(sink.lines(), vec!["hello"]);
    }

    #[test]
    fn test_clear() {
        let sink = SharedSink::new();
        let mut writer = sink.clone();
        writer.write_all(b"x").unwrap();
        sink.clear();
        assert!(sink.contents().is_empty());
    }
}
