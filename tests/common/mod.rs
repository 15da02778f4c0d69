//! Log capture for asserting on the events the service emits.

use serde_json::Value;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

/// Collects JSON formatted tracing events written by a scoped subscriber.
#[derive(Clone, Default)]
pub struct LogWatcher {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl LogWatcher {
    /// Route events from this crate to the watcher until the guard is dropped.
    /// Only events emitted on the current thread are captured.
    pub fn install(&self) -> DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_env_filter("wikisearch=trace")
            .with_writer(self.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn events(&self) -> Vec<Value> {
        let buf = self.buf.lock().unwrap();
        String::from_utf8_lossy(&buf)
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|_| panic!("Bad JSON in log line: {line}"))
            })
            .collect()
    }

    /// Events whose `message` field equals `message`.
    pub fn with_message(&self, message: &str) -> Vec<Value> {
        self.events()
            .into_iter()
            .filter(|event| event["fields"]["message"] == message)
            .collect()
    }
}

impl<'a> MakeWriter<'a> for LogWatcher {
    type Writer = LogWatcherWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWatcherWriter {
            buf: self.buf.clone(),
        }
    }
}

pub struct LogWatcherWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Write for LogWatcherWriter {
    fn write(&mut self, new_bytes: &[u8]) -> std::io::Result<usize> {
        let mut buf = self
            .buf
            .lock()
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        buf.extend_from_slice(new_bytes);
        Ok(new_bytes.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
