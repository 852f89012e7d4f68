//! Mock transport for testing without hardware.
//!
//! Provides:
//! - Scripted responses for exercising the query retry path
//! - An echo mode that behaves like a synthesizer tracking its set frequency
//! - A write log for verifying exact wire bytes
//! - Controllable failure injection

use crate::error::Result;
use crate::transport::Transport;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Inner {
    written: Vec<String>,
    responses: VecDeque<String>,
    echo: bool,
    frequency_hz: Option<f64>,
    fail_next_write: bool,
}

/// Mock [`Transport`] with a shared, inspectable state.
///
/// Clones share the same state, so a test can keep one handle for assertions
/// while the session owns another.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<Inner>>,
}

impl MockTransport {
    /// Creates a mock that answers every read with an empty line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock that replies to `:FREQ?` with whatever frequency the
    /// last `:FREQ {value}Hz` command set.
    pub fn echoing() -> Self {
        let mock = Self::default();
        mock.inner.lock().unwrap().echo = true;
        mock
    }

    /// Creates a mock that plays back `responses` in order, one per read.
    /// Once exhausted, reads return empty lines.
    pub fn with_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mock = Self::default();
        mock.inner.lock().unwrap().responses =
            responses.into_iter().map(Into::into).collect();
        mock
    }

    /// Makes the next write fail with a broken-pipe error.
    pub fn fail_next_write(&self) {
        self.inner.lock().unwrap().fail_next_write = true;
    }

    /// Returns every line written so far, terminators included.
    pub fn writes(&self) -> Vec<String> {
        self.inner.lock().unwrap().written.clone()
    }

    /// Number of writes performed so far.
    pub fn write_count(&self) -> usize {
        self.inner.lock().unwrap().written.len()
    }
}

impl Transport for MockTransport {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();

        if inner.fail_next_write {
            inner.fail_next_write = false;
            return Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "mock write failure",
            )
            .into());
        }

        inner.written.push(format!("{}\n", line));

        if inner.echo {
            if let Some(value) = line
                .strip_prefix(":FREQ ")
                .and_then(|rest| rest.strip_suffix("Hz"))
            {
                inner.frequency_hz = value.parse().ok();
            } else if line == ":FREQ?" {
                let reply = inner
                    .frequency_hz
                    .map(|hz| hz.to_string())
                    .unwrap_or_default();
                inner.responses.push_back(reply);
            }
        }

        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        // An exhausted script reads like a timed-out serial port: empty.
        Ok(self
            .inner
            .lock()
            .unwrap()
            .responses
            .pop_front()
            .unwrap_or_default())
    }
}
