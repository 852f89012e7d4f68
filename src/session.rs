//! Synchronous command/response session with the synthesizer.
//!
//! Protocol overview:
//! - Format: ASCII command/response over RS-232
//! - Baud: 115200, read timeout 1 s
//! - Terminator: LF (`\n`)
//! - Commands: `:FREQ {value}Hz`, `:OUTP:STAT? {0|1}`
//! - Queries: `:FREQ?` (decimal hertz on one line)
//!
//! The protocol is strictly synchronous: one request in flight at a time,
//! enforced by `&mut self` on every operation. Write-only commands are
//! followed by a settle delay instead of a response read.

use crate::config::Settings;
use crate::error::{Result, SynthError};
use crate::transport::{SerialTransport, Transport};
use log::{info, warn};
use std::thread;
use std::time::Duration;

/// Attempts per frequency query, counting the first.
const MAX_QUERY_ATTEMPTS: u32 = 3;

/// Pause between query attempts.
const RETRY_PAUSE: Duration = Duration::from_millis(100);

/// An exclusively-owned session with one serial-attached synthesizer.
///
/// The session has two states, open and closed. [`SynthSession::close`] is a
/// one-way transition; operations invoked afterwards fail with
/// [`SynthError::SessionClosed`]. Dropping the session closes it, so the port
/// is released on every exit path.
pub struct SynthSession {
    transport: Option<Box<dyn Transport>>,
    settle_delay: Duration,
}

impl SynthSession {
    /// Opens the serial port named in `settings` and wraps it in a session.
    pub fn open(settings: &Settings) -> Result<Self> {
        info!(
            "Opening synthesizer session on {} at {} baud",
            settings.port, settings.baud_rate
        );
        let transport = SerialTransport::open(settings)?;
        Ok(Self::with_transport(
            Box::new(transport),
            settings.settle_delay,
        ))
    }

    /// Wraps an existing transport. Used by tests to substitute a mock.
    pub fn with_transport(transport: Box<dyn Transport>, settle_delay: Duration) -> Self {
        Self {
            transport: Some(transport),
            settle_delay,
        }
    }

    fn transport(&mut self) -> Result<&mut Box<dyn Transport>> {
        self.transport.as_mut().ok_or(SynthError::SessionClosed)
    }

    /// Sets the target frequency in hertz.
    ///
    /// Write-only: the instrument sends no acknowledgement, and the new
    /// value is not verified by this call. Waits the settle delay before
    /// returning.
    pub fn set_frequency(&mut self, hz: f64) -> Result<()> {
        self.transport()?.write_line(&format!(":FREQ {}Hz", hz))?;
        thread::sleep(self.settle_delay);
        Ok(())
    }

    /// Queries the current frequency in hertz.
    ///
    /// Serial links and slow firmware produce the occasional empty or
    /// truncated line; such responses are retried with a fixed cadence
    /// (3 attempts, 100 ms apart) before the query is declared failed.
    pub fn frequency(&mut self) -> Result<f64> {
        for attempt in 1..=MAX_QUERY_ATTEMPTS {
            let transport = self.transport()?;
            transport.write_line(":FREQ?")?;
            let line = transport.read_line()?;

            if line.is_empty() {
                warn!("Frequency query attempt {}: empty response", attempt);
            } else {
                match line.parse::<f64>() {
                    Ok(hz) => return Ok(hz),
                    Err(_) => warn!(
                        "Frequency query attempt {}: unparseable response '{}'",
                        attempt,
                        line.escape_default()
                    ),
                }
            }

            if attempt < MAX_QUERY_ATTEMPTS {
                thread::sleep(RETRY_PAUSE);
            }
        }

        Err(SynthError::QueryFailed {
            attempts: MAX_QUERY_ATTEMPTS,
        })
    }

    /// Enables or disables the RF output stage.
    ///
    /// The synthesizer takes the query form (`:OUTP:STAT? 1`) for this
    /// command and sends no response; the literal grammar is kept as
    /// observed on the wire. Write-only, with settle delay.
    pub fn set_rf_output(&mut self, enable: bool) -> Result<()> {
        let cmd = if enable {
            ":OUTP:STAT? 1"
        } else {
            ":OUTP:STAT? 0"
        };
        self.transport()?.write_line(cmd)?;
        thread::sleep(self.settle_delay);
        Ok(())
    }

    /// Releases the connection. Idempotent; also called on drop.
    pub fn close(&mut self) {
        if self.transport.take().is_some() {
            info!("Synthesizer session closed");
        }
    }

    /// Whether the session still owns its connection.
    pub fn is_open(&self) -> bool {
        self.transport.is_some()
    }
}

impl Drop for SynthSession {
    fn drop(&mut self) {
        self.close();
    }
}
