//! Line-oriented transport over a serial link.
//!
//! The synthesizer speaks a newline-terminated ASCII protocol. [`Transport`]
//! is the seam between the session and the wire: the session passes bare
//! command strings and the transport owns the terminator and the read
//! timeout. [`SerialTransport`] is the real implementation over the
//! `serialport` crate; tests substitute [`crate::mock::MockTransport`].

use crate::config::Settings;
use crate::error::Result;
use log::trace;
use serialport::SerialPort;
use std::io::{ErrorKind, Read, Write};
use std::time::{Duration, Instant};

/// A blocking, line-oriented byte channel to the instrument.
pub trait Transport: Send {
    /// Writes `line` followed by a newline terminator.
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Reads one response line, trimmed of whitespace and the terminator.
    ///
    /// A read that times out without producing a full line returns an empty
    /// string rather than an error; the caller decides whether that is
    /// transient.
    fn read_line(&mut self) -> Result<String>;
}

/// [`Transport`] implementation over a physical serial port.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
    read_timeout: Duration,
}

impl SerialTransport {
    /// Opens the serial port named in `settings`.
    pub fn open(settings: &Settings) -> Result<Self> {
        let port = serialport::new(settings.port.as_str(), settings.baud_rate)
            .timeout(settings.read_timeout)
            .open()?;

        Ok(Self {
            port,
            read_timeout: settings.read_timeout,
        })
    }
}

impl Transport for SerialTransport {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let cmd = format!("{}\n", line);
        trace!("TX: '{}'", cmd.escape_default());
        self.port.write_all(cmd.as_bytes())?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut buffer = [0u8; 256];
        let mut response = String::new();
        let deadline = Instant::now() + self.read_timeout;

        // Read until the terminator shows up or the timeout elapses. Slow
        // firmware can deliver a line in several chunks.
        loop {
            match self.port.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => {
                    response.push_str(&String::from_utf8_lossy(&buffer[..n]));
                    if response.contains('\n') {
                        break;
                    }
                }
                Err(e) if e.kind() == ErrorKind::TimedOut => break,
                Err(e) => return Err(e.into()),
            }
            if Instant::now() >= deadline {
                break;
            }
        }

        trace!("RX: '{}'", response.escape_default());
        Ok(response.trim().to_string())
    }
}
