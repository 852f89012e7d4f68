//! # quicksyn
//!
//! Library for controlling a QuickSyn-class microwave frequency synthesizer
//! over a serial link. The instrument speaks a newline-terminated ASCII
//! protocol; every exchange is synchronous, one request in flight at a time.
//!
//! ## Crate Structure
//!
//! - **`config`**: Loads connection settings (port, baud rate, timeouts)
//!   from TOML files. See [`config::Settings`].
//! - **`error`**: Defines [`error::SynthError`], the crate-wide error type.
//! - **`transport`**: The [`transport::Transport`] seam between the session
//!   and the wire, with the blocking serial implementation.
//! - **`mock`**: A scriptable in-memory transport for tests.
//! - **`session`**: [`session::SynthSession`], the command/response exchange
//!   with its bounded query retry.
//!
//! ## Example
//!
//! ```no_run
//! use quicksyn::config::Settings;
//! use quicksyn::session::SynthSession;
//!
//! fn main() -> anyhow::Result<()> {
//!     let settings = Settings::new(None)?;
//!     let mut synth = SynthSession::open(&settings)?;
//!
//!     synth.set_frequency(9.0e9)?;
//!     let hz = synth.frequency()?;
//!     println!("Current frequency: {} Hz", hz);
//!
//!     synth.set_rf_output(false)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod mock;
pub mod session;
pub mod transport;

pub use error::{Result, SynthError};
pub use session::SynthSession;
