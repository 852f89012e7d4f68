//! Configuration management.
//!
//! Settings are loaded from `config/{name}.toml` (default: `config/default`).
//! Duration fields use human-readable strings (`"1s"`, `"100ms"`).

use crate::error::SynthError;
use config::Config;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Connection settings for the synthesizer.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Serial port identifier, e.g. `/dev/ttyUSB0` or `COM8`.
    pub port: String,

    /// Baud rate of the serial link.
    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,

    /// How long a blocking read waits before returning what it has.
    #[serde(with = "humantime_serde", default = "default_read_timeout")]
    pub read_timeout: Duration,

    /// Pause after each write-only command, giving the instrument firmware
    /// time to apply the change.
    #[serde(with = "humantime_serde", default = "default_settle_delay")]
    pub settle_delay: Duration,
}

fn default_baud_rate() -> u32 {
    115_200
}

fn default_read_timeout() -> Duration {
    Duration::from_secs(1)
}

fn default_settle_delay() -> Duration {
    Duration::from_millis(100)
}

impl Settings {
    /// Loads settings from `config/{config_name}.toml`.
    pub fn new(config_name: Option<&str>) -> Result<Self, SynthError> {
        let config_path = format!("config/{}", config_name.unwrap_or("default"));
        let s = Config::builder()
            .add_source(config::File::with_name(&config_path))
            .build()?;

        s.try_deserialize().map_err(SynthError::Config)
    }

    /// Loads settings from an explicit file path.
    pub fn from_file(path: &Path) -> Result<Self, SynthError> {
        let s = Config::builder()
            .add_source(config::File::from(path))
            .build()?;

        s.try_deserialize().map_err(SynthError::Config)
    }
}
