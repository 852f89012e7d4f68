//! CLI entry point for the quicksyn controller.
//!
//! Provides command-line access to a serial-attached synthesizer:
//!
//! ```bash
//! quicksyn ports                 # enumerate serial ports
//! quicksyn set 9000000000        # set frequency in Hz
//! quicksyn get                   # query frequency
//! quicksyn rf off                # toggle RF output
//! quicksyn run 9000000000        # set, read back, leave RF off
//! ```
//!
//! The serial port comes from `config/default.toml` (or `--config <name>`),
//! overridable with `--port`.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use quicksyn::config::Settings;
use quicksyn::session::SynthSession;
use serialport::SerialPortType;

#[derive(Parser)]
#[command(name = "quicksyn")]
#[command(about = "Serial control for a QuickSyn-class synthesizer", long_about = None)]
struct Cli {
    /// Config file name under config/ (without extension)
    #[arg(long)]
    config: Option<String>,

    /// Serial port override, e.g. /dev/ttyUSB0 or COM8
    #[arg(long)]
    port: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List serial ports detected on this system
    Ports,

    /// Set the output frequency in hertz
    Set {
        /// Target frequency in Hz
        hz: f64,
    },

    /// Query the current frequency
    Get,

    /// Enable or disable the RF output stage
    Rf {
        /// Desired output state
        #[arg(value_enum)]
        state: RfState,
    },

    /// Set a frequency, read it back, and leave the RF output disabled
    Run {
        /// Target frequency in Hz
        hz: f64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RfState {
    On,
    Off,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Ports => list_ports(),
        command => {
            let mut settings = Settings::new(cli.config.as_deref())?;
            if let Some(port) = cli.port {
                settings.port = port;
            }

            let mut session = SynthSession::open(&settings)?;
            dispatch(&mut session, command)
        }
    }
}

fn dispatch(session: &mut SynthSession, command: Commands) -> Result<()> {
    match command {
        Commands::Set { hz } => {
            session.set_frequency(hz)?;
            println!("Frequency set to {} Hz", hz);
        }
        Commands::Get => {
            println!("{}", session.frequency()?);
        }
        Commands::Rf { state } => {
            let enable = matches!(state, RfState::On);
            session.set_rf_output(enable)?;
            println!("RF output {}", if enable { "enabled" } else { "disabled" });
        }
        Commands::Run { hz } => {
            session.set_frequency(hz)?;
            let readback = session.frequency()?;
            println!("Current frequency: {} Hz", readback);
            session.set_rf_output(false)?;
        }
        // Handled in main before a session is opened.
        Commands::Ports => {}
    }
    Ok(())
}

fn list_ports() -> Result<()> {
    let ports = serialport::available_ports()?;

    if ports.is_empty() {
        println!("No serial ports detected on this system.");
        return Ok(());
    }

    for port in ports {
        match port.port_type {
            SerialPortType::UsbPort(info) => {
                println!("{}  (USB {:04x}:{:04x})", port.port_name, info.vid, info.pid);
            }
            _ => println!("{}", port.port_name),
        }
    }
    Ok(())
}
