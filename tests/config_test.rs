//! Settings loading and default handling.

use quicksyn::config::Settings;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_full_settings() {
    let file = write_config(
        r#"
port = "COM8"
baud_rate = 9600
read_timeout = "2s"
settle_delay = "250ms"
"#,
    );

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings.port, "COM8");
    assert_eq!(settings.baud_rate, 9600);
    assert_eq!(settings.read_timeout, Duration::from_secs(2));
    assert_eq!(settings.settle_delay, Duration::from_millis(250));
}

#[test]
fn defaults_apply_when_fields_are_omitted() {
    let file = write_config(r#"port = "/dev/ttyUSB0""#);

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings.baud_rate, 115_200);
    assert_eq!(settings.read_timeout, Duration::from_secs(1));
    assert_eq!(settings.settle_delay, Duration::from_millis(100));
}

#[test]
fn missing_port_is_an_error() {
    let file = write_config(r#"baud_rate = 115200"#);
    assert!(Settings::from_file(file.path()).is_err());
}
