//! End-to-end exercise of the session against the mock transport, following
//! the full controller sequence: set a frequency, read it back, disable the
//! RF output, tear down.

use quicksyn::mock::MockTransport;
use quicksyn::session::SynthSession;
use quicksyn::SynthError;
use std::time::Duration;

#[test]
fn full_control_sequence() {
    let mock = MockTransport::echoing();
    let mut session = SynthSession::with_transport(Box::new(mock.clone()), Duration::ZERO);

    session.set_frequency(9.0e9).unwrap();
    let readback = session.frequency().unwrap();
    assert!((readback - 9.0e9).abs() < 1e-6);

    session.set_rf_output(false).unwrap();
    session.close();

    assert_eq!(
        mock.writes(),
        vec![":FREQ 9000000000Hz\n", ":FREQ?\n", ":OUTP:STAT? 0\n"]
    );
    assert!(matches!(
        session.frequency(),
        Err(SynthError::SessionClosed)
    ));
}

#[test]
fn drop_releases_the_connection() {
    let mock = MockTransport::echoing();
    {
        let mut session =
            SynthSession::with_transport(Box::new(mock.clone()), Duration::ZERO);
        session.set_frequency(1.0e6).unwrap();
        // Session dropped here without an explicit close.
    }
    assert_eq!(mock.writes(), vec![":FREQ 1000000Hz\n"]);
}

#[test]
fn recovers_from_transient_empty_reads_mid_sequence() {
    // Two dead reads, then the instrument wakes up.
    let mock = MockTransport::with_responses(["", "", "2400000000"]);
    let mut session = SynthSession::with_transport(Box::new(mock.clone()), Duration::ZERO);

    let hz = session.frequency().unwrap();
    assert!((hz - 2.4e9).abs() < 1e-6);
    assert_eq!(mock.write_count(), 3);
}
