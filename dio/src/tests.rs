use crate::digital::{DigitalInput, DigitalOutput, DigitalState};
use crate::error::DioError;
use crate::mock::MockDigitalInOut;

#[test]
fn mock_starts_disabled_and_inactive() {
    let line = MockDigitalInOut::new();
    assert_eq!(line.get_state(), Err(DioError::NotEnabled));
    assert_eq!(line.set_state(DigitalState::Active), Err(DioError::NotEnabled));
    assert_eq!(line.state(), DigitalState::Inactive);
    assert_eq!(line.reads(), 0);
    assert_eq!(line.writes(), 0);
}

#[test]
fn enable_then_read_and_write() {
    let mut line = MockDigitalInOut::new();
    DigitalInput::enable(&mut line, true).unwrap();

    assert_eq!(line.get_state().unwrap(), DigitalState::Inactive);
    line.set_state(DigitalState::Active).unwrap();
    assert_eq!(line.get_state().unwrap(), DigitalState::Active);
    assert!(line.is_state_active().unwrap());
    // is_state_active reads through the input side too.
    assert_eq!(line.reads(), 3);
    assert_eq!(line.writes(), 1);
}

#[test]
fn disable_restores_precondition_failure() {
    let mut line = MockDigitalInOut::enabled();
    line.set_state(DigitalState::Active).unwrap();

    DigitalOutput::enable(&mut line, false).unwrap();
    assert_eq!(line.get_state(), Err(DioError::NotEnabled));
    // Backing state survives the disable.
    assert_eq!(line.state(), DigitalState::Active);
}

#[test]
fn failed_accesses_do_not_count() {
    let line = MockDigitalInOut::new();
    let _ = line.get_state();
    let _ = line.set_state(DigitalState::Active);
    assert_eq!(line.reads(), 0);
    assert_eq!(line.writes(), 0);
}

#[test]
fn error_display() {
    assert_eq!(DioError::NotEnabled.to_string(), "line not enabled");
    assert_eq!(DioError::Driver(-261).to_string(), "driver error code: -261");
}
