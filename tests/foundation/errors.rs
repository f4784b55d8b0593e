//! Integration tests for Error types

use istsim_foundation::{Error, ErrorKind};

#[test]
fn error_unknown_item() {
    let err = Error::unknown_item("nothing");
    assert!(matches!(err.kind, ErrorKind::UnknownItem(_)));
    assert_eq!(err.to_string(), "unknown item: nothing");
}

#[test]
fn error_slot_out_of_range() {
    let err = Error::slot_out_of_range(9, 2);
    assert!(matches!(
        err.kind,
        ErrorKind::SlotOutOfRange {
            index: 9,
            length: 2
        }
    ));
}

#[test]
fn error_invalid_meta() {
    let err = Error::invalid_meta("life", "not a number: x");
    assert_eq!(err.to_string(), "invalid meta life: not a number: x");
}

#[test]
fn error_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: Error = io.into();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert!(err.to_string().contains("gone"));
}

#[test]
fn fixed_messages() {
    assert_eq!(Error::new(ErrorKind::NoSave).to_string(), "no save to reload");
    assert_eq!(
        Error::new(ErrorKind::Crashed).to_string(),
        "the game has crashed"
    );
}
