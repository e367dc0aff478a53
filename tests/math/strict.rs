//! Integration tests for try_max_number

use maxnumber::foundation::ErrorKind;
use maxnumber::{max_number, try_max_number};

#[test]
fn strict_returns_maximum() {
    assert_eq!(try_max_number(Some(&[1, 3, 9, 5])), Ok(9));
    assert_eq!(try_max_number(Some(&[1, -1, 8, -5, 3])), Ok(8));
}

#[test]
fn strict_reports_absent() {
    let err = try_max_number(None).unwrap_err();
    assert_eq!(err.kind, ErrorKind::AbsentSequence);
}

#[test]
fn strict_reports_empty() {
    let err = try_max_number(Some(&[])).unwrap_err();
    assert_eq!(err.kind, ErrorKind::EmptySequence);
}

#[test]
fn strict_distinguishes_real_zero() {
    // max_number cannot tell these apart.
    assert_eq!(max_number(Some(&[0, -2])), max_number(Some(&[])));
    assert_eq!(try_max_number(Some(&[0, -2])), Ok(0));
    assert!(try_max_number(Some(&[])).is_err());
}
