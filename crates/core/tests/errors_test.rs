use std::error::Error;

use campus_timetable_core::errors::{TimetableError, TimetableResult};
use rstest::rstest;

#[test]
fn test_timetable_error_display() {
    let not_found = TimetableError::NotFound("Timetable not found".to_string());
    let validation = TimetableError::Validation("Invalid day".to_string());
    let authentication = TimetableError::Authentication("Session expired".to_string());
    let authorization = TimetableError::Authorization("Admins only".to_string());
    let upstream = TimetableError::Upstream {
        status: 502,
        message: "Bad gateway".to_string(),
    };
    let transport = TimetableError::Transport(eyre::eyre!("connection refused"));
    let internal = TimetableError::Internal(Box::new(std::io::Error::other("Internal error")));

    assert_eq!(not_found.to_string(), "Resource not found: Timetable not found");
    assert_eq!(validation.to_string(), "Validation error: Invalid day");
    assert_eq!(authentication.to_string(), "Authentication error: Session expired");
    assert_eq!(authorization.to_string(), "Authorization error: Admins only");
    assert_eq!(
        upstream.to_string(),
        "Backend responded with status 502: Bad gateway"
    );
    assert!(transport.to_string().contains("connection refused"));
    assert!(internal.to_string().contains("Internal error:"));
}

#[test]
fn test_internal_error_keeps_source() {
    let io_error = std::io::Error::other("IO error");
    let error = TimetableError::Internal(Box::new(io_error));

    assert!(error.source().is_some());
}

#[test]
fn test_timetable_result() {
    let result: TimetableResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: TimetableResult<i32> = Err(TimetableError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[rstest]
#[case(400, "Validation error: bad")]
#[case(422, "Validation error: bad")]
#[case(401, "Authentication error: bad")]
#[case(403, "Authorization error: bad")]
#[case(404, "Resource not found: bad")]
#[case(500, "Backend responded with status 500: bad")]
fn test_from_status(#[case] status: u16, #[case] expected: &str) {
    assert_eq!(TimetableError::from_status(status, "bad").to_string(), expected);
}
