use super::*;

#[test]
fn test_error_code_strings() {
    assert_eq!(ErrorCode::InvalidUsername.as_str(), "INVALID_USERNAME");
    assert_eq!(ErrorCode::InvalidPassword.to_string(), "INVALID_PASSWORD");
    assert_eq!(ErrorCode::LoginFailed.as_str(), "LOGIN_FAILED");
}

#[test]
fn test_error_code_serde_matches_as_str() {
    for code in ErrorCode::ALL {
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, format!("\"{}\"", code.as_str()));
    }
}

#[test]
fn test_error_code_from_str() {
    assert_eq!("login_failed".parse::<ErrorCode>().unwrap(), ErrorCode::LoginFailed);
    assert!("NOPE".parse::<ErrorCode>().is_err());
}

#[test]
fn test_validation_classification() {
    assert!(ErrorCode::InvalidUsername.is_validation());
    assert!(ErrorCode::InvalidPassword.is_validation());
    assert!(!ErrorCode::LoginFailed.is_validation());
}

#[test]
fn test_auth_error_messages() {
    let error = AuthError::rejected("wrong password");
    assert_eq!(error.to_string(), "Authentication rejected: wrong password");

    let error = AuthError::transport("connection refused");
    assert!(error.to_string().contains("connection refused"));
}
