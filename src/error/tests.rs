//! Unit tests for error module.

use super::*;
use crate::validation::Violation;

fn sample_violations() -> Vec<Violation> {
    vec![
        Violation {
            field: "email".to_string(),
            rule: "must be a valid email address".to_string(),
        },
        Violation {
            field: "quantity_bottles".to_string(),
            rule: "must be at least 1".to_string(),
        },
    ]
}

// ============================================================================
// ErrorResponse Tests
// ============================================================================

#[test]
fn test_error_response_serialization() {
    let response = ErrorResponse {
        error: "Something went wrong".to_string(),
        code: "INTERNAL_ERROR".to_string(),
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"error\":\"Something went wrong\""));
    assert!(json.contains("\"code\":\"INTERNAL_ERROR\""));
}

#[test]
fn test_validation_error_response_serialization() {
    let response = ValidationErrorResponse {
        error: "validation failed".to_string(),
        code: "VALIDATION_FAILED".to_string(),
        violations: sample_violations(),
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"code\":\"VALIDATION_FAILED\""));
    assert!(json.contains("\"field\":\"email\""));
    assert!(json.contains("\"rule\":\"must be at least 1\""));
}

// ============================================================================
// ApiError Display Tests
// ============================================================================

#[test]
fn test_api_error_validation_display() {
    let error = ApiError::Validation(sample_violations());
    assert_eq!(format!("{}", error), "validation failed for 2 field(s)");
}

#[test]
fn test_api_error_storage_display() {
    let error = ApiError::Storage("connection refused".to_string());
    assert_eq!(format!("{}", error), "storage failure: connection refused");
}

#[test]
fn test_api_error_internal_display() {
    let error = ApiError::Internal("decoding failed".to_string());
    assert_eq!(
        format!("{}", error),
        "internal server error: decoding failed"
    );
}

// ============================================================================
// ApiError IntoResponse Tests
// ============================================================================

#[test]
fn test_api_error_validation_into_response() {
    let error = ApiError::Validation(sample_violations());
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn test_api_error_storage_into_response() {
    let error = ApiError::Storage("connection refused".to_string());
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_api_error_internal_into_response() {
    let error = ApiError::Internal("decoding failed".to_string());
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// ============================================================================
// StoreError Conversion Tests
// ============================================================================

#[test]
fn test_store_unavailable_becomes_storage_error() {
    let error: ApiError = StoreError::Unavailable.into();
    match error {
        ApiError::Storage(message) => {
            assert_eq!(message, "document store is not initialized");
        }
        other => panic!("expected Storage, got {other:?}"),
    }
}

// ============================================================================
// truncate_message Tests
// ============================================================================

#[test]
fn test_truncate_message_short_input_is_unchanged() {
    assert_eq!(truncate_message("short", 50), "short");
}

#[test]
fn test_truncate_message_long_input_is_cut() {
    let input = "abcdefghij";
    assert_eq!(truncate_message(input, 4), "abcd");
}

#[test]
fn test_truncate_message_is_char_boundary_safe() {
    let input = "⚠⚠⚠⚠⚠";
    assert_eq!(truncate_message(input, 2), "⚠⚠");
}
