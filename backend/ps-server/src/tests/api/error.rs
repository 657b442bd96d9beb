use crate::ApiError;

use ps_core::parse_identity;
use ps_db::DbError;

use std::panic::Location;
use std::time::Duration;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_status_and_message() {
    let error = ApiError::NotFound {
        message: "Person not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], "404");
    assert_eq!(json["message"], "Person not found");
}

#[tokio::test]
async fn test_validation_error_returns_400() {
    let error = ApiError::validation("Invalid person id", Some("id"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "400");
    assert_eq!(json["message"], "Invalid person id");
}

#[tokio::test]
async fn test_unauthorized_returns_generic_401_body() {
    let error = ApiError::Unauthorized {
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json, serde_json::json!({"status": "401", "message": "Unauthorized"}));
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["status"], "500");
}

#[test]
fn test_core_validation_error_converts_to_validation() {
    let core_error = parse_identity("not-a-uuid").unwrap_err();

    let api_error: ApiError = core_error.into();

    match api_error {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("id")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_db_not_found_converts_to_not_found_with_message() {
    let db_error = DbError::not_found("person_repository.find_by_id", "Person 42 not found");

    let api_error: ApiError = db_error.into();

    match api_error {
        ApiError::NotFound { message, .. } => assert_eq!(message, "Person 42 not found"),
        other => panic!("expected not found, got {:?}", other),
    }
}

#[tokio::test]
async fn test_db_timeout_converts_to_internal_without_details() {
    let db_error = DbError::Timeout {
        operation: "person_repository.list",
        timeout: Duration::from_secs(5),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = db_error.into();
    let (status, json) = body_json(api_error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Database operation failed");
    assert!(!json["message"].as_str().unwrap().contains("person_repository"));
}

#[tokio::test]
async fn test_timeout_returns_408_with_fixed_message() {
    let error = ApiError::Timeout {
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(json["status"], "408");
    assert_eq!(json["message"], "Request timed out");
}
