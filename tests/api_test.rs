//! API-level tests for response types, error conversion, and mock
//! service behavior.
//!
//! These tests use mock services to exercise API building blocks without
//! requiring a database connection.

use async_trait::async_trait;
use axum::http::StatusCode;
use chrono::Utc;
use uuid::Uuid;

use course_api::domain::{CourseAccess, EnrollmentStatus, NextDestination, Profile};
use course_api::errors::{AppError, AppResult};
use course_api::services::{AuthService, Claims, TokenResponse};

// =============================================================================
// Mock Services for Testing
// =============================================================================

/// Mock auth service that returns predefined responses
struct MockAuthService;

#[async_trait]
impl AuthService for MockAuthService {
    async fn register(
        &self,
        email: String,
        _password: String,
        full_name: Option<String>,
    ) -> AppResult<Profile> {
        Ok(Profile::new(
            Uuid::new_v4(),
            email,
            "hashed".to_string(),
            full_name,
        ))
    }

    async fn login(&self, _email: String, _password: String) -> AppResult<TokenResponse> {
        Ok(TokenResponse {
            access_token: "mock-token".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 86400,
        })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        if token == "valid-test-token" {
            Ok(Claims {
                sub: Uuid::new_v4(),
                email: "test@example.com".to_string(),
                exp: Utc::now().timestamp() + 3600,
                iat: Utc::now().timestamp(),
            })
        } else {
            Err(AppError::Unauthorized)
        }
    }
}

// =============================================================================
// Response Type Tests
// =============================================================================

#[tokio::test]
async fn test_api_response_structure() {
    use course_api::types::ApiResponse;

    let response: ApiResponse<String> = ApiResponse::success("test data".to_string());
    assert!(response.success);
    assert!(response.data.is_some());
    assert_eq!(response.data.unwrap(), "test data");
    assert!(response.message.is_none());
}

#[tokio::test]
async fn test_api_response_with_message() {
    use course_api::types::ApiResponse;

    let response: ApiResponse<i32> = ApiResponse::with_message(42, "Operation completed");
    assert!(response.success);
    assert_eq!(response.data.unwrap(), 42);
    assert_eq!(response.message.unwrap(), "Operation completed");
}

#[tokio::test]
async fn test_message_only_response() {
    use course_api::types::ApiResponse;

    let response: ApiResponse<()> = ApiResponse::message("Success");
    assert!(response.success);
    assert!(response.data.is_none());
    assert_eq!(response.message.unwrap(), "Success");
}

// =============================================================================
// Domain Serialization Tests
// =============================================================================

#[tokio::test]
async fn test_course_access_serializes_lowercase() {
    assert_eq!(
        serde_json::to_value(CourseAccess::Preview).unwrap(),
        serde_json::json!("preview")
    );
    assert_eq!(
        serde_json::to_value(CourseAccess::Viewer).unwrap(),
        serde_json::json!("viewer")
    );
}

#[tokio::test]
async fn test_enrollment_status_serialization() {
    assert_eq!(
        serde_json::to_value(EnrollmentStatus::Active).unwrap(),
        serde_json::json!("active")
    );
    assert_eq!(EnrollmentStatus::from("cancelled"), EnrollmentStatus::Cancelled);
}

#[tokio::test]
async fn test_next_destination_is_tagged() {
    let id = Uuid::new_v4();
    let value = serde_json::to_value(NextDestination::Lesson(id)).unwrap();
    assert_eq!(value["type"], "lesson");
    assert_eq!(value["id"], serde_json::json!(id));

    let value = serde_json::to_value(NextDestination::Course(id)).unwrap();
    assert_eq!(value["type"], "course");
}

// =============================================================================
// Error Type Tests
// =============================================================================

#[tokio::test]
async fn test_app_error_types() {
    let not_found = AppError::NotFound;
    let unauthorized = AppError::Unauthorized;
    let invalid_op = AppError::invalid_operation("lesson not ready");
    let internal = AppError::internal("server error");

    assert!(matches!(not_found, AppError::NotFound));
    assert!(matches!(unauthorized, AppError::Unauthorized));
    assert!(matches!(invalid_op, AppError::InvalidOperation(_)));
    assert!(matches!(internal, AppError::Internal(_)));
}

#[tokio::test]
async fn test_app_error_status_codes() {
    use axum::response::IntoResponse;

    let response = AppError::NotFound.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = AppError::Unauthorized.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = AppError::invalid_operation("not actionable").into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = AppError::Forbidden.into_response();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// =============================================================================
// Password Hashing Tests
// =============================================================================

#[tokio::test]
async fn test_password_hashing() {
    use course_api::domain::Password;

    let plain_password = "secure_password_123";
    let password = Password::new(plain_password).expect("Hashing should succeed");
    let hash = password.into_string();

    // Hash should be different from original
    assert_ne!(hash.as_str(), plain_password);

    // Hash should be verifiable
    let stored = Password::from_hash(hash);
    assert!(stored.verify(plain_password));

    // Wrong password should not verify
    assert!(!stored.verify("wrong_password"));
}

// =============================================================================
// JWT Claims Tests
// =============================================================================

#[tokio::test]
async fn test_claims_structure() {
    let claims = Claims {
        sub: Uuid::new_v4(),
        email: "test@example.com".to_string(),
        exp: Utc::now().timestamp() + 3600,
        iat: Utc::now().timestamp(),
    };

    assert!(!claims.email.is_empty());
    assert!(claims.exp > claims.iat);
}

// =============================================================================
// Mock Service Tests
// =============================================================================

#[tokio::test]
async fn test_mock_auth_service_register() {
    let service = MockAuthService;
    let result = service
        .register(
            "new@example.com".to_string(),
            "password123".to_string(),
            Some("New User".to_string()),
        )
        .await;

    assert!(result.is_ok());
    let profile = result.unwrap();
    assert_eq!(profile.email, "new@example.com");
    assert_eq!(profile.full_name.as_deref(), Some("New User"));
}

#[tokio::test]
async fn test_mock_auth_service_login() {
    let service = MockAuthService;
    let result = service
        .login("test@example.com".to_string(), "password123".to_string())
        .await;

    assert!(result.is_ok());
    let token = result.unwrap();
    assert_eq!(token.token_type, "Bearer");
    assert!(!token.access_token.is_empty());
}

#[tokio::test]
async fn test_mock_auth_service_verify_invalid_token() {
    let service = MockAuthService;
    let result = service.verify_token("invalid-token");

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), AppError::Unauthorized));
}

// =============================================================================
// Integration Tests (Require Infrastructure)
// =============================================================================
//
// The following tests require an actual database connection. To run them:
// 1. Start PostgreSQL
// 2. Set DATABASE_URL environment variable
// 3. Run: cargo test -- --ignored
//
// #[tokio::test]
// #[ignore = "Requires database"]
// async fn test_full_health_endpoint() {
//     // Full integration test with real infrastructure
// }
