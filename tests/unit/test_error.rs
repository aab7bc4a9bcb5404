use inulearning_client::error::AppError;
use reqwest::StatusCode;

#[test]
fn test_app_error_display_api_message_verbatim() {
    let error = AppError::Api {
        status: StatusCode::UNAUTHORIZED,
        message: "Incorrect email or password".to_string(),
    };
    assert_eq!(error.to_string(), "Incorrect email or password");
}

#[test]
fn test_app_error_display_status_line() {
    let error = AppError::Status(StatusCode::NOT_FOUND);
    assert_eq!(error.to_string(), "HTTP 404: Not Found");
}

#[test]
fn test_app_error_display_status_line_server_error() {
    let error = AppError::Status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error.to_string(), "HTTP 500: Internal Server Error");
}

#[test]
fn test_app_error_display_invalid_token() {
    let error = AppError::InvalidToken;
    assert_eq!(error.to_string(), "invalid token");
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_app_error_source_chain() {
    use std::error::Error;

    let io_error = std::io::Error::other("disk gone");
    let app_error = AppError::Io(io_error);
    assert!(app_error.source().is_some());

    let api_error = AppError::Api {
        status: StatusCode::BAD_REQUEST,
        message: "bad".to_string(),
    };
    assert!(api_error.source().is_none());
}
