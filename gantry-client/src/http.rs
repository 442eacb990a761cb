//! HTTP plumbing shared by the clients
//!
//! Platform responses use the `{code, message, data}` envelope; anything
//! that is not a success envelope is mapped into `AppError`.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use shared::error::{AppError, ErrorCode};
use shared::response::ApiResponse;

/// Map a transport failure (no usable response) into an `AppError`
pub(crate) fn transport_error(err: &reqwest::Error) -> AppError {
    AppError::with_detail(ErrorCode::NetworkError, err.to_string())
}

/// Build an `AppError` from a non-success response body
///
/// Prefers the envelope's wire code; falls back to the HTTP status when
/// the body is not an envelope.
pub(crate) fn error_from_body(status: StatusCode, body: &str) -> AppError {
    if let Ok(envelope) = serde_json::from_str::<ApiResponse<serde_json::Value>>(body) {
        return AppError::with_detail(ErrorCode::from_wire(&envelope.code), envelope.message);
    }
    let code = match status {
        StatusCode::UNAUTHORIZED => ErrorCode::Unauthorized,
        StatusCode::NOT_FOUND => ErrorCode::NotFound,
        StatusCode::BAD_REQUEST => ErrorCode::ValidationFailed,
        _ => ErrorCode::InternalError,
    };
    AppError::with_detail(code, body.to_string())
}

/// Unwrap a success envelope carrying data
pub(crate) async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, AppError> {
    let status = response.status();
    let text = response.text().await.map_err(|e| transport_error(&e))?;
    if !status.is_success() {
        return Err(error_from_body(status, &text));
    }
    let envelope: ApiResponse<T> = serde_json::from_str(&text)
        .map_err(|e| AppError::with_detail(ErrorCode::InternalError, format!("invalid response body: {e}")))?;
    if !envelope.is_success() {
        return Err(AppError::with_detail(
            ErrorCode::from_wire(&envelope.code),
            envelope.message,
        ));
    }
    envelope
        .data
        .ok_or_else(|| AppError::with_detail(ErrorCode::InternalError, "response data missing"))
}

/// Unwrap a success envelope that carries no data
pub(crate) async fn handle_ack(response: reqwest::Response) -> Result<(), AppError> {
    let status = response.status();
    let text = response.text().await.map_err(|e| transport_error(&e))?;
    if !status.is_success() {
        return Err(error_from_body(status, &text));
    }
    let envelope: ApiResponse<serde_json::Value> = serde_json::from_str(&text)
        .map_err(|e| AppError::with_detail(ErrorCode::InternalError, format!("invalid response body: {e}")))?;
    if !envelope.is_success() {
        return Err(AppError::with_detail(
            ErrorCode::from_wire(&envelope.code),
            envelope.message,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_error_body_carries_code_and_message() {
        let body = r#"{"code":"E4102","message":"card not linked"}"#;
        let err = error_from_body(StatusCode::UNPROCESSABLE_ENTITY, body);
        assert_eq!(err.code, ErrorCode::PaymentSetupFailed);
        assert_eq!(err.message(), "card not linked");
    }

    #[test]
    fn non_envelope_body_falls_back_to_the_status() {
        let err = error_from_body(StatusCode::UNAUTHORIZED, "nope");
        assert_eq!(err.code, ErrorCode::Unauthorized);

        let err = error_from_body(StatusCode::BAD_GATEWAY, "<html>");
        assert_eq!(err.code, ErrorCode::InternalError);
    }
}
