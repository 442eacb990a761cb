//! Error vocabulary shared between the console engine and its API clients
//!
//! `AppError` is the cross-boundary business error: a closed `ErrorCode`
//! plus an optional human-readable detail. Clients map transport and
//! envelope failures into it; the engine classifies it for presentation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes carried across the API boundary
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request payload failed validation (400)
    ValidationFailed,
    /// Authentication required or token rejected (401)
    Unauthorized,
    /// Resource not found (404)
    NotFound,
    /// Card rejected by the tokenization provider (402)
    CardDeclined,
    /// Payment method could not be set up or linked (422)
    PaymentSetupFailed,
    /// Transport-level failure, no response from the server
    NetworkError,
    /// Internal server error (500)
    InternalError,
}

impl ErrorCode {
    /// Wire code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "E0002",
            Self::Unauthorized => "E3001",
            Self::NotFound => "E0003",
            Self::CardDeclined => "E4101",
            Self::PaymentSetupFailed => "E4102",
            Self::NetworkError => "E9003",
            Self::InternalError => "E9001",
        }
    }

    /// Default message shown when the server supplied no detail
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "Validation failed",
            Self::Unauthorized => "Authentication required",
            Self::NotFound => "Resource not found",
            Self::CardDeclined => "Card declined",
            Self::PaymentSetupFailed => "Payment setup failed",
            Self::NetworkError => "Network error",
            Self::InternalError => "Internal server error",
        }
    }

    /// Parse a wire code string; unknown codes map to `InternalError`
    pub fn from_wire(code: &str) -> Self {
        match code {
            "E0002" => Self::ValidationFailed,
            "E3001" => Self::Unauthorized,
            "E0003" => Self::NotFound,
            "E4101" => Self::CardDeclined,
            "E4102" => Self::PaymentSetupFailed,
            "E9003" => Self::NetworkError,
            _ => Self::InternalError,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Business error carried across crate boundaries
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{}", self.message())]
pub struct AppError {
    pub code: ErrorCode,
    detail: Option<String>,
}

impl AppError {
    pub fn new(code: ErrorCode) -> Self {
        Self { code, detail: None }
    }

    pub fn with_detail(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self {
            code,
            detail: Some(detail.into()),
        }
    }

    /// The detail if present, the code's default message otherwise
    pub fn message(&self) -> &str {
        self.detail
            .as_deref()
            .unwrap_or_else(|| self.code.default_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_codes_round_trip() {
        for code in [
            ErrorCode::ValidationFailed,
            ErrorCode::Unauthorized,
            ErrorCode::NotFound,
            ErrorCode::CardDeclined,
            ErrorCode::PaymentSetupFailed,
            ErrorCode::NetworkError,
            ErrorCode::InternalError,
        ] {
            assert_eq!(ErrorCode::from_wire(code.code()), code);
        }
    }

    #[test]
    fn unknown_wire_code_maps_to_internal() {
        assert_eq!(ErrorCode::from_wire("E7777"), ErrorCode::InternalError);
    }

    #[test]
    fn detail_overrides_default_message() {
        let err = AppError::new(ErrorCode::CardDeclined);
        assert_eq!(err.message(), "Card declined");

        let err = AppError::with_detail(ErrorCode::CardDeclined, "expired card");
        assert_eq!(err.message(), "expired card");
        assert_eq!(err.to_string(), "expired card");
    }
}
