//! Wizard and checkout error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use super::WizardView;
use crate::pricing::PricingError;

/// Where a surfaced error is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSurface {
    /// Next to the card fields
    Inline,
    /// Toast notification
    Toast,
}

/// Checkout orchestration failure
///
/// Every variant is retryable: the failing action is simply re-invocable.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Rejected by the tokenization provider's validation
    #[error("card validation failed: {0}")]
    CardValidation(String),

    /// Platform API rejected the call
    #[error("{0}")]
    Api(AppError),

    /// Transport-level failure
    #[error("network error: {0}")]
    Network(String),
}

impl CheckoutError {
    /// Classify a tokenization provider error
    pub(crate) fn from_provider(err: AppError) -> Self {
        match err.code {
            ErrorCode::CardDeclined | ErrorCode::ValidationFailed => {
                CheckoutError::CardValidation(err.message().to_string())
            }
            ErrorCode::NetworkError => CheckoutError::Network(err.message().to_string()),
            _ => CheckoutError::Api(err),
        }
    }

    /// Classify a platform API error
    pub(crate) fn from_api(err: AppError) -> Self {
        match err.code {
            ErrorCode::NetworkError => CheckoutError::Network(err.message().to_string()),
            _ => CheckoutError::Api(err),
        }
    }

    /// Provider validation errors render inline; everything else toasts
    pub fn surface(&self) -> ErrorSurface {
        match self {
            CheckoutError::CardValidation(_) => ErrorSurface::Inline,
            CheckoutError::Api(_) | CheckoutError::Network(_) => ErrorSurface::Toast,
        }
    }
}

/// Wizard-level errors
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("action not available in step {0:?}")]
    InvalidTransition(WizardView),

    #[error("billing contact is incomplete")]
    IncompleteBillingContact,

    #[error("card details are incomplete")]
    PaymentFormIncomplete,

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}
