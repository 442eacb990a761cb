//! Draft mutation actions
//!
//! One variant per mutation site so every write to the draft is auditable.

use shared::models::{BillingContact, Edition, PaymentFrequency, PaymentMethodInfo};

/// Typed mutation applied to the draft by the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum DraftAction {
    SetEdition(Edition),
    /// Switching to monthly also clears premium support in the same update
    SetPaymentFrequency(PaymentFrequency),
    /// No-op when the frequency is monthly; the add-on is annual-only
    SetPremiumSupport(bool),
    SetDeveloperSeats(u64),
    SetMonthlyActiveUnits(u64),
    SetBillingContact(BillingContact),
    SetPaymentMethod(PaymentMethodInfo),
    SetPaymentFormValid(bool),
    /// Backend-assigned ids after create-subscription succeeds
    AttachSubscription {
        subscription_id: String,
        invoice_id: String,
    },
}
