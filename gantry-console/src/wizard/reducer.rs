//! Draft reducer
//!
//! Clone the previous draft, override the touched fields, return the new
//! draft; never a partial patch. Concurrent edits are impossible by
//! construction: one aggregate, one owner at a time.

use shared::models::PaymentFrequency;

use super::{DraftAction, SubscriptionDraft};

/// Apply one action to the draft
pub fn apply(draft: &SubscriptionDraft, action: DraftAction) -> SubscriptionDraft {
    let mut next = draft.clone();
    match action {
        DraftAction::SetEdition(edition) => {
            next.edition = edition;
        }
        DraftAction::SetPaymentFrequency(frequency) => {
            next.payment_frequency = frequency;
            // Premium support is annual-only. Clearing it here, inside the
            // same update, keeps an invalid combination from ever being
            // rendered.
            if frequency == PaymentFrequency::Monthly {
                next.premium_support_selected = false;
            }
        }
        DraftAction::SetPremiumSupport(selected) => {
            next.premium_support_selected =
                selected && next.payment_frequency == PaymentFrequency::Yearly;
        }
        DraftAction::SetDeveloperSeats(seats) => {
            next.quantities.developer_seats = Some(seats);
        }
        DraftAction::SetMonthlyActiveUnits(units) => {
            next.quantities.monthly_active_units = Some(units);
        }
        DraftAction::SetBillingContact(contact) => {
            next.billing_contact = contact;
        }
        DraftAction::SetPaymentMethod(method) => {
            next.payment_method = Some(method);
        }
        DraftAction::SetPaymentFormValid(valid) => {
            next.payment_form_valid = valid;
        }
        DraftAction::AttachSubscription {
            subscription_id,
            invoice_id,
        } => {
            next.subscription_id = Some(subscription_id);
            next.invoice_id = Some(invoice_id);
        }
    }
    next
}
