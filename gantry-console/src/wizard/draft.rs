//! The subscription draft aggregate

use serde::{Deserialize, Serialize};
use shared::models::{
    BillingContact, Edition, PaymentFrequency, PaymentMethodInfo, PriceCatalog,
};
use shared::util::now_millis;

/// Per-module usage selections; unset until the user touches the sliders
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Quantities {
    pub developer_seats: Option<u64>,
    pub monthly_active_units: Option<u64>,
}

/// The single mutable aggregate threaded through every wizard step
///
/// Created with defaults when the wizard mounts, discarded on navigation
/// away or completion; never persisted by this subsystem. All mutation
/// goes through [`super::DraftAction`] and the reducer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscriptionDraft {
    pub edition: Edition,
    pub payment_frequency: PaymentFrequency,
    /// Annual-only add-on; forced off whenever the frequency is monthly
    pub premium_support_selected: bool,
    pub quantities: Quantities,
    pub billing_contact: BillingContact,
    /// Populated only from a successful tokenization response
    pub payment_method: Option<PaymentMethodInfo>,
    /// Fetched once at mount, read-only afterward
    pub price_catalog: PriceCatalog,
    pub subscription_id: Option<String>,
    pub invoice_id: Option<String>,
    /// Mirror of the third-party card-field completeness, independent of
    /// the billing contact's validity
    pub payment_form_valid: bool,
    /// Mount time, unix milliseconds
    pub created_at: i64,
}

impl SubscriptionDraft {
    pub fn new(price_catalog: PriceCatalog) -> Self {
        Self {
            edition: Edition::default(),
            payment_frequency: PaymentFrequency::default(),
            premium_support_selected: false,
            quantities: Quantities::default(),
            billing_contact: BillingContact::default(),
            payment_method: None,
            price_catalog,
            subscription_id: None,
            invoice_id: None,
            payment_form_valid: false,
            created_at: now_millis(),
        }
    }

    /// Whether the billing contact passes synchronous validation
    pub fn billing_contact_complete(&self) -> bool {
        self.billing_contact.is_complete()
    }
}
