//! Billing and subscription plan models
//!
//! Wire types use camelCase field names and SCREAMING_SNAKE_CASE enum
//! variants to match the platform API.

use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Plan dimensions
// ============================================================================

/// Subscription plan tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Edition {
    #[default]
    Free,
    Team,
    Enterprise,
}

/// Billing frequency
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentFrequency {
    Monthly,
    #[default]
    Yearly,
}

/// What a price record charges for
///
/// A metered band covers scaled quantities (`quantity * sample_multiplier`)
/// inside `[min, max]`, both ends inclusive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceDimension {
    /// Per developer seat, per billing period
    DeveloperSeats,
    /// Metered monthly-active-unit band
    #[serde(rename_all = "camelCase")]
    MonthlyActiveUnits {
        sample_multiplier: u64,
        min: u64,
        max: u64,
    },
    /// Annual-only support add-on, charged once per term
    PremiumSupport,
}

/// One catalog price entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    pub price_id: String,
    /// Amount in minor currency units (cents)
    pub unit_amount: i64,
    pub lookup_key: String,
    pub product_id: String,
    pub edition: Edition,
    #[serde(flatten)]
    pub dimension: PriceDimension,
}

/// Price catalog for one module, partitioned by billing frequency
///
/// Fetched once when the wizard mounts and read-only afterward.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PriceCatalog {
    #[serde(default)]
    pub monthly_prices: Vec<PriceRecord>,
    #[serde(default)]
    pub yearly_prices: Vec<PriceRecord>,
}

// ============================================================================
// Billing contact
// ============================================================================

/// Billing contact details
///
/// Every field is required non-empty before the payment step is reachable.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BillingContact {
    #[validate(length(min = 1, message = "company name is required"))]
    pub company_name: String,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "country is required"))]
    pub country: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "state is required"))]
    pub state: String,
    #[validate(length(min = 1, message = "zip code is required"))]
    pub zip_code: String,
}

impl BillingContact {
    /// Whether the contact passes synchronous form validation
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

// ============================================================================
// Payment method
// ============================================================================

/// Raw card fields collected by the payment form
///
/// Passed straight to the tokenization provider, never to the platform API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDetails {
    pub number: String,
    pub exp_month: u32,
    pub exp_year: u32,
    pub cvc: String,
    pub name_on_card: String,
}

/// Stored payment method summary, populated only from a successful
/// tokenization response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodInfo {
    /// Provider-side payment method id
    pub payment_method_id: String,
    pub card_brand: String,
    pub expiry_month: u32,
    pub expiry_year: u32,
    pub last4: String,
    pub name_on_card: String,
}

/// Tokenization provider response: the token plus the provider's canonical
/// view of the card and billing contact
///
/// The provider may normalize or correct address fields; the wizard adopts
/// these over the user's form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedCard {
    pub payment_method_id: String,
    pub card_brand: String,
    pub expiry_month: u32,
    pub expiry_year: u32,
    pub last4: String,
    pub name_on_card: String,
    pub billing_contact: BillingContact,
}

impl TokenizedCard {
    /// The payment method summary kept in the draft
    pub fn payment_method(&self) -> PaymentMethodInfo {
        PaymentMethodInfo {
            payment_method_id: self.payment_method_id.clone(),
            card_brand: self.card_brand.clone(),
            expiry_month: self.expiry_month,
            expiry_year: self.expiry_year,
            last4: self.last4.clone(),
            name_on_card: self.name_on_card.clone(),
        }
    }
}

// ============================================================================
// Usage
// ============================================================================

/// Current usage and subscribed quantity for one plan dimension
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ModuleUsage {
    pub active: u64,
    pub subscribed: u64,
}

/// Usage summary for a module, seeds the recommendation heuristic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UsageSummary {
    pub developers: ModuleUsage,
    pub monthly_active_units: ModuleUsage,
}

// ============================================================================
// API request/response types
// ============================================================================

/// Create-subscription payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRequest {
    pub edition: Edition,
    pub payment_frequency: PaymentFrequency,
    pub premium_support: bool,
    pub developer_seats: u64,
    pub monthly_active_units: u64,
    pub billing_contact: BillingContact,
    /// Client-generated key; the backend treats repeated keys as the same
    /// create attempt
    pub idempotency_key: String,
}

/// Ids assigned by the backend once subscription and invoice creation succeed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedSubscription {
    pub subscription_id: String,
    pub invoice_id: String,
}

/// Link-payment-method payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkPaymentMethodRequest {
    pub payment_method_id: String,
    pub billing_contact: BillingContact,
}
