//! Data models shared across the console crates

pub mod billing;
pub mod health;

pub use billing::{
    BillingContact, CardDetails, CreatedSubscription, Edition, LinkPaymentMethodRequest,
    ModuleUsage, PaymentFrequency, PaymentMethodInfo, PriceCatalog, PriceDimension, PriceRecord,
    SubscriptionRequest, TokenizedCard, UsageSummary,
};
pub use health::{MetricNode, MetricQuery};
