//! Service traits decoupling the engine from transport
//!
//! The wizard and the health-source browser are written against these
//! traits; `gantry-client` provides the REST implementations. All methods
//! suspend the caller only, there is no internal parallelism.

use async_trait::async_trait;
use shared::error::AppError;
use shared::models::{
    BillingContact, CardDetails, CreatedSubscription, LinkPaymentMethodRequest, MetricNode,
    MetricQuery, PriceCatalog, SubscriptionRequest, TokenizedCard, UsageSummary,
};

/// Platform billing API
#[async_trait]
pub trait BillingApi: Send + Sync {
    /// Price catalog for one module, fetched once per wizard mount
    async fn fetch_price_catalog(
        &self,
        account_id: &str,
        module: &str,
    ) -> Result<PriceCatalog, AppError>;

    /// Current usage and subscribed quantities for one module
    async fn fetch_usage(&self, account_id: &str, module: &str)
    -> Result<UsageSummary, AppError>;

    /// Create the subscription and its first invoice
    async fn create_subscription(
        &self,
        account_id: &str,
        request: &SubscriptionRequest,
    ) -> Result<CreatedSubscription, AppError>;

    /// Associate a tokenized payment method with the account's billing
    /// profile
    async fn link_payment_method(
        &self,
        account_id: &str,
        request: &LinkPaymentMethodRequest,
    ) -> Result<(), AppError>;

    /// Settle the subscription's invoice
    async fn pay_invoice(&self, account_id: &str, invoice_id: &str) -> Result<(), AppError>;
}

/// External card tokenization provider
///
/// Takes raw card fields plus the billing contact and returns a
/// payment-method token together with the provider's canonical (possibly
/// normalized) view of both.
#[async_trait]
pub trait TokenizationProvider: Send + Sync {
    async fn create_payment_method(
        &self,
        card: &CardDetails,
        contact: &BillingContact,
    ) -> Result<TokenizedCard, AppError>;
}

/// Health-source metric structure queries
#[async_trait]
pub trait HealthSourceApi: Send + Sync {
    /// Children of a node in the full metric structure
    async fn metric_structure(&self, query: &MetricQuery) -> Result<Vec<MetricNode>, AppError>;

    /// Children of a node in the base-folder tree
    async fn base_folders(&self, query: &MetricQuery) -> Result<Vec<MetricNode>, AppError>;

    /// Children of a node in the metric-path tree, scoped by the resolved
    /// base folder and tier
    async fn metric_paths(&self, query: &MetricQuery) -> Result<Vec<MetricNode>, AppError>;
}
