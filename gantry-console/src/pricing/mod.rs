//! Plan pricing derivation
//!
//! Read-only projections of the price catalog: record filtering, metered
//! tier lookup, unit prices, the usage recommendation heuristic and the
//! cost summary shown on the calculator and review screens. All currency
//! arithmetic uses `rust_decimal`; amounts enter as integer minor units.

mod catalog;
mod recommend;
mod summary;

pub use catalog::{
    metered_tier, monthly_equivalent, premium_support_price, product_prices, seat_price,
    unit_price,
};
pub use recommend::recommended_quantity;
pub use summary::{PlanQuote, quote};

use shared::models::{Edition, PaymentFrequency};
use thiserror::Error;

/// Pricing errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("no {dimension} price for {edition:?}/{frequency:?}")]
    MissingPrice {
        edition: Edition,
        frequency: PaymentFrequency,
        dimension: &'static str,
    },

    #[error("no metered price tier covers quantity {quantity}")]
    NoTierForQuantity { quantity: u64 },
}
