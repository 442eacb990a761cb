//! Cost summary for the calculator and review screens

use rust_decimal::{Decimal, RoundingStrategy};
use shared::models::{Edition, PaymentFrequency, PriceCatalog};

use super::{
    PricingError, metered_tier, monthly_equivalent, premium_support_price, product_prices,
    seat_price,
};

/// Rounding for displayed currency amounts (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Derived cost summary for one plan selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanQuote {
    pub edition: Edition,
    pub payment_frequency: PaymentFrequency,
    pub developer_seats: u64,
    pub monthly_active_units: u64,
    /// Monthly-equivalent per-seat price, for display
    pub seat_unit_price: Decimal,
    /// Monthly-equivalent metered band price, zero when no units are used
    pub units_unit_price: Decimal,
    /// Annual-only premium support amount, charged once per term
    pub premium_support_amount: Decimal,
    /// Monthly breakdown: seats plus metered band
    pub monthly_total: Decimal,
    /// Amount due per billing period
    pub total_due: Decimal,
}

impl PlanQuote {
    fn free(frequency: PaymentFrequency) -> Self {
        Self {
            edition: Edition::Free,
            payment_frequency: frequency,
            developer_seats: 0,
            monthly_active_units: 0,
            seat_unit_price: Decimal::ZERO,
            units_unit_price: Decimal::ZERO,
            premium_support_amount: Decimal::ZERO,
            monthly_total: Decimal::ZERO,
            total_due: Decimal::ZERO,
        }
    }
}

/// Compute the cost summary for a plan selection
///
/// The monthly breakdown is built from monthly-equivalent unit prices; the
/// yearly total multiplies that breakdown by 12 and adds the premium
/// support add-on once. Premium support only exists on yearly terms.
pub fn quote(
    catalog: &PriceCatalog,
    edition: Edition,
    frequency: PaymentFrequency,
    developer_seats: u64,
    monthly_active_units: u64,
    premium_support: bool,
) -> Result<PlanQuote, PricingError> {
    if edition == Edition::Free {
        return Ok(PlanQuote::free(frequency));
    }

    let records = product_prices(catalog, edition, frequency);

    let seat_record = seat_price(&records).ok_or(PricingError::MissingPrice {
        edition,
        frequency,
        dimension: "developer seat",
    })?;
    let seat_unit = monthly_equivalent(seat_record, frequency);

    let units_unit = if monthly_active_units > 0 {
        let band = metered_tier(&records, monthly_active_units).ok_or(
            PricingError::NoTierForQuantity {
                quantity: monthly_active_units,
            },
        )?;
        monthly_equivalent(band, frequency)
    } else {
        Decimal::ZERO
    };

    let premium_amount = if premium_support && frequency == PaymentFrequency::Yearly {
        let record = premium_support_price(&records).ok_or(PricingError::MissingPrice {
            edition,
            frequency,
            dimension: "premium support",
        })?;
        super::unit_price(record)
    } else {
        Decimal::ZERO
    };

    let monthly_total = seat_unit * Decimal::from(developer_seats) + units_unit;

    let total_due = match frequency {
        PaymentFrequency::Monthly => monthly_total,
        PaymentFrequency::Yearly => monthly_total * Decimal::from(12) + premium_amount,
    };

    Ok(PlanQuote {
        edition,
        payment_frequency: frequency,
        developer_seats,
        monthly_active_units,
        seat_unit_price: round_money(seat_unit),
        units_unit_price: round_money(units_unit),
        premium_support_amount: round_money(premium_amount),
        monthly_total: round_money(monthly_total),
        total_due: round_money(total_due),
    })
}
