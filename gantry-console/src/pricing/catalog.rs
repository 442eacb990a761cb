//! Catalog filtering and unit price derivation

use rust_decimal::Decimal;
use shared::models::{Edition, PaymentFrequency, PriceCatalog, PriceDimension, PriceRecord};

/// Records applicable to an edition under a billing frequency
///
/// The catalog is partitioned by frequency up front; within the partition
/// only the edition filter applies.
pub fn product_prices<'a>(
    catalog: &'a PriceCatalog,
    edition: Edition,
    frequency: PaymentFrequency,
) -> Vec<&'a PriceRecord> {
    let partition = match frequency {
        PaymentFrequency::Monthly => &catalog.monthly_prices,
        PaymentFrequency::Yearly => &catalog.yearly_prices,
    };
    partition.iter().filter(|r| r.edition == edition).collect()
}

/// The per-seat record among the given records, if any
pub fn seat_price<'a>(records: &[&'a PriceRecord]) -> Option<&'a PriceRecord> {
    records
        .iter()
        .copied()
        .find(|r| r.dimension == PriceDimension::DeveloperSeats)
}

/// The premium support add-on record among the given records, if any
pub fn premium_support_price<'a>(records: &[&'a PriceRecord]) -> Option<&'a PriceRecord> {
    records
        .iter()
        .copied()
        .find(|r| r.dimension == PriceDimension::PremiumSupport)
}

/// The metered band covering `quantity`
///
/// A band matches when `quantity * sample_multiplier` lies inside its
/// `[min, max]` window. Windows are not checked for overlap; the first
/// match in list order wins.
pub fn metered_tier<'a>(records: &[&'a PriceRecord], quantity: u64) -> Option<&'a PriceRecord> {
    records.iter().copied().find(|r| match r.dimension {
        PriceDimension::MonthlyActiveUnits {
            sample_multiplier,
            min,
            max,
        } => {
            let scaled = quantity.saturating_mul(sample_multiplier);
            scaled >= min && scaled <= max
        }
        _ => false,
    })
}

/// Unit price as a decimal currency amount (minor units / 100)
pub fn unit_price(record: &PriceRecord) -> Decimal {
    Decimal::new(record.unit_amount, 2)
}

/// Monthly-equivalent unit price, used for display
///
/// Yearly amounts are divided by 12; monthly amounts pass through.
pub fn monthly_equivalent(record: &PriceRecord, frequency: PaymentFrequency) -> Decimal {
    match frequency {
        PaymentFrequency::Monthly => unit_price(record),
        PaymentFrequency::Yearly => unit_price(record) / Decimal::from(12),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(
        price_id: &str,
        unit_amount: i64,
        edition: Edition,
        dimension: PriceDimension,
    ) -> PriceRecord {
        PriceRecord {
            price_id: price_id.to_string(),
            unit_amount,
            lookup_key: format!("lk_{price_id}"),
            product_id: "prod_ci".to_string(),
            edition,
            dimension,
        }
    }

    fn make_catalog() -> PriceCatalog {
        PriceCatalog {
            monthly_prices: vec![make_record(
                "team_dev_m",
                5000,
                Edition::Team,
                PriceDimension::DeveloperSeats,
            )],
            yearly_prices: vec![make_record(
                "team_dev_y",
                50000,
                Edition::Team,
                PriceDimension::DeveloperSeats,
            )],
        }
    }

    #[test]
    fn filters_by_edition_and_frequency() {
        let catalog = make_catalog();

        let monthly = product_prices(&catalog, Edition::Team, PaymentFrequency::Monthly);
        assert_eq!(monthly.len(), 1);
        assert_eq!(monthly[0].unit_amount, 5000);

        let yearly = product_prices(&catalog, Edition::Team, PaymentFrequency::Yearly);
        assert_eq!(yearly.len(), 1);
        assert_eq!(yearly[0].unit_amount, 50000);

        let enterprise = product_prices(&catalog, Edition::Enterprise, PaymentFrequency::Monthly);
        assert!(enterprise.is_empty());
    }

    #[test]
    fn metered_tier_matches_scaled_quantity() {
        let low = make_record(
            "mau_low",
            9000,
            Edition::Team,
            PriceDimension::MonthlyActiveUnits {
                sample_multiplier: 1000,
                min: 0,
                max: 100_000,
            },
        );
        let high = make_record(
            "mau_high",
            20000,
            Edition::Team,
            PriceDimension::MonthlyActiveUnits {
                sample_multiplier: 1000,
                min: 100_001,
                max: 1_000_000,
            },
        );
        let records = vec![&low, &high];

        assert_eq!(metered_tier(&records, 100).unwrap().price_id, "mau_low");
        assert_eq!(metered_tier(&records, 500).unwrap().price_id, "mau_high");
        assert!(metered_tier(&records, 5000).is_none());
    }

    #[test]
    fn overlapping_tiers_first_match_wins() {
        let first = make_record(
            "mau_a",
            9000,
            Edition::Team,
            PriceDimension::MonthlyActiveUnits {
                sample_multiplier: 1,
                min: 0,
                max: 100,
            },
        );
        let second = make_record(
            "mau_b",
            20000,
            Edition::Team,
            PriceDimension::MonthlyActiveUnits {
                sample_multiplier: 1,
                min: 50,
                max: 200,
            },
        );
        let records = vec![&first, &second];

        // 75 falls in both windows; list order decides
        assert_eq!(metered_tier(&records, 75).unwrap().price_id, "mau_a");
        let reversed = vec![&second, &first];
        assert_eq!(metered_tier(&reversed, 75).unwrap().price_id, "mau_b");
    }

    #[test]
    fn unit_price_is_minor_units_over_100() {
        let record = make_record("p", 5000, Edition::Team, PriceDimension::DeveloperSeats);
        assert_eq!(unit_price(&record), Decimal::new(50, 0));

        let record = make_record("p2", 4275, Edition::Team, PriceDimension::DeveloperSeats);
        assert_eq!(unit_price(&record), Decimal::new(4275, 2));
    }

    #[test]
    fn yearly_monthly_equivalent_divides_by_12() {
        let record = make_record("p", 60000, Edition::Team, PriceDimension::DeveloperSeats);
        assert_eq!(
            monthly_equivalent(&record, PaymentFrequency::Yearly),
            Decimal::new(50, 0)
        );
        assert_eq!(
            monthly_equivalent(&record, PaymentFrequency::Monthly),
            Decimal::new(600, 0)
        );
    }
}
