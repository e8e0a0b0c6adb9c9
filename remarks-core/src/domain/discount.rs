//! Discount tiers

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Orders below this amount get no discount
pub const DISCOUNT_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;

/// Customer tier, derived from a free-form level label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerTier {
    Vip,
    Premium,
    Standard,
}

impl CustomerTier {
    /// Labels match exactly; anything unrecognised is `Standard`
    pub fn from_label(label: &str) -> Self {
        match label {
            "VIP" => CustomerTier::Vip,
            "Premium" => CustomerTier::Premium,
            _ => CustomerTier::Standard,
        }
    }

    pub fn rate(&self) -> Decimal {
        match self {
            CustomerTier::Vip => Decimal::new(15, 2),
            CustomerTier::Premium => Decimal::new(12, 2),
            CustomerTier::Standard => Decimal::new(10, 2),
        }
    }
}

impl fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CustomerTier::Vip => "VIP",
            CustomerTier::Premium => "Premium",
            CustomerTier::Standard => "Standard",
        };
        f.write_str(label)
    }
}

/// Discount for an order of `amount` placed by a customer at `level`
pub fn calculate_discount(level: &str, amount: Decimal) -> Decimal {
    if amount < DISCOUNT_THRESHOLD {
        return Decimal::ZERO;
    }

    let tier = CustomerTier::from_label(level);
    tracing::debug!(%tier, rate = %tier.rate(), "discount rate selected");
    amount * tier.rate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_below_threshold_gets_nothing() {
        assert_eq!(calculate_discount("VIP", dec("99.99")), Decimal::ZERO);
        assert_eq!(calculate_discount("Premium", Decimal::ZERO), Decimal::ZERO);
        assert_eq!(calculate_discount("VIP", dec("-500")), Decimal::ZERO);
    }

    #[test]
    fn test_tier_rates() {
        assert_eq!(calculate_discount("VIP", dec("100")), dec("15"));
        assert_eq!(calculate_discount("VIP", dec("200")), dec("30"));
        assert_eq!(calculate_discount("Premium", dec("200")), dec("24"));
        assert_eq!(calculate_discount("Regular", dec("200")), dec("20"));
        assert_eq!(calculate_discount("", dec("200")), dec("20"));
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert_eq!(CustomerTier::from_label("vip"), CustomerTier::Standard);
        assert_eq!(CustomerTier::from_label("PREMIUM"), CustomerTier::Standard);
        assert_eq!(CustomerTier::from_label("VIP"), CustomerTier::Vip);
    }
}
