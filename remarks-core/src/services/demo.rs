//! Demo service - the annotated walkthrough
//!
//! Creates a sample user and prices a sample order, returning both instead
//! of printing them so the caller decides how to present the result.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::result::Result;
use crate::domain::{calculate_discount, create_user, CustomerTier, User};

pub const DEMO_NAME: &str = "John";
pub const DEMO_EMAIL: &str = "john@example.com";
pub const DEMO_PASSWORD: &str = "password123";
pub const DEMO_LEVEL: &str = "VIP";

/// Order amount used for the demo discount
pub fn demo_amount() -> Decimal {
    Decimal::new(200, 0)
}

/// Everything the demo produced
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub user: User,
    pub level: String,
    pub tier: CustomerTier,
    pub amount: Decimal,
    pub discount: Decimal,
}

/// Demo service
#[derive(Debug, Default)]
pub struct DemoService;

impl DemoService {
    pub fn new() -> Self {
        Self
    }

    /// Run the walkthrough; a failed user creation stops it early
    pub fn run(&self) -> Result<DemoReport> {
        let user = create_user(DEMO_NAME, DEMO_EMAIL, DEMO_PASSWORD)?;
        tracing::info!(name = %user.name, "demo user created");

        let amount = demo_amount();
        let discount = calculate_discount(DEMO_LEVEL, amount);

        Ok(DemoReport {
            user,
            level: DEMO_LEVEL.to_string(),
            tier: CustomerTier::from_label(DEMO_LEVEL),
            amount,
            discount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_report() {
        let report = DemoService::new().run().unwrap();
        assert_eq!(report.user.name, "John");
        assert_eq!(report.user.email, "john@example.com");
        assert_eq!(report.tier, CustomerTier::Vip);
        assert_eq!(report.discount, Decimal::new(30, 0));
    }
}
