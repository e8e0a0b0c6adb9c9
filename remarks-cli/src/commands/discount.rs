//! Discount command - price an order for a customer level

use std::process::ExitCode;

use anyhow::Result;
use remarks_core::domain::{calculate_discount, DISCOUNT_THRESHOLD};
use remarks_core::CustomerTier;
use rust_decimal::Decimal;

use super::parse_amount;
use crate::output;

pub fn run(level: &str, amount: &str, json: bool) -> Result<ExitCode> {
    let amount = parse_amount(amount)?;
    let tier = CustomerTier::from_label(level);
    let discount = calculate_discount(level, amount);

    if json {
        output::json(&serde_json::json!({
            "level": level,
            "tier": tier,
            "amount": amount,
            "discount": discount,
            "total": amount - discount,
        }))?;
        return Ok(ExitCode::SUCCESS);
    }

    if amount < DISCOUNT_THRESHOLD {
        println!("Orders under {} get no discount", DISCOUNT_THRESHOLD);
    } else {
        let percent = (tier.rate() * Decimal::ONE_HUNDRED).normalize();
        println!("Tier: {} ({}%)", tier, percent);
    }
    println!("Discount: {:.2}", discount);
    println!("Total: {:.2}", amount - discount);
    Ok(ExitCode::SUCCESS)
}
