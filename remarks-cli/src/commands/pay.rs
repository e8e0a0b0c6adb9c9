//! Pay command - take a payment

use std::process::ExitCode;

use anyhow::Result;
use remarks_core::services::PaymentService;

use super::parse_amount;
use crate::output;

pub fn run(amount: &str, json: bool) -> Result<ExitCode> {
    let amount = parse_amount(amount)?;
    let receipt = PaymentService::new().process_payment(amount)?;

    if json {
        output::json(&receipt)?;
    } else {
        output::success("Payment accepted");
        println!("  Reference: {}", receipt.reference);
        println!("  Amount: {:.2}", receipt.amount);
        println!("  Time: {}", receipt.processed_at.format("%Y-%m-%d %H:%M:%S UTC"));
    }

    Ok(ExitCode::SUCCESS)
}
