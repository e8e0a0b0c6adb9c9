//! Payment service - accepts any positive amount
//!
//! No gateway is contacted; a positive amount always yields a receipt.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::result::{Error, Result};

/// Payment service
#[derive(Debug, Default)]
pub struct PaymentService;

impl PaymentService {
    pub fn new() -> Self {
        Self
    }

    /// Take a payment of `amount`
    ///
    /// Zero and negative amounts are rejected; anything else succeeds.
    pub fn process_payment(&self, amount: Decimal) -> Result<PaymentReceipt> {
        if amount <= Decimal::ZERO {
            tracing::warn!(%amount, "payment rejected");
            return Err(Error::InvalidAmount(amount));
        }

        let receipt = PaymentReceipt {
            reference: Uuid::new_v4(),
            amount,
            processed_at: Utc::now(),
        };
        tracing::info!(reference = %receipt.reference, %amount, "payment accepted");
        Ok(receipt)
    }
}

/// Proof that a payment was accepted
#[derive(Debug, Clone, Serialize)]
pub struct PaymentReceipt {
    pub reference: Uuid,
    pub amount: Decimal,
    pub processed_at: DateTime<Utc>,
}
