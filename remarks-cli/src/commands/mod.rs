//! CLI command implementations

pub mod demo;
pub mod discount;
pub mod notify;
pub mod pay;
pub mod scan;
pub mod tags;
pub mod upper;
pub mod user;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use remarks_core::RemarksContext;
use rust_decimal::Decimal;

/// Get the remarks directory from environment or default
pub fn get_remarks_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("REMARKS_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".remarks"))
        .ok_or_else(|| anyhow!("Could not find home directory; set REMARKS_DIR"))
}

/// Build the remarks context from the settings directory
///
/// The directory is not created; a missing settings file means defaults.
pub fn get_context() -> Result<RemarksContext> {
    let remarks_dir = get_remarks_dir()?;
    RemarksContext::new(&remarks_dir)
        .with_context(|| format!("Failed to load settings from {}", remarks_dir.display()))
}

/// Parse a decimal amount given on the command line
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    raw.trim()
        .parse()
        .map_err(|_| anyhow!("Invalid amount: {}", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 19.99 ").unwrap(), Decimal::new(1999, 2));
        assert_eq!(parse_amount("-5").unwrap(), Decimal::new(-5, 0));
        assert!(parse_amount("ten").is_err());
    }
}
