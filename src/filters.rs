use askama::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::borrow::Borrow;

// Custom template filters for money and timestamps, used as `|money` etc.

pub fn money(amount: impl Borrow<Decimal>) -> Result<String> {
    Ok(format!("${:.2}", amount.borrow().round_dp(2)))
}

pub fn datetime(value: &DateTime<Utc>) -> Result<String> {
    Ok(value.format("%b %e, %Y %H:%M").to_string())
}

pub fn date(value: &DateTime<Utc>) -> Result<String> {
    Ok(value.format("%b %e, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_always_shows_two_decimals() {
        assert_eq!(money(&"9.9".parse().unwrap()).unwrap(), "$9.90");
        assert_eq!(money(&"0".parse().unwrap()).unwrap(), "$0.00");
        assert_eq!(money(&"1234.567".parse().unwrap()).unwrap(), "$1234.57");
    }
}
