//! Applies a snapshot rate to an amount and formats the result.

use crate::core::error::ConvertError;
use crate::core::rates::RateSnapshot;

/// A single convert action, created per user request.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

impl ConversionRequest {
    /// Builds a request from raw amount text. Fails before any I/O if the
    /// amount is not a number.
    pub fn parse(amount: &str, from: &str, to: &str) -> Result<Self, ConvertError> {
        Ok(ConversionRequest {
            from: from.to_string(),
            to: to.to_string(),
            amount: parse_amount(amount)?,
        })
    }
}

/// Product of a successful conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub converted: f64,
    pub rate_text: String,
}

/// The observable state of the converter. Exactly one is current at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConversionOutcome {
    #[default]
    Empty,
    Loading,
    Success {
        converted: f64,
        rate_text: String,
    },
    Failure(String),
}

impl From<Result<Conversion, ConvertError>> for ConversionOutcome {
    fn from(result: Result<Conversion, ConvertError>) -> Self {
        match result {
            Ok(conversion) => ConversionOutcome::Success {
                converted: conversion.converted,
                rate_text: conversion.rate_text,
            },
            Err(e) => ConversionOutcome::Failure(e.to_string()),
        }
    }
}

pub fn parse_amount(text: &str) -> Result<f64, ConvertError> {
    let amount: f64 = text
        .trim()
        .parse()
        .map_err(|_| ConvertError::InvalidAmount)?;
    if !amount.is_finite() {
        return Err(ConvertError::InvalidAmount);
    }
    Ok(amount)
}

/// Rounds to two decimals; exact ties go to the even cent.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

pub fn rate_text(from: &str, rate: f64, to: &str) -> String {
    format!("1 {from} = {rate:.4} {to}")
}

/// Converts `request` with a snapshot whose base is `request.from`.
pub fn convert(
    request: &ConversionRequest,
    snapshot: &RateSnapshot,
) -> Result<Conversion, ConvertError> {
    let rate = snapshot
        .rate_for(&request.to)
        .ok_or(ConvertError::RateNotFound)?;

    let converted = round_to_cents(request.amount * rate);
    if !converted.is_finite() {
        return Err(ConvertError::OutOfRange);
    }

    Ok(Conversion {
        converted,
        rate_text: rate_text(&request.from, rate, &request.to),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn snapshot_with(base: &str, rates: &[(&str, f64)]) -> RateSnapshot {
        RateSnapshot {
            base_code: base.to_string(),
            rates: rates
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect::<BTreeMap<_, _>>(),
            last_update_unix: 0,
            last_update_utc: String::new(),
            next_update_unix: 0,
            next_update_utc: String::new(),
            result: "success".to_string(),
            documentation: String::new(),
            terms_of_use: String::new(),
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("10"), Ok(10.0));
        assert_eq!(parse_amount(" 2.5 "), Ok(2.5));
        assert_eq!(parse_amount("-3"), Ok(-3.0));
    }

    #[test]
    fn test_parse_amount_rejects_non_numeric() {
        for input in ["", "   ", "abc", "10,5", "1.2.3", "NaN", "inf", "-infinity", "$10"] {
            assert_eq!(
                parse_amount(input),
                Err(ConvertError::InvalidAmount),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_convert_eur_to_usd() {
        let snapshot = snapshot_with("EUR", &[("USD", 1.1)]);
        let request = ConversionRequest::parse("10", "EUR", "USD").unwrap();

        let conversion = convert(&request, &snapshot).unwrap();
        assert_eq!(conversion.converted, 11.0);
        assert_eq!(conversion.rate_text, "1 EUR = 1.1000 USD");

        assert_eq!(
            ConversionOutcome::from(Ok(conversion)),
            ConversionOutcome::Success {
                converted: 11.0,
                rate_text: "1 EUR = 1.1000 USD".to_string(),
            }
        );
    }

    #[test]
    fn test_convert_missing_target_rate() {
        let snapshot = snapshot_with("EUR", &[("GBP", 0.85)]);
        let request = ConversionRequest::parse("10", "EUR", "USD").unwrap();

        let result = convert(&request, &snapshot);
        assert_eq!(result, Err(ConvertError::RateNotFound));
        assert_eq!(
            ConversionOutcome::from(result),
            ConversionOutcome::Failure("Unexpected error: rate not found".to_string())
        );
    }

    #[test]
    fn test_rounding() {
        let snapshot = snapshot_with("EUR", &[("USD", 0.333333)]);
        let request = ConversionRequest::parse("3", "EUR", "USD").unwrap();
        assert_eq!(convert(&request, &snapshot).unwrap().converted, 1.0);

        // Exact binary ties round to the even cent.
        assert_eq!(round_to_cents(0.125), 0.12);
        assert_eq!(round_to_cents(0.375), 0.38);
        assert_eq!(round_to_cents(-0.125), -0.12);
    }

    #[test]
    fn test_convert_overflow_is_failure() {
        let snapshot = snapshot_with("EUR", &[("USD", 10.0)]);
        let request = ConversionRequest::parse("1e308", "EUR", "USD").unwrap();

        let result = convert(&request, &snapshot);
        assert_eq!(result, Err(ConvertError::OutOfRange));
        assert_eq!(
            ConversionOutcome::from(result),
            ConversionOutcome::Failure("Converted amount is out of range".to_string())
        );
    }

    #[test]
    fn test_rate_text_uses_four_decimals() {
        assert_eq!(rate_text("USD", 151.23456, "JPY"), "1 USD = 151.2346 JPY");
        assert_eq!(rate_text("GBP", 1.0, "GBP"), "1 GBP = 1.0000 GBP");
    }

    #[test]
    fn test_convert_is_idempotent() {
        let snapshot = snapshot_with("EUR", &[("USD", 1.0837)]);
        let request = ConversionRequest::parse("42.5", "EUR", "USD").unwrap();

        let first = ConversionOutcome::from(convert(&request, &snapshot));
        let second = ConversionOutcome::from(convert(&request, &snapshot));
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_outcome_is_empty() {
        assert_eq!(ConversionOutcome::default(), ConversionOutcome::Empty);
    }
}
