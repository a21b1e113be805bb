//! Bond repayment calculator shown on listing pages.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MortgageError {
    #[error("deposit of {deposit} exceeds the purchase price of {price}")]
    DepositExceedsPrice { price: f64, deposit: f64 },
    #[error("{field} must be a non-negative number, got {value}")]
    InvalidAmount { field: &'static str, value: f64 },
    #[error("loan term must be at least one year")]
    ZeroTerm,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageInput {
    pub price: f64,
    pub deposit: f64,
    /// Annual interest rate in percent, e.g. `11.75`
    pub annual_rate: f64,
    pub term_years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageQuote {
    pub loan_amount: f64,
    pub monthly_payment: f64,
    pub total_repayment: f64,
    pub total_interest: f64,
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn check_amount(field: &'static str, value: f64) -> Result<(), MortgageError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(MortgageError::InvalidAmount { field, value })
    }
}

/// Amortised monthly repayment: `P·r / (1 − (1 + r)^−n)`.
pub fn calculate(input: &MortgageInput) -> Result<MortgageQuote, MortgageError> {
    check_amount("price", input.price)?;
    check_amount("deposit", input.deposit)?;
    check_amount("annual rate", input.annual_rate)?;
    if input.term_years == 0 {
        return Err(MortgageError::ZeroTerm);
    }
    if input.deposit > input.price {
        return Err(MortgageError::DepositExceedsPrice {
            price: input.price,
            deposit: input.deposit,
        });
    }

    let principal = input.price - input.deposit;
    let months = f64::from(input.term_years) * 12.0;
    let monthly_rate = input.annual_rate / 12.0 / 100.0;

    let monthly_payment = if monthly_rate == 0.0 {
        principal / months
    } else {
        principal * monthly_rate / (1.0 - (1.0 + monthly_rate).powf(-months))
    };
    let total_repayment = monthly_payment * months;

    Ok(MortgageQuote {
        loan_amount: round_cents(principal),
        monthly_payment: round_cents(monthly_payment),
        total_repayment: round_cents(total_repayment),
        total_interest: round_cents(total_repayment - principal),
    })
}
