//! Money type for representing monetary values.
//!
//! Storefront prices are whole currency units (roubles), so amounts are
//! unsigned integers and every arithmetic step is checked. A total can never
//! go negative and never loses precision to floating point.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    RUB,
    CNY,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "RUB").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::RUB => "RUB",
            Currency::CNY => "CNY",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "₽").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::RUB => "\u{20bd}",
            Currency::CNY => "\u{00a5}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Whether the symbol is written after the amount ("8900 ₽").
    pub fn symbol_after(&self) -> bool {
        matches!(self, Currency::RUB)
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "RUB" => Some(Currency::RUB),
            "CNY" => Some(Currency::CNY),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// `amount` is in whole display units of the currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in whole currency units.
    pub amount: u64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub const fn new(amount: u64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a rouble amount.
    pub const fn rub(amount: u64) -> Self {
        Self::new(amount, Currency::RUB)
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Format as a display string (e.g., "8900 ₽", "$49").
    pub fn display(&self) -> String {
        if self.currency.symbol_after() {
            format!("{} {}", self.amount, self.currency.symbol())
        } else {
            format!("{}{}", self.currency.symbol(), self.amount)
        }
    }

    /// Try to add another Money value.
    ///
    /// Returns None if currencies don't match or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount
            .checked_add(other.amount)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Try to multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: u64) -> Option<Money> {
        self.amount
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values.
    ///
    /// Returns None on overflow or if any value is in a different currency.
    pub fn try_sum<'a>(
        mut iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
