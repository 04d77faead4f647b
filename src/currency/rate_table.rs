use chrono::NaiveDate;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, info};

/// Base currency of the built-in table
pub const DEFAULT_BASE: &str = "GHS";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurrencyError {
    #[error("Currency '{0}' is not supported.")]
    UnsupportedCurrency(String),
    #[error("Invalid rate {rate} for '{code}': rates must be positive and finite")]
    InvalidRate { code: String, rate: f64 },
    #[error("Base currency '{0}' must be in the table with rate 1.0")]
    MissingBase(String),
    #[error("Currency '{0}' is listed more than once")]
    DuplicateCurrency(String),
}

/// Upper-case and trim a currency code (`" usd "` -> `"USD"`)
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Exchange rates relative to a single base currency
///
/// Uses `BTreeMap` so listing codes is already sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    base: String,
    rates: BTreeMap<String, f64>,
    as_of: Option<NaiveDate>,
}

impl Default for RateTable {
    /// Bank of Ghana mid-rates
    fn default() -> Self {
        let rates = [
            ("GHS", 1.0),
            ("USD", 10.5),
            ("EUR", 12.1166),
            ("GBP", 13.9062),
        ]
        .into_iter()
        .map(|(code, rate)| (code.to_string(), rate))
        .collect();

        Self {
            base: DEFAULT_BASE.to_string(),
            rates,
            as_of: None,
        }
    }
}

impl RateTable {
    /// Build a validated table
    ///
    /// # Errors
    /// - `InvalidRate` if any rate is zero, negative, or not finite
    /// - `MissingBase` if the base currency is absent or its rate is not 1.0
    /// - `DuplicateCurrency` if two codes are equal after normalizing (`usd`, `USD`)
    pub fn new(
        base: &str,
        rates: impl IntoIterator<Item = (String, f64)>,
        as_of: Option<NaiveDate>,
    ) -> Result<Self, CurrencyError> {
        let base = normalize_code(base);
        let mut table = BTreeMap::new();
        for (code, rate) in rates {
            let code = normalize_code(&code);
            if !rate.is_finite() || rate <= 0.0 {
                return Err(CurrencyError::InvalidRate { code, rate });
            }
            if table.contains_key(&code) {
                return Err(CurrencyError::DuplicateCurrency(code));
            }
            table.insert(code, rate);
        }

        if table.get(&base) != Some(&1.0) {
            return Err(CurrencyError::MissingBase(base));
        }

        Ok(Self {
            base,
            rates: table,
            as_of,
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn as_of(&self) -> Option<NaiveDate> {
        self.as_of
    }

    /// Rate of one unit of `code` in the base currency
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(&normalize_code(code)).copied()
    }

    /// Sorted list of supported currency codes
    pub fn currencies(&self) -> Vec<&str> {
        self.rates.keys().map(String::as_str).collect()
    }

    /// Convert `amount` from one currency to another through the base currency
    ///
    /// # Examples
    /// ```
    /// use toolbelt::currency::RateTable;
    ///
    /// let table = RateTable::default();
    /// assert_eq!(table.convert(2.0, "USD", "GHS"), Ok(21.0));
    /// assert!(table.convert(1.0, "USD", "JPY").is_err());
    /// ```
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, CurrencyError> {
        let from_rate = self
            .rate(from)
            .ok_or_else(|| CurrencyError::UnsupportedCurrency(normalize_code(from)))?;
        let to_rate = self
            .rate(to)
            .ok_or_else(|| CurrencyError::UnsupportedCurrency(normalize_code(to)))?;

        let amount_in_base = amount * from_rate;
        let converted = amount_in_base / to_rate;
        debug!(amount, from, to, converted, "converted currency");
        Ok(converted)
    }

    /// Placeholder for refreshing rates from a live exchange-rate API
    ///
    /// Rates are static; the table is left untouched and a notice is returned
    /// for the caller to show.
    pub fn fetch_realtime_rates(&mut self) -> String {
        info!(base = %self.base, "real-time rate fetching is disabled; keeping static rates");
        "This function would fetch real-time rates from an API. For this demo, rates are static."
            .to_string()
    }
}
