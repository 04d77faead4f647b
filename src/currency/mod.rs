//! Currency conversion over a static exchange-rate table
//!
//! Every rate is the value of one unit of a currency expressed in the base
//! currency (Ghana cedi by default). Converting goes through the base:
//! `amount * rate[from] / rate[to]`.

mod rate_table;

pub use rate_table::{CurrencyError, DEFAULT_BASE, RateTable, normalize_code};
