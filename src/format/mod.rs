//! Display formatting for amounts, dates and rates.
//!
//! Calculator outputs are unrounded decimals; this is the only place they
//! are rounded, half away from zero to the currency's minor units.

mod date;
mod money;

pub use date::format_date;
pub use money::{format_currency, format_rate};
