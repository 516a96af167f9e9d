//! Core invoice types, the calculation engine, editing and validation.
//!
//! [`calc`] holds the pure calculation functions; everything else builds,
//! edits or checks the [`InvoiceData`] snapshots those functions read.

mod builder;
pub mod calc;
pub mod currencies;
mod defaults;
mod edit;
mod error;
mod numbering;
mod types;
mod validation;

pub use builder::*;
pub use calc::*;
pub use currencies::{currency_label, is_known_currency_code};
pub use defaults::*;
pub use edit::*;
pub use error::*;
pub use numbering::*;
pub use types::*;
pub use validation::*;
