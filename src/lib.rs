//! # invoicekit
//!
//! Invoice calculation engine with per-line discounts, GST, multi-currency
//! line items, an invoice-level discount and a GST summary, plus the
//! editing, formatting and print-view layers that sit around it.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! The calculator never rounds; only the display formatter does.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use invoicekit::core::*;
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new("INV-0001", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .add_item(LineItemBuilder::new("Laptop", 1, dec!(1000))
//!         .discount(DiscountType::Percentage, dec!(10))
//!         .tax_rate(dec!(18))
//!         .build())
//!     .build()
//!     .unwrap();
//!
//! let item = &invoice.items[0];
//! assert_eq!(item_discount(item), dec!(100));
//! assert_eq!(item_tax(item), dec!(162));
//! assert_eq!(total(&invoice), dec!(1062));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Document types, calculator, builders, editing, validation, numbering |
//! | `format` (default) | Currency, date and rate formatting |
//! | `render` (default) | Print view model, plain-text rendering, export file name |
//! | `json` | JSON import/export of documents and breakdowns |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "format")]
pub mod format;

#[cfg(feature = "render")]
pub mod render;

#[cfg(feature = "json")]
pub mod json;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
