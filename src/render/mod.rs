//! Printable invoice view and export naming.
//!
//! [`InvoiceView`] is the display model of the print/preview page: every
//! string already formatted, every amount taken from the calculator.
//! [`render_text`] lays it out as plain text.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use invoicekit::core::*;
//! use invoicekit::render::{export_file_name, render_text};
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new("INV-0042", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .add_item(LineItemBuilder::new("Consulting", 2, dec!(100)).build())
//!     .build()
//!     .unwrap();
//!
//! assert!(render_text(&invoice).contains("Total: ₹236.00"));
//! assert_eq!(export_file_name(&invoice), "invoice-INV-0042.pdf");
//! ```

mod text;
mod view;

pub use text::{render_text, render_text_with_defaults};
pub use view::{InvoiceView, ItemRow, PartyView, TotalLine};

use crate::core::InvoiceData;

/// File name of the exported document, e.g. `invoice-INV-0042.pdf`.
///
/// Path separators in the invoice number are replaced by `-`.
pub fn export_file_name(invoice: &InvoiceData) -> String {
    let number: String = invoice
        .invoice_number
        .trim()
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect();
    if number.is_empty() {
        return "invoice.pdf".to_string();
    }
    format!("invoice-{number}.pdf")
}
