//! JSON import and export of invoice documents and their breakdowns.
//!
//! The document shape is flat and camelCase (`companyName`, `fromEmail`,
//! `exchangeRate`, ...). Decimal fields are written as strings and accepted
//! as strings or numbers.

use crate::core::{InvoiceData, InvoiceError, calc};

/// Parse an invoice document.
///
/// Only the shape is checked here; run [`crate::core::validate_invoice`]
/// for the invariants the calculator relies on.
pub fn from_json(input: &str) -> Result<InvoiceData, InvoiceError> {
    let invoice: InvoiceData =
        serde_json::from_str(input).map_err(|e| InvoiceError::Json(e.to_string()))?;
    if invoice.items.is_empty() {
        return Err(InvoiceError::Json(
            "invoice must contain at least one item".into(),
        ));
    }
    tracing::debug!(
        invoice = %invoice.invoice_number,
        items = invoice.items.len(),
        "invoice parsed from JSON"
    );
    Ok(invoice)
}

/// Serialize an invoice document (pretty-printed).
pub fn to_json(invoice: &InvoiceData) -> Result<String, InvoiceError> {
    serde_json::to_string_pretty(invoice).map_err(|e| InvoiceError::Json(e.to_string()))
}

/// Serialize the full calculated breakdown of an invoice (pretty-printed).
pub fn breakdown_to_json(invoice: &InvoiceData) -> Result<String, InvoiceError> {
    serde_json::to_string_pretty(&calc::calculate(invoice))
        .map_err(|e| InvoiceError::Json(e.to_string()))
}
