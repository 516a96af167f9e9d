use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::calc::SUMMARY_TAX_RATES;

/// Defaults applied to new invoices and new line items.
///
/// Deserializable so a host can load it from its own configuration file;
/// missing fields fall back to [`InvoiceDefaults::default`].
///
/// ```
/// use invoicekit::core::InvoiceDefaults;
/// use rust_decimal_macros::dec;
///
/// let defaults = InvoiceDefaults::default();
/// assert_eq!(defaults.currency, "INR");
/// assert_eq!(defaults.tax_rate, dec!(18));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvoiceDefaults {
    /// Invoice settlement currency.
    pub currency: String,
    /// GST rate given to new line items.
    pub tax_rate: Decimal,
    /// Due date offset from the issue date, in days.
    pub due_in_days: u32,
    /// Footer text of new invoices.
    pub footer: String,
    /// Prefix for generated invoice numbers.
    pub number_prefix: String,
    /// Rates reported in the GST summary.
    pub summary_rates: Vec<Decimal>,
    /// Whether the invoice discount also covers items with their own discount.
    pub apply_invoice_discount_to_discounted_items: bool,
}

impl Default for InvoiceDefaults {
    fn default() -> Self {
        Self {
            currency: "INR".to_string(),
            tax_rate: dec!(18),
            due_in_days: 30,
            footer: "Thank you for your business!".to_string(),
            number_prefix: "INV-".to_string(),
            summary_rates: SUMMARY_TAX_RATES.to_vec(),
            apply_invoice_discount_to_discounted_items: true,
        }
    }
}
