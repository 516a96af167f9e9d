use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::calc::{self, SUMMARY_TAX_RATES};
use crate::core::{DiscountType, InvoiceData, InvoiceDefaults, LineItem, Party};
use crate::format::{format_currency, format_date, format_rate};

/// Display model of the printable invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceView {
    pub company_name: String,
    /// Logo location, if one is set.
    pub company_logo: Option<String>,
    pub company_details: Vec<String>,
    /// Invoice number prefixed with `#`.
    pub number: String,
    pub date: String,
    pub due_date: String,
    pub from: PartyView,
    pub to: PartyView,
    pub rows: Vec<ItemRow>,
    pub totals: Vec<TotalLine>,
    pub notes: Option<Vec<String>>,
    pub footer: Vec<String>,
}

/// "From" / "To" block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartyView {
    pub name: String,
    pub email: String,
    pub address: Vec<String>,
}

/// One row of the item table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    pub description: String,
    pub quantity: String,
    /// Unit price, item currency.
    pub price: String,
    pub tax_rate: String,
    /// `"10%"`, a formatted amount, or `"-"` without discount.
    pub discount: String,
    /// Quantity × price, item currency.
    pub gross: String,
    /// `"-₹100.00"` when the item has a discount.
    pub discount_amount: Option<String>,
    /// Item tax when the rate is above zero, item currency.
    pub tax_amount: Option<String>,
    /// Item total, invoice currency.
    pub total: String,
}

/// One line of the totals block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalLine {
    pub label: String,
    /// Secondary text under the label.
    pub note: Option<String>,
    pub amount: String,
}

impl TotalLine {
    fn new(label: impl Into<String>, amount: String) -> Self {
        Self {
            label: label.into(),
            note: None,
            amount,
        }
    }
}

impl InvoiceView {
    /// View with the GST summary over [`SUMMARY_TAX_RATES`].
    pub fn new(invoice: &InvoiceData) -> Self {
        Self::with_summary_rates(invoice, &SUMMARY_TAX_RATES)
    }

    /// View with the GST summary over `defaults.summary_rates`.
    pub fn with_defaults(invoice: &InvoiceData, defaults: &InvoiceDefaults) -> Self {
        Self::with_summary_rates(invoice, &defaults.summary_rates)
    }

    pub fn with_summary_rates(invoice: &InvoiceData, rates: &[Decimal]) -> Self {
        let rows: Vec<ItemRow> = invoice
            .items
            .iter()
            .map(|item| item_row(invoice, item))
            .collect();
        let totals = totals(invoice, rates);

        tracing::trace!(
            invoice = %invoice.invoice_number,
            rows = rows.len(),
            totals = totals.len(),
            "built invoice view"
        );

        let notes = (!invoice.notes.trim().is_empty()).then(|| lines(&invoice.notes));

        Self {
            company_name: invoice.company.name.clone(),
            company_logo: (!invoice.company.logo.is_empty()).then(|| invoice.company.logo.clone()),
            company_details: lines(&invoice.company.details),
            number: format!("#{}", invoice.invoice_number),
            date: format_date(invoice.date),
            due_date: format_date(invoice.due_date),
            from: party_view(&invoice.from),
            to: party_view(&invoice.to),
            rows,
            totals,
            notes,
            footer: lines(&invoice.footer),
        }
    }
}

fn item_row(invoice: &InvoiceData, item: &LineItem) -> ItemRow {
    let discount = if item.has_discount() {
        match item.discount_type {
            DiscountType::Percentage => format_rate(item.discount_value),
            DiscountType::Amount => format_currency(item.discount_value, &item.currency),
        }
    } else {
        "-".to_string()
    };

    ItemRow {
        description: item.description.clone(),
        quantity: item.quantity.to_string(),
        price: format_currency(item.price, &item.currency),
        tax_rate: format_rate(item.tax_rate),
        discount,
        gross: format_currency(calc::item_gross(item), &item.currency),
        discount_amount: item
            .has_discount()
            .then(|| format!("-{}", format_currency(calc::item_discount(item), &item.currency))),
        tax_amount: (item.tax_rate > Decimal::ZERO)
            .then(|| format_currency(calc::item_tax(item), &item.currency)),
        total: format_currency(calc::item_total(invoice, item), &invoice.currency),
    }
}

fn totals(invoice: &InvoiceData, rates: &[Decimal]) -> Vec<TotalLine> {
    let currency = invoice.currency.as_str();
    let mut out = vec![TotalLine::new(
        "Subtotal",
        format_currency(calc::subtotal(invoice), currency),
    )];

    let item_discounts = calc::total_item_discounts(invoice);
    if item_discounts > Decimal::ZERO {
        out.push(TotalLine::new(
            "Item Discounts",
            format!("-{}", format_currency(item_discounts, currency)),
        ));
    }

    if invoice.discount_value > Decimal::ZERO {
        let label = match invoice.discount_type {
            DiscountType::Percentage => {
                format!("Invoice Discount ({})", format_rate(invoice.discount_value))
            }
            DiscountType::Amount => "Invoice Discount".to_string(),
        };
        out.push(TotalLine {
            label,
            note: (!invoice.apply_invoice_discount_to_discounted_items)
                .then(|| "Applied only to non-discounted items".to_string()),
            amount: format!(
                "-{}",
                format_currency(calc::invoice_discount(invoice), currency)
            ),
        });
    }

    for entry in calc::tax_summary_with_rates(invoice, rates) {
        out.push(TotalLine::new(
            format!("GST {}", format_rate(entry.rate)),
            format_currency(entry.tax_amount, currency),
        ));
    }

    out.push(TotalLine::new(
        "Total",
        format_currency(calc::total(invoice), currency),
    ));
    out
}

fn party_view(party: &Party) -> PartyView {
    PartyView {
        name: party.name.clone(),
        email: party.email.clone(),
        address: lines(&party.address),
    }
}

fn lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
