use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The invoice document: header, parties, line items and invoice-level discount.
///
/// Every derived amount is computed from a snapshot of this value by the
/// functions in [`crate::core::calc`]; nothing here is cached.
///
/// Serialized flat: the company and party blocks appear as `companyName`,
/// `fromEmail`, `toAddress`, and so on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FlatInvoice", into = "FlatInvoice")]
pub struct InvoiceData {
    /// Invoice number, also used to name the exported file.
    pub invoice_number: String,
    /// Issue date.
    pub date: NaiveDate,
    /// Payment due date.
    pub due_date: NaiveDate,
    /// Issuing company shown in the print header.
    pub company: Company,
    /// Sender block ("From").
    pub from: Party,
    /// Recipient block ("To").
    pub to: Party,
    /// Billable rows in display order. Never empty once built.
    pub items: Vec<LineItem>,
    /// Settlement currency; every aggregate is expressed in it.
    pub currency: String,
    /// Invoice-level discount kind.
    pub discount_type: DiscountType,
    /// Invoice-level discount value, interpreted per `discount_type`.
    pub discount_value: Decimal,
    /// When false, the invoice discount is based only on items without their own discount.
    pub apply_invoice_discount_to_discounted_items: bool,
    /// Free text printed below the totals.
    pub notes: String,
    /// Free text printed at the bottom of the page.
    pub footer: String,
}

impl InvoiceData {
    /// Look up a line item by id.
    pub fn item(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// True if the item is billed in a currency other than the invoice currency.
    pub fn is_foreign(&self, item: &LineItem) -> bool {
        item.currency != self.currency
    }
}

/// One billable row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Opaque identifier, stable for the item's lifetime.
    pub id: String,
    pub description: String,
    pub quantity: u32,
    /// Unit price in the item's own currency.
    pub price: Decimal,
    /// ISO 4217 code of `price`.
    pub currency: String,
    /// Multiplier from the item currency into the invoice currency.
    /// Exactly 1 whenever `currency` equals the invoice currency.
    pub exchange_rate: Decimal,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
    /// Flat GST percentage, applied after the item discount.
    pub tax_rate: Decimal,
}

impl LineItem {
    /// True if the item carries its own discount.
    pub fn has_discount(&self) -> bool {
        self.discount_value > Decimal::ZERO
    }
}

/// How a discount value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// `discount_value` is a percentage of the base.
    #[default]
    Percentage,
    /// `discount_value` is an absolute amount, clamped to the base.
    Amount,
}

impl DiscountType {
    /// Form value used by the editing surface.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::Amount => "amount",
        }
    }

    /// Parse from the form value.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "percentage" => Some(Self::Percentage),
            "amount" => Some(Self::Amount),
            _ => None,
        }
    }
}

/// Wire form of [`InvoiceData`].
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FlatInvoice {
    invoice_number: String,
    date: NaiveDate,
    due_date: NaiveDate,
    #[serde(default)]
    company_name: String,
    #[serde(default)]
    company_logo: String,
    #[serde(default)]
    company_details: String,
    #[serde(default)]
    from_name: String,
    #[serde(default)]
    from_email: String,
    #[serde(default)]
    from_address: String,
    #[serde(default)]
    to_name: String,
    #[serde(default)]
    to_email: String,
    #[serde(default)]
    to_address: String,
    items: Vec<LineItem>,
    #[serde(default)]
    notes: String,
    currency: String,
    #[serde(default)]
    footer: String,
    #[serde(default)]
    discount_type: DiscountType,
    #[serde(default)]
    discount_value: Decimal,
    #[serde(default = "apply_to_discounted_default")]
    apply_invoice_discount_to_discounted_items: bool,
}

fn apply_to_discounted_default() -> bool {
    true
}

impl From<FlatInvoice> for InvoiceData {
    fn from(flat: FlatInvoice) -> Self {
        Self {
            invoice_number: flat.invoice_number,
            date: flat.date,
            due_date: flat.due_date,
            company: Company {
                name: flat.company_name,
                logo: flat.company_logo,
                details: flat.company_details,
            },
            from: Party {
                name: flat.from_name,
                email: flat.from_email,
                address: flat.from_address,
            },
            to: Party {
                name: flat.to_name,
                email: flat.to_email,
                address: flat.to_address,
            },
            items: flat.items,
            currency: flat.currency,
            discount_type: flat.discount_type,
            discount_value: flat.discount_value,
            apply_invoice_discount_to_discounted_items: flat
                .apply_invoice_discount_to_discounted_items,
            notes: flat.notes,
            footer: flat.footer,
        }
    }
}

impl From<InvoiceData> for FlatInvoice {
    fn from(invoice: InvoiceData) -> Self {
        Self {
            invoice_number: invoice.invoice_number,
            date: invoice.date,
            due_date: invoice.due_date,
            company_name: invoice.company.name,
            company_logo: invoice.company.logo,
            company_details: invoice.company.details,
            from_name: invoice.from.name,
            from_email: invoice.from.email,
            from_address: invoice.from.address,
            to_name: invoice.to.name,
            to_email: invoice.to.email,
            to_address: invoice.to.address,
            items: invoice.items,
            notes: invoice.notes,
            currency: invoice.currency,
            footer: invoice.footer,
            discount_type: invoice.discount_type,
            discount_value: invoice.discount_value,
            apply_invoice_discount_to_discounted_items: invoice
                .apply_invoice_discount_to_discounted_items,
        }
    }
}

/// Issuing company header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    /// Logo location (path or URL). Display only.
    pub logo: String,
    /// Multi-line registration details (GSTIN, state, ...).
    pub details: String,
}

/// Sender or recipient block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub name: String,
    pub email: String,
    /// Multi-line postal address.
    pub address: String,
}

/// One entry of the GST summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxSummaryEntry {
    /// Tax rate percentage.
    pub rate: Decimal,
    /// Net amount (after item discounts) of all items at this rate, in invoice currency.
    pub taxable_amount: Decimal,
    /// Tax of all items at this rate, in invoice currency.
    pub tax_amount: Decimal,
}

/// Per-item figures of a [`InvoiceBreakdown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBreakdown {
    pub id: String,
    /// `quantity × price`, item currency.
    pub gross: Decimal,
    /// Item discount, item currency.
    pub discount: Decimal,
    /// Item tax, item currency.
    pub tax: Decimal,
    /// Net total including tax, invoice currency.
    pub total: Decimal,
}

/// Every derived figure of one invoice snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceBreakdown {
    pub items: Vec<ItemBreakdown>,
    pub subtotal: Decimal,
    pub total_item_discounts: Decimal,
    pub invoice_discount: Decimal,
    pub taxable_amount: Decimal,
    pub total_tax: Decimal,
    pub total: Decimal,
    pub tax_summary: Vec<TaxSummaryEntry>,
}
