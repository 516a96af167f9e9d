use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::defaults::InvoiceDefaults;
use super::error::InvoiceError;
use super::types::*;
use super::validation;

/// Builder for constructing valid invoices.
///
/// ```
/// use invoicekit::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let invoice = InvoiceBuilder::new("INV-0001", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
///     .from(Party { name: "Pranay Enterprises".into(), ..Default::default() })
///     .add_item(LineItemBuilder::new("Consulting", 2, dec!(100)).tax_rate(dec!(18)).build())
///     .build()
///     .unwrap();
///
/// assert_eq!(invoicekit::core::total(&invoice), dec!(236));
/// ```
pub struct InvoiceBuilder {
    invoice_number: String,
    date: NaiveDate,
    due_date: NaiveDate,
    company: Company,
    from: Party,
    to: Party,
    items: Vec<LineItem>,
    currency: String,
    discount_type: DiscountType,
    discount_value: Decimal,
    apply_invoice_discount_to_discounted_items: bool,
    notes: String,
    footer: String,
}

impl InvoiceBuilder {
    pub fn new(invoice_number: impl Into<String>, date: NaiveDate) -> Self {
        Self::from_defaults(invoice_number, date, &InvoiceDefaults::default())
    }

    /// Start from host-supplied defaults (currency, due date offset, footer, discount policy).
    pub fn from_defaults(
        invoice_number: impl Into<String>,
        date: NaiveDate,
        defaults: &InvoiceDefaults,
    ) -> Self {
        let due_date = date
            .checked_add_days(Days::new(u64::from(defaults.due_in_days)))
            .unwrap_or(date);
        Self {
            invoice_number: invoice_number.into(),
            date,
            due_date,
            company: Company::default(),
            from: Party::default(),
            to: Party::default(),
            items: Vec::new(),
            currency: defaults.currency.clone(),
            discount_type: DiscountType::Percentage,
            discount_value: Decimal::ZERO,
            apply_invoice_discount_to_discounted_items: defaults
                .apply_invoice_discount_to_discounted_items,
            notes: String::new(),
            footer: defaults.footer.clone(),
        }
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = date;
        self
    }

    pub fn company(mut self, company: Company) -> Self {
        self.company = company;
        self
    }

    pub fn from(mut self, party: Party) -> Self {
        self.from = party;
        self
    }

    pub fn to(mut self, party: Party) -> Self {
        self.to = party;
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into();
        self
    }

    pub fn add_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    /// Invoice-level discount.
    pub fn discount(mut self, kind: DiscountType, value: Decimal) -> Self {
        self.discount_type = kind;
        self.discount_value = value;
        self
    }

    pub fn apply_invoice_discount_to_discounted_items(mut self, apply: bool) -> Self {
        self.apply_invoice_discount_to_discounted_items = apply;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }

    /// Build the invoice and run validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<InvoiceData, InvoiceError> {
        let invoice = self.build_unchecked()?;

        let errors = validation::validate_invoice(&invoice);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            tracing::debug!(
                invoice = %invoice.invoice_number,
                problems = errors.len(),
                "invoice rejected by validation"
            );
            return Err(InvoiceError::Validation(msg));
        }

        Ok(invoice)
    }

    /// Build without validation, e.g. for importing external documents.
    /// Still refuses an empty item list.
    pub fn build_unchecked(self) -> Result<InvoiceData, InvoiceError> {
        if self.items.is_empty() {
            return Err(InvoiceError::Builder(
                "at least one line item is required".into(),
            ));
        }

        // Input limits to prevent abuse
        if self.items.len() > 10_000 {
            return Err(InvoiceError::Builder(
                "invoice cannot have more than 10,000 line items".into(),
            ));
        }
        if self.invoice_number.len() > 200 {
            return Err(InvoiceError::Builder(
                "invoice number cannot exceed 200 characters".into(),
            ));
        }

        Ok(InvoiceData {
            invoice_number: self.invoice_number,
            date: self.date,
            due_date: self.due_date,
            company: self.company,
            from: self.from,
            to: self.to,
            items: self.items,
            currency: self.currency,
            discount_type: self.discount_type,
            discount_value: self.discount_value,
            apply_invoice_discount_to_discounted_items: self
                .apply_invoice_discount_to_discounted_items,
            notes: self.notes,
            footer: self.footer,
        })
    }
}

/// Builder for LineItem.
pub struct LineItemBuilder {
    id: Option<String>,
    description: String,
    quantity: u32,
    price: Decimal,
    currency: String,
    exchange_rate: Decimal,
    discount_type: DiscountType,
    discount_value: Decimal,
    tax_rate: Decimal,
}

impl LineItemBuilder {
    /// New item in the default currency with exchange rate 1, no discount and the default GST rate.
    pub fn new(description: impl Into<String>, quantity: u32, price: Decimal) -> Self {
        let defaults = InvoiceDefaults::default();
        Self {
            id: None,
            description: description.into(),
            quantity,
            price,
            currency: defaults.currency,
            exchange_rate: Decimal::ONE,
            discount_type: DiscountType::Percentage,
            discount_value: Decimal::ZERO,
            tax_rate: defaults.tax_rate,
        }
    }

    /// Fixed id instead of a generated UUID.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into();
        self
    }

    pub fn exchange_rate(mut self, rate: Decimal) -> Self {
        self.exchange_rate = rate;
        self
    }

    pub fn discount(mut self, kind: DiscountType, value: Decimal) -> Self {
        self.discount_type = kind;
        self.discount_value = value;
        self
    }

    pub fn tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = rate;
        self
    }

    pub fn build(self) -> LineItem {
        LineItem {
            id: self.id.unwrap_or_else(new_item_id),
            description: self.description,
            quantity: self.quantity,
            price: self.price,
            currency: self.currency,
            exchange_rate: self.exchange_rate,
            discount_type: self.discount_type,
            discount_value: self.discount_value,
            tax_rate: self.tax_rate,
        }
    }
}

impl LineItem {
    /// The row appended by "add item": quantity 1, price 0, the given
    /// currency at rate 1, 0% discount and the default GST rate.
    pub fn blank(currency: impl Into<String>, defaults: &InvoiceDefaults) -> Self {
        LineItemBuilder::new("", 1, Decimal::ZERO)
            .currency(currency)
            .tax_rate(defaults.tax_rate)
            .build()
    }
}

fn new_item_id() -> String {
    Uuid::new_v4().to_string()
}
