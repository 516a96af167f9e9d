//! Editing surface: every edit yields a new [`InvoiceData`] snapshot.
//!
//! This layer keeps the invariants the calculator relies on:
//! - an item billed in the invoice currency has exchange rate 1,
//! - at least one item remains,
//! - numeric form input that does not parse, or is out of range, becomes 0.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::calc::MAX_AMOUNT;
use super::defaults::InvoiceDefaults;
use super::error::InvoiceError;
use super::types::*;

/// A change to one invoice header field.
#[derive(Debug, Clone, PartialEq)]
pub enum InvoiceChange {
    InvoiceNumber(String),
    Date(NaiveDate),
    DueDate(NaiveDate),
    CompanyName(String),
    CompanyLogo(String),
    CompanyDetails(String),
    FromName(String),
    FromEmail(String),
    FromAddress(String),
    ToName(String),
    ToEmail(String),
    ToAddress(String),
    /// Switches the settlement currency; items in the old currency follow it.
    Currency(String),
    DiscountType(DiscountType),
    DiscountValue(Decimal),
    ApplyInvoiceDiscountToDiscountedItems(bool),
    Notes(String),
    Footer(String),
}

impl InvoiceChange {
    /// Map a form field name and its raw input to a typed change.
    pub fn parse(field: &str, raw: &str) -> Result<Self, InvoiceError> {
        let change = match field {
            "invoiceNumber" => Self::InvoiceNumber(raw.to_string()),
            "date" => Self::Date(parse_date(field, raw)?),
            "dueDate" => Self::DueDate(parse_date(field, raw)?),
            "companyName" => Self::CompanyName(raw.to_string()),
            "companyLogo" => Self::CompanyLogo(raw.to_string()),
            "companyDetails" => Self::CompanyDetails(raw.to_string()),
            "fromName" => Self::FromName(raw.to_string()),
            "fromEmail" => Self::FromEmail(raw.to_string()),
            "fromAddress" => Self::FromAddress(raw.to_string()),
            "toName" => Self::ToName(raw.to_string()),
            "toEmail" => Self::ToEmail(raw.to_string()),
            "toAddress" => Self::ToAddress(raw.to_string()),
            "currency" => Self::Currency(raw.trim().to_string()),
            "discountType" => Self::DiscountType(parse_discount_type(raw)?),
            "discountValue" => Self::DiscountValue(coerce_amount(raw)),
            "applyInvoiceDiscountToDiscountedItems" => {
                Self::ApplyInvoiceDiscountToDiscountedItems(parse_flag(field, raw)?)
            }
            "notes" => Self::Notes(raw.to_string()),
            "footer" => Self::Footer(raw.to_string()),
            _ => return Err(InvoiceError::Edit(format!("unknown invoice field '{field}'"))),
        };
        Ok(change)
    }
}

/// A change to one line item field.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemChange {
    Description(String),
    Quantity(u32),
    Price(Decimal),
    /// Moving to the invoice currency resets the exchange rate to 1.
    Currency(String),
    /// Ignored while the item is billed in the invoice currency.
    ExchangeRate(Decimal),
    DiscountType(DiscountType),
    DiscountValue(Decimal),
    TaxRate(Decimal),
}

impl ItemChange {
    /// Map a form field name and its raw input to a typed change.
    ///
    /// Numeric input that does not parse, or is negative, becomes 0.
    pub fn parse(field: &str, raw: &str) -> Result<Self, InvoiceError> {
        let change = match field {
            "description" => Self::Description(raw.to_string()),
            "quantity" => Self::Quantity(coerce_quantity(raw)),
            "price" => Self::Price(coerce_amount(raw)),
            "currency" => Self::Currency(raw.trim().to_string()),
            "exchangeRate" => Self::ExchangeRate(coerce_amount(raw)),
            "discountType" => Self::DiscountType(parse_discount_type(raw)?),
            "discountValue" => Self::DiscountValue(coerce_amount(raw)),
            "taxRate" => Self::TaxRate(coerce_amount(raw)),
            _ => return Err(InvoiceError::Edit(format!("unknown item field '{field}'"))),
        };
        Ok(change)
    }
}

impl InvoiceData {
    /// Append a blank item in the invoice currency.
    pub fn with_item_added(&self, defaults: &InvoiceDefaults) -> Self {
        let mut next = self.clone();
        let item = LineItem::blank(self.currency.clone(), defaults);
        tracing::debug!(invoice = %self.invoice_number, item = %item.id, "item added");
        next.items.push(item);
        next
    }

    /// Remove an item. The last remaining item cannot be removed.
    pub fn with_item_removed(&self, id: &str) -> Result<Self, InvoiceError> {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            return Err(InvoiceError::Edit(format!("no item with id '{id}'")));
        };
        if self.items.len() == 1 {
            tracing::debug!(invoice = %self.invoice_number, item = %id, "refusing to remove last item");
            return Err(InvoiceError::Edit(
                "an invoice must keep at least one line item".into(),
            ));
        }

        let mut next = self.clone();
        next.items.remove(index);
        tracing::debug!(invoice = %self.invoice_number, item = %id, "item removed");
        Ok(next)
    }

    /// Apply a header change.
    pub fn with_change(&self, change: InvoiceChange) -> Self {
        let mut next = self.clone();
        match change {
            InvoiceChange::InvoiceNumber(v) => next.invoice_number = v,
            InvoiceChange::Date(v) => next.date = v,
            InvoiceChange::DueDate(v) => next.due_date = v,
            InvoiceChange::CompanyName(v) => next.company.name = v,
            InvoiceChange::CompanyLogo(v) => next.company.logo = v,
            InvoiceChange::CompanyDetails(v) => next.company.details = v,
            InvoiceChange::FromName(v) => next.from.name = v,
            InvoiceChange::FromEmail(v) => next.from.email = v,
            InvoiceChange::FromAddress(v) => next.from.address = v,
            InvoiceChange::ToName(v) => next.to.name = v,
            InvoiceChange::ToEmail(v) => next.to.email = v,
            InvoiceChange::ToAddress(v) => next.to.address = v,
            InvoiceChange::Currency(code) => {
                tracing::debug!(
                    invoice = %self.invoice_number,
                    from = %self.currency,
                    to = %code,
                    "invoice currency changed"
                );
                for item in &mut next.items {
                    if item.currency == self.currency {
                        item.currency = code.clone();
                    }
                    // Items now billed in the settlement currency carry no conversion.
                    if item.currency == code {
                        item.exchange_rate = Decimal::ONE;
                    }
                }
                next.currency = code;
            }
            InvoiceChange::DiscountType(v) => next.discount_type = v,
            InvoiceChange::DiscountValue(v) => next.discount_value = v,
            InvoiceChange::ApplyInvoiceDiscountToDiscountedItems(v) => {
                next.apply_invoice_discount_to_discounted_items = v
            }
            InvoiceChange::Notes(v) => next.notes = v,
            InvoiceChange::Footer(v) => next.footer = v,
        }
        next
    }

    /// Apply a change to one item.
    pub fn with_item_change(&self, id: &str, change: ItemChange) -> Result<Self, InvoiceError> {
        let mut next = self.clone();
        let invoice_currency = next.currency.clone();
        let item = next
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| InvoiceError::Edit(format!("no item with id '{id}'")))?;

        match change {
            ItemChange::Description(v) => item.description = v,
            ItemChange::Quantity(v) => item.quantity = v,
            ItemChange::Price(v) => item.price = v,
            ItemChange::Currency(code) => {
                if code == invoice_currency {
                    item.exchange_rate = Decimal::ONE;
                }
                item.currency = code;
            }
            ItemChange::ExchangeRate(rate) => {
                if item.currency == invoice_currency {
                    tracing::debug!(item = %id, %rate, "exchange rate ignored for invoice-currency item");
                } else {
                    item.exchange_rate = rate;
                }
            }
            ItemChange::DiscountType(v) => item.discount_type = v,
            ItemChange::DiscountValue(v) => item.discount_value = v,
            ItemChange::TaxRate(v) => item.tax_rate = v,
        }
        Ok(next)
    }
}

/// Parse numeric form input; anything unparsable, negative or above
/// [`MAX_AMOUNT`] becomes 0.
pub fn coerce_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    match Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
        Ok(value) if value < Decimal::ZERO => {
            tracing::debug!(input = %raw, %value, "negative amount coerced to 0");
            Decimal::ZERO
        }
        Ok(value) if value > MAX_AMOUNT => {
            tracing::debug!(input = %raw, %value, "out-of-range amount coerced to 0");
            Decimal::ZERO
        }
        Ok(value) => value,
        Err(_) => {
            tracing::debug!(input = %raw, "unparsable amount coerced to 0");
            Decimal::ZERO
        }
    }
}

/// Parse a quantity; fractions are truncated, anything else invalid becomes 0.
pub fn coerce_quantity(raw: &str) -> u32 {
    let trimmed = raw.trim();
    if let Ok(quantity) = trimmed.parse::<u32>() {
        return quantity;
    }
    coerce_amount(trimmed).trunc().to_u32().unwrap_or(0)
}

fn parse_discount_type(raw: &str) -> Result<DiscountType, InvoiceError> {
    DiscountType::from_code(raw.trim())
        .ok_or_else(|| InvoiceError::Edit(format!("unknown discount type '{raw}'")))
}

fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, InvoiceError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| InvoiceError::Edit(format!("{field}: '{raw}' is not a date: {e}")))
}

fn parse_flag(field: &str, raw: &str) -> Result<bool, InvoiceError> {
    match raw.trim() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" | "" => Ok(false),
        _ => Err(InvoiceError::Edit(format!("{field}: '{raw}' is not a boolean"))),
    }
}
