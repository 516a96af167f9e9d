//! Invoice calculation engine.
//!
//! Every function here is a pure read over an invoice snapshot. Two
//! primitives, [`item_discount`] and [`item_tax`], feed all aggregates.
//! Per-item figures stay in the item's own currency; aggregates convert each
//! item once with its own exchange rate. Nothing is rounded.
//!
//! Arithmetic saturates at the `Decimal` range instead of overflowing, so a
//! document with absurd magnitudes yields capped figures rather than a panic.
//! [`crate::core::validate_invoice`] reports values above [`MAX_AMOUNT`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::*;

/// Tax rates reported by [`tax_summary`], ascending.
pub const SUMMARY_TAX_RATES: [Decimal; 3] = [dec!(0), dec!(18), dec!(28)];

/// Largest price, discount value, exchange rate or tax rate accepted from
/// form input and allowed by validation (10¹²).
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);

/// `quantity × price`, in the item's currency.
pub fn item_gross(item: &LineItem) -> Decimal {
    Decimal::from(item.quantity).saturating_mul(item.price)
}

/// Discount of one item, in the item's currency.
///
/// An amount discount never exceeds the item's gross amount.
pub fn item_discount(item: &LineItem) -> Decimal {
    if item.discount_value <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    apply_discount(item.discount_type, item.discount_value, item_gross(item))
}

/// Tax of one item, computed on the discounted amount in the item's currency.
pub fn item_tax(item: &LineItem) -> Decimal {
    item_net(item).saturating_mul(item.tax_rate) / dec!(100)
}

/// Discounted amount plus tax, expressed in the invoice currency.
pub fn item_total(invoice: &InvoiceData, item: &LineItem) -> Decimal {
    let net_total = item_net(item).saturating_add(item_tax(item));
    convert(invoice, item, net_total)
}

/// Sum of discounted item amounts before tax, in invoice currency.
pub fn subtotal(invoice: &InvoiceData) -> Decimal {
    sum(invoice
        .items
        .iter()
        .map(|item| convert(invoice, item, item_net(item))))
}

/// Sum of all item discounts, in invoice currency.
pub fn total_item_discounts(invoice: &InvoiceData) -> Decimal {
    sum(invoice
        .items
        .iter()
        .map(|item| convert(invoice, item, item_discount(item))))
}

/// Invoice-level discount, in invoice currency.
///
/// With `apply_invoice_discount_to_discounted_items` the base is the
/// subtotal; otherwise only the gross amounts of items without their own
/// discount count. An amount discount is clamped to the base.
pub fn invoice_discount(invoice: &InvoiceData) -> Decimal {
    if invoice.discount_value <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let base = if invoice.apply_invoice_discount_to_discounted_items {
        subtotal(invoice)
    } else {
        sum(invoice
            .items
            .iter()
            .filter(|item| !item.has_discount())
            .map(|item| convert(invoice, item, item_gross(item))))
    };

    apply_discount(invoice.discount_type, invoice.discount_value, base)
}

/// Subtotal after the invoice discount.
///
/// Informational only: [`total_tax`] is built from item taxes and does not
/// see the invoice discount.
pub fn taxable_amount(invoice: &InvoiceData) -> Decimal {
    subtotal(invoice).saturating_sub(invoice_discount(invoice))
}

/// Sum of all item taxes, in invoice currency.
pub fn total_tax(invoice: &InvoiceData) -> Decimal {
    sum(invoice
        .items
        .iter()
        .map(|item| convert(invoice, item, item_tax(item))))
}

/// Grand total: subtotal − invoice discount + total tax.
pub fn total(invoice: &InvoiceData) -> Decimal {
    taxable_amount(invoice).saturating_add(total_tax(invoice))
}

/// GST summary over [`SUMMARY_TAX_RATES`].
///
/// Items whose rate is not in the list are left out of every group while
/// still counting towards [`total_tax`].
pub fn tax_summary(invoice: &InvoiceData) -> Vec<TaxSummaryEntry> {
    tax_summary_with_rates(invoice, &SUMMARY_TAX_RATES)
}

/// GST summary over an explicit rate list.
///
/// Entries follow the order of `rates`; rates without items are omitted.
pub fn tax_summary_with_rates(invoice: &InvoiceData, rates: &[Decimal]) -> Vec<TaxSummaryEntry> {
    rates
        .iter()
        .filter_map(|&rate| {
            let mut matching = invoice
                .items
                .iter()
                .filter(|item| item.tax_rate == rate)
                .peekable();
            matching.peek()?;

            let (taxable_amount, tax_amount) = matching.fold(
                (Decimal::ZERO, Decimal::ZERO),
                |(taxable, tax), item| {
                    (
                        taxable.saturating_add(convert(invoice, item, item_net(item))),
                        tax.saturating_add(convert(invoice, item, item_tax(item))),
                    )
                },
            );

            Some(TaxSummaryEntry {
                rate,
                taxable_amount,
                tax_amount,
            })
        })
        .collect()
}

/// Evaluate every calculator function once for display.
pub fn calculate(invoice: &InvoiceData) -> InvoiceBreakdown {
    calculate_with_rates(invoice, &SUMMARY_TAX_RATES)
}

/// [`calculate`] with the GST summary over an explicit rate list.
pub fn calculate_with_rates(invoice: &InvoiceData, rates: &[Decimal]) -> InvoiceBreakdown {
    let items = invoice
        .items
        .iter()
        .map(|item| ItemBreakdown {
            id: item.id.clone(),
            gross: item_gross(item),
            discount: item_discount(item),
            tax: item_tax(item),
            total: item_total(invoice, item),
        })
        .collect();

    InvoiceBreakdown {
        items,
        subtotal: subtotal(invoice),
        total_item_discounts: total_item_discounts(invoice),
        invoice_discount: invoice_discount(invoice),
        taxable_amount: taxable_amount(invoice),
        total_tax: total_tax(invoice),
        total: total(invoice),
        tax_summary: tax_summary_with_rates(invoice, rates),
    }
}

fn item_net(item: &LineItem) -> Decimal {
    item_gross(item).saturating_sub(item_discount(item))
}

fn apply_discount(kind: DiscountType, value: Decimal, base: Decimal) -> Decimal {
    match kind {
        DiscountType::Percentage => base.saturating_mul(value) / dec!(100),
        DiscountType::Amount => value.min(base),
    }
}

/// The single conversion point from item currency to invoice currency.
fn convert(invoice: &InvoiceData, item: &LineItem, amount: Decimal) -> Decimal {
    if invoice.is_foreign(item) {
        amount.saturating_mul(item.exchange_rate)
    } else {
        amount
    }
}

fn sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}
