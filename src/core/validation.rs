use std::collections::HashSet;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::calc::{MAX_AMOUNT, SUMMARY_TAX_RATES};
use super::currencies::is_known_currency_code;
use super::error::ValidationError;
use super::types::*;

/// Check the invariants the calculator trusts but never enforces.
/// Returns all problems found (not just the first).
pub fn validate_invoice(invoice: &InvoiceData) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if invoice.invoice_number.trim().is_empty() {
        errors.push(ValidationError::new(
            "invoiceNumber",
            "invoice number must not be empty",
        ));
    }

    if invoice.due_date < invoice.date {
        errors.push(ValidationError::new(
            "dueDate",
            format!(
                "due date {} is before issue date {}",
                invoice.due_date, invoice.date
            ),
        ));
    }

    validate_currency(&invoice.currency, "currency", &mut errors);

    if invoice.discount_value < Decimal::ZERO {
        errors.push(ValidationError::new(
            "discountValue",
            "invoice discount must not be negative",
        ));
    }
    if invoice.discount_type == DiscountType::Percentage && invoice.discount_value > dec!(100) {
        errors.push(ValidationError::new(
            "discountValue",
            "invoice discount percentage must not exceed 100",
        ));
    }
    check_magnitude(invoice.discount_value, "discountValue", &mut errors);

    if invoice.items.is_empty() {
        errors.push(ValidationError::new(
            "items",
            "invoice must have at least one line item",
        ));
    }

    let mut seen = HashSet::new();
    for (i, item) in invoice.items.iter().enumerate() {
        if !seen.insert(item.id.as_str()) {
            errors.push(ValidationError::new(
                format!("items[{i}].id"),
                format!("duplicate item id '{}'", item.id),
            ));
        }
        validate_item(invoice, item, i, &mut errors);
    }

    errors
}

/// Ids of items whose tax rate is not one of [`SUMMARY_TAX_RATES`].
///
/// Their tax counts towards the total but appears in no summary group.
pub fn summary_gaps(invoice: &InvoiceData) -> Vec<&str> {
    summary_gaps_with_rates(invoice, &SUMMARY_TAX_RATES)
}

/// Ids of items whose tax rate is not in `rates`.
pub fn summary_gaps_with_rates<'a>(invoice: &'a InvoiceData, rates: &[Decimal]) -> Vec<&'a str> {
    invoice
        .items
        .iter()
        .filter(|item| !rates.contains(&item.tax_rate))
        .map(|item| item.id.as_str())
        .collect()
}

fn validate_item(
    invoice: &InvoiceData,
    item: &LineItem,
    index: usize,
    errors: &mut Vec<ValidationError>,
) {
    let prefix = format!("items[{index}]");

    validate_currency(&item.currency, &format!("{prefix}.currency"), errors);

    if invoice.is_foreign(item) {
        if item.exchange_rate <= Decimal::ZERO {
            errors.push(ValidationError::new(
                format!("{prefix}.exchangeRate"),
                format!(
                    "exchange rate from {} to {} must be positive",
                    item.currency, invoice.currency
                ),
            ));
        }
        check_magnitude(item.exchange_rate, &format!("{prefix}.exchangeRate"), errors);
    } else if item.exchange_rate != Decimal::ONE {
        errors.push(ValidationError::new(
            format!("{prefix}.exchangeRate"),
            format!(
                "exchange rate must be 1 for items in the invoice currency, got {}",
                item.exchange_rate
            ),
        ));
    }

    if item.price < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.price"),
            "price must not be negative",
        ));
    }
    check_magnitude(item.price, &format!("{prefix}.price"), errors);

    if item.discount_value < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.discountValue"),
            "discount must not be negative",
        ));
    }
    if item.discount_type == DiscountType::Percentage && item.discount_value > dec!(100) {
        errors.push(ValidationError::new(
            format!("{prefix}.discountValue"),
            "discount percentage must not exceed 100",
        ));
    }
    check_magnitude(item.discount_value, &format!("{prefix}.discountValue"), errors);

    if item.tax_rate < Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.taxRate"),
            "tax rate must not be negative",
        ));
    }
    check_magnitude(item.tax_rate, &format!("{prefix}.taxRate"), errors);
}

fn check_magnitude(value: Decimal, field: &str, errors: &mut Vec<ValidationError>) {
    if value > MAX_AMOUNT {
        errors.push(ValidationError::new(
            field,
            format!("{value} exceeds the maximum of {MAX_AMOUNT}"),
        ));
    }
}

fn validate_currency(code: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if code.trim().is_empty() {
        errors.push(ValidationError::new(field, "currency code must not be empty"));
    } else if code.len() != 3 {
        errors.push(ValidationError::new(
            field,
            "currency code must be 3 characters (ISO 4217)",
        ));
    } else if !is_known_currency_code(code) {
        errors.push(ValidationError::new(
            field,
            format!("currency code '{code}' is not a known ISO 4217 code"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::*;
    use chrono::NaiveDate;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn invoice(items: Vec<LineItem>) -> InvoiceData {
        let mut builder = InvoiceBuilder::new("INV-0001", test_date());
        for item in items {
            builder = builder.add_item(item);
        }
        builder.build_unchecked().unwrap()
    }

    fn fields(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn huge_amounts_are_reported() {
        let huge = Decimal::from_scientific("1e20").unwrap();
        let mut inv = invoice(vec![
            LineItemBuilder::new("Bulk", u32::MAX, huge)
                .currency("USD")
                .exchange_rate(huge)
                .tax_rate(huge)
                .discount(DiscountType::Amount, huge)
                .build(),
        ]);
        inv.discount_type = DiscountType::Amount;
        inv.discount_value = huge;

        let errors = validate_invoice(&inv);
        assert_eq!(
            fields(&errors),
            vec![
                "discountValue",
                "items[0].exchangeRate",
                "items[0].price",
                "items[0].discountValue",
                "items[0].taxRate",
            ]
        );
        assert!(errors[2].message.contains("exceeds the maximum"));
    }

    #[test]
    fn amounts_at_the_limit_are_accepted() {
        let inv = invoice(vec![LineItemBuilder::new("Plant", 1, MAX_AMOUNT).build()]);
        assert!(validate_invoice(&inv).is_empty());
    }

    #[test]
    fn gaps_against_configured_rates() {
        let inv = invoice(vec![
            LineItemBuilder::new("A", 1, dec!(10)).id("a").tax_rate(dec!(12)).build(),
            LineItemBuilder::new("B", 1, dec!(10)).id("b").tax_rate(dec!(5)).build(),
        ]);
        assert_eq!(summary_gaps(&inv), vec!["a", "b"]);
        assert_eq!(summary_gaps_with_rates(&inv, &[dec!(5), dec!(12)]), Vec::<&str>::new());
        assert_eq!(summary_gaps_with_rates(&inv, &[dec!(12)]), vec!["b"]);
    }

    #[test]
    fn valid_invoice() {
        let inv = invoice(vec![
            LineItemBuilder::new("Chair", 4, dec!(1500)).build(),
            LineItemBuilder::new("Import duty", 1, dec!(20))
                .currency("USD")
                .exchange_rate(dec!(83.2))
                .tax_rate(dec!(0))
                .build(),
        ]);
        assert!(validate_invoice(&inv).is_empty());
    }

    #[test]
    fn same_currency_rate_must_be_one() {
        let inv = invoice(vec![
            LineItemBuilder::new("Chair", 1, dec!(10))
                .exchange_rate(dec!(1.5))
                .build(),
        ]);
        assert_eq!(fields(&validate_invoice(&inv)), vec!["items[0].exchangeRate"]);
    }

    #[test]
    fn foreign_rate_must_be_positive() {
        let inv = invoice(vec![
            LineItemBuilder::new("Chair", 1, dec!(10))
                .currency("EUR")
                .exchange_rate(dec!(0))
                .build(),
        ]);
        assert_eq!(fields(&validate_invoice(&inv)), vec!["items[0].exchangeRate"]);
    }

    #[test]
    fn unknown_currency() {
        let inv = invoice(vec![
            LineItemBuilder::new("Chair", 1, dec!(10))
                .currency("XYZ")
                .exchange_rate(dec!(2))
                .build(),
        ]);
        let errors = validate_invoice(&inv);
        assert_eq!(fields(&errors), vec!["items[0].currency"]);
        assert!(errors[0].message.contains("XYZ"));
    }

    #[test]
    fn duplicate_ids() {
        let inv = invoice(vec![
            LineItemBuilder::new("A", 1, dec!(10)).id("row").build(),
            LineItemBuilder::new("B", 1, dec!(10)).id("row").build(),
        ]);
        assert_eq!(fields(&validate_invoice(&inv)), vec!["items[1].id"]);
    }

    #[test]
    fn negative_and_oversized_values() {
        let mut inv = invoice(vec![
            LineItemBuilder::new("A", 1, dec!(10))
                .discount(DiscountType::Percentage, dec!(120))
                .tax_rate(dec!(-1))
                .build(),
        ]);
        inv.discount_value = dec!(-3);
        assert_eq!(
            fields(&validate_invoice(&inv)),
            vec!["discountValue", "items[0].discountValue", "items[0].taxRate"]
        );
    }

    #[test]
    fn amount_discount_may_exceed_gross() {
        let inv = invoice(vec![
            LineItemBuilder::new("A", 1, dec!(10))
                .discount(DiscountType::Amount, dec!(500))
                .build(),
        ]);
        assert!(validate_invoice(&inv).is_empty());
    }

    #[test]
    fn due_date_before_issue_date() {
        let inv = InvoiceBuilder::new("INV-0001", test_date())
            .due_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
            .add_item(LineItemBuilder::new("A", 1, dec!(10)).build())
            .build_unchecked()
            .unwrap();
        assert_eq!(fields(&validate_invoice(&inv)), vec!["dueDate"]);
    }

    #[test]
    fn empty_item_list() {
        let mut inv = invoice(vec![LineItemBuilder::new("A", 1, dec!(10)).build()]);
        inv.items.clear();
        assert_eq!(fields(&validate_invoice(&inv)), vec!["items"]);
    }

    #[test]
    fn summary_gaps_lists_off_list_rates() {
        let inv = invoice(vec![
            LineItemBuilder::new("A", 1, dec!(10)).id("a").tax_rate(dec!(12)).build(),
            LineItemBuilder::new("B", 1, dec!(10)).id("b").tax_rate(dec!(18)).build(),
            LineItemBuilder::new("C", 1, dec!(10)).id("c").tax_rate(dec!(5)).build(),
        ]);
        assert_eq!(summary_gaps(&inv), vec!["a", "c"]);
    }
}
