use chrono::NaiveDate;
use invoicekit::core::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn starter() -> InvoiceData {
    InvoiceBuilder::new("INV-0001", date(2024, 6, 15))
        .add_item(LineItemBuilder::new("Consulting", 1, dec!(0)).id("first").build())
        .build()
        .unwrap()
}

// --- Adding and removing items ---

#[test]
fn added_item_uses_invoice_currency_and_defaults() {
    let defaults = InvoiceDefaults::default();
    let inv = starter()
        .with_change(InvoiceChange::Currency("USD".into()))
        .with_item_added(&defaults);

    let added = inv.items.last().unwrap();
    assert_eq!(inv.items.len(), 2);
    assert_eq!(added.currency, "USD");
    assert_eq!(added.exchange_rate, dec!(1));
    assert_eq!(added.quantity, 1);
    assert_eq!(added.price, dec!(0));
    assert_eq!(added.tax_rate, dec!(18));
    assert_eq!(added.discount_type, DiscountType::Percentage);
    assert_ne!(added.id, "first");
}

#[test]
fn edits_leave_the_original_untouched() {
    let before = starter();
    let after = before
        .with_item_change("first", ItemChange::Price(dec!(250)))
        .unwrap();

    assert_eq!(before.items[0].price, dec!(0));
    assert_eq!(after.items[0].price, dec!(250));
    assert_eq!(total(&before), dec!(0));
    assert_eq!(total(&after), dec!(295));
}

#[test]
fn last_item_cannot_be_removed() {
    let inv = starter();
    let err = inv.with_item_removed("first").unwrap_err();
    assert!(matches!(err, InvoiceError::Edit(_)));
    assert_eq!(inv.items.len(), 1);
}

#[test]
fn remove_keeps_insertion_order() {
    let defaults = InvoiceDefaults::default();
    let inv = starter().with_item_added(&defaults).with_item_added(&defaults);
    let second = inv.items[1].id.clone();
    let third = inv.items[2].id.clone();

    let inv = inv.with_item_removed(&second).unwrap();
    let ids: Vec<&str> = inv.items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["first", third.as_str()]);
}

#[test]
fn unknown_item_id_rejected() {
    let inv = starter();
    assert!(inv.with_item_removed("missing").is_err());
    assert!(
        inv.with_item_change("missing", ItemChange::Quantity(3))
            .is_err()
    );
}

// --- Currency invariants ---

#[test]
fn item_currency_matching_invoice_resets_rate() {
    let inv = starter()
        .with_item_change("first", ItemChange::Currency("USD".into()))
        .unwrap()
        .with_item_change("first", ItemChange::ExchangeRate(dec!(83)))
        .unwrap();
    assert_eq!(inv.items[0].exchange_rate, dec!(83));

    let inv = inv
        .with_item_change("first", ItemChange::Currency("INR".into()))
        .unwrap();
    assert_eq!(inv.items[0].currency, "INR");
    assert_eq!(inv.items[0].exchange_rate, dec!(1));
    assert!(validate_invoice(&inv).is_empty());
}

#[test]
fn exchange_rate_ignored_for_invoice_currency_items() {
    let inv = starter()
        .with_item_change("first", ItemChange::ExchangeRate(dec!(5)))
        .unwrap();
    assert_eq!(inv.items[0].exchange_rate, dec!(1));
}

#[test]
fn invoice_currency_change_moves_matching_items() {
    let inv = starter()
        .with_item_added(&InvoiceDefaults::default())
        .with_item_change("first", ItemChange::Currency("EUR".into()))
        .unwrap()
        .with_item_change("first", ItemChange::ExchangeRate(dec!(90)))
        .unwrap();

    let inv = inv.with_change(InvoiceChange::Currency("USD".into()));

    assert_eq!(inv.currency, "USD");
    // The EUR item keeps its own currency and rate.
    assert_eq!(inv.items[0].currency, "EUR");
    assert_eq!(inv.items[0].exchange_rate, dec!(90));
    // The INR item followed the invoice.
    assert_eq!(inv.items[1].currency, "USD");
    assert_eq!(inv.items[1].exchange_rate, dec!(1));
    assert!(validate_invoice(&inv).is_empty());
}

#[test]
fn invoice_currency_change_onto_foreign_item_resets_its_rate() {
    let inv = starter()
        .with_item_change("first", ItemChange::Currency("EUR".into()))
        .unwrap()
        .with_item_change("first", ItemChange::ExchangeRate(dec!(90)))
        .unwrap()
        .with_change(InvoiceChange::Currency("EUR".into()));

    assert_eq!(inv.items[0].exchange_rate, dec!(1));
    assert!(validate_invoice(&inv).is_empty());
}

// --- Form input ---

#[test]
fn form_input_drives_the_calculator() {
    let mut inv = starter();
    for (field, raw) in [
        ("description", "Design work"),
        ("quantity", "4"),
        ("price", "125.50"),
        ("discountType", "amount"),
        ("discountValue", "2"),
        ("taxRate", "28"),
    ] {
        inv = inv
            .with_item_change("first", ItemChange::parse(field, raw).unwrap())
            .unwrap();
    }
    for (field, raw) in [
        ("discountType", "percentage"),
        ("discountValue", "10"),
        ("toName", "Asha Traders"),
    ] {
        inv = inv.with_change(InvoiceChange::parse(field, raw).unwrap());
    }

    let item = &inv.items[0];
    assert_eq!(item.description, "Design work");
    assert_eq!(inv.to.name, "Asha Traders");
    // 4 × 125.50 = 502, minus 2 = 500, tax 140
    assert_eq!(item_tax(item), dec!(140));
    assert_eq!(subtotal(&inv), dec!(500));
    assert_eq!(invoice_discount(&inv), dec!(50));
    assert_eq!(total(&inv), dec!(590));
}

#[test]
fn garbage_numbers_become_zero() {
    let inv = starter()
        .with_item_change("first", ItemChange::parse("quantity", "two").unwrap())
        .unwrap()
        .with_item_change("first", ItemChange::parse("price", "").unwrap())
        .unwrap();
    assert_eq!(inv.items[0].quantity, 0);
    assert_eq!(inv.items[0].price, dec!(0));
    assert_eq!(total(&inv), dec!(0));
}

// --- Numbering ---

#[test]
fn huge_form_input_cannot_break_the_calculator() {
    let inv = starter()
        .with_item_change("first", ItemChange::parse("quantity", "4000000000").unwrap())
        .unwrap()
        .with_item_change("first", ItemChange::parse("price", "1e20").unwrap())
        .unwrap();

    assert_eq!(inv.items[0].quantity, 4_000_000_000);
    assert_eq!(inv.items[0].price, dec!(0));
    assert!(validate_invoice(&inv).is_empty());
    assert_eq!(calculate(&inv).total, dec!(0));

    // Typed changes skip coercion; validation reports them and the
    // calculator caps instead of overflowing.
    let huge = rust_decimal::Decimal::from_scientific("1e20").unwrap();
    let inv = inv
        .with_item_change("first", ItemChange::Price(huge))
        .unwrap();
    let errors = validate_invoice(&inv);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "items[0].price");
    assert_eq!(calculate(&inv).total, rust_decimal::Decimal::MAX);
}

#[test]
fn numbered_invoices() {
    let defaults = InvoiceDefaults::default();
    let mut seq = InvoiceNumberSequence::new(defaults.number_prefix.clone());
    let number = seq.next_number().unwrap();
    let first = InvoiceBuilder::from_defaults(number, date(2024, 6, 15), &defaults)
        .add_item(LineItem::blank("INR", &defaults))
        .build()
        .unwrap();
    let number = seq.next_number().unwrap();
    let second = InvoiceBuilder::from_defaults(number, date(2024, 6, 16), &defaults)
        .add_item(LineItem::blank("INR", &defaults))
        .build()
        .unwrap();

    assert_eq!(first.invoice_number, "INV-0001");
    assert_eq!(second.invoice_number, "INV-0002");

    let resumed = InvoiceNumberSequence::resume_after("INV-", &second.invoice_number).unwrap();
    assert_eq!(resumed.peek(), "INV-0003");
}
