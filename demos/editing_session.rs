//! Replays a sequence of form edits, recalculating after each one.
//!
//! Run with `RUST_LOG=debug` to see the editing layer's events.

use chrono::Local;
use invoicekit::core::*;
use invoicekit::format::format_currency;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), InvoiceError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let defaults = InvoiceDefaults::default();
    let mut numbers = InvoiceNumberSequence::new(defaults.number_prefix.clone());
    let today = Local::now().date_naive();

    let mut invoice = InvoiceBuilder::from_defaults(numbers.next_number()?, today, &defaults)
        .add_item(LineItem::blank(defaults.currency.clone(), &defaults))
        .build()?;
    let first = invoice.items[0].id.clone();

    let item_edits = [
        ("description", "Website design"),
        ("quantity", "3"),
        ("price", "15000"),
        ("discountValue", "10"),
        ("quantity", "three"),
        ("quantity", "3"),
    ];
    for (field, raw) in item_edits {
        invoice = invoice.with_item_change(&first, ItemChange::parse(field, raw)?)?;
        report(&invoice, &format!("{field} = {raw:?}"));
    }

    invoice = invoice.with_item_added(&defaults);
    let second = invoice.items[1].id.clone();
    for (field, raw) in [
        ("description", "Stock photos"),
        ("currency", "USD"),
        ("exchangeRate", "83.25"),
        ("price", "120"),
        ("taxRate", "28"),
    ] {
        invoice = invoice.with_item_change(&second, ItemChange::parse(field, raw)?)?;
        report(&invoice, &format!("item 2 {field} = {raw:?}"));
    }

    for (field, raw) in [
        ("discountType", "amount"),
        ("discountValue", "2500"),
        ("applyInvoiceDiscountToDiscountedItems", "false"),
    ] {
        invoice = invoice.with_change(InvoiceChange::parse(field, raw)?);
        report(&invoice, &format!("{field} = {raw:?}"));
    }

    invoice = invoice.with_item_removed(&second)?;
    report(&invoice, "removed item 2");

    if let Err(e) = invoice.with_item_removed(&first) {
        println!("{e}");
    }

    for id in summary_gaps_with_rates(&invoice, &defaults.summary_rates) {
        println!("item {id} has a GST rate outside the summary");
    }
    for problem in validate_invoice(&invoice) {
        println!("warning: {problem}");
    }
    Ok(())
}

fn report(invoice: &InvoiceData, edit: &str) {
    println!(
        "{edit:<48} subtotal {:>14}  GST {:>12}  total {:>14}",
        format_currency(subtotal(invoice), &invoice.currency),
        format_currency(total_tax(invoice), &invoice.currency),
        format_currency(total(invoice), &invoice.currency),
    );
}
