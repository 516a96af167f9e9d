use chrono::NaiveDate;
use invoicekit::core::*;
use invoicekit::format::format_currency;
use invoicekit::render::{export_file_name, render_text};
use rust_decimal_macros::dec;

fn main() {
    // A GST invoice with one discounted local item and one imported item
    let invoice = InvoiceBuilder::new("INV-0042", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        .company(Company {
            name: "Pranay Enterprises".into(),
            logo: "/logo.png".into(),
            details: "GST: 27AAJPT2871R1ZP\nState: Maharashtra".into(),
        })
        .from(Party {
            name: "Pranay Enterprises".into(),
            email: "billing@pranay.example".into(),
            address: "Satkar tower, Near Saket college\nKalyan East\nMaharashtra".into(),
        })
        .to(Party {
            name: "Asha Traders".into(),
            email: "accounts@asha.example".into(),
            address: "Andheri West\nMumbai".into(),
        })
        .add_item(
            LineItemBuilder::new("Steel rods", 2, dec!(1000))
                .discount(DiscountType::Percentage, dec!(10))
                .tax_rate(dec!(18))
                .build(),
        )
        .add_item(
            LineItemBuilder::new("Imported bolts", 1, dec!(50))
                .currency("USD")
                .exchange_rate(dec!(83.25))
                .tax_rate(dec!(28))
                .build(),
        )
        .discount(DiscountType::Amount, dec!(100))
        .apply_invoice_discount_to_discounted_items(false)
        .notes("Payment by NEFT within 30 days")
        .build()
        .expect("invoice should be valid");

    let breakdown = calculate(&invoice);
    println!("Invoice {}", invoice.invoice_number);
    println!("  Subtotal:         {}", format_currency(breakdown.subtotal, &invoice.currency));
    println!("  Item discounts:   {}", format_currency(breakdown.total_item_discounts, &invoice.currency));
    println!("  Invoice discount: {}", format_currency(breakdown.invoice_discount, &invoice.currency));
    println!("  Taxable amount:   {}", format_currency(breakdown.taxable_amount, &invoice.currency));
    println!("  GST:              {}", format_currency(breakdown.total_tax, &invoice.currency));
    println!("  Total:            {}", format_currency(breakdown.total, &invoice.currency));

    let gaps = summary_gaps(&invoice);
    if !gaps.is_empty() {
        println!("  Items outside the GST summary: {gaps:?}");
    }

    println!();
    println!("--- {} ---", export_file_name(&invoice));
    print!("{}", render_text(&invoice));
}
