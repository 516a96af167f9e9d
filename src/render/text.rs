use crate::core::{InvoiceData, InvoiceDefaults};

use super::view::{InvoiceView, PartyView};

/// Render the print view as plain text, one block per section.
pub fn render_text(invoice: &InvoiceData) -> String {
    render_view(&InvoiceView::new(invoice))
}

/// Like [`render_text`], with the GST summary over `defaults.summary_rates`.
pub fn render_text_with_defaults(invoice: &InvoiceData, defaults: &InvoiceDefaults) -> String {
    render_view(&InvoiceView::with_defaults(invoice, defaults))
}

fn render_view(view: &InvoiceView) -> String {
    let mut sections: Vec<Vec<String>> = Vec::new();

    let mut header = Vec::new();
    push_nonempty(&mut header, &view.company_name);
    header.extend(view.company_details.iter().cloned());
    header.push(format!("INVOICE {}", view.number));
    header.push(format!("Date: {}", view.date));
    header.push(format!("Due Date: {}", view.due_date));
    sections.push(header);

    sections.push(party_block("From:", &view.from));
    sections.push(party_block("To:", &view.to));

    let mut items = vec!["Items:".to_string()];
    for (i, row) in view.rows.iter().enumerate() {
        let description = if row.description.is_empty() {
            "(no description)"
        } else {
            row.description.as_str()
        };
        items.push(format!("{}. {}", i + 1, description));
        items.push(format!(
            "   {} × {} = {} | GST {} | Discount {}",
            row.quantity, row.price, row.gross, row.tax_rate, row.discount
        ));
        if let Some(discount) = &row.discount_amount {
            items.push(format!("   Discount: {discount}"));
        }
        if let Some(tax) = &row.tax_amount {
            items.push(format!("   GST: {tax}"));
        }
        items.push(format!("   Total: {}", row.total));
    }
    sections.push(items);

    let mut totals = Vec::new();
    for line in &view.totals {
        totals.push(format!("{}: {}", line.label, line.amount));
        if let Some(note) = &line.note {
            totals.push(format!("  ({note})"));
        }
    }
    sections.push(totals);

    if let Some(notes) = &view.notes {
        let mut block = vec!["Notes:".to_string()];
        block.extend(notes.iter().cloned());
        sections.push(block);
    }

    sections.push(view.footer.clone());

    let mut out = sections
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(|s| s.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n");
    out.push('\n');
    out
}

fn party_block(title: &str, party: &PartyView) -> Vec<String> {
    let mut block = Vec::new();
    push_nonempty(&mut block, &party.name);
    push_nonempty(&mut block, &party.email);
    block.extend(party.address.iter().cloned());
    if block.is_empty() {
        return block;
    }
    block.insert(0, title.to_string());
    block
}

fn push_nonempty(block: &mut Vec<String>, value: &str) {
    if !value.trim().is_empty() {
        block.push(value.to_string());
    }
}
