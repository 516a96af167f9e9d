use chrono::NaiveDate;

/// Print-view date, e.g. "15 Jun 2024".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}
