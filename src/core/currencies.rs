//! ISO 4217 currency metadata.
//!
//! Code, English name, display symbol and minor units for the currencies
//! an invoice line may be billed in.

/// Static description of one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    /// ISO 4217 alphabetic code.
    pub code: &'static str,
    /// English name.
    pub name: &'static str,
    /// Symbol placed before formatted amounts.
    pub symbol: &'static str,
    /// Digits after the decimal separator.
    pub minor_units: u32,
}

/// Look up a currency by its ISO 4217 code.
pub fn lookup(code: &str) -> Option<&'static Currency> {
    CURRENCIES
        .binary_search_by(|c| c.code.cmp(code))
        .ok()
        .map(|i| &CURRENCIES[i])
}

/// Check whether `code` is a known ISO 4217 currency code.
pub fn is_known_currency_code(code: &str) -> bool {
    lookup(code).is_some()
}

/// Selector label such as `"INR - Indian Rupee"`; the bare code if unknown.
pub fn currency_label(code: &str) -> String {
    match lookup(code) {
        Some(c) => format!("{} - {}", c.code, c.name),
        None => code.to_string(),
    }
}

const fn currency(
    code: &'static str,
    name: &'static str,
    symbol: &'static str,
    minor_units: u32,
) -> Currency {
    Currency {
        code,
        name,
        symbol,
        minor_units,
    }
}

/// Sorted by code for binary search.
static CURRENCIES: &[Currency] = &[
    currency("AED", "UAE Dirham", "AED ", 2),
    currency("AUD", "Australian Dollar", "A$", 2),
    currency("BDT", "Bangladeshi Taka", "৳", 2),
    currency("BHD", "Bahraini Dinar", "BHD ", 3),
    currency("BRL", "Brazilian Real", "R$", 2),
    currency("CAD", "Canadian Dollar", "CA$", 2),
    currency("CHF", "Swiss Franc", "CHF ", 2),
    currency("CNY", "Chinese Yuan", "CN¥", 2),
    currency("DKK", "Danish Krone", "DKK ", 2),
    currency("EUR", "Euro", "€", 2),
    currency("GBP", "Pound Sterling", "£", 2),
    currency("HKD", "Hong Kong Dollar", "HK$", 2),
    currency("IDR", "Indonesian Rupiah", "IDR ", 2),
    currency("INR", "Indian Rupee", "₹", 2),
    currency("JPY", "Japanese Yen", "¥", 0),
    currency("KRW", "South Korean Won", "₩", 0),
    currency("KWD", "Kuwaiti Dinar", "KWD ", 3),
    currency("LKR", "Sri Lankan Rupee", "LKR ", 2),
    currency("MYR", "Malaysian Ringgit", "MYR ", 2),
    currency("NOK", "Norwegian Krone", "NOK ", 2),
    currency("NPR", "Nepalese Rupee", "NPR ", 2),
    currency("NZD", "New Zealand Dollar", "NZ$", 2),
    currency("OMR", "Omani Rial", "OMR ", 3),
    currency("PKR", "Pakistani Rupee", "PKR ", 2),
    currency("QAR", "Qatari Riyal", "QAR ", 2),
    currency("SAR", "Saudi Riyal", "SAR ", 2),
    currency("SEK", "Swedish Krona", "SEK ", 2),
    currency("SGD", "Singapore Dollar", "SGD ", 2),
    currency("THB", "Thai Baht", "THB ", 2),
    currency("USD", "US Dollar", "$", 2),
    currency("ZAR", "South African Rand", "ZAR ", 2),
];
