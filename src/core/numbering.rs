use super::error::InvoiceError;

/// Invoice number generator.
///
/// Generates numbers in the format `{prefix}{sequential}`, e.g.
/// "INV-0001", "INV-0002". A sequence can resume from the last number
/// issued with [`InvoiceNumberSequence::resume_after`].
#[derive(Debug, Clone)]
pub struct InvoiceNumberSequence {
    prefix: String,
    next_number: u64,
    zero_pad: usize,
}

impl InvoiceNumberSequence {
    /// Create a new sequence starting at 1.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_at(prefix, 1)
    }

    /// Create a sequence continuing from a given number.
    pub fn starting_at(prefix: impl Into<String>, next_number: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next_number,
            zero_pad: 4,
        }
    }

    /// Continue after an already issued number such as "INV-0042".
    pub fn resume_after(prefix: impl Into<String>, last: &str) -> Result<Self, InvoiceError> {
        let prefix = prefix.into();
        let issued = parse_invoice_number(&prefix, last)?;
        let next = issued.checked_add(1).ok_or_else(|| {
            InvoiceError::Numbering(format!("sequence exhausted after '{last}'"))
        })?;
        Ok(Self::starting_at(prefix, next))
    }

    /// Set zero-padding width (default: 4, so "0001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    /// Generate the next invoice number.
    ///
    /// Fails once the counter cannot advance, so no number is issued twice.
    pub fn next_number(&mut self) -> Result<String, InvoiceError> {
        let following = self.next_number.checked_add(1).ok_or_else(|| {
            InvoiceError::Numbering(format!("sequence '{}' is exhausted", self.prefix))
        })?;
        let number = self.peek();
        self.next_number = following;
        Ok(number)
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        format!(
            "{}{:0>width$}",
            self.prefix,
            self.next_number,
            width = self.zero_pad
        )
    }

    /// The counter value that will be issued next.
    pub fn next_raw(&self) -> u64 {
        self.next_number
    }
}

/// Extract the counter from a number issued with `prefix`.
pub fn parse_invoice_number(prefix: &str, number: &str) -> Result<u64, InvoiceError> {
    let digits = number.strip_prefix(prefix).ok_or_else(|| {
        InvoiceError::Numbering(format!("'{number}' does not start with '{prefix}'"))
    })?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(InvoiceError::Numbering(format!(
            "'{number}' has no numeric counter after '{prefix}'"
        )));
    }
    digits
        .parse()
        .map_err(|e| InvoiceError::Numbering(format!("'{number}': {e}")))
}
