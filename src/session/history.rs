//! Append-only log of what the session accepted, rendered next to the result.

use crate::engine::{MaskConfig, Operator, Radix};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Clears the log down to the canonical `0` entry.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries.push("0".to_string());
    }

    /// Records an operator symbol unless it repeats the previous entry.
    pub fn push_operator(&mut self, op: Operator) {
        let symbol = op.symbol().to_string();
        if self.entries.last() != Some(&symbol) {
            self.entries.push(symbol);
        }
    }

    /// Records a number in the radix the user typed it in.
    pub fn push_number(&mut self, value: u64, radix: Radix, cfg: MaskConfig) {
        self.entries.push(format_number(cfg.apply(value), radix));
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.entries.push(text.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Decimal is shown signed, hex upper-case with `0x`, binary with `0b` and no leading zeros.
pub fn format_number(value: u64, radix: Radix) -> String {
    match radix {
        Radix::Decimal => format!("{}", value as i64),
        Radix::Hex => format!("0x{value:X}"),
        Radix::Binary => format!("0b{value:b}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_leaves_single_zero() {
        let mut history = History::new();
        history.push_text("1+2");
        history.reset();
        assert_eq!(history.entries(), &["0".to_string()]);
    }

    #[test]
    fn repeated_operator_is_recorded_once() {
        let mut history = History::new();
        history.push_operator(Operator::Add);
        history.push_operator(Operator::Add);
        history.push_operator(Operator::Sub);
        assert_eq!(history.entries(), &["+".to_string(), "-".to_string()]);
    }

    #[test]
    fn numbers_keep_their_input_radix() {
        let cfg = MaskConfig::with_width(16);
        let mut history = History::new();
        history.push_number(255, Radix::Hex, cfg);
        history.push_number(5, Radix::Binary, cfg);
        history.push_number(0, Radix::Binary, cfg);
        history.push_number(0x1_0042, Radix::Decimal, cfg);
        assert_eq!(history.entries(), &["0xFF", "0b101", "0b0", "66"]);
    }

    #[test]
    fn full_width_decimal_is_signed() {
        assert_eq!(format_number(u64::MAX, Radix::Decimal), "-1");
    }
}
