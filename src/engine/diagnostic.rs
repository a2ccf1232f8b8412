/// Something the parser had to paper over while building a tree.
///
/// Issues never change the evaluated result: the parser substitutes a zero literal and keeps
/// going. They only exist so a front end can explain why a line came out as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    pub code: &'static str,
    pub message: String,
    /// Offset into the sanitized token string.
    pub position: usize,
}

pub const UNCLOSED_PAREN: &str = "unclosed-paren";
pub const MISSING_OPERAND: &str = "missing-operand";
pub const TRAILING_INPUT: &str = "trailing-input";
pub const LINE_TOO_LONG: &str = "line-too-long";

impl ParseIssue {
    pub fn new(code: &'static str, message: impl Into<String>, position: usize) -> Self {
        Self {
            code,
            message: message.into(),
            position,
        }
    }

    pub fn format_human(&self) -> String {
        format!(
            "{code}: {message} @ {position}",
            code = self.code,
            message = self.message,
            position = self.position
        )
    }
}
