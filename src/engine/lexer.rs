//! Input sanitizer: reduces a raw line to the calculator's symbol alphabet.

/// Every character the parser understands, in no particular order.
pub const VALID_TOKENS: &str = "+-*/%&|$^~<>:;_@()0123456789abcdefx";

/// Longest token string the parser accepts. Nesting depth, and with it recursion depth,
/// is bounded by this length.
pub const MAX_TOKENS: usize = 256;

pub const LPAREN: char = '(';
pub const RPAREN: char = ')';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Radix {
    Binary,
    Decimal,
    Hex,
}

impl Radix {
    pub fn accepts(self, ch: char) -> bool {
        match self {
            Radix::Binary => matches!(ch, '0' | '1'),
            Radix::Decimal => ch.is_ascii_digit(),
            Radix::Hex => matches!(ch, '0'..='9' | 'a'..='f'),
        }
    }

    pub fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }

    /// Radix selected by a marker character (`x` or `b`).
    pub fn from_marker(ch: char) -> Option<Self> {
        match ch {
            'x' => Some(Radix::Hex),
            'b' => Some(Radix::Binary),
            _ => None,
        }
    }
}

pub fn is_valid_token(ch: char) -> bool {
    VALID_TOKENS.contains(ch)
}

/// Copies the characters of `input` that belong to [`VALID_TOKENS`], preserving order and
/// silently dropping everything else. Never fails; an all-invalid line yields `""`.
pub fn sanitize(input: &str) -> String {
    input.chars().filter(|&ch| is_valid_token(ch)).collect()
}
