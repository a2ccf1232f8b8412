//! Fixed operator table and the masked arithmetic behind every symbol.
//!
//! Operands are always supplied in stack-pop order: `first` is the most recently produced
//! value (the right-hand operand in source order), `second` the one produced before it.
//! Both the expression evaluator and the session's pending-operator path go through
//! [`Operator::apply`], so a symbol behaves identically in either context.

use std::fmt;

use super::mask::MaskConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    And,
    Or,
    Nor,
    Xor,
    Shl,
    Shr,
    Rol,
    Ror,
    Not,
    TwosComplement,
    SwapEndianness,
}

impl Operator {
    pub const ALL: [Operator; 16] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Mod,
        Operator::And,
        Operator::Or,
        Operator::Nor,
        Operator::Xor,
        Operator::Shl,
        Operator::Shr,
        Operator::Rol,
        Operator::Ror,
        Operator::Not,
        Operator::TwosComplement,
        Operator::SwapEndianness,
    ];

    pub fn from_symbol(symbol: char) -> Option<Self> {
        let op = match symbol {
            '+' => Operator::Add,
            '-' => Operator::Sub,
            '*' => Operator::Mul,
            '/' => Operator::Div,
            '%' => Operator::Mod,
            '&' => Operator::And,
            '|' => Operator::Or,
            '$' => Operator::Nor,
            '^' => Operator::Xor,
            '<' => Operator::Shl,
            '>' => Operator::Shr,
            ':' => Operator::Rol,
            ';' => Operator::Ror,
            '~' => Operator::Not,
            '_' => Operator::TwosComplement,
            '@' => Operator::SwapEndianness,
            _ => return None,
        };
        Some(op)
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Mod => '%',
            Operator::And => '&',
            Operator::Or => '|',
            Operator::Nor => '$',
            Operator::Xor => '^',
            Operator::Shl => '<',
            Operator::Shr => '>',
            Operator::Rol => ':',
            Operator::Ror => ';',
            Operator::Not => '~',
            Operator::TwosComplement => '_',
            Operator::SwapEndianness => '@',
        }
    }

    /// Short label used by the symbol legend.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Operator::Add => "ADD",
            Operator::Sub => "SUB",
            Operator::Mul => "MUL",
            Operator::Div => "DIV",
            Operator::Mod => "MOD",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Nor => "NOR",
            Operator::Xor => "XOR",
            Operator::Shl => "SL",
            Operator::Shr => "SR",
            Operator::Rol => "RL",
            Operator::Ror => "RR",
            Operator::Not => "NOT",
            Operator::TwosComplement => "2's",
            Operator::SwapEndianness => "SWP",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Operator::Not | Operator::TwosComplement | Operator::SwapEndianness => 1,
            _ => 2,
        }
    }

    /// Symbols that may open a prefix expression (`-x`, `~x`, ...).
    pub fn is_prefix_symbol(symbol: char) -> bool {
        matches!(symbol, '+' | '-' | '~' | '_' | '@')
    }

    /// Evaluates the operator with `first` as the first-popped (right) operand. Unary
    /// operators only read `first`. The result is reduced through `cfg`.
    pub fn apply(self, cfg: MaskConfig, first: u64, second: u64) -> u64 {
        let raw = match self {
            Operator::Add => first.wrapping_add(second),
            Operator::Sub => second.wrapping_sub(first),
            Operator::Mul => first.wrapping_mul(second),
            Operator::Div => signed_div(first, second),
            Operator::Mod => signed_rem(first, second),
            Operator::And => first & second,
            Operator::Or => first | second,
            Operator::Nor => !(first | second),
            Operator::Xor => first ^ second,
            Operator::Shl => shift_left(second, first),
            Operator::Shr => shift_right(cfg.apply(second), first),
            Operator::Rol => rotate_left(cfg, second, first),
            Operator::Ror => rotate_right(cfg, second, first),
            Operator::Not => !first,
            Operator::TwosComplement => first.wrapping_neg(),
            Operator::SwapEndianness => swap_bytes(cfg, first),
        };
        cfg.apply(raw)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// Division and remainder treat the word as signed, matching the signed decimal panel.
// A zero divisor yields zero.
fn signed_div(divisor: u64, dividend: u64) -> u64 {
    if divisor == 0 {
        return 0;
    }
    (dividend as i64).wrapping_div(divisor as i64) as u64
}

fn signed_rem(divisor: u64, dividend: u64) -> u64 {
    if divisor == 0 {
        return 0;
    }
    (dividend as i64).wrapping_rem(divisor as i64) as u64
}

fn shift_left(value: u64, amount: u64) -> u64 {
    if amount >= 64 { 0 } else { value << amount }
}

fn shift_right(value: u64, amount: u64) -> u64 {
    if amount >= 64 { 0 } else { value >> amount }
}

fn rotate_left(cfg: MaskConfig, value: u64, amount: u64) -> u64 {
    let width = cfg.width() as u64;
    let value = cfg.apply(value);
    let amount = amount % width;
    if amount == 0 {
        return value;
    }
    (value << amount) | (value >> (width - amount))
}

fn rotate_right(cfg: MaskConfig, value: u64, amount: u64) -> u64 {
    let width = cfg.width() as u64;
    let value = cfg.apply(value);
    let amount = amount % width;
    if amount == 0 {
        return value;
    }
    (value >> amount) | (value << (width - amount))
}

/// Reverses the whole bytes covered by the active width. Bits of a trailing partial byte
/// stay where they are, and the middle byte of an odd count keeps its position.
fn swap_bytes(cfg: MaskConfig, value: u64) -> u64 {
    let byte_count = (cfg.width() / 8) as usize;
    if byte_count < 2 {
        return value;
    }
    let mut bytes = value.to_le_bytes();
    bytes[..byte_count].reverse();
    let swapped = u64::from_le_bytes(bytes);
    let covered = super::mask::mask_for_bits(byte_count as u32 * 8);
    (value & !covered) | (swapped & covered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    fn full() -> MaskConfig {
        MaskConfig::default()
    }

    #[test]
    fn symbols_round_trip_through_table() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol('('), None);
        assert_eq!(Operator::from_symbol('x'), None);
    }

    #[test]
    fn unary_operators_report_single_operand() {
        assert_eq!(Operator::Not.arity(), 1);
        assert_eq!(Operator::TwosComplement.arity(), 1);
        assert_eq!(Operator::SwapEndianness.arity(), 1);
        assert_eq!(Operator::Rol.arity(), 2);
    }

    #[test]
    fn subtraction_and_division_use_pop_order() {
        assert_eq!(Operator::Sub.apply(full(), 3, 10), 7);
        assert_eq!(Operator::Div.apply(full(), 4, 20), 5);
        assert_eq!(Operator::Mod.apply(full(), 4, 22), 2);
    }

    #[test]
    fn division_by_zero_is_zero() {
        assert_eq!(Operator::Div.apply(full(), 0, 5), 0);
        assert_eq!(Operator::Mod.apply(full(), 0, 5), 0);
    }

    #[test]
    fn division_is_signed_at_full_width() {
        let minus_six = 6u64.wrapping_neg();
        assert_eq!(Operator::Div.apply(full(), 2, minus_six), 3u64.wrapping_neg());
        let byte = MaskConfig::with_width(8);
        assert_eq!(Operator::Div.apply(byte, 2, 0xFA), 0x7D);
    }

    #[test]
    fn nor_is_complement_of_or() {
        let cfg = MaskConfig::with_width(8);
        assert_eq!(Operator::Nor.apply(cfg, 0b1010, 0b0101), 0xF0);
    }

    #[test]
    fn oversized_shifts_clear_the_word() {
        assert_eq!(Operator::Shl.apply(full(), 64, 1), 0);
        assert_eq!(Operator::Shr.apply(full(), 200, u64::MAX), 0);
        assert_eq!(Operator::Shl.apply(MaskConfig::with_width(8), 8, 0xFF), 0);
        assert_eq!(Operator::Shr.apply(full(), 4, 0xF0), 0x0F);
    }

    #[test]
    fn rotation_wraps_at_active_width() {
        let cfg = MaskConfig::with_width(8);
        assert_eq!(Operator::Rol.apply(cfg, 1, 0x81), 0x03);
        assert_eq!(Operator::Ror.apply(cfg, 1, 0x81), 0xC0);
        assert_eq!(Operator::Rol.apply(cfg, 8, 0x81), 0x81);
        assert_eq!(Operator::Rol.apply(full(), 4, 0xF000_0000_0000_0000), 0xF);
    }

    #[test]
    fn rotate_left_then_right_restores_value() {
        for width in [1u32, 5, 8, 13, 32, 64] {
            let cfg = MaskConfig::with_width(width);
            let value = cfg.apply(0xDEAD_BEEF_CAFE_F00D);
            for k in 0..width as u64 {
                let rotated = Operator::Rol.apply(cfg, k, value);
                assert_eq!(Operator::Ror.apply(cfg, k, rotated), value, "width {width} k {k}");
            }
        }
    }

    #[test]
    fn unary_operators_ignore_second_operand() {
        let cfg = MaskConfig::with_width(8);
        assert_eq!(Operator::Not.apply(cfg, 0x0F, 0x99), 0xF0);
        assert_eq!(Operator::TwosComplement.apply(cfg, 1, 0x99), 0xFF);
    }

    #[test]
    fn swaps_bytes_across_full_width() {
        let value = u64::from_be_bytes(hex!("0102030405060708"));
        let expected = u64::from_be_bytes(hex!("0807060504030201"));
        assert_eq!(Operator::SwapEndianness.apply(full(), value, 0), expected);
    }

    #[test]
    fn swap_keeps_middle_byte_for_odd_byte_counts() {
        let cfg = MaskConfig::with_width(24);
        assert_eq!(Operator::SwapEndianness.apply(cfg, 0x11_22_33, 0), 0x33_22_11);
        let cfg = MaskConfig::with_width(16);
        assert_eq!(Operator::SwapEndianness.apply(cfg, 0xABCD, 0), 0xCDAB);
        let cfg = MaskConfig::with_width(8);
        assert_eq!(Operator::SwapEndianness.apply(cfg, 0x5A, 0), 0x5A);
    }
}
