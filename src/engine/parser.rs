//! Precedence-climbing parser over sanitized calculator input.
//!
//! Grammar, lowest precedence first, every binary level left-associative:
//!
//! ```text
//! expr        := or_expr
//! or_expr     := xor_expr   (('|' | '$') xor_expr)*
//! xor_expr    := and_expr   ('^' and_expr)*
//! and_expr    := shift_expr ('&' shift_expr)*
//! shift_expr  := add_expr   (('>' | '<' | ';' | ':') add_expr)*
//! add_expr    := mult_expr  (('+' | '-') mult_expr)*
//! mult_expr   := prefix_expr (('*' | '/' | '%') prefix_expr)*
//! prefix_expr := ('+' | '-' | '~' | '_' | '@')? atom_expr
//! atom_expr   := number | '(' expr ')'
//! number      := ['0'] ('x' | 'b')? digit+
//! ```
//!
//! The parser never fails. Anything it cannot make sense of becomes a zero literal, and the
//! reason is recorded as a [`ParseIssue`] for callers that want to show it.

use super::diagnostic::{self, ParseIssue};
use super::expression::Expr;
use super::lexer::{LPAREN, MAX_TOKENS, RPAREN, Radix};
use super::mask::MaskConfig;
use super::operator::Operator;

const OR_OPS: &[char] = &['|', '$'];
const XOR_OPS: &[char] = &['^'];
const AND_OPS: &[char] = &['&'];
const SHIFT_OPS: &[char] = &['>', '<', ';', ':'];
const ADD_OPS: &[char] = &['+', '-'];
const MULT_OPS: &[char] = &['*', '/', '%'];

/// Parses `tokens` (the output of [`sanitize`](super::lexer::sanitize)) into a tree.
/// Literals are masked with `cfg` as they are built. Tokens past [`MAX_TOKENS`] are dropped.
pub fn parse(tokens: String, cfg: MaskConfig) -> Expr {
    Parser::new(tokens, cfg).parse().0
}

/// Same tree as [`parse`], plus whatever the parser had to substitute along the way.
pub fn parse_with_issues(tokens: String, cfg: MaskConfig) -> (Expr, Vec<ParseIssue>) {
    Parser::new(tokens, cfg).parse()
}

struct Parser {
    tokens: Vec<char>,
    pos: usize,
    cfg: MaskConfig,
    issues: Vec<ParseIssue>,
}

impl Parser {
    fn new(tokens: String, cfg: MaskConfig) -> Self {
        let mut tokens: Vec<char> = tokens.chars().collect();
        let mut issues = Vec::new();
        if tokens.len() > MAX_TOKENS {
            tokens.truncate(MAX_TOKENS);
            issues.push(ParseIssue::new(
                diagnostic::LINE_TOO_LONG,
                format!("only the first {MAX_TOKENS} symbols were read"),
                MAX_TOKENS,
            ));
        }
        Self {
            tokens,
            pos: 0,
            cfg,
            issues,
        }
    }

    fn parse(mut self) -> (Expr, Vec<ParseIssue>) {
        let expr = self.parse_expr();
        if !self.at_end() {
            let rest: String = self.tokens[self.pos..].iter().collect();
            self.issues.push(ParseIssue::new(
                diagnostic::TRAILING_INPUT,
                format!("ignored trailing input '{rest}'"),
                self.pos,
            ));
        }
        (expr, self.issues)
    }

    fn parse_expr(&mut self) -> Expr {
        self.parse_or()
    }

    fn parse_or(&mut self) -> Expr {
        self.parse_left_assoc(OR_OPS, Self::parse_xor)
    }

    fn parse_xor(&mut self) -> Expr {
        self.parse_left_assoc(XOR_OPS, Self::parse_and)
    }

    fn parse_and(&mut self) -> Expr {
        self.parse_left_assoc(AND_OPS, Self::parse_shift)
    }

    fn parse_shift(&mut self) -> Expr {
        self.parse_left_assoc(SHIFT_OPS, Self::parse_add)
    }

    fn parse_add(&mut self) -> Expr {
        self.parse_left_assoc(ADD_OPS, Self::parse_mult)
    }

    fn parse_mult(&mut self) -> Expr {
        self.parse_left_assoc(MULT_OPS, Self::parse_prefix)
    }

    /// Shared shape of every binary level: parse the tighter level, then fold each
    /// `op rhs` pair into the accumulated left side.
    fn parse_left_assoc(&mut self, ops: &[char], inner: fn(&mut Self) -> Expr) -> Expr {
        if self.at_end() {
            return self.missing_operand();
        }
        let mut expr = inner(self);
        while let Some(op) = self.match_operator(ops) {
            let rhs = inner(self);
            expr = Expr::binary(op, expr, rhs);
        }
        expr
    }

    fn parse_prefix(&mut self) -> Expr {
        let Some(symbol) = self.peek() else {
            return self.missing_operand();
        };
        if !Operator::is_prefix_symbol(symbol) {
            return self.parse_atom();
        }
        self.pos += 1;
        let operand = self.parse_atom();
        match Operator::from_symbol(symbol) {
            Some(Operator::Add) | None => operand,
            Some(op) => Expr::prefix(op, operand),
        }
    }

    fn parse_atom(&mut self) -> Expr {
        let Some(symbol) = self.peek() else {
            return self.missing_operand();
        };
        if symbol != LPAREN {
            return self.parse_number();
        }
        let open = self.pos;
        self.pos += 1;
        let inner = self.parse_expr();
        if self.peek() == Some(RPAREN) {
            self.pos += 1;
            return inner;
        }
        self.issues.push(ParseIssue::new(
            diagnostic::UNCLOSED_PAREN,
            "'(' is never closed; treating it as 0",
            open,
        ));
        Expr::zero()
    }

    fn parse_number(&mut self) -> Expr {
        let start = self.pos;
        let radix = self.read_radix_marker();
        let digits: String = self.tokens[self.pos..]
            .iter()
            .take_while(|&&ch| radix.accepts(ch))
            .collect();
        if digits.is_empty() {
            self.issues.push(ParseIssue::new(
                diagnostic::MISSING_OPERAND,
                "expected a number",
                start,
            ));
            return Expr::zero();
        }
        self.pos += digits.len();
        // Out-of-range literals saturate before masking.
        let value = u64::from_str_radix(&digits, radix.base()).unwrap_or(u64::MAX);
        Expr::Literal(self.cfg.apply(value))
    }

    /// Consumes an optional `0x` / `0b` / `x` / `b` prefix. Markers only count when at least
    /// one more token follows them.
    fn read_radix_marker(&mut self) -> Radix {
        if self.pos + 1 >= self.tokens.len() {
            return Radix::Decimal;
        }
        let first = self.tokens[self.pos];
        let second = self.tokens[self.pos + 1];
        if first == '0' {
            if let Some(radix) = Radix::from_marker(second) {
                self.pos += 2;
                return radix;
            }
            return Radix::Decimal;
        }
        if let Some(radix) = Radix::from_marker(first) {
            self.pos += 1;
            return radix;
        }
        Radix::Decimal
    }

    fn match_operator(&mut self, ops: &[char]) -> Option<Operator> {
        let symbol = self.peek()?;
        if !ops.contains(&symbol) {
            return None;
        }
        self.pos += 1;
        Operator::from_symbol(symbol)
    }

    fn missing_operand(&mut self) -> Expr {
        self.issues.push(ParseIssue::new(
            diagnostic::MISSING_OPERAND,
            "expected an operand",
            self.pos,
        ));
        Expr::zero()
    }

    fn peek(&self) -> Option<char> {
        self.tokens.get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}
