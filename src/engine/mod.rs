//! Expression engine: sanitizer, parser, evaluator and the masked operator table.
//!
//! A line travels `sanitize` -> `parse` -> `evaluate`. None of those steps can fail; the
//! configured [`MaskConfig`] is threaded through explicitly so a width change is seen by the
//! very next evaluation.

pub mod diagnostic;
pub mod error;
pub mod expression;
pub mod lexer;
pub mod mask;
pub mod operator;
pub mod parser;

pub use diagnostic::ParseIssue;
pub use error::{CalcError, CalcResult};
pub use expression::{Expr, ExpressionEvaluator, evaluate};
pub use lexer::{Radix, sanitize};
pub use mask::MaskConfig;
pub use operator::Operator;
pub use parser::{parse, parse_with_issues};

/// Sanitizes, parses and evaluates `line` in one go.
pub fn calculate(line: &str, cfg: MaskConfig) -> u64 {
    let expr = parse(sanitize(line), cfg);
    evaluate(&expr, cfg)
}
