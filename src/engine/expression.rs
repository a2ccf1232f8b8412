//! Expression trees produced by the parser and the evaluator that folds them.
//!
//! Every tree is full: an operator node always owns exactly two children. Unary operators
//! are stored against an implicit zero literal on the left, so the evaluator never has to
//! special-case them.

use super::mask::MaskConfig;
use super::operator::Operator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(u64),
    Operator {
        op: Operator,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    pub fn zero() -> Self {
        Expr::Literal(0)
    }

    pub fn binary(op: Operator, lhs: Expr, rhs: Expr) -> Self {
        Expr::Operator {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Prefix form `op operand`, desugared to `0 op operand`.
    pub fn prefix(op: Operator, operand: Expr) -> Self {
        Self::binary(op, Self::zero(), operand)
    }

    pub fn as_literal(&self) -> Option<u64> {
        match self {
            Expr::Literal(value) => Some(*value),
            Expr::Operator { .. } => None,
        }
    }
}

/// Post-order evaluator bound to the width that is active right now.
pub struct ExpressionEvaluator {
    cfg: MaskConfig,
}

impl ExpressionEvaluator {
    pub fn new(cfg: MaskConfig) -> Self {
        Self { cfg }
    }

    pub fn evaluate(&self, expr: &Expr) -> u64 {
        match expr {
            Expr::Literal(value) => self.cfg.apply(*value),
            Expr::Operator { op, lhs, rhs } => {
                let left = self.evaluate(lhs);
                let right = self.evaluate(rhs);
                // The most recent value goes first, as if both had been popped off a stack.
                op.apply(self.cfg, right, left)
            }
        }
    }
}

pub fn evaluate(expr: &Expr, cfg: MaskConfig) -> u64 {
    ExpressionEvaluator::new(cfg).evaluate(expr)
}
