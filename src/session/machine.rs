//! Line-at-a-time calculator session.
//!
//! Each input line is either a command, a bare operator, an operand, or a full expression.
//! An operator entered on one line can wait for its operand on the next, so the session
//! carries a [`SessionState`] between calls to [`Session::step`].

use crate::engine::diagnostic;
use crate::engine::lexer::{LPAREN, MAX_TOKENS, RPAREN};
use crate::engine::{
    CalcResult, MaskConfig, Operator, ParseIssue, Radix, evaluate, parse_with_issues, sanitize,
};

use super::command::{Command, CommandTable, Panels};
use super::display::{DisplaySink, DisplayView};
use super::history::History;
use super::stack::NumberStack;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoPendingOp,
    PendingOp(Operator),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Quit,
}

pub struct Session {
    cfg: MaskConfig,
    stack: NumberStack,
    history: History,
    state: SessionState,
    panels: Panels,
    commands: CommandTable,
    issues: Vec<ParseIssue>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_width(MaskConfig::default().width())
    }

    pub fn with_width(width: u32) -> Self {
        let mut session = Self {
            cfg: MaskConfig::with_width(width),
            stack: NumberStack::new(),
            history: History::new(),
            state: SessionState::NoPendingOp,
            panels: Panels::default(),
            commands: CommandTable::new(),
            issues: Vec::new(),
        };
        session.reset();
        session
    }

    /// Processes one input line.
    pub fn step(&mut self, line: &str) -> StepOutcome {
        self.issues.clear();
        if line.is_empty() {
            self.reset();
            return StepOutcome::Continue;
        }
        if let Some(command) = self.commands.lookup(line) {
            return self.run_command(command);
        }

        let mut tokens = sanitize(line);
        if tokens.len() > MAX_TOKENS {
            // Sanitized tokens are ASCII, so any byte offset is a char boundary.
            tokens.truncate(MAX_TOKENS);
            self.issues.push(ParseIssue::new(
                diagnostic::LINE_TOO_LONG,
                format!("only the first {MAX_TOKENS} symbols were read"),
                MAX_TOKENS,
            ));
        }
        let mut body = tokens.as_str();

        if let Some(op) = leading_operator(body) {
            self.set_pending(op);
            body = &body[1..];
        }
        let trailing = trailing_operator(body);
        if trailing.is_some() {
            body = &body[..body.len() - 1];
        }

        if !body.is_empty() {
            self.push_operand(body);
        }
        self.fire();

        if let Some(op) = trailing {
            self.set_pending(op);
            self.fire();
        }
        StepOutcome::Continue
    }

    /// Processes `line` and, unless it asked to quit, renders the new state.
    pub fn step_and_render(
        &mut self,
        line: &str,
        sink: &mut dyn DisplaySink,
    ) -> CalcResult<StepOutcome> {
        let outcome = self.step(line);
        if outcome == StepOutcome::Continue {
            sink.render(&self.view())?;
        }
        Ok(outcome)
    }

    /// Back to a single `0` with no pending operator.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.stack.push(0);
        self.history.reset();
        self.state = SessionState::NoPendingOp;
    }

    /// Switches the active width and re-masks everything already on the stack.
    pub fn set_width(&mut self, requested: u32) {
        self.cfg = MaskConfig::with_width(requested);
        self.stack.remask(self.cfg);
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn pending(&self) -> Option<Operator> {
        match self.state {
            SessionState::PendingOp(op) => Some(op),
            SessionState::NoPendingOp => None,
        }
    }

    pub fn top(&self) -> u64 {
        self.stack.top().unwrap_or(0)
    }

    pub fn stack(&self) -> &NumberStack {
        &self.stack
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn mask(&self) -> MaskConfig {
        self.cfg
    }

    pub fn panels(&self) -> Panels {
        self.panels
    }

    pub fn set_panels(&mut self, panels: Panels) {
        self.panels = panels;
    }

    /// Issues reported while parsing the most recent line.
    pub fn last_issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    pub fn view(&self) -> DisplayView<'_> {
        DisplayView {
            value: self.top(),
            pending: self.pending(),
            cfg: self.cfg,
            history: self.history.entries(),
            panels: self.panels,
        }
    }

    fn run_command(&mut self, command: Command) -> StepOutcome {
        match command {
            Command::Quit => return StepOutcome::Quit,
            Command::Toggle(panel) => self.panels.toggle(panel),
            Command::SetWidth(requested) => self.set_width(requested),
        }
        StepOutcome::Continue
    }

    fn set_pending(&mut self, op: Operator) {
        self.state = SessionState::PendingOp(op);
        self.history.push_operator(op);
    }

    /// Evaluates `body` and pushes the result. Without a pending operator the new value
    /// starts a fresh calculation and replaces whatever was displayed.
    fn push_operand(&mut self, body: &str) {
        let (expr, issues) = parse_with_issues(body.to_string(), self.cfg);
        let value = evaluate(&expr, self.cfg);
        if self.state == SessionState::NoPendingOp {
            self.stack.clear();
            self.history.clear();
        }
        self.stack.push(value);
        match literal_radix(body) {
            Some(radix) => self.history.push_number(value, radix, self.cfg),
            None => self.history.push_text(body),
        }
        self.issues.extend(issues);
    }

    /// Applies the pending operator once enough operands are on the stack.
    fn fire(&mut self) {
        let SessionState::PendingOp(op) = self.state else {
            return;
        };
        if self.stack.len() < op.arity() {
            return;
        }
        let first = self.stack.pop().unwrap_or(0);
        let second = if op.arity() == 2 {
            self.stack.pop().unwrap_or(0)
        } else {
            0
        };
        self.stack.push(op.apply(self.cfg, first, second));
        self.state = SessionState::NoPendingOp;
    }
}

/// Every operator symbol is accepted at the start of a line; a leading `(` is not an
/// operator and opens an expression instead.
fn leading_operator(tokens: &str) -> Option<Operator> {
    tokens.chars().next().and_then(Operator::from_symbol)
}

fn trailing_operator(tokens: &str) -> Option<Operator> {
    tokens.chars().last().and_then(Operator::from_symbol)
}

/// Radix of `body` when it is nothing but a single literal.
fn literal_radix(body: &str) -> Option<Radix> {
    if body.contains([LPAREN, RPAREN]) {
        return None;
    }
    let (radix, digits) = if let Some(rest) = body.strip_prefix("0x").or(body.strip_prefix('x')) {
        (Radix::Hex, rest)
    } else if let Some(rest) = body.strip_prefix("0b").or(body.strip_prefix('b')) {
        (Radix::Binary, rest)
    } else {
        (Radix::Decimal, body)
    };
    if digits.is_empty() || !digits.chars().all(|ch| radix.accepts(ch)) {
        return None;
    }
    Some(radix)
}
