//! Interactive session: accumulator stack, history, commands and the state machine that
//! ties them to the expression engine.

pub mod command;
pub mod display;
pub mod history;
pub mod machine;
pub mod replay;
pub mod stack;

pub use command::{Command, CommandTable, Panels};
pub use display::{DisplaySink, DisplayView, TextDisplay};
pub use history::History;
pub use machine::{Session, SessionState, StepOutcome};
pub use replay::{ReplayReport, replay, replay_path, replay_path_with, replay_with};
pub use stack::NumberStack;
