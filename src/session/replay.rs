//! Non-interactive replay of a line source through a session.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::engine::CalcResult;

use super::display::DisplaySink;
use super::machine::{Session, StepOutcome};

/// Summary of a replay run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayReport {
    /// Lines handed to the session, including a terminating quit command.
    pub lines: usize,
    pub quit: bool,
}

/// Feeds every line of `reader` through `session`, rendering after each one. Stops early
/// when a line asks to quit. Trailing `\r` from CRLF files is stripped.
pub fn replay<R: BufRead>(
    reader: R,
    session: &mut Session,
    sink: &mut dyn DisplaySink,
) -> CalcResult<ReplayReport> {
    replay_with(reader, session, sink, |_| {})
}

/// [`replay`] with `after_step` called once per line, after the line has been processed.
pub fn replay_with<R, F>(
    reader: R,
    session: &mut Session,
    sink: &mut dyn DisplaySink,
    mut after_step: F,
) -> CalcResult<ReplayReport>
where
    R: BufRead,
    F: FnMut(&Session),
{
    let mut report = ReplayReport {
        lines: 0,
        quit: false,
    };
    for line in reader.lines() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        report.lines += 1;
        let outcome = session.step_and_render(line, sink)?;
        after_step(session);
        if outcome == StepOutcome::Quit {
            report.quit = true;
            break;
        }
    }
    Ok(report)
}

pub fn replay_path(
    path: impl AsRef<Path>,
    session: &mut Session,
    sink: &mut dyn DisplaySink,
) -> CalcResult<ReplayReport> {
    let file = File::open(path.as_ref())?;
    replay(BufReader::new(file), session, sink)
}

pub fn replay_path_with<F: FnMut(&Session)>(
    path: impl AsRef<Path>,
    session: &mut Session,
    sink: &mut dyn DisplaySink,
    after_step: F,
) -> CalcResult<ReplayReport> {
    let file = File::open(path.as_ref())?;
    replay_with(BufReader::new(file), session, sink, after_step)
}
