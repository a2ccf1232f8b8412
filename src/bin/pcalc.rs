//! Interactive front end for the calculator.
//!
//! `rustyline` owns cursor movement and arrow-key recall; every accepted line goes through
//! the session and a text frame is printed after it. Run with `--script FILE` to replay a
//! file of input lines instead.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use pcalc::engine::{CalcError, CalcResult};
use pcalc::session::{DisplaySink, Panels, Session, StepOutcome, TextDisplay, replay_path_with};

const EXIT_FATAL: u8 = 2;
const PROMPT: &str = "Number or operator: ";

#[derive(Parser, Debug)]
#[command(
    name = "pcalc",
    version,
    about = "Programmer's calculator over fixed-width integers"
)]
struct Cli {
    #[arg(
        short = 'i',
        long = "history",
        action = ArgAction::SetTrue,
        help = "Hide the history panel"
    )]
    hide_history: bool,
    #[arg(
        short = 'b',
        long = "binary",
        action = ArgAction::SetTrue,
        help = "Hide the binary panel"
    )]
    hide_binary: bool,
    #[arg(short = 'x', long = "hex", action = ArgAction::SetTrue, help = "Hide the hex panel")]
    hide_hex: bool,
    #[arg(
        short = 'd',
        long = "decimal",
        action = ArgAction::SetTrue,
        help = "Hide the decimal panel"
    )]
    hide_decimal: bool,
    #[arg(
        short = 'o',
        long = "operation",
        action = ArgAction::SetTrue,
        help = "Hide the pending operation panel"
    )]
    hide_operation: bool,
    #[arg(
        short = 's',
        long = "symbol",
        action = ArgAction::SetTrue,
        help = "Hide the operator legend"
    )]
    hide_symbols: bool,
    #[arg(
        short = 'w',
        long = "width",
        value_name = "BITS",
        default_value_t = 64,
        long_help = "Initial word width in bits. Values outside 1..=64 fall back to 64."
    )]
    width: u32,
    #[arg(
        long = "script",
        value_name = "FILE",
        help = "Replay input lines from FILE and exit"
    )]
    script: Option<PathBuf>,
    #[arg(
        long = "diagnostics",
        action = ArgAction::SetTrue,
        help = "Print parse issues to stderr"
    )]
    diagnostics: bool,
}

impl Cli {
    fn panels(&self) -> Panels {
        let mut panels = Panels::all();
        panels.set(Panels::HISTORY, !self.hide_history);
        panels.set(Panels::BINARY, !self.hide_binary);
        panels.set(Panels::HEX, !self.hide_hex);
        panels.set(Panels::DECIMAL, !self.hide_decimal);
        panels.set(Panels::OPERATION, !self.hide_operation);
        panels.set(Panels::SYMBOLS, !self.hide_symbols);
        panels
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pcalc: {err}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn run(cli: &Cli) -> CalcResult<()> {
    let mut session = Session::with_width(cli.width);
    session.set_panels(cli.panels());
    let mut display = TextDisplay::new(io::stdout());

    if let Some(path) = &cli.script {
        replay_path_with(path, &mut session, &mut display, |session| report_issues(cli, session))?;
        return Ok(());
    }

    display.render(&session.view())?;
    let mut editor = DefaultEditor::new().map_err(|err| CalcError::Input(err.to_string()))?;
    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                let outcome = session.step_and_render(&line, &mut display)?;
                report_issues(cli, &session);
                if outcome == StepOutcome::Quit {
                    break;
                }
            }
            // Ctrl-C and Ctrl-D both end the session cleanly.
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(CalcError::Input(err.to_string())),
        }
    }
    Ok(())
}

fn report_issues(cli: &Cli, session: &Session) {
    if !cli.diagnostics {
        return;
    }
    for issue in session.last_issues() {
        eprintln!("pcalc: {}", issue.format_human());
    }
}
