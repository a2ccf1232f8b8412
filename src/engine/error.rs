use std::{error::Error, fmt};

pub type CalcResult<T> = Result<T, CalcError>;

/// Failures that can escape the calculator. Sanitizing, parsing and evaluating never fail;
/// only the edges that talk to the outside world (line sources, display sinks) do.
#[derive(Debug)]
pub enum CalcError {
    Io(std::io::Error),
    Input(String),
    Display(String),
}

impl From<std::io::Error> for CalcError {
    fn from(err: std::io::Error) -> Self {
        CalcError::Io(err)
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::Io(err) => write!(f, "I/O error: {err}"),
            CalcError::Input(msg) => write!(f, "input error: {msg}"),
            CalcError::Display(msg) => write!(f, "display error: {msg}"),
        }
    }
}

impl Error for CalcError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CalcError::Io(err) => Some(err),
            _ => None,
        }
    }
}
