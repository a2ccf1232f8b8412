//! Whole-line commands recognized before a line is treated as arithmetic.

use ahash::AHashMap;
use bitflags::bitflags;

bitflags! {
    /// Display panels the front end is allowed to draw.
    #[derive(Debug, PartialEq, Eq, Copy, Clone)]
    pub struct Panels: u8 {
        const OPERATION = 0b1;
        const DECIMAL   = 0b10;
        const HEX       = 0b100;
        const BINARY    = 0b1000;
        const HISTORY   = 0b1_0000;
        const SYMBOLS   = 0b10_0000;
    }
}

impl Default for Panels {
    fn default() -> Self {
        Panels::all()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Toggle(Panels),
    /// Requested width exactly as typed; clamping happens in `MaskConfig::with_width`.
    SetWidth(u32),
}

const WIDTH_KEYWORD: &str = "bit";

/// Exact-match keyword lookup plus the free-form `bit<N>` width command.
pub struct CommandTable {
    keywords: AHashMap<&'static str, Command>,
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandTable {
    pub fn new() -> Self {
        let mut keywords = AHashMap::new();
        keywords.insert("quit", Command::Quit);
        keywords.insert("q", Command::Quit);
        keywords.insert("exit", Command::Quit);
        keywords.insert("binary", Command::Toggle(Panels::BINARY));
        keywords.insert("hex", Command::Toggle(Panels::HEX));
        keywords.insert("decimal", Command::Toggle(Panels::DECIMAL));
        keywords.insert("history", Command::Toggle(Panels::HISTORY));
        keywords.insert("operation", Command::Toggle(Panels::OPERATION));
        Self { keywords }
    }

    /// Classifies `line`. Keywords are case-sensitive and must match the whole line.
    pub fn lookup(&self, line: &str) -> Option<Command> {
        if let Some(command) = self.keywords.get(line) {
            return Some(*command);
        }
        let at = line.find(WIDTH_KEYWORD)?;
        let after = &line[at + WIDTH_KEYWORD.len()..];
        let requested = first_decimal(after)
            .or_else(|| last_decimal(&line[..at]))
            .unwrap_or(0);
        Some(Command::SetWidth(requested))
    }
}

/// First digit run in `text`. A run signed with `-` is a non-positive request.
fn first_decimal(text: &str) -> Option<u32> {
    let start = text.find(|ch: char| ch.is_ascii_digit())?;
    if text[..start].ends_with('-') {
        return Some(0);
    }
    let digits: String = text[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    Some(digits.parse().unwrap_or(0))
}

/// Last digit run in `text`. Digits are ASCII, so byte offsets next to them are always
/// char boundaries.
fn last_decimal(text: &str) -> Option<u32> {
    let bytes = text.as_bytes();
    let end = bytes.iter().rposition(u8::is_ascii_digit)? + 1;
    let start = bytes[..end]
        .iter()
        .rposition(|byte| !byte.is_ascii_digit())
        .map_or(0, |idx| idx + 1);
    if text[..start].ends_with('-') {
        return Some(0);
    }
    Some(text[start..end].parse().unwrap_or(0))
}
