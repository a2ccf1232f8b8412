//! Display sink seam between the session and whatever draws it.

use std::fmt::Write as _;
use std::io::Write;

use crate::engine::{CalcResult, MaskConfig, Operator};

use super::command::Panels;

const BITS_PER_ROW: u32 = 16;
const LEGEND_COLUMNS: usize = 5;

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct DisplayView<'a> {
    pub value: u64,
    pub pending: Option<Operator>,
    pub cfg: MaskConfig,
    pub history: &'a [String],
    pub panels: Panels,
}

pub trait DisplaySink {
    fn render(&mut self, view: &DisplayView<'_>) -> CalcResult<()>;
}

/// Plain-text renderer writing one frame per processed line.
pub struct TextDisplay<W: Write> {
    out: W,
}

impl<W: Write> TextDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for TextDisplay<W> {
    fn render(&mut self, view: &DisplayView<'_>) -> CalcResult<()> {
        self.out.write_all(format_view(view).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

pub fn format_view(view: &DisplayView<'_>) -> String {
    let mut frame = String::new();
    let value = view.cfg.apply(view.value);
    if view.panels.contains(Panels::OPERATION) {
        let symbol = view.pending.map(Operator::symbol).unwrap_or(' ');
        let _ = writeln!(frame, "Operation: {symbol}");
    }
    if view.panels.contains(Panels::DECIMAL) {
        let _ = writeln!(frame, "Decimal:   {}", value as i64);
    }
    if view.panels.contains(Panels::HEX) {
        let _ = writeln!(frame, "Hex:       0x{value:X}");
    }
    if view.panels.contains(Panels::BINARY) {
        let _ = writeln!(frame, "Binary:    {} bit", view.cfg.width());
        for row in binary_rows(value, view.cfg.width()) {
            let _ = writeln!(frame, "{row}");
        }
    }
    if view.panels.contains(Panels::HISTORY) {
        let _ = writeln!(frame, "History:   {}", view.history.join(" "));
    }
    if view.panels.contains(Panels::SYMBOLS) {
        for line in symbol_legend() {
            let _ = writeln!(frame, "{line}");
        }
    }
    frame
}

/// Renders the low `width` bits, most significant row first. Each row is labelled with the
/// index of its lowest bit; bits are split by one space, nibbles by two and bytes by three.
pub fn binary_rows(value: u64, width: u32) -> Vec<String> {
    let rows = width.div_ceil(BITS_PER_ROW);
    let mut lines = Vec::with_capacity(rows as usize);
    for row in (0..rows).rev() {
        let low = row * BITS_PER_ROW;
        let high = (low + BITS_PER_ROW).min(width);
        let mut line = format!("{low:>6}  ");
        for bit in (low..high).rev() {
            line.push(if (value >> bit) & 1 == 1 { '1' } else { '0' });
            if bit == low {
                break;
            }
            let gap = if bit % 8 == 0 {
                "   "
            } else if bit % 4 == 0 {
                "  "
            } else {
                " "
            };
            line.push_str(gap);
        }
        lines.push(line);
    }
    lines
}

pub fn symbol_legend() -> Vec<String> {
    Operator::ALL
        .chunks(LEGEND_COLUMNS)
        .map(|chunk| {
            chunk
                .iter()
                .map(|op| format!("{:<4} {}", op.mnemonic(), op.symbol()))
                .collect::<Vec<_>>()
                .join("    ")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    static NO_HISTORY: [String; 0] = [];

    fn view(value: u64, cfg: MaskConfig, panels: Panels) -> DisplayView<'static> {
        DisplayView {
            value,
            pending: Some(Operator::Add),
            cfg,
            history: &NO_HISTORY,
            panels,
        }
    }

    #[test]
    fn binary_rows_group_nibbles_and_bytes() {
        let rows = binary_rows(0x5A, 8);
        assert_eq!(rows, vec!["     0  0 1 0 1  1 0 1 0".to_string()]);
    }

    #[test]
    fn binary_rows_cover_full_width() {
        let rows = binary_rows(1, 64);
        assert_eq!(rows.len(), 4);
        assert!(rows[0].trim_start().starts_with("48"));
        assert!(rows[3].ends_with('1'));
        let rows = binary_rows(0, 20);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].trim_start().starts_with("16"));
    }

    #[test]
    fn panels_can_be_hidden() {
        let cfg = MaskConfig::with_width(8);
        let frame = format_view(&view(0xFF, cfg, Panels::HEX | Panels::DECIMAL));
        assert_eq!(frame, "Decimal:   255\nHex:       0xFF\n");
    }

    #[test]
    fn operation_panel_shows_pending_symbol() {
        let frame = format_view(&view(1, MaskConfig::default(), Panels::OPERATION));
        assert_eq!(frame, "Operation: +\n");
    }

    #[test]
    fn legend_lists_every_operator() {
        let legend = symbol_legend().join("\n");
        for op in Operator::ALL {
            assert!(legend.contains(op.mnemonic()), "{op:?}");
        }
    }

    #[test]
    fn text_display_writes_frames() {
        let mut display = TextDisplay::new(Vec::new());
        display
            .render(&view(7, MaskConfig::default(), Panels::DECIMAL))
            .expect("render frame");
        let out = String::from_utf8(display.into_inner()).expect("utf8 frame");
        assert_eq!(out, "Decimal:   7\n");
    }
}
