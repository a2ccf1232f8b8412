use pcalc::engine::{MaskConfig, Operator, calculate};
use pcalc::session::{Panels, Session, SessionState, StepOutcome};

fn session_after(lines: &[&str]) -> Session {
    let mut session = Session::new();
    for line in lines {
        assert_eq!(session.step(line), StepOutcome::Continue, "line {line:?}");
    }
    session
}

#[test]
fn one_line_expressions_follow_precedence() {
    let cfg = MaskConfig::default();
    assert_eq!(calculate("2 + 3 * 4", cfg), 14);
    assert_eq!(calculate("(2 + 3) * 4", cfg), 20);
    assert_eq!(calculate("10 - 3 - 2", cfg), 5);
    assert_eq!(calculate("5 / 0", cfg), 0);
}

#[test]
fn split_input_matches_single_line() {
    let split = session_after(&["5", "+", "3"]);
    let joined = session_after(&["5+3"]);
    assert_eq!(split.top(), joined.top());
    assert_eq!(split.top(), 8);
}

#[test]
fn narrowing_width_remasks_existing_values() {
    let mut session = session_after(&["0xff"]);
    session.step("bit 4");
    assert_eq!(session.top(), 0xF);
    session.step("bit 64");
    assert_eq!(session.top(), 0xF, "widening does not restore dropped bits");
}

#[test]
fn rotation_respects_session_width() {
    let mut session = Session::with_width(16);
    session.step("0x8001");
    session.step(":4");
    assert_eq!(session.top(), 0x0018);
    session.step(";4");
    assert_eq!(session.top(), 0x8001);
}

#[test]
fn empty_line_resets_from_any_state() {
    for lines in [&["7", "*"][..], &["1+1"][..], &["bit8", "0x1ff", "-"][..]] {
        let mut session = session_after(lines);
        session.step("");
        assert_eq!(session.stack().as_slice(), &[0]);
        assert_eq!(session.history().entries(), &["0"]);
        assert_eq!(session.state(), SessionState::NoPendingOp);
    }
}

#[test]
fn calculator_style_chain() {
    let mut session = Session::with_width(8);
    for line in ["200", "+", "100", "*", "2", "_"] {
        session.step(line);
    }
    // (200 + 100) wraps to 44, doubled to 88, negated to 168.
    assert_eq!(session.top(), 168);
    assert_eq!(session.pending(), None);
}

#[test]
fn endianness_swap_from_the_prompt() {
    let mut session = Session::with_width(32);
    session.step("0x12345678");
    session.step("@");
    assert_eq!(session.top(), 0x7856_3412);
}

#[test]
fn view_reflects_session() {
    let mut session = session_after(&["0x2a", "-"]);
    session.step("hex");
    let view = session.view();
    assert_eq!(view.value, 42);
    assert_eq!(view.pending, Some(Operator::Sub));
    assert!(!view.panels.contains(Panels::HEX));
    assert_eq!(view.history, &["0x2A", "-"]);
}

#[test]
fn non_ascii_lines_never_crash_the_session() {
    let mut session = Session::with_width(8);
    for line in ["é16bit", "größe 32 bit", "€", "ü0x2a", "bit ñ"] {
        assert_eq!(session.step(line), StepOutcome::Continue, "line {line:?}");
    }
    assert_eq!(session.mask().width(), 64);
    assert_eq!(session.top(), 0x2a);
}

#[test]
fn negative_width_request_falls_back_to_64() {
    let mut session = Session::with_width(8);
    session.step("bit -5");
    assert_eq!(session.mask().width(), 64);
    session.step("bit 8");
    session.step("-12bit");
    assert_eq!(session.mask().width(), 64);
}

#[test]
fn overlong_lines_are_cut_at_the_limit() {
    let mut session = Session::new();
    session.step(&vec!["1"; 300_000].join("+"));
    assert_eq!(session.top(), 128);
    assert_eq!(session.pending(), Some(Operator::Add));
    assert!(!session.last_issues().is_empty());

    session.step("");
    session.step(&"(".repeat(50_000));
    assert_eq!(session.top(), 0);
    session.step(&"~".repeat(50_000));
    assert_eq!(session.state(), SessionState::NoPendingOp);
}
