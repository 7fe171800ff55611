use calculon::{LexError, Session, Variable};

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
}

#[test]
fn commit_stores_the_answer() {
    let mut session = Session::new();

    assert_eq!(session.commit("6 x 7").unwrap(), 42.0);
    assert_eq!(session.variable(Variable::Answer), 42.0);
    assert_eq!(session.commit("ANS ÷ 2").unwrap(), 21.0);
    assert_eq!(session.commit("ANS - 1").unwrap(), 20.0);
}

#[test]
fn commit_keeps_the_value_on_display() {
    let mut session = Session::new();

    assert_eq!(session.preview("2 x (3 + 4").unwrap(), 14.0);
    assert_eq!(session.commit("2 x (3 + 4").unwrap(), 14.0);
    assert_eq!(session.variable(Variable::Answer), 14.0);

    assert_eq!(session.commit("3 +").unwrap(), 3.0);
    assert_eq!(session.variable(Variable::Answer), 3.0);

    assert_eq!(session.commit("1 + 2 x").unwrap(), 3.0);
    assert_eq!(session.commit("2 x (").unwrap(), 2.0);
}

#[test]
fn undefined_entries_fall_back_to_zero() {
    let mut session = Session::with_variables(5.0, 7.0);

    assert_eq!(session.commit("√-1").unwrap(), 0.0);
    assert_eq!(session.variable(Variable::Answer), 0.0);
    assert_eq!(session.store("").unwrap(), 0.0);
    assert_eq!(session.variable(Variable::Memory), 0.0);
}

#[test]
fn store_keeps_the_value_on_display() {
    let mut session = Session::new();

    assert_eq!(session.store("2 +").unwrap(), 2.0);
    assert_eq!(session.variable(Variable::Memory), 2.0);
    assert_eq!(session.variable(Variable::Answer), 0.0);
}

#[test]
fn displayed_follows_the_preview_while_defined() {
    let session = Session::new();

    assert_eq!(session.displayed("((1 + 1").unwrap(), 2.0);
    assert_eq!(session.displayed("9 ÷ 3 –").unwrap(), 3.0);
    assert!(session.preview("9 ÷ 3 –").unwrap().is_nan());
}

#[test]
fn memory_is_independent_of_answer() {
    let mut session = Session::new();

    assert_eq!(session.store("3²").unwrap(), 9.0);
    assert_eq!(session.commit("MEM + 1").unwrap(), 10.0);
    assert_eq!(session.variable(Variable::Memory), 9.0);
    assert_eq!(session.evaluate("ANS x MEM").unwrap(), 90.0);
}

#[test]
fn preview_closes_open_groups() {
    let session = Session::new();

    assert_eq!(session.preview("2 x (3 + 4").unwrap(), 14.0);
    assert_eq!(session.preview("((1 + 1").unwrap(), 2.0);
    assert_close(session.preview("3√(8").unwrap(), 2.0);
    assert!(session.evaluate("2 x (3 + 4").unwrap().is_nan());
}

#[test]
fn preview_does_not_hide_early_closes() {
    let session = Session::new();

    assert!(session.preview("1 + 2)").unwrap().is_nan());
    assert!(session.preview(")(").unwrap().is_nan());
}

#[test]
fn preview_of_incomplete_input() {
    let session = Session::new();

    assert!(session.preview("").unwrap().is_nan());
    assert!(session.preview("3 +").unwrap().is_nan());
    assert!(session.preview("(").unwrap().is_nan());
}

#[test]
fn empty_and_malformed_input_parse_differently() {
    let session = Session::new();

    assert!(session.parse("").unwrap().is_empty());
    assert!(session.parse("   ").unwrap().is_empty());
    assert!(session.parse("3 +").unwrap().is_error());
    assert!(session.parse("()").unwrap().is_error());
}

#[test]
fn text_notation_end_to_end() {
    let session = Session::new();

    assert_eq!(session.evaluate("2^3^2").unwrap(), 512.0);
    assert_eq!(session.evaluate("(1–2)–3").unwrap(), -4.0);
    assert_eq!(session.evaluate("-100 % 3").unwrap(), 2.0);
    assert_eq!(session.evaluate("3! + 1").unwrap(), 7.0);
    assert_eq!(session.evaluate("~-3 x ∑4").unwrap(), 30.0);
    assert_eq!(session.evaluate("⅟4").unwrap(), 0.25);
    assert_close(session.evaluate("3√-27").unwrap(), -3.0);
    assert_close(session.evaluate("2 *√ 2 *√ 10000").unwrap(), 10.0);
}

#[test]
fn lex_errors_propagate() {
    let mut session = Session::new();

    assert_eq!(session.commit("2 + a"),
               Err(LexError::UnexpectedCharacter { text:   "a".to_string(),
                                                   offset: 4, }));
    assert_eq!(session.variable(Variable::Answer), 0.0);
    assert!(session.preview("1 $ 2").is_err());
}
