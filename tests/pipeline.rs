//! End-to-end pipeline scenarios over the builtin code table.

use signcode::error::Stage;
use signcode::opt::OptAction;
use signcode::symbols::SymbolKind;
use signcode::{CodeTable, Diagnostic, compile, encode_symbol};

fn table() -> CodeTable {
  CodeTable::builtin()
}

#[test]
fn letter_run_decodes_to_word() {
  let output = compile("1112", &table()).expect("valid input");
  assert_eq!(output.text, "ab");
}

#[test]
fn separator_splits_words() {
  let output = compile("11.12", &table()).expect("single separators are valid");
  assert_eq!(output.text, "a b");
}

#[test]
fn weekday_code_decodes_to_its_name() {
  let output = compile("2231241529", &table()).expect("valid input");
  assert_eq!(output.text, "LUNES");
}

#[test]
fn mixed_sentence() {
  // DIA as a whole word, then "ab" spelled from letter pairs
  let output = compile("141911.1112", &table()).expect("valid input");
  assert_eq!(output.text, "DIA ab");
}

#[test]
fn double_separator_is_a_syntax_error() {
  let err = compile("11..12", &table()).expect_err("must fail");
  assert_eq!(err.stage(), Some(Stage::Syntax));
  assert!(err.message().contains("double separator"));
}

#[test]
fn leading_separator_is_a_syntax_error() {
  // the lexer skips the empty block; the syntax stage reports the separator
  let err = compile(".1112", &table()).expect_err("must fail");
  assert_eq!(err.stage(), Some(Stage::Syntax));
  assert!(err.message().contains("leading separator"));
}

#[test]
fn odd_length_block_is_a_lexical_error() {
  let err = compile("123", &table()).expect_err("must fail");
  assert_eq!(err.stage(), Some(Stage::Lexical));
  assert!(err.message().contains("odd-length"));
}

#[test]
fn unknown_code_is_a_lexical_error() {
  let err = compile("99", &table()).expect_err("must fail");
  assert_eq!(err.stage(), Some(Stage::Lexical));
  assert!(err.message().contains("unknown code"));
}

#[test]
fn non_ascii_input_is_a_lexical_error() {
  let err = compile("€€", &table()).expect_err("must fail, not panic");
  assert_eq!(err.stage(), Some(Stage::Lexical));
  assert!(err.message().contains("unknown code"));
}

#[test]
fn lexical_failure_reports_before_syntax() {
  // "99." has both an unknown code and a trailing separator; the lexer
  // runs first and wins
  let err = compile("99.", &table()).expect_err("must fail");
  assert_eq!(err.stage(), Some(Stage::Lexical));
}

#[test]
fn empty_input_is_rejected_before_lexing() {
  let err = compile("   ", &table()).expect_err("must fail");
  assert!(matches!(err, Diagnostic::EmptyInput));
  assert_eq!(err.stage(), None);
}

#[test]
fn repeated_token_is_collapsed_by_the_optimizer() {
  let output = compile("11.11", &table()).expect("valid input");

  let kinds: Vec<_> = output.symbols.iter().map(|e| e.kind).collect();
  assert_eq!(kinds, vec![SymbolKind::Char, SymbolKind::Char]);

  assert_eq!(output.intermediate.len(), 2);
  assert_eq!(output.optimized.len(), 2);
  assert!(matches!(output.optimized[0], OptAction::New { .. }));
  assert!(matches!(output.optimized[1], OptAction::Reuse { .. }));
  assert_eq!(output.optimized[0].temp(), output.optimized[1].temp());

  assert_eq!(output.text, "a a");
}

#[test]
fn optimizer_temp_count_is_bounded() {
  let output = compile("11.12.11.1112.12", &table()).expect("valid input");
  let fresh = output.optimized.iter().filter(|a| !a.is_reuse()).count();
  // never more temporaries than the intermediate generator allocates,
  // never fewer than the distinct tokens (11, 12, 1112)
  assert!(fresh <= output.intermediate.len());
  assert_eq!(fresh, 3);
}

#[test]
fn compiling_twice_is_idempotent() {
  let first = compile("11.12.11", &table()).expect("valid input");
  let second = compile("11.12.11", &table()).expect("valid input");
  assert_eq!(first.text, second.text);
  assert_eq!(first.optimized, second.optimized);
  assert_eq!(first.intermediate, second.intermediate);
}

#[test]
fn keyboard_direction_round_trips_through_the_pipeline() {
  let table = table();
  let code = encode_symbol("h", &table).expect("letter has a code");
  let output = compile(code, &table).expect("encoded letter compiles");
  assert_eq!(output.text, "h");
}
