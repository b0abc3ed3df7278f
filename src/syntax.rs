//! Syntactic analysis: separator-placement rules on the raw input string.
//!
//! This stage runs on the untouched input, not on the lexer's blocks, and
//! runs after lexical validation. The two overlap on purpose: a leading
//! separator produces an empty block the lexer silently skips, and it is
//! this stage that reports it. Keep that ordering; callers rely on the
//! syntax stage owning separator placement errors.

use crate::error::{CompileResult, Diagnostic, Stage};
use crate::table::SEPARATOR;

/// Reject doubled separators and a separator at either end of the input.
pub fn check(input: &str) -> CompileResult<()> {
  let doubled: String = [SEPARATOR, SEPARATOR].iter().collect();
  if let Some(loc) = input.find(&doubled) {
    return Err(Diagnostic::at(
      Stage::Syntax,
      input,
      loc,
      "double separator (..) is not allowed",
    ));
  }

  if input.starts_with(SEPARATOR) {
    return Err(Diagnostic::at(
      Stage::Syntax,
      input,
      0,
      "leading separator is not allowed",
    ));
  }

  if input.ends_with(SEPARATOR) {
    return Err(Diagnostic::at(
      Stage::Syntax,
      input,
      input.len() - SEPARATOR.len_utf8(),
      "trailing separator is not allowed",
    ));
  }

  Ok(())
}
