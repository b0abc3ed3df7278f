//! Lexical analysis: splits raw input into separator-delimited blocks and
//! validates each one against the code table.
//!
//! The lexer is intentionally tiny – it knows nothing about structure
//! beyond the separator. Empty blocks (from a doubled or dangling
//! separator) are skipped here and left for the syntax stage to report.
//! Validation fails fast on the first bad block.

use crate::error::{CompileResult, Diagnostic, Stage};
use crate::table::{CodeTable, SEPARATOR};

/// Split `input` on the separator and validate every non-empty block.
///
/// A block is valid when its digit count is even and it either matches a
/// whole word code or decomposes into consecutive two-digit letter codes.
/// Returns the blocks in input order.
pub fn scan<'a>(input: &'a str, table: &CodeTable) -> CompileResult<Vec<&'a str>> {
  let mut lexemes = Vec::new();
  let mut offset = 0;

  for block in input.split(SEPARATOR) {
    if block.is_empty() {
      offset += 1;
      continue;
    }

    if block.len() % 2 != 0 {
      return Err(Diagnostic::at(
        Stage::Lexical,
        input,
        offset,
        format!("odd-length block: '{block}'"),
      ));
    }

    // Codes are digit strings; anything else can never match the table.
    // Checking here also keeps the pairwise walk on ASCII, so two-byte
    // slicing below cannot land inside a multibyte character.
    if !block.bytes().all(|b| b.is_ascii_digit()) {
      return Err(Diagnostic::at(
        Stage::Lexical,
        input,
        offset,
        format!("unknown code: '{block}'"),
      ));
    }

    if table.decode(block).is_none() && !decomposes_into_letters(block, table) {
      return Err(Diagnostic::at(
        Stage::Lexical,
        input,
        offset,
        format!("unknown code: '{block}'"),
      ));
    }

    lexemes.push(block);
    offset += block.len() + 1;
  }

  Ok(lexemes)
}

/// True when every consecutive two-digit pair of `block` is a letter code.
fn decomposes_into_letters(block: &str, table: &CodeTable) -> bool {
  debug_assert_eq!(block.len() % 2, 0);
  let mut i = 0;
  while i + 2 <= block.len() {
    if !table.is_letter_code(&block[i..i + 2]) {
      return false;
    }
    i += 2;
  }
  true
}
