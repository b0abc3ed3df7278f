//! Semantic analysis: classify each validated lexeme and record it as a
//! symbol-table entry.
//!
//! The table is an ordered sequence rebuilt from scratch on every compile
//! run; positions are 1-based input order. A lexeme that resolves through
//! the inverse table in one lookup carries its decoded symbol directly,
//! otherwise it is marked composite and decoded pair-by-pair by the final
//! code generator.

use std::fmt;

use crate::table::CodeTable;

/// Two-digit lexemes are single characters, anything longer is a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
  Char,
  Str,
}

impl fmt::Display for SymbolKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SymbolKind::Char => write!(f, "CHAR"),
      SymbolKind::Str => write!(f, "STRING"),
    }
  }
}

/// Value recorded for an entry: the whole-token decode when the inverse
/// table has one, else the composite marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolValue {
  Decoded(String),
  Composite,
}

impl fmt::Display for SymbolValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SymbolValue::Decoded(symbol) => write!(f, "{symbol}"),
      SymbolValue::Composite => write!(f, "Compuesto"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
  /// 1-based input position.
  pub position: usize,
  pub token: String,
  pub kind: SymbolKind,
  pub value: SymbolValue,
}

/// Ordered symbol table for one compile run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
  entries: Vec<SymbolEntry>,
}

impl SymbolTable {
  /// Classify `lexemes` in order. Total over lexically valid input: a
  /// two-digit lexeme that somehow misses the table decodes to "?" as a
  /// defensive fallback rather than failing.
  pub fn build(lexemes: &[&str], table: &CodeTable) -> Self {
    let entries = lexemes
      .iter()
      .enumerate()
      .map(|(i, lexeme)| {
        let kind = if lexeme.len() == 2 {
          SymbolKind::Char
        } else {
          SymbolKind::Str
        };
        let value = match table.decode(lexeme) {
          Some(symbol) => SymbolValue::Decoded(symbol.to_string()),
          None if kind == SymbolKind::Char => SymbolValue::Decoded("?".to_string()),
          None => SymbolValue::Composite,
        };
        SymbolEntry {
          position: i + 1,
          token: lexeme.to_string(),
          kind,
          value,
        }
      })
      .collect();
    Self { entries }
  }

  pub fn iter(&self) -> impl Iterator<Item = &SymbolEntry> {
    self.entries.iter()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl fmt::Display for SymbolTable {
  /// Render the aligned table the presentation layer prints.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(
      f,
      "| {:<3} | {:<20} | {:<10} | {:<15} |",
      "POS", "TOKEN", "KIND", "VALUE"
    )?;
    writeln!(f, "|{}|{}|{}|{}|", "-".repeat(5), "-".repeat(22), "-".repeat(12), "-".repeat(17))?;
    for entry in &self.entries {
      writeln!(
        f,
        "| {:<3} | {:<20} | {:<10} | {:<15} |",
        entry.position,
        entry.token,
        entry.kind.to_string(),
        entry.value.to_string()
      )?;
    }
    Ok(())
  }
}
