//! The code table: a fixed bidirectional mapping between symbolic tokens
//! (single letters, weekday names, a couple of common words) and their
//! numeric string codes.
//!
//! The table is built once at startup and read-only afterwards. Single
//! letters always map to exactly two digits; word codes are the even-length
//! concatenation of their letters' digit pairs.

use std::collections::HashMap;

/// Separator between lexemes in raw input. The `espacio` keyboard key
/// inserts this character; it is not itself a numeric code.
pub const SEPARATOR: char = '.';

/// Fixed alphabet: letters a..z at codes 11..36, the weekday names and two
/// common words spelled out in letter codes.
const BUILTIN: &[(&str, &str)] = &[
  ("a", "11"),
  ("b", "12"),
  ("c", "13"),
  ("d", "14"),
  ("e", "15"),
  ("f", "16"),
  ("g", "17"),
  ("h", "18"),
  ("i", "19"),
  ("j", "20"),
  ("k", "21"),
  ("l", "22"),
  ("m", "23"),
  ("n", "24"),
  ("o", "25"),
  ("p", "26"),
  ("q", "27"),
  ("r", "28"),
  ("s", "29"),
  ("t", "30"),
  ("u", "31"),
  ("v", "32"),
  ("w", "33"),
  ("x", "34"),
  ("y", "35"),
  ("z", "36"),
  ("LUNES", "2231241529"),
  ("MARTES", "231128301529"),
  ("MIERCOLES", "231915281325221529"),
  ("JUEVES", "203115321529"),
  ("VIERNES", "32191528241529"),
  ("SABADO", "291112111425"),
  ("DOMINGO", "14252319241725"),
  ("DIA", "141911"),
  ("SEMANA", "291523112411"),
];

/// Bidirectional symbol/code mapping. The forward and inverse maps are
/// exact inverses: no code names two symbols, no symbol names two codes.
#[derive(Debug, Clone)]
pub struct CodeTable {
  forward: HashMap<String, String>,
  inverse: HashMap<String, String>,
  order: Vec<String>,
}

impl CodeTable {
  /// Table carrying the fixed alphabet. Constructed once at startup.
  pub fn builtin() -> Self {
    Self::from_entries(BUILTIN)
  }

  fn from_entries(entries: &[(&str, &str)]) -> Self {
    let mut forward = HashMap::with_capacity(entries.len());
    let mut inverse = HashMap::with_capacity(entries.len());
    let mut order = Vec::with_capacity(entries.len());
    for &(symbol, code) in entries {
      let prev_code = forward.insert(symbol.to_string(), code.to_string());
      let prev_symbol = inverse.insert(code.to_string(), symbol.to_string());
      debug_assert!(prev_code.is_none(), "duplicate symbol: {symbol}");
      debug_assert!(prev_symbol.is_none(), "duplicate code: {code}");
      order.push(symbol.to_string());
    }
    Self {
      forward,
      inverse,
      order,
    }
  }

  /// Look a numeric code up in the inverse table.
  pub fn decode(&self, code: &str) -> Option<&str> {
    self.inverse.get(code).map(String::as_str)
  }

  /// Look a symbol up in the forward table.
  pub fn encode(&self, symbol: &str) -> Option<&str> {
    self.forward.get(symbol).map(String::as_str)
  }

  /// True when `code` is a two-digit letter code.
  pub fn is_letter_code(&self, code: &str) -> bool {
    code.len() == 2 && self.inverse.contains_key(code)
  }

  /// Symbols in table-definition order (letters first, then words).
  pub fn symbols(&self) -> impl Iterator<Item = &str> {
    self.order.iter().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.order.len()
  }

  pub fn is_empty(&self) -> bool {
    self.order.is_empty()
  }
}
