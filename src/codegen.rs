//! Final code generation: walk the symbol table and produce the decoded
//! natural-language string.
//!
//! Whole-token matches (letters, weekday names) decode in one lookup;
//! composite tokens are decoded pair by pair. A pair that misses the table
//! renders as "?" – unreachable once lexical validation has passed, kept
//! as a fallback rather than an error path.

use crate::symbols::SymbolTable;
use crate::table::CodeTable;

/// Decode every entry and join the words with single spaces.
pub fn generate(symbols: &SymbolTable, table: &CodeTable) -> String {
  let mut words = Vec::with_capacity(symbols.len());

  for entry in symbols.iter() {
    match table.decode(&entry.token) {
      Some(symbol) => words.push(symbol.to_string()),
      None => words.push(decode_pairs(&entry.token, table)),
    }
  }

  words.join(" ").trim().to_string()
}

fn decode_pairs(token: &str, table: &CodeTable) -> String {
  let mut word = String::new();
  let mut i = 0;
  while i + 2 <= token.len() {
    // get() rather than slicing: a pair that is not a char boundary (only
    // possible for tokens that bypassed lexing) falls back like a miss
    let symbol = token.get(i..i + 2).and_then(|pair| table.decode(pair));
    word.push_str(symbol.unwrap_or("?"));
    i += 2;
  }
  word
}
