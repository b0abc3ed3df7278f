//! Virtual-keyboard support: the text-to-code direction.
//!
//! Every table symbol gets one key, plus the `espacio` key that inserts
//! the separator. The key-to-insertion mapping is resolved once at
//! startup from the code table; pressing a key is then a plain map
//! lookup, with no runtime reflection over widget names.

use std::collections::HashMap;

use crate::table::{CodeTable, SEPARATOR};

/// Key name for the separator. Kept from the original layout.
pub const SPACE_KEY: &str = "espacio";

/// Static mapping from key name to the text a key press inserts.
#[derive(Debug, Clone)]
pub struct Keyboard {
  insertions: HashMap<String, String>,
  order: Vec<String>,
}

impl Keyboard {
  /// Resolve every key against the table once. Symbols keep their numeric
  /// codes; the space key inserts the separator character.
  pub fn new(table: &CodeTable) -> Self {
    let mut insertions = HashMap::with_capacity(table.len() + 1);
    let mut order = Vec::with_capacity(table.len() + 1);
    for symbol in table.symbols() {
      if let Some(code) = table.encode(symbol) {
        insertions.insert(symbol.to_string(), code.to_string());
        order.push(symbol.to_string());
      }
    }
    insertions.insert(SPACE_KEY.to_string(), SEPARATOR.to_string());
    order.push(SPACE_KEY.to_string());
    Self { insertions, order }
  }

  /// Text inserted when `key` is pressed, or `None` for an unknown key.
  pub fn insertion(&self, key: &str) -> Option<&str> {
    self.insertions.get(key).map(String::as_str)
  }

  /// Key names in layout order (letters, words, then the space key).
  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.order.iter().map(String::as_str)
  }
}
