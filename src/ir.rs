//! Intermediate code generation: one decode instruction per symbol-table
//! entry, each bound to a fresh temporary.
//!
//! This pass is purely derivative – no decisions, no failure modes. The
//! temporary counter starts at 1 on every run and is never shared across
//! runs, so two compiles of the same input always produce the same listing.

use std::fmt;

use crate::symbols::SymbolTable;

/// Synthetic name for one decode operation, printed as `T1`, `T2`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Temp(pub u32);

impl fmt::Display for Temp {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "T{}", self.0)
  }
}

/// A single intermediate instruction binding a temporary to a decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instr {
  pub temp: Temp,
  pub token: String,
}

impl fmt::Display for Instr {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} = DECODE({})", self.temp, self.token)
  }
}

/// Emit one instruction per entry, in symbol-table order.
pub fn generate(symbols: &SymbolTable) -> Vec<Instr> {
  symbols
    .iter()
    .enumerate()
    .map(|(i, entry)| Instr {
      temp: Temp(i as u32 + 1),
      token: entry.token.clone(),
    })
    .collect()
}
