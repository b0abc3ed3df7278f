//! Optimization: collapse repeated lexemes into reuse of an earlier
//! temporary.
//!
//! The pass re-walks the symbol table with its own counter and its own
//! token-to-temporary map; it shares no state with the intermediate
//! generator. It is an accounting pass: the trace reports which decodes a
//! smarter backend could skip, but the final text never depends on it.
//! The map lives for one run only, so there is no cross-run memoization.

use std::collections::HashMap;
use std::fmt;

use crate::ir::Temp;
use crate::symbols::SymbolTable;

/// One line of the optimization trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptAction {
  /// First occurrence of a token: a fresh temporary is allocated.
  New { temp: Temp, token: String },
  /// Repeated token: the first occurrence's temporary is reused.
  Reuse { temp: Temp, token: String },
}

impl OptAction {
  pub fn temp(&self) -> Temp {
    match self {
      OptAction::New { temp, .. } | OptAction::Reuse { temp, .. } => *temp,
    }
  }

  pub fn is_reuse(&self) -> bool {
    matches!(self, OptAction::Reuse { .. })
  }
}

impl fmt::Display for OptAction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      OptAction::New { temp, token } => {
        write!(f, "[NEW]       {temp} = DECODE({token})")
      }
      OptAction::Reuse { temp, token } => {
        write!(f, "[OPTIMIZED] REUSE {temp} for {token}")
      }
    }
  }
}

/// Walk the symbol table in order, allocating a temporary on first sight
/// of a token and reusing it on every repeat, no matter how far apart the
/// occurrences are.
pub fn optimize(symbols: &SymbolTable) -> Vec<OptAction> {
  let mut assigned: HashMap<&str, Temp> = HashMap::new();
  let mut counter = 1;
  let mut trace = Vec::with_capacity(symbols.len());

  for entry in symbols.iter() {
    match assigned.get(entry.token.as_str()) {
      Some(&temp) => trace.push(OptAction::Reuse {
        temp,
        token: entry.token.clone(),
      }),
      None => {
        let temp = Temp(counter);
        counter += 1;
        assigned.insert(entry.token.as_str(), temp);
        trace.push(OptAction::New {
          temp,
          token: entry.token.clone(),
        });
      }
    }
  }

  trace
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::table::CodeTable;

  fn trace_for(lexemes: &[&str]) -> Vec<OptAction> {
    let table = CodeTable::builtin();
    optimize(&SymbolTable::build(lexemes, &table))
  }

  #[test]
  fn repeated_token_reuses_first_temp() {
    let trace = trace_for(&["11", "11"]);
    assert_eq!(trace.len(), 2);
    assert!(!trace[0].is_reuse());
    assert!(trace[1].is_reuse());
    assert_eq!(trace[0].temp(), trace[1].temp());
  }

  #[test]
  fn reuse_works_at_a_distance() {
    let trace = trace_for(&["11", "12", "13", "11"]);
    assert!(trace[3].is_reuse());
    assert_eq!(trace[3].temp(), trace[0].temp());
    // the intervening tokens keep their own fresh temporaries
    assert_eq!(trace[1].temp(), Temp(2));
    assert_eq!(trace[2].temp(), Temp(3));
  }

  #[test]
  fn distinct_tokens_never_reuse() {
    let trace = trace_for(&["11", "12", "1112"]);
    assert!(trace.iter().all(|a| !a.is_reuse()));
  }

  #[test]
  fn temp_count_matches_distinct_tokens() {
    let lexemes = ["11", "12", "11", "1112", "12", "11"];
    let trace = trace_for(&lexemes);
    let fresh = trace.iter().filter(|a| !a.is_reuse()).count();
    let mut distinct: Vec<&str> = lexemes.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    assert_eq!(fresh, distinct.len());
    // and never more temporaries than the intermediate generator emits
    assert!(fresh <= lexemes.len());
  }

  #[test]
  fn trace_is_deterministic() {
    let first = trace_for(&["11", "12", "11"]);
    let second = trace_for(&["11", "12", "11"]);
    assert_eq!(first, second);
  }
}
