//! Crate root: wires together the sign-code translation pipeline.
//!
//! The stages are intentionally small and composable so they can be evolved
//! independently:
//! - `table` holds the fixed bidirectional symbol/code mapping.
//! - `lexer` splits raw input into blocks and validates them against the table.
//! - `syntax` enforces separator placement on the raw string.
//! - `symbols` classifies validated lexemes into an ordered symbol table.
//! - `ir` emits one decode instruction per entry with fresh temporaries.
//! - `opt` collapses repeated lexemes into reuse of earlier temporaries.
//! - `codegen` produces the decoded natural-language text.
//! - `keyboard` covers the reverse, text-to-code direction.
//! - `error` centralises diagnostics shared by the validating stages.
//!
//! Control flow is strictly linear, short-circuiting on the first failure
//! from the two validating stages. Every compile call owns its own symbol
//! table, counters and reuse map, so repeated invocations are independent.

pub mod codegen;
pub mod error;
pub mod ir;
pub mod keyboard;
pub mod lexer;
pub mod opt;
pub mod symbols;
pub mod syntax;
pub mod table;

pub use error::{CompileResult, Diagnostic, Stage};
pub use table::CodeTable;

/// Everything a successful compile produces: the classified symbol table,
/// the intermediate listing, the optimization trace and the decoded text.
#[derive(Debug, Clone)]
pub struct CompiledOutput {
  pub symbols: symbols::SymbolTable,
  pub intermediate: Vec<ir::Instr>,
  pub optimized: Vec<opt::OptAction>,
  pub text: String,
}

/// Run the whole pipeline over `input`.
///
/// Whitespace-only input is rejected before lexing. Lexical validation
/// runs first and syntax checking second; once both pass, the remaining
/// stages are total and cannot fail.
pub fn compile(input: &str, table: &CodeTable) -> CompileResult<CompiledOutput> {
  let input = input.trim();
  if input.is_empty() {
    return Err(Diagnostic::EmptyInput);
  }

  let lexemes = lexer::scan(input, table)?;
  syntax::check(input)?;
  log::debug!("validated {} lexeme(s)", lexemes.len());

  let symbols = symbols::SymbolTable::build(&lexemes, table);
  let intermediate = ir::generate(&symbols);
  let optimized = opt::optimize(&symbols);
  log::debug!(
    "emitted {} instruction(s), {} reused",
    intermediate.len(),
    optimized.iter().filter(|a| a.is_reuse()).count()
  );

  let text = codegen::generate(&symbols, table);
  Ok(CompiledOutput {
    symbols,
    intermediate,
    optimized,
    text,
  })
}

/// Direct table lookup for the virtual-keyboard insertion path; no
/// pipeline involved.
pub fn encode_symbol<'t>(symbol: &str, table: &'t CodeTable) -> Option<&'t str> {
  table.encode(symbol)
}
