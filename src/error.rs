//! Shared diagnostic utilities used across the translation pipeline.
//!
//! Diagnostics are kept lightweight on purpose – these routines format
//! messages pointing at the offending byte with a caret, and tag each
//! failure with the pipeline stage that raised it.

use std::fmt;

use snafu::Snafu;

pub type CompileResult<T> = Result<T, Diagnostic>;

/// Pipeline stage a diagnostic originates from. Only the two validating
/// stages can fail; everything downstream is total over validated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
  Lexical,
  Syntax,
}

impl fmt::Display for Stage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Stage::Lexical => write!(f, "lexical"),
      Stage::Syntax => write!(f, "syntax"),
    }
  }
}

#[derive(Debug, Snafu)]
pub enum Diagnostic {
  #[snafu(display("{stage} error: {message}\n{input_line}\n{marker}"))]
  WithLocation {
    stage: Stage,
    message: String,
    input_line: String,
    marker: String,
  },
  #[snafu(display("nothing to compile"))]
  EmptyInput,
}

impl Diagnostic {
  /// Construct a diagnostic anchored at a specific byte offset in the input.
  pub fn at(stage: Stage, input: &str, loc: usize, message: impl Into<String>) -> Self {
    let input_line = format!("'{input}'");
    let safe_loc = loc.min(input.len());
    let char_offset = input[..safe_loc].chars().count() + 1; // account for opening quote
    let marker = format!("{}^", " ".repeat(char_offset));
    Self::WithLocation {
      stage,
      message: message.into(),
      input_line,
      marker,
    }
  }

  /// Stage tag, when the failure came from a validating stage.
  pub fn stage(&self) -> Option<Stage> {
    match self {
      Self::WithLocation { stage, .. } => Some(*stage),
      Self::EmptyInput => None,
    }
  }

  pub fn message(&self) -> &str {
    match self {
      Self::WithLocation { message, .. } => message,
      Self::EmptyInput => "nothing to compile",
    }
  }
}
