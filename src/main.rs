//! CLI front end: runs the pipeline over a code sequence and prints the
//! phase report, or resolves the keyboard direction for a single symbol.

use std::process;

use clap::{Parser, Subcommand};

use signcode::keyboard::Keyboard;
use signcode::{CodeTable, CompiledOutput, compile};

#[derive(Parser, Debug)]
#[command(
  name = "signcode",
  version,
  about = "Translate numeric sign codes to text through a compiler-style pipeline"
)]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Decode a sign-code sequence (blocks separated by '.') into text.
  Translate {
    /// Raw input, e.g. "1112.141911"
    input: String,
    /// Print only the decoded text, without the phase report.
    #[arg(short, long)]
    quiet: bool,
  },
  /// Print the code a virtual-keyboard key would insert.
  Encode {
    /// Key name: a letter, a word such as LUNES, or "espacio".
    symbol: String,
  },
  /// List every keyboard key and the text it inserts.
  Keys,
}

fn main() {
  env_logger::init();
  let cli = Cli::parse();
  let table = CodeTable::builtin();

  match cli.command {
    Command::Translate { input, quiet } => match compile(&input, &table) {
      Ok(output) => {
        if quiet {
          println!("{}", output.text);
        } else {
          print_report(&output);
        }
      }
      Err(err) => {
        eprintln!("{err}");
        process::exit(1);
      }
    },
    Command::Encode { symbol } => {
      let keyboard = Keyboard::new(&table);
      match keyboard.insertion(&symbol) {
        Some(text) => println!("{text}"),
        None => {
          eprintln!("unknown symbol: '{symbol}'");
          process::exit(1);
        }
      }
    }
    Command::Keys => {
      let keyboard = Keyboard::new(&table);
      for key in keyboard.keys() {
        let insertion = keyboard.insertion(key).unwrap_or("");
        println!("{key:<12} {insertion}");
      }
    }
  }
}

fn print_report(output: &CompiledOutput) {
  println!("== symbol table ==");
  print!("{}", output.symbols);

  println!("\n== intermediate code ==");
  for instr in &output.intermediate {
    println!("{instr}");
  }

  println!("\n== optimization ==");
  for action in &output.optimized {
    println!("{action}");
  }

  println!("\n== result ==");
  println!("{}", output.text);
}
