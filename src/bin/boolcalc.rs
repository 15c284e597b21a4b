//! Boolcalc: a simple boolean calculator working with files of formulas (one per line).
//!
//! # Commands
//!
//! - `boolcalc calc <input> [output]` - evaluate every formula
//! - `boolcalc cnf <input> [output]` - build the conjunctive normal form of every formula
//! - `boolcalc dnf <input> [output]` - build the disjunctive normal form of every formula
//! - `boolcalc zh <input> [output]` - build the Zhegalkin polynomial of every formula
//! - `boolcalc table <input>` - print the truth table of every formula
//! - `boolcalc isfull <input> [output]` - check if the formulas form a complete system

use anyhow::{bail, Context, Result};
use boolcalc::batch::{parse_lines, parse_system};
use boolcalc::{is_functionally_complete, Assignment, BooleanExpression};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "boolcalc")]
#[command(about = "Simple boolean calculator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate every formula and write `0` or `1` per line
    Calc {
        #[command(flatten)]
        files: Files,
        /// Value of variables in the formulas (otherwise formulas must be constant)
        #[arg(short, long)]
        default: Option<u8>,
    },
    /// Build the conjunctive normal form of every formula
    Cnf {
        #[command(flatten)]
        files: Files,
    },
    /// Build the disjunctive normal form of every formula
    Dnf {
        #[command(flatten)]
        files: Files,
    },
    /// Build the Zhegalkin polynomial of every formula
    Zh {
        #[command(flatten)]
        files: Files,
    },
    /// Print the truth table of every formula
    Table {
        /// File with one formula per line
        input: PathBuf,
        /// Abort on the first malformed formula instead of skipping it
        #[arg(long)]
        strict: bool,
    },
    /// Check if the formulas of the input file form a functionally complete system
    Isfull {
        /// File with one formula per line
        input: PathBuf,
        /// Output file (defaults to stdout)
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct Files {
    /// File with one formula per line
    input: PathBuf,
    /// Output file (defaults to stdout)
    output: Option<PathBuf>,
    /// Abort on the first malformed formula instead of skipping it
    #[arg(long)]
    strict: bool,
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Can't open file {}", path.display()))
}

fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("Can't open file {}", path.display())),
        None => io::stdout()
            .write_all(text.as_bytes())
            .context("Can't write to stdout"),
    }
}

/// Apply `render` to every formula of the input file, one output line per formula.
fn process_lines<F>(files: &Files, render: F) -> Result<()>
where
    F: Fn(&BooleanExpression) -> Result<String>,
{
    let input = read_input(&files.input)?;
    let mut output = String::new();
    for (line, result) in parse_lines(&input) {
        match result {
            Ok(expression) => match render(&expression) {
                Ok(text) => {
                    output.push_str(&text);
                    output.push('\n');
                }
                Err(e) if files.strict => return Err(e.context(format!("line {}", line))),
                Err(e) => eprintln!("Skipping line {}: {:#}", line, e),
            },
            Err(e) if files.strict => return Err(e.into()),
            Err(e) => eprintln!("Skipping {}", e),
        }
    }
    write_output(files.output.as_deref(), &output)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Calc { files, default } => {
            let default = match default {
                None => None,
                Some(0) => Some(false),
                Some(1) => Some(true),
                Some(other) => bail!("Default value must be 0 or 1, not {}", other),
            };
            process_lines(&files, |expression| {
                let value = match default {
                    Some(default) => expression.eval_with_default(default),
                    None => expression.eval(&Assignment::empty())?,
                };
                Ok(u8::from(value).to_string())
            })
        }
        Commands::Cnf { files } => {
            process_lines(&files, |expression| Ok(expression.cnf().to_string()))
        }
        Commands::Dnf { files } => {
            process_lines(&files, |expression| Ok(expression.dnf().to_string()))
        }
        Commands::Zh { files } => {
            process_lines(&files, |expression| Ok(expression.zhegalkin_string()))
        }
        Commands::Table { input, strict } => {
            let files = Files {
                input,
                output: None,
                strict,
            };
            process_lines(&files, |expression| {
                Ok(expression.truth_table_display().to_string())
            })
        }
        Commands::Isfull { input, output } => {
            let system = parse_system(&read_input(&input)?)?;
            let verdict = if is_functionally_complete(&system) {
                "yes"
            } else {
                "no"
            };
            write_output(output.as_deref(), &format!("{}\n", verdict))
        }
    }
}
