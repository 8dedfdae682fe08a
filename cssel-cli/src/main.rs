//! cssel CLI
//!
//! Build selectors, compute rectangle areas and round-trip JSON objects
//! from the terminal.

mod tokens;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cssel_object::{PropertyDescriptor, Rectangle, Schema, materialize, serialize};
use cssel_selector::Stringify;
use owo_colors::OwoColorize;

/// cssel — CSS compound-selector builder
#[derive(Parser, Debug)]
#[command(name = "cssel")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Compound selector
    cssel build id=main class=container class=editable

    # Combined selectors (use 'descendant' or a quoted space for the descendant combinator)
    cssel build element=ul '>' element=li descendant element=a 'attribute=href$=".png"'

    # Rectangle area
    cssel area --width 3 --height 4

    # Re-encode a JSON object, hiding a field
    echo '{"id":1,"token":"x"}' | cssel roundtrip --hidden token
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a selector from KIND=TEXT fragments and combinator glyphs
    Build {
        /// Fragments (element=, id=, class=, attribute=, pseudo-class=, pseudo-element=) and combinators (+ ~ > descendant)
        #[arg(value_name = "TOKEN", required = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },

    /// Print the area of a rectangle
    Area {
        /// Rectangle width
        #[arg(long)]
        width: f64,

        /// Rectangle height
        #[arg(long)]
        height: f64,
    },

    /// Materialize a JSON object and print it serialized again
    Roundtrip {
        /// JSON file to read (default: stdin)
        #[arg(value_name = "FILE")]
        path: Option<PathBuf>,

        /// Schema name the object is bound to
        #[arg(long, default_value = "Object")]
        schema: String,

        /// Fields to materialize as non-enumerable (left out of the output)
        #[arg(long, value_name = "FIELD")]
        hidden: Vec<String>,

        /// Decode the input as a rectangle and report its area
        #[arg(long, conflicts_with_all = ["schema", "hidden"])]
        rectangle: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Build { tokens } => {
            let node = tokens::build(tokens.iter().map(String::as_str))?;
            println!("{}", node.stringify());
        }
        Command::Area { width, height } => {
            println!("{}", Rectangle::new(width, height).area());
        }
        Command::Roundtrip {
            path,
            schema,
            hidden,
            rectangle,
        } => {
            let text = read_input(path.as_deref())?;
            if rectangle {
                let rect: Rectangle = materialize(&Rectangle::schema(), &text)?.into_typed()?;
                println!("{}", serialize(&rect)?);
                println!("{} {}", "area:".green(), rect.area());
            } else {
                let schema = hidden
                    .into_iter()
                    .fold(Schema::new(schema), |s, field| {
                        s.field(field, PropertyDescriptor::HIDDEN)
                    });
                let object = materialize(&schema, &text)?;
                println!("{}", serialize(&object)?);
            }
        }
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display())),
        None => {
            let mut text = String::new();
            let _ = io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
