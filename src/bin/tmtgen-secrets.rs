//! Purpose: Generate the `secrets` run file from one `key=value;...` argument.
//! Role: Single-purpose entry point; equivalent to `tmtgen secrets [pairs]`.
//! Invariants: Always targets `secrets` in the current working directory.
//! Invariants: A missing argument writes the default `{}` document.
use std::path::Path;

use clap::Parser;

use tmtgen::cli::{emit_error, init_tracing};
use tmtgen::core::error::{Error, to_exit_code};
use tmtgen::core::pairs;
use tmtgen::core::write::write_document;

#[derive(Parser)]
#[command(
    name = "tmtgen-secrets",
    version,
    about = "Generate the TMT `secrets` file from key=value pairs"
)]
struct Cli {
    #[arg(help = "Semicolon-delimited key=value pairs (values stay out of logs)")]
    pairs: Option<String>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        emit_error(&err);
        std::process::exit(to_exit_code(err.kind()));
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let payload = pairs::render(cli.pairs.as_deref())?;
    write_document(Path::new("secrets"), &payload)
}
