//! Purpose: `tmtgen` CLI entry point and destination dispatch.
//! Role: Binary crate root; parses args, validates the destination, writes one file.
//! Invariants: Single-argument runs only ever write a recognized target file.
//! Invariants: With a pairs argument present, the destination names the output
//! file verbatim (legacy callers rely on the unvalidated form).
//! Invariants: Process exit code is derived from `core::error::to_exit_code`.
use std::path::Path;

use clap::Parser;
use tracing::debug;

use tmtgen::cli::{emit_error, init_tracing};
use tmtgen::core::error::{Error, ErrorKind, to_exit_code};
use tmtgen::core::pairs;
use tmtgen::core::target::Target;
use tmtgen::core::write::write_document;

#[derive(Parser)]
#[command(
    name = "tmtgen",
    version,
    about = "Generate TMT run files from semicolon-delimited arguments",
    after_help = r#"EXAMPLES
  $ tmtgen variables
  $ tmtgen variables "data=123;second=987"
  $ tmtgen secrets "TOPSECRET=MY_TOKEN;GITHUB_TOKEN=FOOBAR_TOKEN"

NOTES
  - Files are written to the current working directory
  - With only a destination given, the recognized names are: variables, secrets
  - Pairs are `;`-separated; the first `=` splits key from value"#
)]
struct Cli {
    #[arg(help = "Destination name (recognized: variables|secrets)")]
    destination: Option<String>,
    #[arg(help = "Semicolon-delimited key=value pairs")]
    pairs: Option<String>,
    #[arg(hide = true)]
    extra: Vec<String>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if !cli.extra.is_empty() {
        debug!(count = cli.extra.len(), "ignoring extra arguments");
    }

    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(err) => {
            emit_error(&err);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<(), Error> {
    let Some(destination) = cli.destination else {
        return Err(Error::new(ErrorKind::Usage)
            .with_message("missing destination name")
            .with_hint("Use `tmtgen <destination> [pairs]`."));
    };

    let file_name = match &cli.pairs {
        // Single-argument form: only recognized targets may be written.
        None => Target::from_name(&destination)
            .ok_or_else(|| {
                Error::new(ErrorKind::Usage)
                    .with_message(format!("unrecognized destination name: {destination}"))
                    .with_hint("Recognized names are: variables, secrets.")
            })?
            .file_name()
            .to_string(),
        // With pairs present the destination is taken verbatim as the filename.
        Some(_) => destination,
    };

    let payload = pairs::render(cli.pairs.as_deref())?;
    write_document(Path::new(&file_name), &payload)
}
