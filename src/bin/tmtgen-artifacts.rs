//! Purpose: Generate the `copr_artifacts` run file from Copr build ids.
//! Role: Single-purpose entry point for the artifact document.
//! Invariants: Always targets `copr_artifacts` in the current working directory.
//! Invariants: Missing or blank arguments write a zero-byte file, never `{}`.
use std::path::Path;

use clap::Parser;

use tmtgen::cli::{emit_error, init_tracing};
use tmtgen::core::artifacts;
use tmtgen::core::error::{Error, to_exit_code};
use tmtgen::core::write::write_document;

#[derive(Parser)]
#[command(
    name = "tmtgen-artifacts",
    version,
    about = "Generate the TMT `copr_artifacts` file from Copr build ids",
    after_help = r#"EXAMPLES
  $ tmtgen-artifacts "12345;98876" epel-8-x86_64"#
)]
struct Cli {
    #[arg(help = "Semicolon-delimited Copr build ids")]
    builds: Option<String>,
    #[arg(help = "Chroot suffix appended to every build id (e.g. epel-8-x86_64)")]
    chroot: Option<String>,
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
    let payload = artifacts::render(cli.builds.as_deref(), cli.chroot.as_deref());
    write_document(Path::new("copr_artifacts"), &payload)
}
