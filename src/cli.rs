//! Purpose: Shared bootstrap helpers for the `tmtgen` binaries.
//! Exports: `init_tracing`, `emit_error`.
//! Role: Keep each binary's `main` focused on argument handling.
//! Invariants: Diagnostics go to stderr only; output files never receive them.
use tracing_subscriber::EnvFilter;

use crate::core::error::Error;

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

pub fn emit_error(err: &Error) {
    eprintln!("error: {err}");
    if let Some(hint) = err.hint() {
        eprintln!("hint: {hint}");
    }
}
