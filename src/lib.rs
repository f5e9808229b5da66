//! Purpose: Shared library crate used by the `tmtgen` binaries and tests.
//! Exports: `core` (pair parsing, artifact records, targets, errors, file output).
//! Exports: `cli` (bootstrap helpers shared by the binaries).
//! Role: Internal library backing the binaries; not a stable public SDK.
//! Invariants: Rendered document bytes are part of the CI contract and stay stable.
pub mod cli;
pub mod core;
