// Core modules implementing parsing, rendering, and error modeling.
pub mod artifacts;
pub mod error;
pub mod pairs;
pub mod target;
pub mod write;
