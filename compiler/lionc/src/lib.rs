//! Lion command-line runner.
//!
//! The `lion` binary is a thin shell over [`commands`]; this library holds
//! the command implementations and logging setup so they can be tested.

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;
