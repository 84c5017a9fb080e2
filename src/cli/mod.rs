//! Command-line entry points
//!
//! Core logic for the two operation modes: the long-running HTTP server and
//! the one-shot fetch script.

pub mod fetch;
pub mod server;

pub use fetch::{FetchArgs, run_fetch_mode};
pub use server::{ServerArgs, run_server_mode};
