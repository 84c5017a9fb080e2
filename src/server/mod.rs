//! HTTP server for the share relay
//!
//! Axum application setup and the request handlers.

pub mod app;
pub mod handlers;

pub use app::{AppState, create_app};
