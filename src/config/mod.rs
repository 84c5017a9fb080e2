//! Configuration management for the share relay
//!
//! This module handles loading and managing configuration settings
//! for both HTTP server and script modes.

pub mod settings;

pub use settings::Settings;
