//! Version information

/// Crate version as compiled into the binary
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the current version string
pub fn get_version() -> &'static str {
    VERSION
}
