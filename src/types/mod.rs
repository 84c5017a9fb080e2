//! Type definitions for the share relay
//!
//! This module contains the main data structures used for requests and responses.

pub mod request;
pub mod response;

pub use request::ResolveParams;
pub use response::PingResponse;
