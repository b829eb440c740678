//! Migaki Data Models
//!
//! Request/response DTOs for the HTTP API.

mod polish;

pub use polish::*;
