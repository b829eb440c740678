//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod tone;

pub use tone::*;
