//! Infrastructure Adapters
//!
//! Concrete implementations of the domain ports.

mod openai;

pub use openai::OpenAiGenerator;
