//! Migaki Domain Library
//!
//! Core domain types and interfaces for the Migaki email polishing service.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business logic
//!   - `value_objects/`: Immutable value types (Tone)
//!   - `prompt`: Rewrite-instruction construction
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: External service interfaces (text generation)
//!
//! # Usage
//!
//! ```rust,ignore
//! use migaki::{build_messages, Tone};
//! use migaki::ports::TextGenerator;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{build_messages, build_system_prompt, DomainError, Tone};
pub use ports::{
    ChatMessage, GenerationOptions, GenerationResponse, MessageRole, TextGenerator, TokenUsage,
};
