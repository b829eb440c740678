//! Migaki API Routes
//!
//! - `/` - embedded form UI
//! - `/migaki/polish` - draft rewrite
//! - `/swagger-ui` - API documentation

pub mod polish;
pub mod swagger;
pub mod ui;
