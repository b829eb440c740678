//! Application Services (Use Cases)

mod polish_service;

pub use polish_service::PolishService;
