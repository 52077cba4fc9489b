//! Service layer orchestrating repositories.
//!
//! Services work with domain models and parameter types, never with DTOs or entities.

pub mod seed;
pub mod user;
