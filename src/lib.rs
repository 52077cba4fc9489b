//! Grading service: CRUD over users plus a seed program for courses, tests and results.
//!
//! - `model` holds the request/response DTOs exchanged over HTTP.
//! - `server` holds the backend: controllers, services, repositories and infrastructure.

pub mod model;
pub mod server;
