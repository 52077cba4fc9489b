//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Extractors** (`extractor`) - Payload and path validation ahead of handlers
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database connection)
//! - **Startup** (`startup`) - Logging, database connection and migrations, shutdown
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** matches the method and path
//! 2. **Extractors** validate the path parameter and body, rejecting with 400
//! 3. **Controller** converts DTOs to params and calls the service
//! 4. **Service** calls the repository and turns absent rows into `NotFound`
//! 5. **Data** runs the single query and converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO and picks the status code

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod extractor;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
