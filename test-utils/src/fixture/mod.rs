//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! unit tests of entity-to-domain conversion and DTO mapping.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let user = fixture::user::entity();
//! let user = fixture::user::entity_builder().social(None).build();
//! ```

pub mod user;
