//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has its own module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let course = factory::course::create_course(&db).await?;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .first_name("Grace")
//!     .email("grace@hey.com")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `course` - Create course entities
//! - `helpers` - Shared id counter

pub mod course;
pub mod helpers;
pub mod user;

pub use course::create_course;
pub use user::create_user;
