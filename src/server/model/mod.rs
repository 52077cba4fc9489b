//! Domain models and operation parameter types.
//!
//! Domain models are converted from SeaORM entities at the repository boundary and into
//! DTOs at the controller boundary, so services never see either representation.

pub mod course;
pub mod seed;
pub mod test_result;
pub mod user;
