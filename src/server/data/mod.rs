//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! service layer stays independent of the storage representation. Every query,
//! insert, update and delete goes through these repositories.

pub mod course;
pub mod test_result;
pub mod user;

#[cfg(test)]
mod test;
