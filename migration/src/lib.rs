pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_course_table;
mod m20260301_000003_create_test_table;
mod m20260301_000004_create_course_enrollment_table;
mod m20260301_000005_create_test_result_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_course_table::Migration),
            Box::new(m20260301_000003_create_test_table::Migration),
            Box::new(m20260301_000004_create_course_enrollment_table::Migration),
            Box::new(m20260301_000005_create_test_result_table::Migration),
        ]
    }
}
