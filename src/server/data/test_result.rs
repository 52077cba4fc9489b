//! Test result data repository.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::model::test_result::CreateTestResultParam;

/// Repository providing database operations for graded test results.
pub struct TestResultRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TestResultRepository<'a> {
    /// Creates a new TestResultRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a graded result.
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the new result
    /// - `Err(DbErr)` - Database error, e.g. an unknown test, student or grader
    pub async fn create(&self, param: CreateTestResultParam) -> Result<i32, DbErr> {
        let result = entity::prelude::TestResult::insert(entity::test_result::ActiveModel {
            created_at: ActiveValue::Set(Utc::now()),
            result: ActiveValue::Set(param.result),
            student_id: ActiveValue::Set(param.student_id),
            grader_id: ActiveValue::Set(param.grader_id),
            test_id: ActiveValue::Set(param.test_id),
            ..Default::default()
        })
        .exec(self.db)
        .await?;

        Ok(result.last_insert_id)
    }

    /// Gets the result values recorded for a test.
    pub async fn results_for_test(&self, test_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::TestResult::find()
            .select_only()
            .column(entity::test_result::Column::Result)
            .filter(entity::test_result::Column::TestId.eq(test_id))
            .order_by_asc(entity::test_result::Column::Id)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Gets the result values recorded for a student across all tests.
    pub async fn results_for_student(&self, student_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::TestResult::find()
            .select_only()
            .column(entity::test_result::Column::Result)
            .filter(entity::test_result::Column::StudentId.eq(student_id))
            .order_by_asc(entity::test_result::Column::Id)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Deletes every test result.
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::TestResult::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
