use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260301_000001_create_user_table::User, m20260301_000003_create_test_table::Test};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TestResult::Table)
                    .if_not_exists()
                    .col(pk_auto(TestResult::Id))
                    .col(
                        timestamp_with_time_zone(TestResult::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(TestResult::Result))
                    .col(integer(TestResult::StudentId))
                    .col(integer(TestResult::GraderId))
                    .col(integer(TestResult::TestId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_test_result_student_id")
                            .from(TestResult::Table, TestResult::StudentId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_test_result_grader_id")
                            .from(TestResult::Table, TestResult::GraderId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_test_result_test_id")
                            .from(TestResult::Table, TestResult::TestId)
                            .to(Test::Table, Test::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TestResult::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TestResult {
    Table,
    Id,
    CreatedAt,
    Result,
    StudentId,
    GraderId,
    TestId,
}
