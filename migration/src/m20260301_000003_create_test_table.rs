use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_course_table::Course;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Test::Table)
                    .if_not_exists()
                    .col(pk_auto(Test::Id))
                    .col(
                        timestamp_with_time_zone(Test::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(Test::Name))
                    .col(timestamp_with_time_zone(Test::Date))
                    .col(integer(Test::CourseId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_test_course_id")
                            .from(Test::Table, Test::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Test::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Test {
    Table,
    Id,
    UpdatedAt,
    Name,
    Date,
    CourseId,
}
