use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// JSON-encoded social profile links.
    #[sea_orm(column_type = "Text", nullable)]
    pub social: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_enrollment::Entity")]
    CourseEnrollment,
}

impl Related<super::course_enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseEnrollment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
