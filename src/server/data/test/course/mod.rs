use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::course::CourseRepository,
    model::course::{CreateCourseParam, CreateTestParam, EnrollParam, EnrollmentRole},
};

mod create;
mod delete_all;
mod enroll;
