use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, Social, UpdateUserParam},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod delete_all;
mod find_by_id;
mod update;

fn grace() -> CreateUserParam {
    CreateUserParam {
        first_name: "Grace".to_string(),
        last_name: "Bell".to_string(),
        email: "grace@hey.com".to_string(),
        social: None,
    }
}
