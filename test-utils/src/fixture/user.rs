//! User fixtures for creating in-memory test data.

use entity::user;

/// Default test user first name.
pub const DEFAULT_FIRST_NAME: &str = "Grace";

/// Default test user last name.
pub const DEFAULT_LAST_NAME: &str = "Bell";

/// Default test user email.
pub const DEFAULT_EMAIL: &str = "grace@hey.com";

/// Default stored social column.
pub const DEFAULT_SOCIAL: &str = r#"{"facebook":"gracebell","twitter":"therealgracebell"}"#;

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - first_name: `"Grace"`
/// - last_name: `"Bell"`
/// - email: `"grace@hey.com"`
/// - social: facebook `gracebell`, twitter `therealgracebell`
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for creating customized user entity models.
pub struct UserEntityBuilder {
    id: i32,
    first_name: String,
    last_name: String,
    email: String,
    social: Option<String>,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            first_name: DEFAULT_FIRST_NAME.to_string(),
            last_name: DEFAULT_LAST_NAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            social: Some(DEFAULT_SOCIAL.to_string()),
        }
    }
}

impl UserEntityBuilder {
    /// Sets the user ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the raw stored social column.
    pub fn social(mut self, social: Option<&str>) -> Self {
        self.social = social.map(str::to_string);
        self
    }

    /// Builds and returns the user entity model.
    pub fn build(self) -> user::Model {
        user::Model {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            social: self.social,
        }
    }
}
