use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;

/// # User Record
///
/// One entry of the read-only user directory served by `GET /api/users`.
///
/// ## Fields
/// - `id`: Unique numeric identifier
/// - `name`: Display name
/// - `email`: Contact address
///
/// ## Example JSON
/// ```json
/// { "id": 1, "name": "John Doe", "email": "john@example.com" }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: u32,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john@example.com")]
    pub email: String,
}

impl User {
    fn new(id: u32, name: &str, email: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

/// The sample directory. Built once on first access, never mutated.
pub static USERS: LazyLock<Vec<User>> = LazyLock::new(|| {
    vec![
        User::new(1, "John Doe", "john@example.com"),
        User::new(2, "Jane Smith", "jane@example.com"),
    ]
});

/// All known users, in id order.
pub fn all() -> &'static [User] {
    &USERS
}
