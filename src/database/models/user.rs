use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The slice of a `users` row needed for authorization checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    /// Admin flag cast to an integer; NULL when the column is NULL
    pub is_admin: Option<i32>,
}

impl User {
    /// Only an exact flag value of 1 grants admin rights
    pub fn has_admin_flag(&self) -> bool {
        self.is_admin == Some(1)
    }
}
