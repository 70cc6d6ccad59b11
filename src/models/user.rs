use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// User record stored in the `users` table
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, FromRow, ToSchema)]
pub struct User {
    /// Store-assigned identifier, immutable once set
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Ada")]
    pub firstname: String,
    #[schema(example = "Lovelace")]
    pub lastname: String,
    #[schema(example = 36)]
    pub age: i64,
    #[schema(example = "ada@example.com")]
    pub email: String,
}

/// Every mutable column of a user; what create and update write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub firstname: String,
    pub lastname: String,
    pub age: i64,
    pub email: String,
}

impl UserFields {
    /// Attach a store-assigned id, producing the full record.
    pub fn with_id(self, id: i64) -> User {
        User {
            id,
            firstname: self.firstname,
            lastname: self.lastname,
            age: self.age,
            email: self.email,
        }
    }
}

impl From<User> for UserFields {
    fn from(user: User) -> Self {
        Self {
            firstname: user.firstname,
            lastname: user.lastname,
            age: user.age,
            email: user.email,
        }
    }
}
