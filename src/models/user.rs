use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    /// Only "admin" is meaningful; any other value (or absence) means a
    /// regular user.
    pub role: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(new: NewUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: new.email,
            role: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_role_is_the_only_signal() {
        let mut user = User::new(NewUser {
            email: "a@b.com".into(),
        });
        assert!(!user.is_admin());
        user.role = Some("staff".into());
        assert!(!user.is_admin());
        user.role = Some(ADMIN_ROLE.into());
        assert!(user.is_admin());
    }
}
