//! User entity - owned by the identity collaborator, read-only here

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::{Snowflake, UserRole};

/// User record as returned by the identity lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub name: String,
    pub avatar: Option<String>,
    pub role: UserRole,
    pub is_banned: bool,
    pub banned_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new, unbanned User
    pub fn new(id: Snowflake, name: String, role: UserRole) -> Self {
        Self {
            id,
            name,
            avatar: None,
            role,
            is_banned: false,
            banned_until: None,
            created_at: Utc::now(),
        }
    }

    /// A ban without an end date is permanent; an expired ban no longer applies
    pub fn is_banned_at(&self, now: DateTime<Utc>) -> bool {
        self.is_banned && self.banned_until.map_or(true, |until| until > now)
    }

    #[inline]
    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }
}

/// Author display fields embedded in posts and reply nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorSummary {
    pub id: Snowflake,
    pub name: String,
    pub avatar: Option<String>,
    pub role: UserRole,
}

impl AuthorSummary {
    /// Placeholder for authors no longer present in the user store
    pub fn unknown(id: Snowflake) -> Self {
        Self {
            id,
            name: "Unknown user".to_string(),
            avatar: None,
            role: UserRole::Subscriber,
        }
    }
}

impl From<&User> for AuthorSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            avatar: user.avatar.clone(),
            role: user.role,
        }
    }
}
