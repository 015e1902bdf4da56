//! User roles as issued by the identity collaborator

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role carried on every user record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Moderator,
    #[default]
    Subscriber,
    Premium,
}

impl UserRole {
    /// Admins and moderators may act on other people's content
    #[inline]
    pub fn is_staff(self) -> bool {
        matches!(self, Self::Admin | Self::Moderator)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Moderator => "moderator",
            Self::Subscriber => "subscriber",
            Self::Premium => "premium",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "moderator" => Ok(Self::Moderator),
            "subscriber" => Ok(Self::Subscriber),
            "premium" => Ok(Self::Premium),
            other => Err(format!("unknown role: {other}")),
        }
    }
}
