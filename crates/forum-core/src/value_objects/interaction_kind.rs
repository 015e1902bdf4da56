//! Interaction target and kind enums

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// What an interaction points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Post,
    Reply,
}

impl TargetType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Reply => "reply",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "post" => Ok(Self::Post),
            "reply" => Ok(Self::Reply),
            other => Err(DomainError::InvalidTargetType(other.to_string())),
        }
    }
}

/// Kind of interaction a user holds against a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    Like,
    Dislike,
    Bookmark,
    View,
}

impl InteractionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
            Self::Bookmark => "bookmark",
            Self::View => "view",
        }
    }

    /// The mutually exclusive counterpart, if any
    pub fn opposite(self) -> Option<Self> {
        match self {
            Self::Like => Some(Self::Dislike),
            Self::Dislike => Some(Self::Like),
            Self::Bookmark | Self::View => None,
        }
    }

    /// Parse a kind a client may add or remove explicitly.
    ///
    /// Views are recorded by the server on fetch and are rejected here.
    pub fn parse_user_action(s: &str) -> Result<Self, DomainError> {
        match s.parse::<Self>()? {
            Self::View => Err(DomainError::InvalidInteractionType(s.to_string())),
            kind => Ok(kind),
        }
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "dislike" => Ok(Self::Dislike),
            "bookmark" => Ok(Self::Bookmark),
            "view" => Ok(Self::View),
            other => Err(DomainError::InvalidInteractionType(other.to_string())),
        }
    }
}
