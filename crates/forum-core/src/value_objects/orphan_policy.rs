//! What the reply tree does with replies whose parent is not in the fetched set

use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrphanPolicy {
    /// Orphaned replies become roots of the forest
    #[default]
    Promote,
    /// Orphaned replies and everything beneath them are omitted
    Drop,
}

impl FromStr for OrphanPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "promote" => Ok(Self::Promote),
            "drop" => Ok(Self::Drop),
            other => Err(format!("expected 'promote' or 'drop', got '{other}'")),
        }
    }
}
