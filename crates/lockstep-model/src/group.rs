#![forbid(unsafe_code)]

//! Sync-group identity.
//!
//! A group is purely nominal: "the set of panes whose group id equals G
//! right now". The host resolves membership on demand; nothing in
//! Lockstep ever materializes or caches a group.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Identifier of a pane sync group.
///
/// The empty string is rejected so that "no group" is only ever
/// expressible as `Option::<GroupId>::None`, never as a hollow value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    /// Create a group ID, rejecting the empty string.
    pub fn new(id: impl Into<String>) -> Result<Self, ModelError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ModelError::EmptyGroupId);
        }
        Ok(Self(id))
    }

    /// The group ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_group_id_is_rejected() {
        assert_eq!(GroupId::new(""), Err(ModelError::EmptyGroupId));
    }

    #[test]
    fn group_id_round_trips_as_plain_string() {
        let group = GroupId::new("left-right").expect("valid group");
        assert_eq!(group.as_str(), "left-right");
        assert_eq!(group.to_string(), "left-right");
        assert_eq!(
            serde_json::to_string(&group).expect("serialize"),
            "\"left-right\""
        );
    }
}
