#![forbid(unsafe_code)]

//! View kinds.
//!
//! A pane's view has two facets that matter for synchronization: the
//! exact kind token the host assigned (used when a pass is restricted to
//! same-kind peers) and the broader family deciding *how* the pane can
//! be driven. Document views track a scroll measure and can be moved by
//! a relative offset; opaque views cannot and must be reloaded to follow
//! the source.

use serde::{Deserialize, Serialize};

/// How a view can be driven during synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewFamily {
    /// Scroll-trackable document view; peers move by relative offsets.
    Document,
    /// No scroll measure the engine can drive; following means reloading.
    Opaque,
}

/// The kind of view a pane currently displays.
///
/// The token is an uninterpreted host label (`"markdown"`, `"pdf"`,
/// `"graph"`, ...). Equality covers token and family, so two kinds are
/// "the same" only when the host labeled them identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewKind {
    token: String,
    family: ViewFamily,
}

impl ViewKind {
    /// A document view kind with the given token.
    #[must_use]
    pub fn document(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            family: ViewFamily::Document,
        }
    }

    /// An opaque view kind with the given token.
    #[must_use]
    pub fn opaque(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            family: ViewFamily::Opaque,
        }
    }

    /// The host-assigned kind token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The synchronization family of this kind.
    #[must_use]
    pub const fn family(&self) -> ViewFamily {
        self.family
    }

    /// Whether this kind belongs to the scroll-trackable document family.
    #[must_use]
    pub const fn is_document(&self) -> bool {
        matches!(self.family, ViewFamily::Document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_predicate_matches_constructor() {
        assert!(ViewKind::document("markdown").is_document());
        assert!(!ViewKind::opaque("graph").is_document());
        assert_eq!(ViewKind::opaque("graph").family(), ViewFamily::Opaque);
    }

    #[test]
    fn equality_covers_token_and_family() {
        assert_eq!(ViewKind::document("markdown"), ViewKind::document("markdown"));
        assert_ne!(ViewKind::document("markdown"), ViewKind::document("pdf"));
        assert_ne!(ViewKind::document("canvas"), ViewKind::opaque("canvas"));
    }

    #[test]
    fn family_serializes_snake_case() {
        let kind = ViewKind::opaque("graph");
        assert_eq!(
            serde_json::to_string(&kind).expect("serialize"),
            "{\"token\":\"graph\",\"family\":\"opaque\"}"
        );
    }
}
