#![forbid(unsafe_code)]

//! Validation errors for model type construction.

use std::fmt;

use crate::pane::PaneId;

/// Validation errors for Lockstep model types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    ZeroPaneId,
    PaneIdOverflow {
        current: PaneId,
    },
    EmptyGroupId,
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroPaneId => write!(f, "pane id 0 is invalid"),
            Self::PaneIdOverflow { current } => {
                write!(f, "pane id overflow after {}", current.get())
            }
            Self::EmptyGroupId => write!(f, "sync group id must not be empty"),
        }
    }
}

impl std::error::Error for ModelError {}
