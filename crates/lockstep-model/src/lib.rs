#![forbid(unsafe_code)]

//! Model types shared by the Lockstep scroll-synchronization crates.
//!
//! Everything here is identity or measure: which pane, which sync group,
//! what kind of view a pane shows, and how far it is scrolled. Panes are
//! owned by the host application; Lockstep refers to them only through
//! the stable ids defined in this crate and never holds a pane itself.
//!
//! The scroll measure is deliberately opaque. A host may report pixels,
//! rows, or fractional lines; the engine only ever moves peers by
//! *differences* of the measure, so the unit never matters as long as it
//! is monotonic within one document.

pub mod error;
pub mod group;
pub mod pane;
pub mod scroll;
pub mod view;

pub use error::ModelError;
pub use group::GroupId;
pub use pane::{PaneId, PaneIdAllocator};
pub use scroll::{ScrollDelta, ScrollOffset};
pub use view::{ViewFamily, ViewKind};
