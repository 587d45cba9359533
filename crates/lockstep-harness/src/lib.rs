#![forbid(unsafe_code)]

//! Deterministic workspace fixtures for synchronization tests.
//!
//! This crate centralizes the in-memory pane workspace the engine tests
//! drive: panes with kinds, groups, and scroll positions, an ordered
//! effect log of everything the engine asked the host to do, and a
//! queue of pending reloads that settle only when a test says so. With
//! it, a scenario reads as "open panes, scroll one, synchronize, check
//! the effects" with no mock plumbing in the test body.

pub mod fixture;

pub use fixture::{Effect, FixturePane, ViewSnapshot, WorkspaceFixture};
