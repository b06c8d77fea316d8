//! UI-agnostic view state machines for the VetEMR client.
//!
//! The two main surfaces (patient roster, single-patient timeline) live here
//! as shell-independent state machines: a front end drives a view by
//! awaiting its operations and rendering whatever state it settles in.
//! Nothing in this crate touches a terminal or a GUI toolkit, and the
//! gateway behind each view is a trait so tests drive them with in-memory
//! fakes.
//!
//! Dropping a view mid-operation simply discards the result; there is no
//! background work to cancel and no cache to invalidate.

pub mod error;
pub mod roster;
pub mod timeline;

pub use error::SubmitError;
pub use roster::{RosterState, RosterView};
pub use timeline::{TimelineState, TimelineView};
