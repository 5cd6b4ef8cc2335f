//! Domain models for p4ci
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ChangeListEntry`] - one submitted change list from the `changes` listing
//! - [`Modification`] - one modified file within a submitted change list

mod modification;

pub use modification::{ChangeListEntry, Modification};
