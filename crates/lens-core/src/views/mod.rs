//! Diagram projections of a [`Calculator`](crate::Calculator) snapshot.
//!
//! Both views are pure coordinate mapping onto a [`Scene`]; neither one
//! recomputes any optics of its own.

pub mod palette;
pub mod preview;
pub mod scene;
pub mod side;

pub use scene::*;
