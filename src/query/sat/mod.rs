//! Separating-axis overlap tests along a single direction.
//!
//! Contact generation does not search for a separating axis. The caller
//! supplies one direction (usually an approximation of the contact normal) and
//! every candidate pair of features is kept only if their projections on that
//! direction overlap. Each projectable feature implements [`SupportProjection`],
//! and [`touching`] compares any two of them.

pub use self::sat_touching::touching;
pub use self::support_projection::{Projection, SupportProjection};

mod sat_touching;
mod support_projection;
