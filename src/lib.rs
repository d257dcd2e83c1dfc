/*!
polycontact
===========

**polycontact** generates contact manifolds between convex polytopes for
real-time rigid-body simulation.

Given two already-transformed convex hulls and an approximate contact direction,
[`query::contacts`] produces the deduplicated set of contact points and normals a
constraint solver needs. A separating-axis filter prunes the candidate features,
then exact clipping tests (vertex against face Voronoi region, edge against edge)
turn the surviving pairs into contacts.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Matrix3, Point3, Translation3, UnitVector3, Vector3};
    use na::{UnitQuaternion, U3};

    /// The default tolerance used for exact floating-point comparisons.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The default geometric tolerance of contact generation.
    ///
    /// Used uniformly for plane distances, line distances, Voronoi fences and
    /// projection overlaps. See [`ContactOptions`](crate::query::ContactOptions).
    pub const DEFAULT_CONTACT_EPSILON: Real = 1.0e-4;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The dimension of the ambient space.
    pub type Dim = U3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The rotation matrix type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}
