//! Contact manifolds between convex polytopes.
//!
//! A contact manifold is the set of points and normals a constraint solver
//! needs to keep two touching bodies apart. [`contacts`] builds it for a pair of
//! [`Polytope`](crate::shape::Polytope) in three steps:
//!
//! 1. On each polytope, the first face (in index order) whose projection on the
//!    contact direction overlaps the other polytope is selected, together with
//!    its neighbors.
//! 2. Every pair of selected faces whose projections overlap is processed: the
//!    vertices of each face are tested against the Voronoi region of the other
//!    face, and every pair of their edges is tested for a crossing.
//! 3. The accepted contacts are inserted into a deduplicating [`ContactSet`].
//!
//! The manifold is not reduced. Two flush faces may yield more than four points.
//!
//! ```
//! # #[cfg(feature = "f32")] {
//! use polycontact3d::math::{Isometry, Vector};
//! use polycontact3d::query::{contacts, ContactOptions, ContactSet};
//! use polycontact3d::shape::Polytope;
//!
//! let ground = Polytope::cuboid(Vector::new(0.5, 0.5, 0.5))
//!     .with_position(Isometry::translation(0.5, 0.5, 0.5));
//! let crate_ = Polytope::cuboid(Vector::new(0.5, 0.5, 0.5))
//!     .with_position(Isometry::translation(0.5, 1.5, 0.5));
//!
//! let mut manifold = ContactSet::new();
//! let dir = contacts(&ground, &crate_, &Vector::y(), &ContactOptions::default(), &mut manifold);
//!
//! assert_eq!(*dir, Vector::y());
//! assert!(manifold.iter().all(|c| c.position.y == 1.0));
//! # }
//! ```

pub use self::contact::Contact;
pub use self::contact_manifolds_polytope_polytope::{
    contacts, effective_direction, select_candidate_faces,
};
pub use self::contact_set::ContactSet;

mod contact;
mod contact_manifolds_polytope_polytope;
mod contact_set;
