//! Convex polytopes and the geometric primitives used to describe them.

pub use self::line::Line;
pub use self::pluecker::{PlueckerLine, PlueckerPlane, PlueckerPoint};
pub use self::polytope::{Edge, Face, Polytope};
pub use self::polytope_error::PolytopeError;
pub use self::polytope_features::{FaceRef, VertexRef};

mod line;
pub mod pluecker;
mod polytope;
mod polytope_error;
mod polytope_features;
