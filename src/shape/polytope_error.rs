/// Errors that can occur while building a [`Polytope`](crate::shape::Polytope).
#[derive(thiserror::Error, Debug, PartialEq, Eq, Copy, Clone)]
pub enum PolytopeError {
    /// Not enough points or faces to enclose a volume.
    #[error("Incomplete input: a polytope needs at least 4 points and 4 faces.")]
    IncompleteInput,
    /// A face has fewer than three distinct vertices, or its normal cannot be computed.
    #[error("Face {0} is degenerate.")]
    DegenerateFace(usize),
    /// A face references a point that does not exist.
    #[error("Face {face} references the out-of-bounds point {index}.")]
    IndexOutOfBounds {
        /// The offending face.
        face: usize,
        /// The offending point index.
        index: u32,
    },
    /// An edge is shared by more than two faces, or is traversed twice in the same direction.
    #[error("The edge ({a}, {b}) is not manifold.")]
    NonManifold {
        /// First endpoint of the edge.
        a: u32,
        /// Second endpoint of the edge.
        b: u32,
    },
    /// An edge has only one adjacent face.
    #[error("The edge ({a}, {b}) is on the border of an open mesh.")]
    OpenMesh {
        /// First endpoint of the edge.
        a: u32,
        /// Second endpoint of the edge.
        b: u32,
    },
    /// A vertex lies strictly above the plane of a face.
    #[error("Point {vertex} lies above the plane of face {face}.")]
    NonConvex {
        /// The face whose plane is violated.
        face: usize,
        /// The point above that plane.
        vertex: u32,
    },
}
