use crate::math::{Point, Real, UnitVector};
use crate::shape::{Face, Line, PlueckerPlane, PlueckerPoint, Polytope};

/// A borrowed handle to a face of a [`Polytope`].
#[derive(Copy, Clone, Debug)]
pub struct FaceRef<'a> {
    polytope: &'a Polytope,
    id: u32,
}

impl<'a> FaceRef<'a> {
    #[inline]
    pub(crate) fn new(polytope: &'a Polytope, id: u32) -> Self {
        Self { polytope, id }
    }

    /// The index of this face in its polytope.
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The polytope this face belongs to.
    #[inline]
    pub fn polytope(&self) -> &'a Polytope {
        self.polytope
    }

    /// The topological description of this face.
    #[inline]
    pub fn face(&self) -> &'a Face {
        &self.polytope.faces()[self.id as usize]
    }

    /// The indices of the vertices of this face, counter-clockwise seen from outside.
    #[inline]
    pub fn vertices(&self) -> &'a [u32] {
        &self.polytope.vertices_adj_to_face()[self.face().range()]
    }

    /// The faces sharing each edge of this face, in edge order.
    #[inline]
    pub fn neighbors(&self) -> &'a [u32] {
        &self.polytope.faces_adj_to_face()[self.face().range()]
    }

    /// Handles to the vertices of this face.
    pub fn vertex_refs(&self) -> impl ExactSizeIterator<Item = VertexRef<'a>> + 'a {
        let polytope = self.polytope;
        self.vertices()
            .iter()
            .map(move |id| VertexRef::new(polytope, *id))
    }

    /// The world-space outward normal of this face.
    #[inline]
    pub fn normal(&self) -> UnitVector<Real> {
        self.polytope.position().rotation * self.face().normal
    }

    /// The world-space plane of this face, with a unit normal.
    pub fn plane(&self) -> PlueckerPlane {
        let face = self.face();
        let normal = self.normal();
        let offset = face.offset - normal.dot(&self.polytope.position().translation.vector);
        PlueckerPlane::from_normal_and_offset(&normal, offset)
    }

    /// The world-space positions of the vertices of this face.
    pub fn world_vertices(&self) -> impl ExactSizeIterator<Item = Point<Real>> + 'a {
        let polytope = self.polytope;
        self.vertices()
            .iter()
            .map(move |id| polytope.position() * polytope.points()[*id as usize])
    }

    /// Appends to `out` the world-space boundary edges of this face.
    ///
    /// The `i`-th edge goes from the `i`-th vertex to the next one, wrapping
    /// around, so the edges follow the face winding.
    pub fn edges(&self, out: &mut impl Extend<Line>) {
        let vertices = self.vertices();
        let pos = self.polytope.position();
        let points = self.polytope.points();

        out.extend((0..vertices.len()).map(|i| {
            let a = points[vertices[i] as usize];
            let b = points[vertices[(i + 1) % vertices.len()] as usize];
            Line::new(pos * a, pos * b)
        }));
    }
}

/// A borrowed handle to a vertex of a [`Polytope`].
#[derive(Copy, Clone, Debug)]
pub struct VertexRef<'a> {
    polytope: &'a Polytope,
    id: u32,
}

impl<'a> VertexRef<'a> {
    #[inline]
    pub(crate) fn new(polytope: &'a Polytope, id: u32) -> Self {
        Self { polytope, id }
    }

    /// The index of this vertex in its polytope.
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The polytope this vertex belongs to.
    #[inline]
    pub fn polytope(&self) -> &'a Polytope {
        self.polytope
    }

    /// The local-space position of this vertex.
    #[inline]
    pub fn local_point(&self) -> &'a Point<Real> {
        &self.polytope.points()[self.id as usize]
    }

    /// The world-space position of this vertex.
    #[inline]
    pub fn point(&self) -> Point<Real> {
        self.polytope.position() * self.local_point()
    }

    /// The world-space position of this vertex, in homogeneous coordinates.
    #[inline]
    pub fn pluecker(&self) -> PlueckerPoint {
        PlueckerPoint::from_point(&self.point())
    }
}
