use crate::math::{Isometry, Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::shape::{FaceRef, PolytopeError, VertexRef};
use crate::utils::hashmap::{Entry, HashMap};
use crate::utils::{self, SortedPair};
use core::ops::Range;
use na::Unit;

/// A planar convex face of a [`Polytope`].
///
/// The vertices of the face are stored in counter-clockwise order (seen from
/// outside) in the polytope's flattened adjacency arrays, starting at
/// `first_vertex_or_edge`. The `i`-th edge of the face goes from its `i`-th
/// vertex to the next one (wrapping).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Face {
    /// Index of the first vertex (and edge) of this face in the adjacency arrays.
    pub first_vertex_or_edge: u32,
    /// Number of vertices (and edges) of this face.
    pub num_vertices_or_edges: u32,
    /// The local-space outward unit normal of this face.
    pub normal: UnitVector<Real>,
    /// The local-space plane offset: `normal · p + offset = 0` on the face.
    pub offset: Real,
}

impl Face {
    #[inline]
    pub(crate) fn range(&self) -> Range<usize> {
        let first = self.first_vertex_or_edge as usize;
        first..first + self.num_vertices_or_edges as usize
    }
}

/// An edge of a [`Polytope`], shared by exactly two faces.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct Edge {
    /// The endpoints of the edge, oriented as in the winding of `faces[0]`.
    pub vertices: [u32; 2],
    /// The two faces adjacent to this edge.
    pub faces: [u32; 2],
}

impl Edge {
    /// The face on the other side of this edge, seen from the face `id`.
    #[inline]
    pub fn other_face(&self, id: u32) -> u32 {
        if id == self.faces[0] {
            self.faces[1]
        } else {
            self.faces[0]
        }
    }
}

#[derive(Copy, Clone)]
struct MeshEdge {
    vertices: [u32; 2],
    triangles: [u32; 2],
    coplanar: bool,
}

impl MeshEdge {
    fn other_triangle(&self, id: u32) -> u32 {
        if id == self.triangles[0] {
            self.triangles[1]
        } else {
            self.triangles[0]
        }
    }
}

#[derive(Copy, Clone)]
struct Triangle {
    vertices: [u32; 3],
    edges: [u32; 3],
    normal: Vector<Real>,
    parent_face: Option<u32>,
}

impl Triangle {
    fn next_edge_id(&self, id: u32) -> Option<usize> {
        self.edges.iter().position(|e| *e == id).map(|i| (i + 1) % 3)
    }
}

// Vertex order of each cuboid face; bit 0, 1, 2 of a point index select
// the sign of its x, y, z coordinate.
const CUBOID_FACES: [[u32; 4]; 6] = [
    [0, 4, 6, 2],
    [1, 3, 7, 5],
    [0, 1, 5, 4],
    [2, 6, 7, 3],
    [0, 2, 3, 1],
    [4, 5, 7, 6],
];

/// A convex rigid shape made of planar polygonal faces.
///
/// Geometry is stored in local space. The world-space pose is set by the
/// owner of the shape, typically once per simulation step, and is only read
/// by contact generation.
///
/// Invariant: every point lies on the non-positive side of every face plane,
/// up to a small tolerance (see [`Polytope::check_convexity`]).
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use polycontact3d::math::{Isometry, Vector};
/// use polycontact3d::shape::Polytope;
///
/// let cube = Polytope::cuboid(Vector::new(0.5, 0.5, 0.5))
///     .with_position(Isometry::translation(0.5, 0.5, 0.5));
///
/// assert_eq!(cube.num_faces(), 6);
/// assert_eq!(cube.points().len(), 8);
/// // Faces are ordered -x, +x, -y, +y, -z, +z.
/// assert_eq!(*cube.face(3).normal(), Vector::y());
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct Polytope {
    points: Vec<Point<Real>>,
    faces: Vec<Face>,
    edges: Vec<Edge>,
    // Vertices adjacent to a face.
    vertices_adj_to_face: Vec<u32>,
    // Edges adjacent to a face.
    edges_adj_to_face: Vec<u32>,
    // Faces sharing the corresponding edge of `edges_adj_to_face`.
    faces_adj_to_face: Vec<u32>,
    position: Isometry<Real>,
}

impl Polytope {
    /// Creates an axis-aligned box centered at the local origin.
    ///
    /// Faces are ordered `-x, +x, -y, +y, -z, +z`.
    pub fn cuboid(half_extents: Vector<Real>) -> Self {
        let points = (0..8)
            .map(|i| {
                let sign = |bit: u32| if i & bit == 0 { -1.0 } else { 1.0 };
                Point::new(
                    sign(1) * half_extents.x,
                    sign(2) * half_extents.y,
                    sign(4) * half_extents.z,
                )
            })
            .collect();

        let mut faces = Vec::with_capacity(6);
        let mut vertices_adj_to_face = Vec::with_capacity(24);

        for (i, face) in CUBOID_FACES.iter().enumerate() {
            let axis = i / 2;
            let sign = if i % 2 == 0 { -1.0 } else { 1.0 };
            let mut normal = Vector::zeros();
            normal[axis] = sign;

            faces.push(Face {
                first_vertex_or_edge: vertices_adj_to_face.len() as u32,
                num_vertices_or_edges: 4,
                normal: Unit::new_unchecked(normal),
                offset: -half_extents[axis],
            });
            vertices_adj_to_face.extend_from_slice(face);
        }

        match Self::link_faces(points, faces, vertices_adj_to_face) {
            Ok(cuboid) => cuboid,
            // The cuboid topology is closed and manifold.
            Err(_) => unreachable!(),
        }
    }

    /// Creates a polytope from explicit polygonal faces.
    ///
    /// Each face lists indices into `points` in counter-clockwise order seen from
    /// outside. Face normals are computed with Newell's method. The mesh must be
    /// closed and manifold; convexity is not checked here, see
    /// [`Polytope::check_convexity`].
    pub fn from_polygons<F: AsRef<[u32]>>(
        points: Vec<Point<Real>>,
        polygons: &[F],
    ) -> Result<Self, PolytopeError> {
        Self::try_from_polygons(points, polygons).map_err(|err| {
            log::debug!("Failed to build a polytope from polygons: {err}");
            err
        })
    }

    fn try_from_polygons<F: AsRef<[u32]>>(
        points: Vec<Point<Real>>,
        polygons: &[F],
    ) -> Result<Self, PolytopeError> {
        if points.len() < 4 || polygons.len() < 4 {
            return Err(PolytopeError::IncompleteInput);
        }

        let mut faces = Vec::with_capacity(polygons.len());
        let mut vertices_adj_to_face = Vec::new();

        for (face_id, polygon) in polygons.iter().enumerate() {
            let polygon = polygon.as_ref();

            if polygon.len() < 3 {
                return Err(PolytopeError::DegenerateFace(face_id));
            }

            for (i, &index) in polygon.iter().enumerate() {
                if index as usize >= points.len() {
                    return Err(PolytopeError::IndexOutOfBounds {
                        face: face_id,
                        index,
                    });
                }

                if polygon[..i].contains(&index) {
                    return Err(PolytopeError::DegenerateFace(face_id));
                }
            }

            let normal = utils::newell_face_normal(polygon.iter().map(|i| points[*i as usize]))
                .ok_or(PolytopeError::DegenerateFace(face_id))?;
            let centroid = polygon
                .iter()
                .map(|i| points[*i as usize].coords)
                .sum::<Vector<Real>>()
                / polygon.len() as Real;

            faces.push(Face {
                first_vertex_or_edge: vertices_adj_to_face.len() as u32,
                num_vertices_or_edges: polygon.len() as u32,
                normal,
                offset: -normal.dot(&centroid),
            });
            vertices_adj_to_face.extend_from_slice(polygon);
        }

        Self::link_faces(points, faces, vertices_adj_to_face)
    }

    /// Creates a polytope from a closed triangle mesh, assuming it is convex.
    ///
    /// Adjacent coplanar triangles are merged into a single polygonal face. The
    /// triangles must be wound counter-clockwise seen from outside.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(feature = "f32")] {
    /// use polycontact3d::math::Point;
    /// use polycontact3d::shape::Polytope;
    ///
    /// let points = vec![
    ///     Point::origin(),
    ///     Point::new(1.0, 0.0, 0.0),
    ///     Point::new(0.5, 1.0, 0.0),
    ///     Point::new(0.0, 0.0, 2.0),
    ///     Point::new(1.0, 0.0, 2.0),
    ///     Point::new(0.5, 1.0, 2.0),
    /// ];
    /// let triangles = [
    ///     [0, 2, 1],
    ///     [3, 4, 5],
    ///     [0, 1, 4], [0, 4, 3],
    ///     [1, 2, 5], [1, 5, 4],
    ///     [2, 0, 3], [2, 3, 5],
    /// ];
    ///
    /// let prism = Polytope::from_convex_mesh(points, &triangles).unwrap();
    /// // 2 triangles + 3 rectangles.
    /// assert_eq!(prism.num_faces(), 5);
    /// # }
    /// ```
    pub fn from_convex_mesh(
        points: Vec<Point<Real>>,
        indices: &[[u32; 3]],
    ) -> Result<Self, PolytopeError> {
        match Self::merge_coplanar_triangles(&points, indices) {
            Ok(polygons) => Self::from_polygons(points, &polygons[..]),
            Err(err) => {
                log::debug!("Failed to build a polytope from a triangle mesh: {err}");
                Err(err)
            }
        }
    }

    fn merge_coplanar_triangles(
        points: &[Point<Real>],
        indices: &[[u32; 3]],
    ) -> Result<Vec<Vec<u32>>, PolytopeError> {
        let eps = DEFAULT_EPSILON.sqrt();

        if points.len() < 4 || indices.len() < 4 {
            return Err(PolytopeError::IncompleteInput);
        }

        let mut edges = Vec::<MeshEdge>::with_capacity(points.len() + indices.len() - 2);
        let mut triangles = Vec::<Triangle>::with_capacity(indices.len());
        let mut edge_map = HashMap::default();

        /*
         * Initialize triangles and edges adjacency information.
         */
        for (tri_id, idx) in indices.iter().enumerate() {
            let mut edges_id = [u32::MAX; 3];

            if idx[0] == idx[1] || idx[0] == idx[2] || idx[1] == idx[2] {
                return Err(PolytopeError::DegenerateFace(tri_id));
            }

            if let Some(index) = idx.iter().find(|i| **i as usize >= points.len()) {
                return Err(PolytopeError::IndexOutOfBounds {
                    face: tri_id,
                    index: *index,
                });
            }

            for i1 in 0..3 {
                let i2 = (i1 + 1) % 3;
                let key = SortedPair::new(idx[i1], idx[i2]);

                match edge_map.entry(key) {
                    Entry::Occupied(e) => {
                        let edge: &mut MeshEdge = &mut edges[*e.get() as usize];

                        if edge.triangles[1] != u32::MAX || edge.vertices[0] == idx[i1] {
                            // t-junction, or inconsistent winding.
                            return Err(PolytopeError::NonManifold {
                                a: idx[i1],
                                b: idx[i2],
                            });
                        }

                        edge.triangles[1] = tri_id as u32;
                        edges_id[i1] = *e.get();
                    }
                    Entry::Vacant(e) => {
                        edges_id[i1] = *e.insert(edges.len() as u32);
                        edges.push(MeshEdge {
                            vertices: [idx[i1], idx[i2]],
                            triangles: [tri_id as u32, u32::MAX],
                            coplanar: false,
                        });
                    }
                }
            }

            let normal = utils::newell_face_normal(idx.iter().map(|i| points[*i as usize]))
                .ok_or(PolytopeError::DegenerateFace(tri_id))?;

            triangles.push(Triangle {
                vertices: *idx,
                edges: edges_id,
                normal: normal.into_inner(),
                parent_face: None,
            });
        }

        for e in &mut edges {
            if e.triangles[1] == u32::MAX {
                return Err(PolytopeError::OpenMesh {
                    a: e.vertices[0],
                    b: e.vertices[1],
                });
            }

            let n1 = triangles[e.triangles[0] as usize].normal;
            let n2 = triangles[e.triangles[1] as usize].normal;
            e.coplanar = n1.dot(&n2) > 1.0 - eps;
        }

        /*
         * Extract faces by following contours.
         */
        let mut polygons = Vec::new();
        let max_steps = 3 * triangles.len();

        for i in 0..triangles.len() {
            if triangles[i].parent_face.is_some() {
                continue;
            }

            let Some(j1) = (0..3).find(|j| !edges[triangles[i].edges[*j] as usize].coplanar)
            else {
                continue;
            };

            let new_face_id = polygons.len() as u32;
            let start_vertex = triangles[i].vertices[j1];
            let mut polygon = vec![start_vertex];

            // NOTE: variables ending with _id index the fields of a triangle.
            let mut curr_triangle = i;
            let mut curr_edge_id = (j1 + 1) % 3;
            let mut steps = 0;

            while triangles[curr_triangle].vertices[curr_edge_id] != start_vertex {
                steps += 1;
                if steps > max_steps {
                    return Err(PolytopeError::DegenerateFace(i));
                }

                let curr_edge = triangles[curr_triangle].edges[curr_edge_id];
                let curr_vertex = triangles[curr_triangle].vertices[curr_edge_id];
                triangles[curr_triangle].parent_face = Some(new_face_id);

                if !edges[curr_edge as usize].coplanar {
                    polygon.push(curr_vertex);
                    curr_edge_id = (curr_edge_id + 1) % 3;
                } else {
                    // Cross over to the coplanar triangle sharing this edge.
                    curr_triangle =
                        edges[curr_edge as usize].other_triangle(curr_triangle as u32) as usize;
                    curr_edge_id = triangles[curr_triangle]
                        .next_edge_id(curr_edge)
                        .ok_or(PolytopeError::DegenerateFace(curr_triangle))?;
                }
            }

            triangles[i].parent_face = Some(new_face_id);

            // Isolated edges left by rounding errors yield slivers. Drop them.
            if polygon.len() > 2 {
                polygons.push(polygon);
            }
        }

        Ok(polygons)
    }

    // Computes the edges and face adjacency from the face vertex lists.
    fn link_faces(
        points: Vec<Point<Real>>,
        faces: Vec<Face>,
        vertices_adj_to_face: Vec<u32>,
    ) -> Result<Self, PolytopeError> {
        let mut edges = Vec::<Edge>::new();
        let mut edges_adj_to_face = Vec::with_capacity(vertices_adj_to_face.len());
        let mut edge_map = HashMap::default();

        for (face_id, face) in faces.iter().enumerate() {
            let polygon = &vertices_adj_to_face[face.range()];

            for (i1, &a) in polygon.iter().enumerate() {
                let b = polygon[(i1 + 1) % polygon.len()];

                let edge_id = match edge_map.entry(SortedPair::new(a, b)) {
                    Entry::Occupied(e) => {
                        let edge: &mut Edge = &mut edges[*e.get() as usize];

                        if edge.faces[1] != u32::MAX || edge.vertices[0] == a {
                            return Err(PolytopeError::NonManifold { a, b });
                        }

                        edge.faces[1] = face_id as u32;
                        *e.get()
                    }
                    Entry::Vacant(e) => {
                        let edge_id = *e.insert(edges.len() as u32);
                        edges.push(Edge {
                            vertices: [a, b],
                            faces: [face_id as u32, u32::MAX],
                        });
                        edge_id
                    }
                };

                edges_adj_to_face.push(edge_id);
            }
        }

        if let Some(edge) = edges.iter().find(|e| e.faces[1] == u32::MAX) {
            return Err(PolytopeError::OpenMesh {
                a: edge.vertices[0],
                b: edge.vertices[1],
            });
        }

        let mut faces_adj_to_face = Vec::with_capacity(edges_adj_to_face.len());

        for (face_id, face) in faces.iter().enumerate() {
            for edge_id in &edges_adj_to_face[face.range()] {
                faces_adj_to_face.push(edges[*edge_id as usize].other_face(face_id as u32));
            }
        }

        Ok(Self {
            points,
            faces,
            edges,
            vertices_adj_to_face,
            edges_adj_to_face,
            faces_adj_to_face,
            position: Isometry::identity(),
        })
    }

    /// Checks that every point lies below every face plane, up to `eps`.
    pub fn check_convexity(&self, eps: Real) -> Result<(), PolytopeError> {
        for (face_id, face) in self.faces.iter().enumerate() {
            for (vertex, pt) in self.points.iter().enumerate() {
                if face.normal.dot(&pt.coords) + face.offset > eps {
                    log::debug!("Point {vertex} lies above the plane of face {face_id}.");
                    return Err(PolytopeError::NonConvex {
                        face: face_id,
                        vertex: vertex as u32,
                    });
                }
            }
        }

        Ok(())
    }

    /// Non-uniformly scales this polytope in its local space.
    ///
    /// Returns `None` if a component of `scale` is not strictly positive.
    pub fn scaled(mut self, scale: &Vector<Real>) -> Option<Self> {
        if scale.iter().any(|s| *s <= 0.0) {
            return None;
        }

        self.points
            .iter_mut()
            .for_each(|pt| pt.coords.component_mul_assign(scale));

        for face in &mut self.faces {
            let first = self.vertices_adj_to_face[face.first_vertex_or_edge as usize];
            let p0 = self.points[first as usize];
            face.normal = Unit::try_new(face.normal.component_div(scale), 0.0)?;
            face.offset = -face.normal.dot(&p0.coords);
        }

        Some(self)
    }

    /// The world-space pose of this polytope.
    #[inline]
    pub fn position(&self) -> &Isometry<Real> {
        &self.position
    }

    /// Sets the world-space pose of this polytope.
    #[inline]
    pub fn set_position(&mut self, position: Isometry<Real>) {
        self.position = position;
    }

    /// This polytope with its world-space pose set to `position`.
    #[inline]
    pub fn with_position(mut self, position: Isometry<Real>) -> Self {
        self.position = position;
        self
    }

    /// The local-space points of this polytope.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points[..]
    }

    /// The faces of this polytope.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces[..]
    }

    /// The number of faces of this polytope.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// The edges of this polytope.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges[..]
    }

    /// The vertices of all faces, concatenated.
    #[inline]
    pub fn vertices_adj_to_face(&self) -> &[u32] {
        &self.vertices_adj_to_face[..]
    }

    /// The edges of all faces, concatenated.
    #[inline]
    pub fn edges_adj_to_face(&self) -> &[u32] {
        &self.edges_adj_to_face[..]
    }

    /// The neighbors of all faces, concatenated.
    #[inline]
    pub fn faces_adj_to_face(&self) -> &[u32] {
        &self.faces_adj_to_face[..]
    }

    /// A handle to the face `id`.
    ///
    /// # Panics
    /// If `id` is not smaller than [`Polytope::num_faces`].
    #[inline]
    pub fn face(&self, id: u32) -> FaceRef<'_> {
        assert!((id as usize) < self.faces.len());
        FaceRef::new(self, id)
    }

    /// Handles to all the faces of this polytope, in index order.
    pub fn face_refs(&self) -> impl ExactSizeIterator<Item = FaceRef<'_>> {
        (0..self.faces.len() as u32).map(move |id| FaceRef::new(self, id))
    }

    /// A handle to the vertex `id`.
    ///
    /// # Panics
    /// If `id` is not a valid point index.
    #[inline]
    pub fn vertex(&self, id: u32) -> VertexRef<'_> {
        assert!((id as usize) < self.points.len());
        VertexRef::new(self, id)
    }

    /// The world-space points of this polytope.
    pub fn world_points(&self) -> impl ExactSizeIterator<Item = Point<Real>> + '_ {
        self.points.iter().map(move |pt| self.position * pt)
    }

    /// The local-space point with the largest dot product with `dir`.
    pub fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let mut best = 0;
        let mut best_dot = Real::MIN;

        for (i, pt) in self.points.iter().enumerate() {
            let dot = pt.coords.dot(dir);

            if dot > best_dot {
                best = i;
                best_dot = dot;
            }
        }

        self.points[best]
    }

    /// The world-space point with the largest dot product with the world-space `dir`.
    pub fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = self.position.inverse_transform_vector(dir);
        self.position * self.local_support_point(&local_dir)
    }
}
