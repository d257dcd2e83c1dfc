use crate::math::Real;
use crate::query::Contact;
use crate::shape::{FaceRef, Line, PlueckerPlane, VertexRef};

/// Tests a vertex against the Voronoi region of a face.
///
/// The vertex is accepted if its signed distance to the face plane is smaller
/// than `eps`, and if it is not more than `eps` outside of any of the fences
/// erected perpendicular to the face along its boundary. Vertices below the
/// plane are thus accepted, while vertices more than `eps` above it are rejected
/// even if they lie inside of the fences. The fences are only checked once the
/// plane test passed.
///
/// `face_edges` must be the world-space edges of `face`, as computed by
/// [`FaceRef::edges`]. The resulting contact is located at the vertex, oriented
/// along the face normal, and recorded as `(vertex polytope, face polytope)`.
pub fn clip_vertex_face<'a>(
    vertex: &VertexRef<'a>,
    face: &FaceRef<'a>,
    face_edges: &[Line],
    eps: Real,
) -> Option<Contact<'a>> {
    let pt = vertex.pluecker();
    let under_plane = face.plane().dot(&pt) < eps;

    if !under_plane {
        return None;
    }

    let normal = face.normal();

    for edge in face_edges {
        // Degenerate edges span no fence.
        let Some(fence) = PlueckerPlane::from_line_and_point(edge.pluecker(), &(edge.a + *normal))
        else {
            continue;
        };

        let inside = fence.dot(&pt) >= -eps;

        if !inside {
            return None;
        }
    }

    Some(Contact::new(
        vertex.polytope(),
        face.polytope(),
        vertex.point(),
        normal,
    ))
}
