use crate::math::Real;
use crate::query::Contact;
use crate::shape::{FaceRef, Line};

/// Tests two edges for a crossing contact.
///
/// `edge1` must be an edge of `face1` and `edge2` an edge of `face2`. The
/// contact is accepted if the infinite lines of both edges are closer than
/// `eps`, and if the point where the line of `edge2` crosses the plane of
/// `face1` projects inside of both segments. The contact is located at that
/// crossing point, oriented along the normal of `face1`, and recorded as
/// `(face1 polytope, face2 polytope)`.
///
/// No contact is produced if the line of `edge2` is parallel to `face1`.
pub fn clip_edge_edge<'a>(
    face1: &FaceRef<'a>,
    edge1: &Line,
    face2: &FaceRef<'a>,
    edge2: &Line,
    eps: Real,
) -> Option<Contact<'a>> {
    let close = edge1.pluecker().distance_to_line(edge2.pluecker()) < eps;

    if !close {
        return None;
    }

    let crossing = face1.plane().intersect_line(edge2.pluecker()).to_point()?;
    let t1 = edge1.t(&crossing);
    let t2 = edge2.t(&crossing);

    if (0.0..=1.0).contains(&t1) && (0.0..=1.0).contains(&t2) {
        Some(Contact::new(
            face1.polytope(),
            face2.polytope(),
            crossing,
            face1.normal(),
        ))
    } else {
        None
    }
}
