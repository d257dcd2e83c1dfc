use crate::math::{Real, UnitVector, Vector};
use crate::query::clip::{clip_edge_edge, clip_vertex_face};
use crate::query::sat::touching;
use crate::query::{ContactOptions, ContactSet};
use crate::shape::{FaceRef, Line, Polytope};
use smallvec::SmallVec;

/// The direction actually used by [`contacts`] for the caller-supplied `dir`.
///
/// Directions with a squared norm smaller than `options.epsilon` (or that are
/// not finite) are replaced by [`ContactOptions::fallback_direction`]. Other
/// directions are normalized.
pub fn effective_direction(dir: &Vector<Real>, options: &ContactOptions) -> UnitVector<Real> {
    let sq_norm = dir.norm_squared();
    let usable = sq_norm >= options.epsilon && sq_norm.is_finite();

    if usable {
        UnitVector::new_normalize(*dir)
    } else {
        log::trace!("Contact direction {dir:?} is too small: falling back to the up axis.");
        ContactOptions::fallback_direction()
    }
}

/// Selects the faces of `obj` that may touch `other` along `dir`.
///
/// Faces are scanned in index order. The first face whose projection on `dir`
/// overlaps the projection of `other` is appended to `out`, followed by all its
/// neighbors, and the scan stops there. Returns the selected face, if any.
///
/// The scan is not exhaustive: if `dir` is a poor approximation of the actual
/// contact normal, the faces really in contact may be missed.
pub fn select_candidate_faces(
    obj: &Polytope,
    other: &Polytope,
    dir: &Vector<Real>,
    eps: Real,
    out: &mut impl Extend<u32>,
) -> Option<u32> {
    let face = obj
        .face_refs()
        .find(|face| touching(face, other, dir, eps))?;

    out.extend(core::iter::once(face.id()).chain(face.neighbors().iter().copied()));
    Some(face.id())
}

/// Computes the contacts between two polytopes, inserting them into `out`.
///
/// `dir` approximates the contact normal, typically supplied by the
/// broad-phase. It is replaced by the up axis if it is too close to zero (see
/// [`effective_direction`]), and the direction actually used is returned.
///
/// Vertex-face contacts are recorded as `(vertex polytope, face polytope)` with
/// the face normal. Edge-edge contacts are recorded as `(obj1, obj2)` with the
/// normal of the face of `obj1`. Swapping the polytopes may thus change the
/// result. Polytopes without touching faces produce no contact.
pub fn contacts<'a>(
    obj1: &'a Polytope,
    obj2: &'a Polytope,
    dir: &Vector<Real>,
    options: &ContactOptions,
    out: &mut ContactSet<'a>,
) -> UnitVector<Real> {
    let dir = effective_direction(dir, options);
    let eps = options.epsilon;

    let mut faces1 = SmallVec::<[u32; 8]>::new();
    let mut faces2 = SmallVec::<[u32; 8]>::new();
    let _ = select_candidate_faces(obj1, obj2, &dir, eps, &mut faces1);
    let _ = select_candidate_faces(obj2, obj1, &dir, eps, &mut faces2);

    log::trace!(
        "Candidate faces along {:?}: {:?} and {:?}.",
        dir.as_ref(),
        faces1,
        faces2
    );

    let num_contacts = out.len();
    let mut edges1 = SmallVec::<[Line; 8]>::new();
    let mut edges2 = SmallVec::<[Line; 8]>::new();

    for f1 in &faces1 {
        let face1 = obj1.face(*f1);
        edges1.clear();
        face1.edges(&mut edges1);

        for f2 in &faces2 {
            let face2 = obj2.face(*f2);

            if touching(&face1, &face2, &dir, eps) {
                edges2.clear();
                face2.edges(&mut edges2);
                contacts_face_face(&face1, &edges1, &face2, &edges2, &dir, eps, out);
            }
        }
    }

    log::trace!("{} new contacts.", out.len() - num_contacts);
    dir
}

fn contacts_face_face<'a>(
    face1: &FaceRef<'a>,
    edges1: &[Line],
    face2: &FaceRef<'a>,
    edges2: &[Line],
    dir: &Vector<Real>,
    eps: Real,
    out: &mut ContactSet<'a>,
) {
    /*
     * Vertex-Face cases.
     */
    for vertex in face1.vertex_refs() {
        if touching(&vertex, face2, dir, eps) {
            if let Some(contact) = clip_vertex_face(&vertex, face2, edges2, eps) {
                let _ = out.insert(contact);
            }
        }
    }

    for vertex in face2.vertex_refs() {
        if touching(&vertex, face1, dir, eps) {
            if let Some(contact) = clip_vertex_face(&vertex, face1, edges1, eps) {
                let _ = out.insert(contact);
            }
        }
    }

    /*
     * Edge-Edge cases.
     */
    for edge1 in edges1 {
        for edge2 in edges2 {
            if touching(edge1, edge2, dir, eps) {
                if let Some(contact) = clip_edge_edge(face1, edge1, face2, edge2, eps) {
                    let _ = out.insert(contact);
                }
            }
        }
    }
}
