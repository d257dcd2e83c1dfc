use polycontact3d::math::{Isometry, Real, Vector};
use polycontact3d::query::{Contact, ContactSet};
use polycontact3d::shape::Polytope;

mod contact_set_dedup;
mod direction_fallback;
mod edge_edge_cross;
mod idempotence_and_asymmetry;
mod stacked_cubes;
mod vertex_face_sequencing;

pub const EPS: Real = polycontact3d::math::DEFAULT_CONTACT_EPSILON;

/// A unit cube centered at the given point.
pub fn unit_cube(x: Real, y: Real, z: Real) -> Polytope {
    Polytope::cuboid(Vector::repeat(0.5)).with_position(Isometry::translation(x, y, z))
}

/// Are both sets made of the same contacts?
pub fn same_contacts(set1: &ContactSet, set2: &ContactSet) -> bool {
    set1.len() == set2.len() && set1.iter().all(|c| set2.contains(c))
}

/// No two contacts of the set are identical.
pub fn assert_no_duplicates(set: &ContactSet) {
    let contacts: Vec<&Contact> = set.iter().collect();

    for (i, c1) in contacts.iter().enumerate() {
        for c2 in &contacts[i + 1..] {
            assert_ne!(c1, c2);
        }
    }
}
