use super::assert_no_duplicates;
use approx::assert_relative_eq;
use polycontact3d::math::{Isometry, Point, Real, Vector};
use polycontact3d::query::{contacts, ContactOptions, ContactSet};
use polycontact3d::shape::Polytope;

const FRAC_PI_4: Real = core::f32::consts::FRAC_PI_4;
const SQRT_2: Real = core::f32::consts::SQRT_2;

/// Two unit cubes, each rotated by 45 degrees, touching along crossing edges.
///
/// The top edge of the lower cube runs along x, the bottom edge of the upper
/// cube runs along z, and both cross at `(0, sqrt(2) / 2, 0)`.
pub fn crossing_cubes() -> (Polytope, Polytope) {
    let lower = Polytope::cuboid(Vector::repeat(0.5))
        .with_position(Isometry::new(Vector::zeros(), Vector::x() * FRAC_PI_4));
    let upper = Polytope::cuboid(Vector::repeat(0.5)).with_position(Isometry::new(
        Vector::new(0.0, SQRT_2, 0.0),
        Vector::z() * FRAC_PI_4,
    ));
    (lower, upper)
}

#[test]
fn crossing_edges_touch_at_a_single_point() {
    let (lower, upper) = crossing_cubes();
    let crossing = Point::new(0.0, SQRT_2 / 2.0, 0.0);

    let mut manifold = ContactSet::new();
    let _ = contacts(
        &lower,
        &upper,
        &Vector::y(),
        &ContactOptions::default(),
        &mut manifold,
    );

    // The top edge of the lower cube is shared by two of its faces, and each
    // of them reports the crossing with its own normal.
    assert_eq!(manifold.len(), 2);
    assert_no_duplicates(&manifold);

    for contact in manifold.iter() {
        assert_relative_eq!(contact.position, crossing, epsilon = 1.0e-4);
        // Edge-edge contacts carry the normal of a face of the first polytope.
        assert!(contact.is_between(&lower, &upper));
        assert_relative_eq!(contact.normal.x, 0.0, epsilon = 1.0e-5);
        assert_relative_eq!(contact.normal.y, SQRT_2 / 2.0, epsilon = 1.0e-5);
        assert_relative_eq!(contact.normal.z.abs(), SQRT_2 / 2.0, epsilon = 1.0e-5);
    }

    assert!(manifold.iter().any(|c| c.normal.z > 0.0));
    assert!(manifold.iter().any(|c| c.normal.z < 0.0));
}

#[test]
fn rotated_edges_apart_do_not_touch() {
    let (lower, upper) = crossing_cubes();
    let upper = upper.with_position(Isometry::new(
        Vector::new(0.0, SQRT_2 + 0.01, 0.0),
        Vector::z() * FRAC_PI_4,
    ));

    let mut manifold = ContactSet::new();
    let _ = contacts(
        &lower,
        &upper,
        &Vector::y(),
        &ContactOptions::default(),
        &mut manifold,
    );
    assert!(manifold.is_empty());
}
