use super::{assert_no_duplicates, unit_cube, EPS};
use approx::relative_eq;
use polycontact3d::math::{Point, Vector};
use polycontact3d::query::{contacts, ContactOptions, ContactSet};

#[test]
fn stacked_cubes_touch_at_their_shared_corners() {
    let lower = unit_cube(0.5, 0.5, 0.5);
    let upper = unit_cube(0.5, 1.5, 0.5);
    let corners = [
        Point::new(0.0, 1.0, 0.0),
        Point::new(1.0, 1.0, 0.0),
        Point::new(0.0, 1.0, 1.0),
        Point::new(1.0, 1.0, 1.0),
    ];

    let mut manifold = ContactSet::new();
    let dir = contacts(
        &lower,
        &upper,
        &Vector::y(),
        &ContactOptions::default(),
        &mut manifold,
    );

    assert_eq!(*dir, Vector::y());
    assert!(!manifold.is_empty());
    assert_no_duplicates(&manifold);

    for contact in manifold.iter() {
        assert!(
            corners
                .iter()
                .any(|c| relative_eq!(*c, contact.position, epsilon = 1.0e-6)),
            "Unexpected contact at {:?}",
            contact.position
        );
    }

    // Corners of the upper cube against the top face of the lower cube.
    let on_top_face: Vec<_> = manifold
        .iter()
        .filter(|c| c.is_between(&upper, &lower))
        .filter(|c| relative_eq!(*c.normal, Vector::y(), epsilon = 1.0e-6))
        .collect();

    assert_eq!(on_top_face.len(), 4);

    for corner in &corners {
        assert!(on_top_face
            .iter()
            .any(|c| relative_eq!(c.position, *corner, epsilon = 1.0e-6)));
    }
}

#[test]
fn flush_faces_may_yield_more_than_four_contacts() {
    let lower = unit_cube(0.5, 0.5, 0.5);
    let upper = unit_cube(0.5, 1.5, 0.5);

    let mut manifold = ContactSet::new();
    let _ = contacts(
        &lower,
        &upper,
        &Vector::y(),
        &ContactOptions::default(),
        &mut manifold,
    );

    // Both cubes contribute their corners, and side faces add their own normals.
    assert!(manifold.len() > 4);
    assert!(manifold.iter().any(|c| c.is_between(&lower, &upper)));
}

#[test]
fn penetrating_cubes_keep_their_corner_contacts() {
    let lower = unit_cube(0.5, 0.5, 0.5);
    let upper = unit_cube(0.5, 1.5 - 2.0 * EPS, 0.5);

    // Along y, the sunk corners project more than the tolerance away from the
    // top face and are filtered out before clipping. Along x, every feature
    // projection overlaps.
    let mut manifold = ContactSet::new();
    let _ = contacts(
        &lower,
        &upper,
        &Vector::x(),
        &ContactOptions::default(),
        &mut manifold,
    );

    // The bottom corners of the upper cube sank below the top face.
    let on_top_face: Vec<_> = manifold
        .iter()
        .filter(|c| c.is_between(&upper, &lower))
        .filter(|c| relative_eq!(*c.normal, Vector::y(), epsilon = 1.0e-6))
        .collect();

    assert_eq!(on_top_face.len(), 4);

    for contact in on_top_face {
        assert!(relative_eq!(
            contact.position.y,
            1.0 - 2.0 * EPS,
            epsilon = 1.0e-6
        ));
    }
}
