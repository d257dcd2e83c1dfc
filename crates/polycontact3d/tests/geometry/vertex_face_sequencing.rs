use super::{unit_cube, EPS};
use approx::{assert_relative_eq, relative_eq};
use polycontact3d::math::{Point, Vector};
use polycontact3d::query::details::clip_vertex_face;
use polycontact3d::query::{contacts, ContactOptions, ContactSet};
use polycontact3d::shape::Polytope;

/// Counts the contacts between the corners of `upper` and the top face of `lower`.
fn corners_on_top_face(lower: &Polytope, upper: &Polytope) -> usize {
    // Along x, every feature projection overlaps, so only the clip test decides.
    let mut manifold = ContactSet::new();
    let _ = contacts(lower, upper, &Vector::x(), &ContactOptions::default(), &mut manifold);
    manifold
        .iter()
        .filter(|c| c.is_between(upper, lower) && relative_eq!(*c.normal, Vector::y()))
        .count()
}

#[test]
fn vertices_above_the_face_plane_are_rejected() {
    // Lifted by more than the tolerance: the corners are inside of the fences
    // of the top face, but never reach them.
    let lower = unit_cube(0.5, 0.5, 0.5);
    let upper = unit_cube(0.5, 1.5 + 2.0 * EPS, 0.5);
    assert_eq!(corners_on_top_face(&lower, &upper), 0);
}

#[test]
fn vertices_on_the_face_plane_are_accepted() {
    let lower = unit_cube(0.5, 0.5, 0.5);
    let upper = unit_cube(0.5, 1.5, 0.5);
    assert_eq!(corners_on_top_face(&lower, &upper), 4);

    let upper = unit_cube(0.5, 1.5 + 0.5 * EPS, 0.5);
    assert_eq!(corners_on_top_face(&lower, &upper), 4);
}

#[test]
fn vertices_below_the_face_plane_are_accepted() {
    let lower = unit_cube(0.5, 0.5, 0.5);
    let upper = unit_cube(0.5, 1.5 - 0.1, 0.5);
    assert_eq!(corners_on_top_face(&lower, &upper), 4);
}

#[test]
fn vertices_outside_of_the_fences_are_rejected() {
    let lower = unit_cube(0.5, 0.5, 0.5);
    let mut top_edges = Vec::new();
    let top = lower.face(3);
    top.edges(&mut top_edges);

    // On the plane of the top face, but beyond its +x border.
    let shifted = unit_cube(1.5 + 2.0 * EPS, 1.5, 0.5);
    let outside = shifted.vertex(0);
    assert_relative_eq!(outside.point(), Point::new(1.0 + 2.0 * EPS, 1.0, 0.0));
    assert!(clip_vertex_face(&outside, &top, &top_edges, EPS).is_none());

    // Within the tolerance of the border.
    let shifted = unit_cube(1.5 + EPS / 2.0, 1.5, 0.5);
    let border = shifted.vertex(0);
    let contact = clip_vertex_face(&border, &top, &top_edges, EPS);
    assert!(contact.is_some_and(|c| c.is_between(&shifted, &lower)));
}
