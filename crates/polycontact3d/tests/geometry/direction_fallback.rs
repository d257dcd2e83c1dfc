use super::{same_contacts, unit_cube};
use polycontact3d::math::Vector;
use polycontact3d::query::{contacts, effective_direction, ContactOptions, ContactSet};

#[test]
fn zero_direction_is_replaced_by_up() {
    let lower = unit_cube(0.5, 0.5, 0.5);
    let upper = unit_cube(0.5, 1.5, 0.5);
    let options = ContactOptions::default();

    let mut expected = ContactSet::new();
    let _ = contacts(&lower, &upper, &Vector::y(), &options, &mut expected);

    let mut manifold = ContactSet::new();
    let dir = contacts(&lower, &upper, &Vector::zeros(), &options, &mut manifold);

    assert_eq!(*dir, Vector::y());
    assert!(!manifold.is_empty());
    assert!(same_contacts(&manifold, &expected));
}

#[test]
fn tiny_direction_is_replaced_by_up() {
    let lower = unit_cube(0.5, 0.5, 0.5);
    let upper = unit_cube(0.5, 1.5, 0.5);
    let options = ContactOptions::default();
    let tiny = Vector::new(1.0e-3, 0.0, 0.0);

    assert_eq!(*effective_direction(&tiny, &options), Vector::y());

    let mut expected = ContactSet::new();
    let _ = contacts(&lower, &upper, &Vector::y(), &options, &mut expected);
    let mut manifold = ContactSet::new();
    let dir = contacts(&lower, &upper, &tiny, &options, &mut manifold);

    assert_eq!(*dir, Vector::y());
    assert!(same_contacts(&manifold, &expected));
}

#[test]
fn non_unit_directions_are_normalized() {
    let options = ContactOptions::default();
    let dir = effective_direction(&Vector::new(0.0, 4.0, 0.0), &options);
    assert_eq!(*dir, Vector::y());

    let lower = unit_cube(0.5, 0.5, 0.5);
    let upper = unit_cube(0.5, 1.5, 0.5);
    let mut expected = ContactSet::new();
    let _ = contacts(&lower, &upper, &Vector::y(), &options, &mut expected);
    let mut manifold = ContactSet::new();
    let _ = contacts(&lower, &upper, &Vector::new(0.0, 4.0, 0.0), &options, &mut manifold);
    assert!(same_contacts(&manifold, &expected));
}
