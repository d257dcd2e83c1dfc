use super::edge_edge_cross::crossing_cubes;
use super::{same_contacts, unit_cube};
use polycontact3d::math::Vector;
use polycontact3d::query::{contacts, ContactOptions, ContactSet};

#[test]
fn repeated_queries_give_the_same_contacts() {
    let lower = unit_cube(0.5, 0.5, 0.5);
    let upper = unit_cube(0.5, 1.5, 0.5);
    let options = ContactOptions::default();

    let mut manifold1 = ContactSet::new();
    let mut manifold2 = ContactSet::new();
    let _ = contacts(&lower, &upper, &Vector::y(), &options, &mut manifold1);
    let _ = contacts(&lower, &upper, &Vector::y(), &options, &mut manifold2);
    assert!(same_contacts(&manifold1, &manifold2));

    // Querying again into the same set adds nothing.
    let num_contacts = manifold1.len();
    let _ = contacts(&lower, &upper, &Vector::y(), &options, &mut manifold1);
    assert_eq!(manifold1.len(), num_contacts);
}

#[test]
fn swapping_the_polytopes_changes_the_edge_contacts() {
    let (lower, upper) = crossing_cubes();
    let options = ContactOptions::default();

    let mut forward = ContactSet::new();
    let mut backward = ContactSet::new();
    let _ = contacts(&lower, &upper, &Vector::y(), &options, &mut forward);
    let _ = contacts(&upper, &lower, &-Vector::y(), &options, &mut backward);

    assert!(!forward.is_empty());
    assert!(!backward.is_empty());
    assert!(forward.iter().all(|c| c.is_between(&lower, &upper)));
    assert!(backward.iter().all(|c| c.is_between(&upper, &lower)));
    assert!(!same_contacts(&forward, &backward));
}
