use super::{same_contacts, unit_cube};
use polycontact3d::math::{Point, Vector};
use polycontact3d::query::{contacts, Contact, ContactOptions, ContactSet};

#[test]
fn identical_contacts_are_stored_once() {
    let a = unit_cube(0.0, 0.0, 0.0);
    let b = unit_cube(0.0, 1.0, 0.0);
    let contact = Contact::new(&a, &b, Point::new(0.5, 0.5, 0.5), Vector::y_axis());

    let mut manifold = ContactSet::new();
    assert!(manifold.insert(contact));
    assert!(!manifold.insert(contact));
    assert_eq!(manifold.len(), 1);

    // Same geometry between different polytopes, or in the other order.
    assert!(manifold.insert(Contact::new(&b, &a, contact.position, contact.normal)));
    assert!(manifold.insert(Contact::new(&a, &a, contact.position, contact.normal)));
    assert_eq!(manifold.len(), 3);
}

#[test]
fn nearby_contacts_are_merged_with_a_merge_distance() {
    let a = unit_cube(0.0, 0.0, 0.0);
    let b = unit_cube(0.0, 1.0, 0.0);
    let c1 = Contact::new(&a, &b, Point::new(0.5, 0.5, 0.5), Vector::y_axis());
    let c2 = Contact::new(&a, &b, Point::new(0.500001, 0.5, 0.5), Vector::y_axis());

    let mut exact = ContactSet::new();
    exact.extend([c1, c2]);
    assert_eq!(exact.len(), 2);

    let mut merged = ContactSet::with_merge_distance(0.01);
    merged.extend([c1, c2]);
    assert_eq!(merged.len(), 1);
    // The first contact inserted is kept.
    assert_eq!(merged.iter().next(), Some(&c1));
}

#[test]
fn contacts_merged_from_several_queries_are_not_duplicated() {
    let lower = unit_cube(0.5, 0.5, 0.5);
    let upper = unit_cube(0.5, 1.5, 0.5);
    let options = ContactOptions::default();

    let mut manifold = ContactSet::new();
    let _ = contacts(&lower, &upper, &Vector::y(), &options, &mut manifold);
    let num_contacts = manifold.len();

    let mut copy = ContactSet::new();
    copy.extend(manifold.iter().copied());
    copy.extend(manifold.iter().copied());
    assert_eq!(copy.len(), num_contacts);
    assert!(same_contacts(&copy, &manifold));

    let drained: Vec<_> = copy.drain().collect();
    assert_eq!(drained.len(), num_contacts);
    assert!(copy.is_empty());
}
