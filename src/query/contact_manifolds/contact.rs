use crate::math::{Point, Real, UnitVector};
use crate::shape::Polytope;

/// A single contact point between two polytopes.
///
/// The polytopes are borrowed, so a contact cannot outlive them. Two contacts
/// compare equal if they refer to the same polytopes (by address) and have
/// identical positions and normals.
#[derive(Copy, Clone, Debug)]
pub struct Contact<'a> {
    /// The first polytope involved in the contact.
    pub obj1: &'a Polytope,
    /// The second polytope involved in the contact.
    pub obj2: &'a Polytope,
    /// The world-space location of the contact.
    pub position: Point<Real>,
    /// The world-space contact normal.
    pub normal: UnitVector<Real>,
}

impl<'a> Contact<'a> {
    /// Creates a new contact.
    #[inline]
    pub fn new(
        obj1: &'a Polytope,
        obj2: &'a Polytope,
        position: Point<Real>,
        normal: UnitVector<Real>,
    ) -> Self {
        Self {
            obj1,
            obj2,
            position,
            normal,
        }
    }

    /// Does this contact involve `obj1` and `obj2`, in this order?
    #[inline]
    pub fn is_between(&self, obj1: &Polytope, obj2: &Polytope) -> bool {
        core::ptr::eq(self.obj1, obj1) && core::ptr::eq(self.obj2, obj2)
    }
}

impl PartialEq for Contact<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.is_between(other.obj1, other.obj2)
            && self.position == other.position
            && self.normal == other.normal
    }
}
