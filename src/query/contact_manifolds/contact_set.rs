use crate::math::{Point, Real, Vector};
use crate::query::Contact;
use crate::utils::hashmap::{Entry, HashMap};
use ordered_float::OrderedFloat;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct ContactKey {
    obj1: usize,
    obj2: usize,
    position: [OrderedFloat<Real>; 3],
    normal: [OrderedFloat<Real>; 3],
}

/// A deduplicating set of contacts.
///
/// Contacts are keyed by the addresses of both polytopes, their position, and
/// their normal. By default two contacts are merged only if these are all
/// bit-identical. With [`ContactSet::with_merge_distance`], positions and normal
/// coordinates are first rounded to a grid of the given pitch, so contacts
/// rounding to the same grid cell are merged and the first one inserted is kept.
///
/// The iteration order is unspecified unless the `enhanced-determinism`
/// feature is enabled, in which case contacts are iterated in insertion order.
#[derive(Clone, Debug, Default)]
pub struct ContactSet<'a> {
    contacts: HashMap<ContactKey, Contact<'a>>,
    merge_distance: Real,
}

impl<'a> ContactSet<'a> {
    /// An empty set merging only identical contacts.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty set merging contacts closer than about `merge_distance`.
    ///
    /// A zero or negative distance merges only identical contacts.
    pub fn with_merge_distance(merge_distance: Real) -> Self {
        Self {
            contacts: HashMap::default(),
            merge_distance,
        }
    }

    /// The pitch of the grid used to merge contacts.
    #[inline]
    pub fn merge_distance(&self) -> Real {
        self.merge_distance
    }

    fn snap(&self, x: Real) -> OrderedFloat<Real> {
        if self.merge_distance > 0.0 {
            OrderedFloat((x / self.merge_distance).round() * self.merge_distance)
        } else {
            OrderedFloat(x)
        }
    }

    fn snap_vector(&self, v: &Vector<Real>) -> [OrderedFloat<Real>; 3] {
        [self.snap(v.x), self.snap(v.y), self.snap(v.z)]
    }

    fn key(&self, contact: &Contact) -> ContactKey {
        ContactKey {
            obj1: contact.obj1 as *const _ as usize,
            obj2: contact.obj2 as *const _ as usize,
            position: self.snap_vector(&contact.position.coords),
            normal: self.snap_vector(&contact.normal),
        }
    }

    /// Inserts a contact, unless an equivalent contact is already present.
    ///
    /// Returns `true` if the contact was added.
    pub fn insert(&mut self, contact: Contact<'a>) -> bool {
        let key = self.key(&contact);

        match self.contacts.entry(key) {
            Entry::Vacant(e) => {
                let _ = e.insert(contact);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Does this set contain a contact equivalent to `contact`?
    pub fn contains(&self, contact: &Contact) -> bool {
        self.contacts.contains_key(&self.key(contact))
    }

    /// The number of contacts in this set.
    #[inline]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Is this set empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Removes all the contacts from this set.
    #[inline]
    pub fn clear(&mut self) {
        self.contacts.clear()
    }

    /// Iterates through the contacts of this set.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Contact<'a>> + '_ {
        self.contacts.values()
    }

    /// The contact positions of this set.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Point<Real>> + '_ {
        self.contacts.values().map(|c| c.position)
    }

    /// Removes all the contacts from this set, and returns them.
    pub fn drain(&mut self) -> impl Iterator<Item = Contact<'a>> {
        core::mem::take(&mut self.contacts).into_values()
    }
}

impl<'a> Extend<Contact<'a>> for ContactSet<'a> {
    fn extend<T: IntoIterator<Item = Contact<'a>>>(&mut self, iter: T) {
        for contact in iter {
            let _ = self.insert(contact);
        }
    }
}
