//! Various unsorted geometrical and logical operators.

pub use self::newell_face_normal::newell_face_normal;
pub use self::sorted_pair::SortedPair;

#[cfg(feature = "enhanced-determinism")]
mod fx_hasher;
pub mod hashmap;
mod newell_face_normal;
mod sorted_pair;
