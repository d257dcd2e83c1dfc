//! Contact generation between convex polytopes.
//!
//! The entry point is [`contacts`], which fills a [`ContactSet`] with the
//! contacts between two [`Polytope`](crate::shape::Polytope) along an
//! approximate contact direction. The building blocks it relies on are exposed
//! too:
//!
//! * [`sat`] for the projection overlap tests used to prune candidate features.
//! * [`details`] for the exact vertex-face and edge-edge tests.

pub use self::contact_manifolds::{
    contacts, effective_direction, select_candidate_faces, Contact, ContactSet,
};
pub use self::contact_options::ContactOptions;

mod clip;
mod contact_manifolds;
mod contact_options;
pub mod sat;

/// Exact tests dedicated to specific pairs of features.
pub mod details {
    pub use super::clip::*;
}
