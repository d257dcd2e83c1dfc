//! Exact tests turning a pair of touching features into a contact.

pub use self::clip_edge_edge::clip_edge_edge;
pub use self::clip_vertex_face::clip_vertex_face;

mod clip_edge_edge;
mod clip_vertex_face;
