use crate::math::{Point, Real, UnitVector, Vector};

/// Computes the outward normal of a planar polygon with counter-clockwise winding.
///
/// Uses Newell's method, which sums the contributions of every edge and is
/// therefore insensitive to collinear vertices. Returns `None` if the polygon
/// has no area (fewer than three vertices, all collinear, or coincident).
pub fn newell_face_normal(
    polygon: impl IntoIterator<Item = Point<Real>> + Clone,
) -> Option<UnitVector<Real>> {
    let mut normal = Vector::zeros();
    let first = polygon.clone().into_iter().next()?;
    let mut prev = first;

    for curr in polygon.into_iter().skip(1).chain(core::iter::once(first)) {
        normal.x += (prev.y - curr.y) * (prev.z + curr.z);
        normal.y += (prev.z - curr.z) * (prev.x + curr.x);
        normal.z += (prev.x - curr.x) * (prev.y + curr.y);
        prev = curr;
    }

    UnitVector::try_new(normal, crate::math::DEFAULT_EPSILON)
}
