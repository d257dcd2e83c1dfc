use crate::math::{Real, Vector};
use crate::query::sat::SupportProjection;

/// Do the projections of `a` and `b` on `dir` overlap, up to `eps`?
///
/// This is true iff `max(a) + eps >= min(b)` and `max(b) + eps >= min(a)`.
/// Non-finite projections never overlap.
#[inline]
pub fn touching<A, B>(a: &A, b: &B, dir: &Vector<Real>, eps: Real) -> bool
where
    A: SupportProjection + ?Sized,
    B: SupportProjection + ?Sized,
{
    a.projection(dir).overlaps(&b.projection(dir), eps)
}
