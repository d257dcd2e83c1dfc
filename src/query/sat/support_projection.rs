use crate::math::{Point, Real, Vector};
use crate::shape::{FaceRef, Line, Polytope, VertexRef};

/// The interval covered by the projection of a feature on a direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    /// The smallest projected value.
    pub min: Real,
    /// The largest projected value.
    pub max: Real,
}

impl Projection {
    /// The projection of a single point.
    #[inline]
    pub fn point(value: Real) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// The projection of a set of points on `dir`.
    ///
    /// An empty set yields the empty interval `[+inf, -inf]`, which overlaps nothing.
    pub fn from_points(pts: impl IntoIterator<Item = Point<Real>>, dir: &Vector<Real>) -> Self {
        let mut res = Self {
            min: Real::INFINITY,
            max: -Real::INFINITY,
        };

        for pt in pts {
            let value = pt.coords.dot(dir);
            res.min = res.min.min(value);
            res.max = res.max.max(value);
        }

        res
    }

    /// Do these intervals overlap, allowing a gap of at most `eps`?
    #[inline]
    pub fn overlaps(&self, other: &Self, eps: Real) -> bool {
        self.max + eps >= other.min && other.max + eps >= self.min
    }
}

/// A feature that can be projected on a direction.
pub trait SupportProjection {
    /// Projects this feature, in world-space, on `dir`.
    fn projection(&self, dir: &Vector<Real>) -> Projection;
}

impl SupportProjection for Point<Real> {
    #[inline]
    fn projection(&self, dir: &Vector<Real>) -> Projection {
        Projection::point(self.coords.dot(dir))
    }
}

impl SupportProjection for VertexRef<'_> {
    #[inline]
    fn projection(&self, dir: &Vector<Real>) -> Projection {
        self.point().projection(dir)
    }
}

impl SupportProjection for Line {
    #[inline]
    fn projection(&self, dir: &Vector<Real>) -> Projection {
        Projection::from_points([self.a, self.b], dir)
    }
}

impl SupportProjection for FaceRef<'_> {
    fn projection(&self, dir: &Vector<Real>) -> Projection {
        Projection::from_points(self.world_vertices(), dir)
    }
}

impl SupportProjection for Polytope {
    fn projection(&self, dir: &Vector<Real>) -> Projection {
        Projection {
            min: self.support_point(&-dir).coords.dot(dir),
            max: self.support_point(dir).coords.dot(dir),
        }
    }
}

impl<T: SupportProjection + ?Sized> SupportProjection for &T {
    #[inline]
    fn projection(&self, dir: &Vector<Real>) -> Projection {
        (**self).projection(dir)
    }
}
