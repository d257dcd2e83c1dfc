use crate::math::{Point, Real, Vector};
use crate::shape::PlueckerLine;

/// A directed segment between two world-space points.
///
/// The segment also carries the Plücker coordinates of its supporting line.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Line {
    /// The start point of this segment.
    pub a: Point<Real>,
    /// The end point of this segment.
    pub b: Point<Real>,
    pluecker: PlueckerLine,
}

impl Line {
    /// Creates the segment going from `a` to `b`.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Self {
        Self {
            a,
            b,
            pluecker: PlueckerLine::from_points(&a, &b),
        }
    }

    /// The Plücker coordinates of the infinite line supporting this segment.
    #[inline]
    pub fn pluecker(&self) -> &PlueckerLine {
        &self.pluecker
    }

    /// The vector `b - a`.
    #[inline]
    pub fn dir(&self) -> Vector<Real> {
        self.pluecker.dir
    }

    /// The length of this segment.
    #[inline]
    pub fn length(&self) -> Real {
        self.dir().norm()
    }

    /// The parameter of the orthogonal projection of `pt` on the supporting line.
    ///
    /// This is `0` at `a`, `1` at `b`, and outside of `[0, 1]` for points
    /// projecting outside of the segment. A degenerate segment yields NaN.
    #[inline]
    pub fn t(&self, pt: &Point<Real>) -> Real {
        let dir = self.dir();
        (pt - self.a).dot(&dir) / dir.norm_squared()
    }

    /// The point at parameter `t` on the supporting line.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.a + self.dir() * t
    }

    /// The same segment, reversed.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.b, self.a)
    }
}
