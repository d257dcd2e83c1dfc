//! Homogeneous points, planes and lines.
//!
//! Points and planes are both stored as 4-vectors so that the signed distance
//! between them is a single dot product. Lines use Plücker coordinates: a
//! direction `u` and a moment `m = a × b` for any two points `a`, `b` on the
//! line. This representation handles skew, intersecting and parallel
//! configurations with the same formulas.

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use na::Vector4;

/// A point in homogeneous coordinates `(x, y, z, w)`.
///
/// Finite points have `w != 0`. A point with `w == 0` lies at infinity, which is
/// what a line/plane intersection yields when the line is parallel to the plane.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PlueckerPoint {
    /// The homogeneous coordinates of this point.
    pub coords: Vector4<Real>,
}

impl PlueckerPoint {
    /// Creates a homogeneous point from its four coordinates.
    #[inline]
    pub fn new(x: Real, y: Real, z: Real, w: Real) -> Self {
        Self {
            coords: Vector4::new(x, y, z, w),
        }
    }

    /// Lifts a euclidean point to homogeneous coordinates (with `w = 1`).
    #[inline]
    pub fn from_point(pt: &Point<Real>) -> Self {
        Self::new(pt.x, pt.y, pt.z, 1.0)
    }

    /// Is this point at infinity?
    #[inline]
    pub fn is_at_infinity(&self) -> bool {
        self.coords.w.abs() <= DEFAULT_EPSILON
    }

    /// The euclidean point this homogeneous point represents.
    ///
    /// Returns `None` for points at infinity.
    #[inline]
    pub fn to_point(&self) -> Option<Point<Real>> {
        if self.is_at_infinity() {
            None
        } else {
            Some(Point::from(self.coords.xyz() / self.coords.w))
        }
    }
}

impl From<Point<Real>> for PlueckerPoint {
    fn from(pt: Point<Real>) -> Self {
        Self::from_point(&pt)
    }
}

/// A plane `n · x + d = 0` stored as the 4-vector `(n, d)`.
///
/// Planes built by this module always have a unit normal, so the dot product
/// with a point having `w = 1` is the signed euclidean distance to the plane.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PlueckerPlane {
    /// The coefficients `(n.x, n.y, n.z, d)` of this plane.
    pub coords: Vector4<Real>,
}

impl PlueckerPlane {
    /// Creates the plane with the given unit `normal` passing through `point`.
    pub fn from_normal_and_point(normal: &UnitVector<Real>, point: &Point<Real>) -> Self {
        let offset = -normal.dot(&point.coords);
        Self::from_normal_and_offset(normal, offset)
    }

    /// Creates the plane `normal · x + offset = 0`.
    #[inline]
    pub fn from_normal_and_offset(normal: &UnitVector<Real>, offset: Real) -> Self {
        Self {
            coords: Vector4::new(normal.x, normal.y, normal.z, offset),
        }
    }

    /// Creates the plane containing both `line` and `point`.
    ///
    /// The normal is `(point - a) × u` for any point `a` of the line, normalized.
    /// Returns `None` if `point` lies on the line (or the line is degenerate).
    pub fn from_line_and_point(line: &PlueckerLine, point: &Point<Real>) -> Option<Self> {
        let normal = point.coords.cross(&line.dir) - line.moment;
        let offset = line.moment.dot(&point.coords);
        let norm = normal.norm();

        if norm <= DEFAULT_EPSILON {
            return None;
        }

        let normal = normal / norm;
        Some(Self {
            coords: Vector4::new(normal.x, normal.y, normal.z, offset / norm),
        })
    }

    /// The normal of this plane.
    #[inline]
    pub fn normal(&self) -> Vector<Real> {
        self.coords.xyz()
    }

    /// The offset `d` of this plane.
    #[inline]
    pub fn offset(&self) -> Real {
        self.coords.w
    }

    /// The dot product between this plane and a homogeneous point.
    ///
    /// Positive on the side the normal points to.
    #[inline]
    pub fn dot(&self, pt: &PlueckerPoint) -> Real {
        self.coords.dot(&pt.coords)
    }

    /// The signed distance from `pt` to this plane.
    #[inline]
    pub fn signed_distance_to_point(&self, pt: &Point<Real>) -> Real {
        self.normal().dot(&pt.coords) + self.offset()
    }

    /// The unsigned distance from `pt` to this plane.
    #[inline]
    pub fn distance_to_point(&self, pt: &Point<Real>) -> Real {
        self.signed_distance_to_point(pt).abs()
    }

    /// The intersection between this plane and the infinite `line`.
    ///
    /// The result is at infinity if the line is parallel to the plane.
    pub fn intersect_line(&self, line: &PlueckerLine) -> PlueckerPoint {
        let n = self.normal();
        let xyz = n.cross(&line.moment) - line.dir * self.offset();
        PlueckerPoint::new(xyz.x, xyz.y, xyz.z, n.dot(&line.dir))
    }
}

/// An infinite line in Plücker coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PlueckerLine {
    /// The (non-normalized) direction of the line.
    pub dir: Vector<Real>,
    /// The moment of the line about the origin.
    pub moment: Vector<Real>,
}

impl PlueckerLine {
    /// The line passing through `a` and `b`, directed from `a` to `b`.
    ///
    /// Swapping `a` and `b` exactly negates both coordinates.
    #[inline]
    pub fn from_points(a: &Point<Real>, b: &Point<Real>) -> Self {
        Self {
            dir: b - a,
            moment: a.coords.cross(&b.coords),
        }
    }

    /// The point of this line closest to the origin.
    ///
    /// Returns `None` if the line is degenerate.
    pub fn point_closest_to_origin(&self) -> Option<Point<Real>> {
        let sq_len = self.dir.norm_squared();

        if sq_len == 0.0 {
            None
        } else {
            Some(Point::from(self.dir.cross(&self.moment) / sq_len))
        }
    }

    /// The distance from `pt` to this infinite line.
    pub fn distance_to_point(&self, pt: &Point<Real>) -> Real {
        let len = self.dir.norm();

        if len == 0.0 {
            return Real::INFINITY;
        }

        // Moment of the line about `pt`.
        (self.moment - pt.coords.cross(&self.dir)).norm() / len
    }

    /// The minimum distance between this infinite line and `other`.
    ///
    /// Returns infinity if either line is degenerate.
    pub fn distance_to_line(&self, other: &PlueckerLine) -> Real {
        let sq_len1 = self.dir.norm_squared();
        let sq_len2 = other.dir.norm_squared();

        if sq_len1 == 0.0 || sq_len2 == 0.0 {
            return Real::INFINITY;
        }

        let cross = self.dir.cross(&other.dir);
        let sq_cross = cross.norm_squared();

        if sq_cross > DEFAULT_EPSILON * sq_len1 * sq_len2 {
            // Reciprocal product, zero iff the lines are coplanar.
            (self.dir.dot(&other.moment) + other.dir.dot(&self.moment)).abs() / sq_cross.sqrt()
        } else {
            // Parallel lines: distance from any point of `other` to `self`.
            match other.point_closest_to_origin() {
                Some(pt) => self.distance_to_point(&pt),
                None => Real::INFINITY,
            }
        }
    }
}
