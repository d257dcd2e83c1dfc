use crate::math::{Real, UnitVector, Vector, DEFAULT_CONTACT_EPSILON};

/// Tunable parameters of contact generation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ContactOptions {
    /// The geometric tolerance used for every test of contact generation.
    ///
    /// It bounds the point-to-plane distance of vertex-face contacts, the
    /// line-to-line distance of edge-edge contacts, how far outside of a face
    /// boundary a vertex may lie, and how much two projections may be apart
    /// while still being considered overlapping.
    pub epsilon: Real,
}

impl Default for ContactOptions {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_CONTACT_EPSILON,
        }
    }
}

impl ContactOptions {
    /// Options with the given tolerance.
    pub fn new(epsilon: Real) -> Self {
        Self { epsilon }
    }

    /// These options with their tolerance replaced by `epsilon`.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: Real) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// The direction used instead of a caller-supplied direction too close to zero.
    #[inline]
    pub fn fallback_direction() -> UnitVector<Real> {
        Vector::y_axis()
    }
}
