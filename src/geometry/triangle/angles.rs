use crate::math::vector::clamp_cosine;
use crate::math::{AngleUnit, Scalar, ANGLE_TOLERANCE};

use super::Triangle;

/// Names one of the three vertices of a [`Triangle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertex {
    P1,
    P2,
    P3,
}

impl Vertex {
    /// 0-based position of the vertex (`P1` → 0).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::P1 => 0,
            Self::P2 => 1,
            Self::P3 => 2,
        }
    }
}

/// An extreme interior angle and the vertex it sits at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexAngle<T> {
    /// Angle value, in the requested unit.
    pub value: T,
    /// 0-based vertex index: 0 → p1, 1 → p2, 2 → p3.
    pub vertex: usize,
}

impl<T: Scalar, const D: usize> Triangle<T, D> {
    /// Interior angles at `p1`, `p2` and `p3`.
    ///
    /// Computed with the law of cosines from the squared edge lengths. An
    /// angle next to a zero-length edge is reported as zero.
    #[must_use]
    pub fn angles(&self, unit: AngleUnit) -> [T; 3] {
        let [a2, b2, c2] = self.opposite_edges2();
        [
            law_of_cosines(a2, b2, c2),
            law_of_cosines(b2, c2, a2),
            law_of_cosines(c2, a2, b2),
        ]
        .map(|radians| unit.convert(radians))
    }

    /// Interior angle at one vertex.
    #[must_use]
    pub fn angle_at(&self, vertex: Vertex, unit: AngleUnit) -> T {
        self.angles(unit)[vertex.index()]
    }

    /// Largest interior angle and its vertex. Ties go to the lower index.
    #[must_use]
    pub fn max_angle(&self, unit: AngleUnit) -> VertexAngle<T> {
        self.extreme_angle(unit, |best, candidate| best < candidate)
    }

    /// Smallest interior angle and its vertex. Ties go to the lower index.
    #[must_use]
    pub fn min_angle(&self, unit: AngleUnit) -> VertexAngle<T> {
        self.extreme_angle(unit, |best, candidate| candidate < best)
    }

    /// Returns `true` if no interior angle exceeds 90°.
    ///
    /// Right triangles count as acute.
    #[must_use]
    pub fn is_acute(&self) -> bool {
        !self.is_obtuse()
    }

    /// Returns `true` if one interior angle is strictly greater than 90°.
    #[must_use]
    pub fn is_obtuse(&self) -> bool {
        // The angle opposite an edge is obtuse iff that edge's square
        // exceeds the sum of the other two.
        let [a2, b2, c2] = self.opposite_edges2();
        b2 + c2 < a2 || c2 + a2 < b2 || a2 + b2 < c2
    }

    /// Returns `true` if an interior angle is 90° within
    /// [`ANGLE_TOLERANCE`].
    ///
    /// Tested on the law-of-cosines numerator in `f64` rather than on the
    /// angle itself, so integer triangles are not subject to a truncated
    /// `acos`. Near 90° the angle's offset from a right angle is `|cos|`.
    #[must_use]
    pub fn is_right(&self) -> bool {
        let [a2, b2, c2] = self.opposite_edges2().map(T::to_f64);
        let right_at = |opposite2: f64, side2_a: f64, side2_b: f64| {
            let denom = 2.0 * (side2_a * side2_b).sqrt();
            (side2_a + side2_b - opposite2).abs() < ANGLE_TOLERANCE * denom
        };
        right_at(a2, b2, c2) || right_at(b2, c2, a2) || right_at(c2, a2, b2)
    }

    fn extreme_angle(
        &self,
        unit: AngleUnit,
        replaces: impl Fn(T, T) -> bool,
    ) -> VertexAngle<T> {
        let angles = self.angles(unit);
        let mut best = VertexAngle {
            value: angles[0],
            vertex: 0,
        };
        for (vertex, &value) in angles.iter().enumerate().skip(1) {
            if replaces(best.value, value) {
                best = VertexAngle { value, vertex };
            }
        }
        best
    }
}

/// Angle opposite the edge of squared length `opposite2`, between the edges
/// of squared lengths `side2_a` and `side2_b`.
fn law_of_cosines<T: Scalar>(opposite2: T, side2_a: T, side2_b: T) -> T {
    let denom = T::two() * side2_a.sqrt() * side2_b.sqrt();
    if denom == T::zero() {
        return T::zero();
    }
    clamp_cosine((side2_a + side2_b - opposite2) / denom).acos()
}
