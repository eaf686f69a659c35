use crate::error::Result;
use crate::math::scalar::checked;
use crate::math::{Point, Scalar};

use super::Triangle;

impl<T: Scalar, const D: usize> Triangle<T, D> {
    /// Point equidistant from the three vertices.
    ///
    /// Uses the barycentric weights `a²(b² + c² - a²)` (and cyclic), where
    /// `a`, `b`, `c` are the edges opposite `p1`, `p2`, `p3`. The weights sum
    /// to `16 · area²`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`](crate::GeometryError::Degenerate)
    /// for collinear vertices and
    /// [`ArgumentError::Overflow`](crate::ArgumentError::Overflow) when the
    /// integer weights leave the range of `T`.
    pub fn circumcenter(&self) -> Result<Point<T, D>> {
        const OPERATION: &str = "circumcenter";
        self.checked_area(OPERATION)?;
        let [a2, b2, c2] = self.opposite_edges2();
        let weight = |opposite: T, side_a: T, side_b: T| {
            checked(
                side_a
                    .checked_add(side_b)
                    .and_then(|sides| opposite.checked_mul(sides - opposite)),
                OPERATION,
            )
        };
        self.weighted_point(
            [weight(a2, b2, c2)?, weight(b2, c2, a2)?, weight(c2, a2, b2)?],
            OPERATION,
        )
    }

    /// Radius of the circumscribed circle, `a·b·c / (4 · area)`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`](crate::GeometryError::Degenerate)
    /// for collinear vertices and
    /// [`ArgumentError::Overflow`](crate::ArgumentError::Overflow) when
    /// `a·b·c` leaves the range of an integer `T`.
    pub fn circumradius(&self) -> Result<T> {
        const OPERATION: &str = "circumradius";
        let area = self.checked_area(OPERATION)?;
        let [a, b, c] = self.edge_lengths();
        let abc = checked(a.checked_mul(b).and_then(|ab| ab.checked_mul(c)), OPERATION)?;
        let denom = checked(area.checked_mul(T::from_usize(4)), OPERATION)?;
        Ok(abc / denom)
    }

    /// Point equidistant from the three edges: the vertices weighted by the
    /// length of the opposite edge.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`](crate::GeometryError::Degenerate)
    /// for collinear vertices and
    /// [`ArgumentError::Overflow`](crate::ArgumentError::Overflow) when the
    /// weighted integer sum leaves the range of `T`.
    pub fn incenter(&self) -> Result<Point<T, D>> {
        self.checked_area("incenter")?;
        self.weighted_point(self.opposite_edges2().map(T::sqrt), "incenter")
    }

    /// Radius of the inscribed circle, `area / semiperimeter`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`](crate::GeometryError::Degenerate)
    /// for collinear vertices.
    pub fn inradius(&self) -> Result<T> {
        let area = self.checked_area("inradius")?;
        Ok(area / self.semiperimeter())
    }
}
