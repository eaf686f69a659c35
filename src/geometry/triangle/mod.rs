mod angles;
mod barycentric;
mod centers;

pub use angles::{Vertex, VertexAngle};

use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::scalar::checked;
use crate::math::{
    cross_product, length, length2, make_vector, unit_vector, Point, Scalar, Vector,
    DEGENERACY_EPSILON,
};

/// A triangle given by three ordered vertices in `D`-dimensional space.
///
/// Vertex order fixes the winding (and so the [`normal`](Triangle::normal)
/// direction) and which per-vertex result belongs to which vertex. Areas,
/// edge lengths and the classification queries do not depend on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<T: Scalar, const D: usize> {
    p1: Point<T, D>,
    p2: Point<T, D>,
    p3: Point<T, D>,
}

impl<T: Scalar, const D: usize> Triangle<T, D> {
    /// Creates a triangle from three vertices.
    #[must_use]
    pub fn new(p1: Point<T, D>, p2: Point<T, D>, p3: Point<T, D>) -> Self {
        Self { p1, p2, p3 }
    }

    /// Returns the first vertex.
    #[must_use]
    pub fn p1(&self) -> &Point<T, D> {
        &self.p1
    }

    /// Returns the second vertex.
    #[must_use]
    pub fn p2(&self) -> &Point<T, D> {
        &self.p2
    }

    /// Returns the third vertex.
    #[must_use]
    pub fn p3(&self) -> &Point<T, D> {
        &self.p3
    }

    /// Returns the vertices in order.
    #[must_use]
    pub fn vertices(&self) -> [&Point<T, D>; 3] {
        [&self.p1, &self.p2, &self.p3]
    }

    /// Edge lengths `[|p1p2|, |p2p3|, |p3p1|]`.
    #[must_use]
    pub fn edge_lengths(&self) -> [T; 3] {
        [
            length(&self.p1, &self.p2),
            length(&self.p2, &self.p3),
            length(&self.p3, &self.p1),
        ]
    }

    /// Shortest edge length.
    #[must_use]
    pub fn min_length(&self) -> T {
        let [a, b, c] = self.edge_lengths();
        let ab = if b < a { b } else { a };
        if c < ab {
            c
        } else {
            ab
        }
    }

    /// Longest edge length.
    #[must_use]
    pub fn max_length(&self) -> T {
        let [a, b, c] = self.edge_lengths();
        let ab = if a < b { b } else { a };
        if ab < c {
            c
        } else {
            ab
        }
    }

    /// Sum of the edge lengths.
    #[must_use]
    pub fn perimeter(&self) -> T {
        let [a, b, c] = self.edge_lengths();
        a + b + c
    }

    /// Half the perimeter.
    #[must_use]
    pub fn semiperimeter(&self) -> T {
        self.perimeter() / T::two()
    }

    /// Area of the triangle, `|(p2 - p1) × (p3 - p1)| / 2`.
    ///
    /// Evaluated through the Gram determinant
    /// `|u × v|² = |u|²|v|² - (u·v)²`, which holds in any dimension.
    /// Collinear vertices give (approximately) zero. Integer triangles whose
    /// determinant overflows `T` are evaluated in `f64` and truncated back.
    #[must_use]
    pub fn area(&self) -> T {
        let u = make_vector(&self.p2, &self.p1);
        let v = make_vector(&self.p3, &self.p1);
        let uv = u.dot(&v);
        let Some((uu_vv, uv2)) = u
            .dot(&u)
            .checked_mul(v.dot(&v))
            .zip(uv.checked_mul(uv))
        else {
            return self.wide_area();
        };
        let cross2 = uu_vv - uv2;
        // Round-off can push a collinear configuration slightly negative.
        if cross2 <= T::zero() {
            return T::zero();
        }
        cross2.sqrt() / T::two()
    }

    /// Returns `true` if the vertices are collinear, i.e. the area is below
    /// [`DEGENERACY_EPSILON`].
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.area().to_f64().abs() < DEGENERACY_EPSILON
    }

    /// Coordinatewise mean of the three vertices.
    #[must_use]
    pub fn centroid(&self) -> Point<T, D> {
        Point::from((self.p1.coords + self.p2.coords + self.p3.coords) / T::from_usize(3))
    }

    /// Squared lengths of the edges opposite `p1`, `p2` and `p3`.
    fn opposite_edges2(&self) -> [T; 3] {
        [
            length2(&self.p2, &self.p3),
            length2(&self.p3, &self.p1),
            length2(&self.p1, &self.p2),
        ]
    }

    /// `(w1·p1 + w2·p2 + w3·p3) / (w1 + w2 + w3)`, with the products and
    /// sums checked against overflow on behalf of `operation`.
    fn weighted_point(&self, weights: [T; 3], operation: &'static str) -> Result<Point<T, D>> {
        let [w1, w2, w3] = weights;
        let total = checked(w1.checked_add(w2).and_then(|w| w.checked_add(w3)), operation)?;
        let mut sum = Vector::<T, D>::zeros();
        for (w, p) in weights.into_iter().zip(self.vertices()) {
            for (acc, &c) in sum.iter_mut().zip(p.coords.iter()) {
                let prev = *acc;
                *acc = checked(c.checked_mul(w).and_then(|wc| prev.checked_add(wc)), operation)?;
            }
        }
        Ok(Point::from(sum / total))
    }

    /// [`area`](Self::area) evaluated in `f64`, saturating on the way back
    /// into `T`.
    fn wide_area(&self) -> T {
        let [p1, p2, p3] = self.vertices().map(|p| p.map(T::to_f64));
        let u = p2 - p1;
        let v = p3 - p1;
        let uv = u.dot(&v);
        let cross2 = (u.dot(&u) * v.dot(&v) - uv * uv).max(0.0);
        T::from_f64(cross2.sqrt() / 2.0)
    }

    /// Returns the area, or an error naming `operation` if the triangle is
    /// degenerate.
    fn checked_area(&self, operation: &'static str) -> Result<T> {
        let area = self.area();
        if area.to_f64().abs() < DEGENERACY_EPSILON {
            debug!(operation, triangle = ?self, "rejecting degenerate triangle");
            return Err(GeometryError::Degenerate(format!(
                "{operation} is undefined for collinear vertices"
            ))
            .into());
        }
        Ok(area)
    }
}

impl<T: Scalar> Triangle<T, 3> {
    /// Unit normal of the triangle's plane, `unit((p2 - p1) × (p3 - p1))`.
    ///
    /// The direction follows the vertex winding.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for collinear vertices.
    pub fn normal(&self) -> Result<Vector<T, 3>> {
        self.checked_area("normal")?;
        let u = make_vector(&self.p2, &self.p1);
        let v = make_vector(&self.p3, &self.p1);
        unit_vector(&cross_product(&u, &v))
    }
}
