use crate::error::Result;
use crate::math::scalar::checked;
use crate::math::{dot_product, make_vector, Point, Scalar, TOLERANCE};

use super::Triangle;

impl<T: Scalar, const D: usize> Triangle<T, D> {
    /// Barycentric coordinates `(λ1, λ2, λ3)` of `point`, with
    /// `point = λ1·p1 + λ2·p2 + λ3·p3` and `λ1 + λ2 + λ3 = 1`.
    ///
    /// Solved from the normal equations of the edge vectors, which gives the
    /// signed sub-triangle area ratios for points in the triangle's plane
    /// (points off the plane are projected onto it first). Points outside
    /// the triangle get negative coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`](crate::GeometryError::Degenerate)
    /// for collinear vertices and
    /// [`ArgumentError::Overflow`](crate::ArgumentError::Overflow) when an
    /// integer product of the solve leaves the range of `T`.
    pub fn barycentric(&self, point: &Point<T, D>) -> Result<[T; 3]> {
        const OPERATION: &str = "barycentric coordinates";
        self.checked_area(OPERATION)?;

        let e1 = make_vector(&self.p2, &self.p1);
        let e2 = make_vector(&self.p3, &self.p1);
        let w = make_vector(point, &self.p1);

        let d11 = dot_product(&e1, &e1);
        let d12 = dot_product(&e1, &e2);
        let d22 = dot_product(&e2, &e2);
        let dw1 = dot_product(&w, &e1);
        let dw2 = dot_product(&w, &e2);

        // x1·y1 - x2·y2
        let det2 = |x1: T, y1: T, x2: T, y2: T| {
            checked(
                x1.checked_mul(y1)
                    .zip(x2.checked_mul(y2))
                    .and_then(|(p, q)| p.checked_sub(q)),
                OPERATION,
            )
        };

        // Gram determinant, 4 · area².
        let denom = det2(d11, d22, d12, d12)?;
        let l2 = det2(d22, dw1, d12, dw2)? / denom;
        let l3 = det2(d11, dw2, d12, dw1)? / denom;
        Ok([T::one() - l2 - l3, l2, l3])
    }

    /// Returns `true` if `point` lies inside or on the boundary of the
    /// triangle (after projection onto its plane).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`](crate::GeometryError::Degenerate)
    /// for collinear vertices.
    pub fn contains(&self, point: &Point<T, D>) -> Result<bool> {
        let coords = self.barycentric(point)?;
        Ok(coords.iter().all(|l| l.to_f64() >= -TOLERANCE))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ArgumentError, GeometryError, TrigonError};
    use approx::assert_abs_diff_eq;
    use nalgebra::{Point2, Point3};
    use proptest::prelude::*;

    const EPS: f64 = 1e-6;

    fn unit_right() -> Triangle<f64, 3> {
        Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn vertices_map_to_basis() {
        let t = unit_right();
        let expected = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        for (v, e) in t.vertices().into_iter().zip(expected) {
            let l = t.barycentric(v).unwrap();
            for (li, ei) in l.into_iter().zip(e) {
                assert_abs_diff_eq!(li, ei, epsilon = EPS);
            }
        }
    }

    #[test]
    fn centroid_has_equal_weights() {
        let t = unit_right();
        let l = t.barycentric(&Point3::new(1.0 / 3.0, 1.0 / 3.0, 0.0)).unwrap();
        for li in l {
            assert_abs_diff_eq!(li, 1.0 / 3.0, epsilon = EPS);
        }
    }

    #[test]
    fn coordinates_sum_to_one() {
        let t = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        );
        let l = t.barycentric(&Point3::new(0.5, 0.5, 0.0)).unwrap();
        assert_abs_diff_eq!(l.iter().sum::<f64>(), 1.0, epsilon = EPS);
    }

    #[test]
    fn inside_and_outside_points() {
        let t = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(0.0, 3.0, 0.0),
        );
        let l = t.barycentric(&Point3::new(1.0, 1.0, 0.0)).unwrap();
        assert_abs_diff_eq!(l[1], 0.25, epsilon = EPS);
        assert_abs_diff_eq!(l[2], 1.0 / 3.0, epsilon = EPS);
        assert_abs_diff_eq!(l[0], 5.0 / 12.0, epsilon = EPS);

        let far = t.barycentric(&Point3::new(5.0, 5.0, 0.0)).unwrap();
        assert!(far[0] < 0.0);
        assert_abs_diff_eq!(far.iter().sum::<f64>(), 1.0, epsilon = EPS);
    }

    #[test]
    fn containment() {
        let t = unit_right();
        assert!(t.contains(&Point3::new(0.25, 0.25, 0.0)).unwrap());
        assert!(t.contains(&Point3::new(0.5, 0.5, 0.0)).unwrap());
        assert!(!t.contains(&Point3::new(0.75, 0.75, 0.0)).unwrap());
        assert!(!t.contains(&Point3::new(-0.1, 0.5, 0.0)).unwrap());
    }

    #[test]
    fn works_in_2d() {
        let t = Triangle::new(
            Point2::new(1.0, 1.0),
            Point2::new(5.0, 1.0),
            Point2::new(1.0, 4.0),
        );
        let l = t.barycentric(&Point2::new(3.0, 2.5)).unwrap();
        assert_abs_diff_eq!(l[0], 0.0, epsilon = EPS);
        assert_abs_diff_eq!(l[1], 0.5, epsilon = EPS);
        assert_abs_diff_eq!(l[2], 0.5, epsilon = EPS);
    }

    #[test]
    fn integer_solve() {
        let t = Triangle::new(
            Point2::new(0_i32, 0),
            Point2::new(4, 0),
            Point2::new(0, 4),
        );
        assert_eq!(t.barycentric(&Point2::new(0, 0)).unwrap(), [1, 0, 0]);
        assert_eq!(t.barycentric(&Point2::new(4, 0)).unwrap(), [0, 1, 0]);
        assert!(t.contains(&Point2::new(0, 4)).unwrap());

        let far = Point2::new(40_000_000, 40_000_000);
        assert!(matches!(
            t.barycentric(&far),
            Err(TrigonError::Argument(ArgumentError::Overflow(_)))
        ));
    }

    #[test]
    fn degenerate_triangle_is_error() {
        let t = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        );
        let err = t.barycentric(&Point3::new(1.0, 0.0, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            TrigonError::Geometry(GeometryError::Degenerate(_))
        ));
        assert!(t.contains(&Point3::new(1.0, 0.0, 0.0)).is_err());
    }

    proptest! {
        #[test]
        fn coordinates_reconstruct_planar_points(
            c in prop::array::uniform9(-10.0..10.0_f64),
            s in -2.0..2.0_f64,
            r in -2.0..2.0_f64,
        ) {
            let t = Triangle::new(
                Point3::new(c[0], c[1], c[2]),
                Point3::new(c[3], c[4], c[5]),
                Point3::new(c[6], c[7], c[8]),
            );
            prop_assume!(t.min_angle(crate::math::AngleUnit::Radians).value > 0.05);
            prop_assume!(!t.is_degenerate());

            let [p1, p2, p3] = t.vertices();
            let q = p1 + (p2 - p1) * s + (p3 - p1) * r;
            let l = t.barycentric(&q).unwrap();
            prop_assert!((l.iter().sum::<f64>() - 1.0).abs() < 1e-9);
            prop_assert!((l[1] - s).abs() < 1e-6, "l={l:?} s={s}");
            prop_assert!((l[2] - r).abs() < 1e-6, "l={l:?} r={r}");
        }
    }
}
