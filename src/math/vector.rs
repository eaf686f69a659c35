use tracing::debug;

use crate::error::{GeometryError, Result};

use super::{Point, Scalar, Vector};

/// Returns the displacement `head - tail`.
#[must_use]
pub fn make_vector<T: Scalar, const D: usize>(
    head: &Point<T, D>,
    tail: &Point<T, D>,
) -> Vector<T, D> {
    head - tail
}

/// Sum of coordinatewise products.
#[must_use]
pub fn dot_product<T: Scalar, const D: usize>(a: &Vector<T, D>, b: &Vector<T, D>) -> T {
    a.dot(b)
}

/// Standard 3D cross product `a × b`.
///
/// Parallel, anti-parallel and zero inputs yield the zero vector.
#[must_use]
pub fn cross_product<T: Scalar>(a: &Vector<T, 3>, b: &Vector<T, 3>) -> Vector<T, 3> {
    a.cross(b)
}

/// 2D cross product: `a.x * b.y - a.y * b.x`.
#[inline]
#[must_use]
pub fn perp_dot<T: Scalar>(a: &Vector<T, 2>, b: &Vector<T, 2>) -> T {
    a.perp(b)
}

/// Squared Euclidean distance between two points.
#[must_use]
pub fn length2<T: Scalar, const D: usize>(a: &Point<T, D>, b: &Point<T, D>) -> T {
    magnitude2(&make_vector(b, a))
}

/// Euclidean distance between two points.
#[must_use]
pub fn length<T: Scalar, const D: usize>(a: &Point<T, D>, b: &Point<T, D>) -> T {
    length2(a, b).sqrt()
}

/// Squared Euclidean norm.
// `norm_squared` needs a complex field; `dot` also serves integer scalars.
#[must_use]
pub fn magnitude2<T: Scalar, const D: usize>(v: &Vector<T, D>) -> T {
    v.dot(v)
}

/// Euclidean norm.
#[must_use]
pub fn magnitude<T: Scalar, const D: usize>(v: &Vector<T, D>) -> T {
    magnitude2(v).sqrt()
}

/// Returns `v` scaled to unit length.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if the magnitude of `v` is zero
/// (for floats this includes a squared norm that underflows).
pub fn unit_vector<T: Scalar, const D: usize>(v: &Vector<T, D>) -> Result<Vector<T, D>> {
    let len = magnitude(v);
    if len == T::zero() {
        debug!(?v, "cannot normalize a zero-length vector");
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(v / len)
}

/// Angle between two vectors, in radians within `[0, π]`.
///
/// Returns zero when either vector has zero magnitude.
#[must_use]
pub fn angle<T: Scalar, const D: usize>(a: &Vector<T, D>, b: &Vector<T, D>) -> T {
    let denom = magnitude(a) * magnitude(b);
    if denom == T::zero() {
        return T::zero();
    }
    clamp_cosine(dot_product(a, b) / denom).acos()
}

/// Angle between the 2D directions `(x1, y1)` and `(x2, y2)`.
///
/// Same zero-magnitude policy as [`angle`].
#[must_use]
pub fn angle_between_coords<T: Scalar>(x1: T, y1: T, x2: T, y2: T) -> T {
    angle(&Vector::<T, 2>::new(x1, y1), &Vector::<T, 2>::new(x2, y2))
}

/// Clamps a cosine ratio into `[-1, 1]` so round-off never reaches `acos`
/// outside its domain.
pub(crate) fn clamp_cosine<T: Scalar>(ratio: T) -> T {
    if ratio > T::one() {
        T::one()
    } else if ratio < -T::one() {
        -T::one()
    } else {
        ratio
    }
}
