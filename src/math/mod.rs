pub mod scalar;
pub mod stats;
pub mod vector;

pub use scalar::Scalar;
pub use stats::{
    average_value, max_value, mean_value, median_value, min_value, standard_deviation,
};
pub use vector::{
    angle, angle_between_coords, cross_product, dot_product, length, length2, magnitude,
    magnitude2, make_vector, perp_dot, unit_vector,
};

/// Point of dimension `D` over scalar `T`.
pub type Point<T, const D: usize> = nalgebra::Point<T, D>;

/// Displacement of dimension `D` over scalar `T`.
pub type Vector<T, const D: usize> = nalgebra::SVector<T, D>;

/// Absolute area below which a triangle is treated as degenerate.
pub const DEGENERACY_EPSILON: f64 = 1e-10;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Angular tolerance (radians) for right-angle checks.
pub const ANGLE_TOLERANCE: f64 = 1e-9;

/// Unit in which angle-producing operations report their result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    /// Expresses a radian value in this unit.
    #[must_use]
    pub fn convert<T: Scalar>(self, radians: T) -> T {
        match self {
            Self::Radians => radians,
            Self::Degrees => radians.to_degrees(),
        }
    }
}
