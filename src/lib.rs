pub mod error;
pub mod geometry;
pub mod math;

pub use error::{ArgumentError, GeometryError, Result, TrigonError};
pub use geometry::{Triangle, Vertex, VertexAngle};
pub use math::{AngleUnit, Scalar};
