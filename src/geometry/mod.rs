pub mod triangle;

pub use triangle::{Triangle, Vertex, VertexAngle};
