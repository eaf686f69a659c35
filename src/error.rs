use thiserror::Error;

/// Top-level error type for the Trigon geometry kernel.
#[derive(Debug, Error)]
pub enum TrigonError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Argument(#[from] ArgumentError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to invalid arguments passed to the kernel.
#[derive(Debug, Error)]
pub enum ArgumentError {
    #[error("empty sequence")]
    EmptySequence,

    #[error("need at least {needed} values, got {found}")]
    TooFewValues { needed: usize, found: usize },

    #[error("sequence contains values that cannot be ordered")]
    Unordered,

    #[error("{0} overflows the scalar type")]
    Overflow(&'static str),
}

/// Convenience type alias for results using [`TrigonError`].
pub type Result<T> = std::result::Result<T, TrigonError>;
