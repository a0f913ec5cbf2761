use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum CsgError {
    #[error(transparent)]
    Plane(#[from] PlaneError),

    #[error(transparent)]
    Polygon(#[from] PolygonError),

    #[error("polygon {index} of solid is invalid: {source}")]
    InvalidSolidPolygon {
        index: usize,
        #[source]
        source: PolygonError,
    },
}

/// Errors raised when deriving a plane from points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaneError {
    #[error("points are collinear, no unique plane passes through them")]
    Degenerate,

    #[error("plane normal has zero length")]
    ZeroNormal,
}

/// Errors raised by the validating polygon constructor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolygonError {
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("vertex {0} has a non-finite coordinate")]
    NonFinite(usize),

    #[error(transparent)]
    Plane(#[from] PlaneError),

    #[error("vertex {index} is {distance} away from the polygon plane")]
    NonCoplanar { index: usize, distance: f64 },
}
