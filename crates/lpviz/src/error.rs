use thiserror::Error;

/// Recoverable failures of the LP geometry.
///
/// Parallel boundaries and degenerate hulls are not errors: they surface as
/// `None` and as short polygons respectively.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("objective line is vertical (c2 = 0, c1 = {c1}); y cannot be expressed in x")]
    VerticalLine { c1: f64 },

    #[error("invalid grid (step = {step}): {reason}")]
    InvalidGrid { step: f64, reason: &'static str },

    #[error("invalid target range [{min}, {max}]: min must not exceed max")]
    InvalidRange { min: f64, max: f64 },

    #[error("non-finite value in {what}")]
    NonFinite { what: String },
}

pub type Result<T> = std::result::Result<T, Error>;
