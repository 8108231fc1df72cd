use crate::common::*;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure to construct a [BoundingBox](crate::BoundingBox).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    #[error("'{field}' cannot be converted to {target}")]
    TypeConversion {
        field: &'static str,
        target: &'static str,
    },
    #[error("{0}")]
    Validation(Invariant),
}

impl Error {
    pub fn invariant(&self) -> Option<Invariant> {
        match *self {
            Self::Validation(invariant) => Some(invariant),
            Self::TypeConversion { .. } => None,
        }
    }
}

impl From<Invariant> for Error {
    fn from(from: Invariant) -> Self {
        Self::Validation(from)
    }
}

/// Invariants checked on construction, listed in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Invariant {
    #[error("'x_min' must be smaller than 'x_max'")]
    XOrder,
    #[error("'y_min' must be smaller than 'y_max'")]
    YOrder,
    #[error("'probability' must be between 0 and 1")]
    ProbabilityRange,
}

impl Invariant {
    /// Names of the fields involved in the invariant.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::XOrder => &["x_min", "x_max"],
            Self::YOrder => &["y_min", "y_max"],
            Self::ProbabilityRange => &["probability"],
        }
    }
}
