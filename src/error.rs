//! Defines [`CruxError`], representing all errors returned by this crate.

use thiserror::Error;

use crate::rank::Rank;

/// Enum with all errors in this crate.
///
/// The point contracts themselves never fail; only the slice-based setters and [`Rank`]
/// conversions return errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CruxError {
    /// A rank outside the supported 2 through 6 range.
    #[error("Unsupported rank {0}: only ranks 2 through 6 are defined")]
    UnsupportedRank(usize),

    /// A coordinate slice whose length does not match the rank of the contract it was passed to.
    #[error("Rank mismatch: expected {expected} coordinates, found {found}")]
    RankMismatch {
        /// The rank of the contract being set.
        expected: Rank,
        /// The number of coordinates actually supplied.
        found: usize,
    },
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, CruxError>;
