use std::fmt::Display;

use crate::error::{CruxError, Result};

const COORDINATE_NAMES: [&str; 6] = ["x", "y", "z", "w", "u", "v"];

/// The rank (number of coordinates) of a point contract.
///
/// Only ranks 2 through 6 have contracts in this crate. [Rank] implements [TryFrom] for
/// integers, rejecting anything outside that range:
///
/// ```
/// use crux::Rank;
///
/// assert_eq!(Rank::try_from(4usize).unwrap(), Rank::Four);
/// assert!(Rank::try_from(7usize).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Two coordinates: x, y. See [`Point2`](crate::Point2).
    Two,

    /// Three coordinates: x, y, z. See [`Point3`](crate::Point3).
    Three,

    /// Four coordinates: x, y, z, w. See [`Point4`](crate::Point4).
    Four,

    /// Five coordinates: x, y, z, w, u. See [`Point5`](crate::Point5).
    Five,

    /// Six coordinates: x, y, z, w, u, v. See [`Point6`](crate::Point6).
    Six,
}

impl Rank {
    /// Returns the number of coordinates.
    pub fn size(&self) -> usize {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
        }
    }

    /// The ordered coordinate names of this rank, e.g. `["x", "y", "z"]` for [`Rank::Three`].
    pub fn names(&self) -> &'static [&'static str] {
        &COORDINATE_NAMES[..self.size()]
    }

    /// Checks that `len` coordinates were supplied for this rank.
    pub fn check(&self, len: usize) -> Result<()> {
        if len == self.size() {
            Ok(())
        } else {
            Err(CruxError::RankMismatch {
                expected: *self,
                found: len,
            })
        }
    }
}

impl TryFrom<usize> for Rank {
    type Error = CruxError;

    fn try_from(value: usize) -> Result<Self> {
        match value {
            2 => Ok(Rank::Two),
            3 => Ok(Rank::Three),
            4 => Ok(Rank::Four),
            5 => Ok(Rank::Five),
            6 => Ok(Rank::Six),
            _ => Err(CruxError::UnsupportedRank(value)),
        }
    }
}

impl From<Rank> for usize {
    fn from(value: Rank) -> Self {
        value.size()
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Two => write!(f, "XY"),
            Rank::Three => write!(f, "XYZ"),
            Rank::Four => write!(f, "XYZW"),
            Rank::Five => write!(f, "XYZWU"),
            Rank::Six => write!(f, "XYZWUV"),
        }
    }
}
