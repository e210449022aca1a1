//! Error types shared across the Waymesh workspace.

use crate::id::{AreaId, LadderId, PlaceId};
use std::fmt;

/// Errors arising while a parser populates a mesh builder.
///
/// These are all data-integrity defects in the input: the builder rejects
/// them at insertion time so a constructed mesh never carries ambiguous
/// identifiers or geometry the query layer cannot evaluate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// An area was inserted under an identifier already in use.
    DuplicateArea(AreaId),
    /// A place was inserted under an identifier already in use.
    DuplicatePlace(PlaceId),
    /// A ladder was inserted under an identifier already in use.
    DuplicateLadder(LadderId),
    /// An area's footprint has no extent on at least one horizontal axis,
    /// so its surface height is undefined.
    DegenerateFootprint {
        /// The offending area.
        area: AreaId,
        /// Which corner ordering constraint was violated.
        reason: String,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateArea(id) => write!(f, "duplicate area id {id}"),
            Self::DuplicatePlace(id) => write!(f, "duplicate place id {id}"),
            Self::DuplicateLadder(id) => write!(f, "duplicate ladder id {id}"),
            Self::DegenerateFootprint { area, reason } => {
                write!(f, "area {area} has a degenerate footprint: {reason}")
            }
        }
    }
}

impl std::error::Error for BuildError {}
