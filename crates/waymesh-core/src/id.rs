//! Strongly-typed entity identifiers.
//!
//! Every entity in a mesh is keyed by a newtype over the raw `u32` the
//! parser read from the file. The wrappers keep area, place, and ladder
//! id spaces from being mixed up at compile time.
//!
//! The raw value `0` is a "no entity" sentinel by *caller* convention only
//! (mesh generators emit it for "unplaced" areas); the library itself never
//! assigns meaning to it and will happily store an entity under id 0.

use std::fmt;

/// Identifies an area within a mesh.
///
/// Unique within one mesh; assigned by the mesh generator, not by this
/// library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AreaId(pub u32);

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AreaId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a named place (zone label) within a mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaceId(pub u32);

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PlaceId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a ladder (vertical connector) within a mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LadderId(pub u32);

impl fmt::Display for LadderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for LadderId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
