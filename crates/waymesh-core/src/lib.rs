//! Core types for the Waymesh navigation-mesh library.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! typed entity identifiers, the [`Vector3`] geometric primitive, and the
//! shared error types used throughout the Waymesh workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod vector;

pub use error::BuildError;
pub use id::{AreaId, LadderId, PlaceId};
pub use vector::Vector3;
