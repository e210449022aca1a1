//! The [`Place`] entity: a named zone label grouping areas.

use waymesh_core::{AreaId, PlaceId};

/// A human-readable zone label ("Bombsite A", "Tunnels") that tags a group
/// of areas.
///
/// The member list is derived data: it is empty until graph assembly runs
/// and is rebuilt from each area's place tag during the assembly finalize
/// step.
#[derive(Clone, Debug)]
pub struct Place {
    id: PlaceId,
    name: String,
    areas: Vec<AreaId>,
}

impl Place {
    /// Construct a place from its identifier and name.
    pub fn new(id: PlaceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            areas: Vec::new(),
        }
    }

    /// The place's unique identifier.
    pub fn id(&self) -> PlaceId {
        self.id
    }

    /// The zone label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Areas tagged with this place, in area insertion order.
    ///
    /// Empty until graph assembly has run.
    pub fn areas(&self) -> &[AreaId] {
        &self.areas
    }

    pub(crate) fn clear_areas(&mut self) {
        self.areas.clear();
    }

    pub(crate) fn push_area(&mut self, id: AreaId) {
        self.areas.push(id);
    }
}
