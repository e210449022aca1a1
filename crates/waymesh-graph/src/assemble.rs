//! Graph assembly: turning raw serialized references into a traversable
//! area graph.
//!
//! Resolution for distinct areas is fully independent — each area's task
//! reads the shared id set and writes only that area's own resolved lists.
//! The procedure fans out over scoped worker threads holding disjoint
//! `&mut Area` chunks, so there is no locking anywhere, and the scope join
//! guarantees every area is resolved before the caller gets its mesh back.
//! Workers report dangling references through a channel; a raw id with no
//! matching area is a recoverable data defect, skipped for that slot and
//! recorded, never a reason to abort the rest of the mesh.

use std::collections::HashSet;
use std::fmt;

use indexmap::IndexMap;

use crate::area::{Area, Direction};
use crate::ladder::Ladder;
use crate::place::Place;
use waymesh_core::{AreaId, LadderId, PlaceId};

/// A raw area-to-area reference whose target does not exist in the mesh.
///
/// Reported by [`Mesh::unresolved`](crate::Mesh::unresolved) after
/// assembly; the corresponding neighbour slot is simply absent from the
/// owning area's resolved connections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnresolvedRef {
    /// The area that carried the dangling reference.
    pub area: AreaId,
    /// The direction the reference was recorded under.
    pub direction: Direction,
    /// The raw target identifier with no matching area.
    pub target: u32,
}

impl fmt::Display for UnresolvedRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "area {} -> {} -> missing area {}",
            self.area, self.direction, self.target
        )
    }
}

/// Resolve every area's raw references in parallel.
///
/// Fan-out-then-join over `workers` scoped threads; returns the dangling
/// references found, sorted for deterministic reporting.
pub(crate) fn resolve_graph(
    areas: &mut IndexMap<AreaId, Area>,
    ladders: &IndexMap<LadderId, Ladder>,
    workers: usize,
) -> Vec<UnresolvedRef> {
    let known_areas: HashSet<AreaId> = areas.keys().copied().collect();
    let known_ladders: HashSet<LadderId> = ladders.keys().copied().collect();

    let mut slots: Vec<&mut Area> = areas.values_mut().collect();
    let chunk_len = slots.len().div_ceil(workers.max(1)).max(1);
    let (tx, rx) = crossbeam_channel::unbounded::<UnresolvedRef>();

    std::thread::scope(|scope| {
        for chunk in slots.chunks_mut(chunk_len) {
            let tx = tx.clone();
            let known_areas = &known_areas;
            let known_ladders = &known_ladders;
            scope.spawn(move || {
                for area in chunk.iter_mut() {
                    for (direction, target) in area.resolve(known_areas, known_ladders) {
                        let report = UnresolvedRef {
                            area: area.id(),
                            direction,
                            target,
                        };
                        log::warn!("dropping dangling connection: {report}");
                        let _ = tx.send(report);
                    }
                }
            });
        }
    });
    drop(tx);

    let mut unresolved: Vec<UnresolvedRef> = rx.into_iter().collect();
    unresolved.sort();
    unresolved
}

/// Rebuild each place's member-area list from the areas' place tags.
///
/// Runs single-threaded after the parallel join. An area tagged with an
/// unknown place keeps its tag (lookups return `None` for it) but joins no
/// member list; the defect is logged.
pub(crate) fn link_places(areas: &IndexMap<AreaId, Area>, places: &mut IndexMap<PlaceId, Place>) {
    for place in places.values_mut() {
        place.clear_areas();
    }
    for area in areas.values() {
        if let Some(place_id) = area.place() {
            match places.get_mut(&place_id) {
                Some(place) => place.push_area(area.id()),
                None => {
                    log::warn!("area {} is tagged with missing place {place_id}", area.id());
                }
            }
        }
    }
}

/// Resolve every ladder's area attachments.
///
/// Runs single-threaded after the parallel join; dangling attachments are
/// dropped and logged by the ladder itself.
pub(crate) fn resolve_ladders(
    areas: &IndexMap<AreaId, Area>,
    ladders: &mut IndexMap<LadderId, Ladder>,
) {
    let known_areas: HashSet<AreaId> = areas.keys().copied().collect();
    for ladder in ladders.values_mut() {
        ladder.resolve(&known_areas);
    }
}
