//! The [`Area`] entity: one convex walkable region of the mesh.

use smallvec::SmallVec;
use std::collections::HashSet;
use std::fmt;
use waymesh_core::vector::lerp;
use waymesh_core::{AreaId, BuildError, LadderId, PlaceId, Vector3};
use waymesh_space::Aabb;

/// Traversal direction for area-to-area connections.
///
/// Mesh generators group each area's outgoing connections by the compass
/// edge they cross; the same grouping is preserved after assembly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Toward smaller y.
    North,
    /// Toward larger x.
    East,
    /// Toward larger y.
    South,
    /// Toward smaller x.
    West,
}

impl Direction {
    /// All directions, in wire order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        write!(f, "{s}")
    }
}

/// Which end of a ladder an area reference hangs off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LadderSlot {
    /// The ladder climbs up out of this area.
    Up,
    /// The ladder descends down out of this area.
    Down,
}

impl LadderSlot {
    /// Both slots, in wire order.
    pub const ALL: [LadderSlot; 2] = [LadderSlot::Up, LadderSlot::Down];

    fn index(self) -> usize {
        match self {
            LadderSlot::Up => 0,
            LadderSlot::Down => 1,
        }
    }
}

/// A convex axis-aligned region of the navigable surface.
///
/// The footprint is the rectangle between the north-west and south-east
/// corners; the walkable surface height at any point inside it is the
/// bilinear interpolation of the four corner heights. Connections to other
/// areas arrive from the parser as raw `u32` identifiers and are resolved
/// to [`AreaId`]s by graph assembly; the mesh remains the sole owner of all
/// area storage, so resolved links are ids, not pointers, and cycles in the
/// adjacency graph cost nothing.
#[derive(Clone, Debug)]
pub struct Area {
    id: AreaId,
    attributes: u32,
    north_west: Vector3,
    south_east: Vector3,
    north_east_z: f32,
    south_west_z: f32,
    place: Option<PlaceId>,
    raw_connections: [Vec<u32>; 4],
    connections: [SmallVec<[AreaId; 4]>; 4],
    raw_ladders: [Vec<u32>; 2],
    ladders: [SmallVec<[LadderId; 2]>; 2],
}

impl Area {
    /// Construct an area from its identifier and corner geometry.
    ///
    /// `north_west` and `south_east` carry the heights of their own
    /// corners; the remaining two corner heights are passed separately.
    /// The footprint must have positive extent on both horizontal axes.
    pub fn new(
        id: AreaId,
        north_west: Vector3,
        south_east: Vector3,
        north_east_z: f32,
        south_west_z: f32,
    ) -> Result<Self, BuildError> {
        if south_east.x <= north_west.x {
            return Err(BuildError::DegenerateFootprint {
                area: id,
                reason: format!(
                    "south-east x {} does not exceed north-west x {}",
                    south_east.x, north_west.x
                ),
            });
        }
        if south_east.y <= north_west.y {
            return Err(BuildError::DegenerateFootprint {
                area: id,
                reason: format!(
                    "south-east y {} does not exceed north-west y {}",
                    south_east.y, north_west.y
                ),
            });
        }
        Ok(Self {
            id,
            attributes: 0,
            north_west,
            south_east,
            north_east_z,
            south_west_z,
            place: None,
            raw_connections: Default::default(),
            connections: Default::default(),
            raw_ladders: Default::default(),
            ladders: Default::default(),
        })
    }

    /// The area's unique identifier.
    pub fn id(&self) -> AreaId {
        self.id
    }

    /// Generator-assigned attribute flag bits, uninterpreted by this
    /// library.
    pub fn attributes(&self) -> u32 {
        self.attributes
    }

    /// Set the attribute flag bits (parser-facing).
    pub fn set_attributes(&mut self, attributes: u32) {
        self.attributes = attributes;
    }

    /// The place this area is tagged with, if any.
    pub fn place(&self) -> Option<PlaceId> {
        self.place
    }

    /// Tag the area with a place (parser-facing).
    pub fn set_place(&mut self, place: Option<PlaceId>) {
        self.place = place;
    }

    /// North-west corner, with its height in `z`.
    pub fn north_west(&self) -> Vector3 {
        self.north_west
    }

    /// South-east corner, with its height in `z`.
    pub fn south_east(&self) -> Vector3 {
        self.south_east
    }

    /// Record a raw outgoing connection crossing the given edge
    /// (parser-facing). Resolved by graph assembly.
    pub fn add_connection(&mut self, direction: Direction, target: u32) {
        self.raw_connections[direction.index()].push(target);
    }

    /// Record a raw ladder reference (parser-facing). Resolved by graph
    /// assembly.
    pub fn add_ladder(&mut self, slot: LadderSlot, target: u32) {
        self.raw_ladders[slot.index()].push(target);
    }

    /// The 2D footprint rectangle.
    pub fn footprint(&self) -> Aabb {
        Aabb::new(
            self.north_west.x,
            self.north_west.y,
            self.south_east.x,
            self.south_east.y,
        )
    }

    /// Height of the walkable surface at `(x, y)`.
    ///
    /// Bilinear interpolation of the four corner heights; coordinates
    /// outside the footprint are clamped to its edges.
    pub fn surface_z(&self, x: f32, y: f32) -> f32 {
        let u = (x - self.north_west.x) / (self.south_east.x - self.north_west.x);
        let v = (y - self.north_west.y) / (self.south_east.y - self.north_west.y);
        let north = lerp(self.north_west.z, self.north_east_z, u);
        let south = lerp(self.south_west_z, self.south_east.z, u);
        lerp(north, south, v)
    }

    /// Whether the point projects inside this area's footprint.
    ///
    /// With `allow_below` false, a point under the walkable surface does
    /// not count as contained: the surface height at the point's `(x, y)`
    /// must not exceed the point's own height.
    pub fn contains_point(&self, point: Vector3, allow_below: bool) -> bool {
        if !self.footprint().contains_point(point.x, point.y) {
            return false;
        }
        if !allow_below && self.surface_z(point.x, point.y) > point.z {
            return false;
        }
        true
    }

    /// Vertical offset between the point and the walkable surface at the
    /// point's `(x, y)`.
    pub fn distance_from_z(&self, point: Vector3) -> f32 {
        (self.surface_z(point.x, point.y) - point.z).abs()
    }

    /// Center of the area: footprint midpoint at surface height.
    pub fn center(&self) -> Vector3 {
        let (cx, cy) = self.footprint().center();
        Vector3::new(cx, cy, self.surface_z(cx, cy))
    }

    /// Resolved connections crossing the given edge.
    ///
    /// Empty until graph assembly has run; raw references whose target
    /// area does not exist are omitted here and reported through
    /// [`Mesh::unresolved`](crate::Mesh::unresolved).
    pub fn connections(&self, direction: Direction) -> &[AreaId] {
        &self.connections[direction.index()]
    }

    /// Every resolved neighbour, across all four directions.
    pub fn neighbours(&self) -> impl Iterator<Item = AreaId> + '_ {
        self.connections.iter().flat_map(|c| c.iter().copied())
    }

    /// Resolved ladder references for the given slot.
    pub fn ladders(&self, slot: LadderSlot) -> &[LadderId] {
        &self.ladders[slot.index()]
    }

    /// Resolve this area's raw references against the sets of known ids.
    ///
    /// Clears any previously resolved lists first, so resolution is
    /// idempotent. Returns the raw connection targets that matched no
    /// known area, paired with the direction they were recorded under;
    /// those slots are simply omitted from the resolved lists.
    pub(crate) fn resolve(
        &mut self,
        known_areas: &HashSet<AreaId>,
        known_ladders: &HashSet<LadderId>,
    ) -> Vec<(Direction, u32)> {
        let mut dropped = Vec::new();
        for direction in Direction::ALL {
            let i = direction.index();
            self.connections[i].clear();
            for &raw in &self.raw_connections[i] {
                let target = AreaId(raw);
                if known_areas.contains(&target) {
                    self.connections[i].push(target);
                } else {
                    dropped.push((direction, raw));
                }
            }
        }
        for slot in LadderSlot::ALL {
            let i = slot.index();
            self.ladders[i].clear();
            for &raw in &self.raw_ladders[i] {
                let target = LadderId(raw);
                if known_ladders.contains(&target) {
                    self.ladders[i].push(target);
                } else {
                    log::warn!("area {}: dropping reference to missing ladder {raw}", self.id);
                }
            }
        }
        dropped
    }
}
