//! Axis-aligned 2D bounding boxes over the level's horizontal plane.

/// An axis-aligned rectangle in the (x, y) plane.
///
/// Area footprints and quadtree node bounds are both expressed with this
/// type. All edges are inclusive: a point lying exactly on a boundary is
/// inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Smallest x coordinate.
    pub min_x: f32,
    /// Smallest y coordinate.
    pub min_y: f32,
    /// Largest x coordinate.
    pub max_x: f32,
    /// Largest y coordinate.
    pub max_y: f32,
}

impl Aabb {
    /// Construct a box from its corner coordinates.
    ///
    /// Callers are expected to pass `min <= max` on both axes; the mesh
    /// builder rejects degenerate footprints before they reach this layer.
    pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// `true` if the point lies inside the box (boundary inclusive).
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// `true` if `other` lies entirely inside this box (boundary inclusive).
    pub fn contains(&self, other: &Aabb) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    /// `true` if this box and `other` overlap (touching edges count).
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    /// The smallest box containing both this box and `other`.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    /// Midpoint of the box on both axes.
    pub fn center(&self) -> (f32, f32) {
        (
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }

    /// Split into four equal quadrants, ordered north-west, north-east,
    /// south-west, south-east (y grows southward in level coordinates).
    pub fn quadrants(&self) -> [Aabb; 4] {
        let (cx, cy) = self.center();
        [
            Aabb::new(self.min_x, self.min_y, cx, cy),
            Aabb::new(cx, self.min_y, self.max_x, cy),
            Aabb::new(self.min_x, cy, cx, self.max_y),
            Aabb::new(cx, cy, self.max_x, self.max_y),
        ]
    }
}
