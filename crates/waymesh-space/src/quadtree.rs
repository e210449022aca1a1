//! A quadtree implementation of [`SpatialIndex`].
//!
//! Items (area footprints) are stored at the deepest node whose bounds
//! fully contain them; footprints spanning a subdivision line stay at the
//! parent. Point and region queries descend only into child nodes that can
//! match, so lookups over a large mesh touch a small fraction of the areas.

use crate::aabb::Aabb;
use crate::index::SpatialIndex;
use waymesh_core::AreaId;

/// A node subdivides once it holds more items than this and is allowed to
/// split further.
const SPLIT_THRESHOLD: usize = 8;

/// Maximum tree depth. Bounds memory on pathological inputs (e.g. many
/// coincident footprints, which can never be separated by subdivision).
const MAX_DEPTH: u32 = 10;

/// A point-region quadtree over area footprints.
///
/// Built once from the full set of `(AreaId, Aabb)` pairs; immutable
/// afterwards. An empty item set yields a tree whose queries return
/// nothing.
#[derive(Clone, Debug)]
pub struct QuadTree {
    root: Option<Node>,
    len: usize,
}

#[derive(Clone, Debug)]
struct Node {
    bounds: Aabb,
    depth: u32,
    items: Vec<(AreaId, Aabb)>,
    children: Option<Box<[Node; 4]>>,
}

impl QuadTree {
    /// Build a quadtree over the given footprints.
    ///
    /// The root bounds are the envelope of all footprints, so every item is
    /// fully contained somewhere in the tree.
    pub fn build(items: impl IntoIterator<Item = (AreaId, Aabb)>) -> Self {
        let items: Vec<(AreaId, Aabb)> = items.into_iter().collect();
        let Some((_, first)) = items.first() else {
            return Self { root: None, len: 0 };
        };

        let bounds = items
            .iter()
            .skip(1)
            .fold(*first, |acc, (_, fp)| acc.union(fp));
        let mut root = Node::new(bounds, 0);
        let len = items.len();
        for (id, fp) in items {
            root.insert(id, fp);
        }
        Self {
            root: Some(root),
            len,
        }
    }

    /// Number of footprints held by the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if the tree holds no footprints.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl SpatialIndex for QuadTree {
    fn query_point(&self, x: f32, y: f32) -> Vec<AreaId> {
        let mut out = Vec::new();
        if let Some(root) = &self.root {
            root.collect_point(x, y, &mut out);
        }
        out
    }

    fn query(&self, region: &Aabb) -> Vec<AreaId> {
        let mut out = Vec::new();
        if let Some(root) = &self.root {
            root.collect_region(region, &mut out);
        }
        out
    }
}

impl Node {
    fn new(bounds: Aabb, depth: u32) -> Self {
        Self {
            bounds,
            depth,
            items: Vec::new(),
            children: None,
        }
    }

    fn insert(&mut self, id: AreaId, fp: Aabb) {
        if let Some(children) = &mut self.children {
            for child in children.iter_mut() {
                if child.bounds.contains(&fp) {
                    child.insert(id, fp);
                    return;
                }
            }
        }
        self.items.push((id, fp));
        if self.children.is_none()
            && self.items.len() > SPLIT_THRESHOLD
            && self.depth < MAX_DEPTH
        {
            self.subdivide();
        }
    }

    fn subdivide(&mut self) {
        let quads = self.bounds.quadrants();
        let depth = self.depth + 1;
        let mut children = Box::new([
            Node::new(quads[0], depth),
            Node::new(quads[1], depth),
            Node::new(quads[2], depth),
            Node::new(quads[3], depth),
        ]);

        // Push down every item a single child fully contains; spanning
        // items stay here.
        let items = std::mem::take(&mut self.items);
        for (id, fp) in items {
            match children.iter_mut().find(|c| c.bounds.contains(&fp)) {
                Some(child) => child.insert(id, fp),
                None => self.items.push((id, fp)),
            }
        }
        self.children = Some(children);
    }

    fn collect_point(&self, x: f32, y: f32, out: &mut Vec<AreaId>) {
        if !self.bounds.contains_point(x, y) {
            return;
        }
        for (id, fp) in &self.items {
            if fp.contains_point(x, y) {
                out.push(*id);
            }
        }
        if let Some(children) = &self.children {
            // A point on a subdivision line lies in more than one child;
            // descend into all that contain it.
            for child in children.iter() {
                child.collect_point(x, y, out);
            }
        }
    }

    fn collect_region(&self, region: &Aabb, out: &mut Vec<AreaId>) {
        if !self.bounds.intersects(region) {
            return;
        }
        for (id, fp) in &self.items {
            if fp.intersects(region) {
                out.push(*id);
            }
        }
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.collect_region(region, out);
            }
        }
    }
}
