//! The [`Ladder`] entity: a climbable connector between height levels.

use std::fmt;
use waymesh_core::{AreaId, LadderId, Vector3};

/// The five area attachment points a ladder carries in the source data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LadderAttachment {
    /// Area directly ahead when stepping off the top.
    TopForward,
    /// Area to the left of the top.
    TopLeft,
    /// Area to the right of the top.
    TopRight,
    /// Area behind the top.
    TopBehind,
    /// Area at the foot of the ladder.
    Bottom,
}

impl LadderAttachment {
    /// All attachment points, in wire order.
    pub const ALL: [LadderAttachment; 5] = [
        LadderAttachment::TopForward,
        LadderAttachment::TopLeft,
        LadderAttachment::TopRight,
        LadderAttachment::TopBehind,
        LadderAttachment::Bottom,
    ];

    fn index(self) -> usize {
        match self {
            LadderAttachment::TopForward => 0,
            LadderAttachment::TopLeft => 1,
            LadderAttachment::TopRight => 2,
            LadderAttachment::TopBehind => 3,
            LadderAttachment::Bottom => 4,
        }
    }
}

impl fmt::Display for LadderAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LadderAttachment::TopForward => "top-forward",
            LadderAttachment::TopLeft => "top-left",
            LadderAttachment::TopRight => "top-right",
            LadderAttachment::TopBehind => "top-behind",
            LadderAttachment::Bottom => "bottom",
        };
        write!(f, "{s}")
    }
}

/// A vertical connector between two height levels of the mesh.
///
/// Ladders appear as connection targets for areas; the path solver treats
/// them as edges between the attached areas. The query algorithms in this
/// crate never traverse them, so only storage and reference resolution are
/// implemented here.
#[derive(Clone, Debug)]
pub struct Ladder {
    id: LadderId,
    top: Vector3,
    bottom: Vector3,
    width: f32,
    raw_attachments: [Option<u32>; 5],
    attachments: [Option<AreaId>; 5],
}

impl Ladder {
    /// Construct a ladder from its identifier, endpoints, and width.
    pub fn new(id: LadderId, top: Vector3, bottom: Vector3, width: f32) -> Self {
        Self {
            id,
            top,
            bottom,
            width,
            raw_attachments: [None; 5],
            attachments: [None; 5],
        }
    }

    /// The ladder's unique identifier.
    pub fn id(&self) -> LadderId {
        self.id
    }

    /// Top endpoint.
    pub fn top(&self) -> Vector3 {
        self.top
    }

    /// Bottom endpoint.
    pub fn bottom(&self) -> Vector3 {
        self.bottom
    }

    /// Rung width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Record a raw area reference for an attachment point
    /// (parser-facing). Resolved by graph assembly.
    pub fn set_attachment(&mut self, at: LadderAttachment, target: u32) {
        self.raw_attachments[at.index()] = Some(target);
    }

    /// The resolved area at an attachment point.
    ///
    /// `None` until graph assembly has run, or when the raw reference named
    /// a missing area (dropped and logged during assembly), or when the
    /// source data carried no reference for this point.
    pub fn attachment(&self, at: LadderAttachment) -> Option<AreaId> {
        self.attachments[at.index()]
    }

    /// Resolve raw attachments against the known area ids, dropping and
    /// logging any that name a missing area. Clears previous resolutions
    /// first, so resolution is idempotent.
    pub(crate) fn resolve(&mut self, known_areas: &std::collections::HashSet<AreaId>) {
        for at in LadderAttachment::ALL {
            let i = at.index();
            self.attachments[i] = None;
            if let Some(raw) = self.raw_attachments[i] {
                let target = AreaId(raw);
                if known_areas.contains(&target) {
                    self.attachments[i] = Some(target);
                } else {
                    log::warn!(
                        "ladder {}: dropping {at} reference to missing area {raw}",
                        self.id
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn resolve_keeps_known_and_drops_missing() {
        let mut ladder = Ladder::new(
            LadderId(7),
            Vector3::new(0.0, 0.0, 10.0),
            Vector3::new(0.0, 0.0, 0.0),
            1.5,
        );
        ladder.set_attachment(LadderAttachment::Bottom, 1);
        ladder.set_attachment(LadderAttachment::TopForward, 999);

        let known: HashSet<AreaId> = [AreaId(1)].into_iter().collect();
        ladder.resolve(&known);

        assert_eq!(ladder.attachment(LadderAttachment::Bottom), Some(AreaId(1)));
        assert_eq!(ladder.attachment(LadderAttachment::TopForward), None);
        assert_eq!(ladder.attachment(LadderAttachment::TopLeft), None);
    }
}
