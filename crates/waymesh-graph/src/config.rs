//! Configuration for graph assembly.

use std::thread;

/// Upper bound on auto-detected assembly workers; past this, chunk
/// management overhead outweighs the per-area work.
const MAX_AUTO_WORKERS: usize = 16;

/// Configuration for [`MeshBuilder::assemble`](crate::MeshBuilder::assemble).
#[derive(Clone, Debug, Default)]
pub struct AssembleConfig {
    /// Number of worker threads for reference resolution. `None` =
    /// auto-detect (`available_parallelism`, clamped to `[1, 16]`).
    pub workers: Option<usize>,
    /// Build a quadtree over the area footprints and attach it to the
    /// resulting mesh. Off by default; queries are correct either way.
    pub build_index: bool,
}

impl AssembleConfig {
    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Always at least 1.
    pub fn resolve_workers(&self) -> usize {
        match self.workers {
            Some(n) => n.max(1),
            None => thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
                .clamp(1, MAX_AUTO_WORKERS),
        }
    }
}
