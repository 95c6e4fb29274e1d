use core::sync::atomic::{AtomicU64, Ordering};

/// Stable identity token for a scene node.
///
/// Ids are process-global and monotonically increasing, so no two nodes ever
/// share one — including nodes living in unrelated trees. Equality is the
/// only meaningful operation; an id carries no behavior and never doubles as
/// a widget or renderer handle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId(u64);

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

impl NodeId {
    pub(crate) fn next() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }
}
