use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Ordering is insertion order, which the render traversal guarantees to be
/// post-order: a parent's draw lands after all of its descendants'. There is
/// no z-key and no sorting — stream order *is* the draw order, and for fixed
/// inputs the stream is reproducible instruction for instruction.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - `clear()` keeps allocated capacity for reuse across frames
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        debug_assert!(cmd.transform.is_finite(), "non-finite transform in draw stream");
        debug_assert!(cmd.color.is_finite(), "non-finite color in draw stream");
        self.items.push(cmd);
    }

    /// Instructions in draw order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{ColorRgb, Mat3};
    use crate::geometry::GeometryStore;

    #[test]
    fn push_preserves_insertion_order() {
        let mut store = GeometryStore::new();
        let a = store.register("a");
        let b = store.register("b");

        let mut list = DrawList::new();
        list.push(DrawCmd { geometry: a, transform: Mat3::IDENTITY, color: ColorRgb::white() });
        list.push(DrawCmd { geometry: b, transform: Mat3::IDENTITY, color: ColorRgb::white() });

        let order: Vec<_> = list.iter().map(|cmd| cmd.geometry).collect();
        assert_eq!(order, vec![a, b]);
    }

    #[test]
    fn clear_empties_the_stream() {
        let mut store = GeometryStore::new();
        let g = store.register("g");

        let mut list = DrawList::new();
        list.push(DrawCmd { geometry: g, transform: Mat3::IDENTITY, color: ColorRgb::black() });
        assert_eq!(list.len(), 1);

        list.clear();
        assert!(list.is_empty());
        assert!(list.items().is_empty());
    }
}
