//! Opaque geometry handles and the shared tint registry.
//!
//! Vertex data and GPU buffers live with the external renderer; the scene
//! records only which resource a node draws and the resource's current
//! color. The tint belongs to the *shared* resource, so every node drawing
//! the same geometry renders with the last color written (see
//! [`Scene::set_color`](crate::Scene::set_color)).

use crate::coords::ColorRgb;
use crate::error::SceneError;

/// Opaque handle to an externally defined drawable resource.
///
/// Valid only for the [`GeometryStore`] that issued it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GeometryId(u32);

#[derive(Debug, Clone, PartialEq)]
struct Geometry {
    label: String,
    color: ColorRgb,
}

/// Registry of drawable resources the tree can reference.
#[derive(Debug, Default)]
pub struct GeometryStore {
    entries: Vec<Geometry>,
}

impl GeometryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a drawable resource and returns its handle.
    ///
    /// New resources start white; `label` is for logs and editor display.
    pub fn register(&mut self, label: impl Into<String>) -> GeometryId {
        let id = GeometryId(self.entries.len() as u32);
        self.entries.push(Geometry { label: label.into(), color: ColorRgb::white() });
        id
    }

    #[inline]
    pub fn contains(&self, id: GeometryId) -> bool {
        (id.0 as usize) < self.entries.len()
    }

    /// Current shared tint of `id`, or `None` for an unknown handle.
    pub fn color(&self, id: GeometryId) -> Option<ColorRgb> {
        self.entries.get(id.0 as usize).map(|g| g.color)
    }

    pub fn label(&self, id: GeometryId) -> Option<&str> {
        self.entries.get(id.0 as usize).map(|g| g.label.as_str())
    }

    /// Overwrites the shared tint. Last write wins for every node drawing `id`.
    pub fn set_color(&mut self, id: GeometryId, color: ColorRgb) -> Result<(), SceneError> {
        match self.entries.get_mut(id.0 as usize) {
            Some(g) => {
                g.color = color;
                Ok(())
            }
            None => Err(SceneError::UnknownGeometry(id)),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_geometry_starts_white() {
        let mut store = GeometryStore::new();
        let g = store.register("rect");
        assert!(store.contains(g));
        assert_eq!(store.label(g), Some("rect"));
        assert_eq!(store.color(g), Some(ColorRgb::white()));
    }

    #[test]
    fn set_color_overwrites_the_shared_tint() {
        let mut store = GeometryStore::new();
        let g = store.register("circle");
        store.set_color(g, ColorRgb::new(1.0, 0.5, 0.0)).unwrap();
        store.set_color(g, ColorRgb::new(0.0, 1.0, 0.0)).unwrap();
        assert_eq!(store.color(g), Some(ColorRgb::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn unknown_handle_is_reported() {
        let mut foreign = GeometryStore::new();
        let id = foreign.register("elsewhere");

        let mut store = GeometryStore::new();
        assert!(!store.contains(id));
        assert_eq!(store.color(id), None);
        assert_eq!(
            store.set_color(id, ColorRgb::black()),
            Err(SceneError::UnknownGeometry(id))
        );
    }

    #[test]
    fn len_tracks_registrations() {
        let mut store = GeometryStore::new();
        assert!(store.is_empty());
        store.register("a");
        store.register("b");
        assert_eq!(store.len(), 2);
    }
}
