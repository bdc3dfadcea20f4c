//! Rendering backend sink.

use super::RenderRecord;

/// A named data layer of a map renderer.
///
/// Implementations hand the records to the actual rendering engine. The
/// styler only ever replaces the whole content of a layer.
pub trait DataLayer {
    /// Replaces everything shown on this layer with `features`.
    fn set_features(&mut self, features: Vec<RenderRecord>);

    /// Removes everything shown on this layer.
    fn clear(&mut self);

    /// Whether this layer is drawn at all.
    fn is_visible(&self) -> bool;

    /// Shows or hides this layer without discarding its content.
    fn set_visible(&mut self, visible: bool);
}

/// A data layer that simply keeps its records in memory.
#[derive(Debug, Clone)]
pub struct MemoryDataLayer {
    /// Name of this layer
    pub name: String,
    /// Records currently on this layer
    features: Vec<RenderRecord>,
    /// Whether this layer is visible
    visible: bool,
}

impl MemoryDataLayer {
    /// Creates a new empty, visible layer.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            features: Vec::new(),
            visible: true,
        }
    }

    /// Returns the records currently on this layer.
    pub fn features(&self) -> &[RenderRecord] {
        &self.features
    }

    /// Returns the records that would currently be drawn.
    pub fn drawn_features(&self) -> &[RenderRecord] {
        if self.visible {
            &self.features
        } else {
            &[]
        }
    }
}

impl DataLayer for MemoryDataLayer {
    fn set_features(&mut self, features: Vec<RenderRecord>) {
        self.features = features;
    }

    fn clear(&mut self) {
        self.features.clear();
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{point_record, Properties};
    use geo_types::Point;

    #[test]
    fn test_hidden_layer_keeps_content() {
        let mut layer = MemoryDataLayer::new("test");
        layer.set_features(vec![point_record(Point::new(0.0, 0.0), Properties::new())]);

        layer.set_visible(false);
        assert!(!layer.is_visible());
        assert!(layer.drawn_features().is_empty());
        assert_eq!(layer.features().len(), 1);

        layer.set_visible(true);
        assert_eq!(layer.drawn_features().len(), 1);
    }

    #[test]
    fn test_set_replaces_and_clear_empties() {
        let mut layer = MemoryDataLayer::new("test");
        let record = point_record(Point::new(0.0, 0.0), Properties::new());
        layer.set_features(vec![record.clone(), record.clone()]);
        layer.set_features(vec![record]);
        assert_eq!(layer.features().len(), 1);

        layer.clear();
        assert!(layer.features().is_empty());
        assert!(layer.is_visible());
    }
}
