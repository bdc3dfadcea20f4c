//! Renderer-agnostic drawing records.

use crate::osm::ElementGeometry;
use geo_types::{Geometry, Point, Polygon};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat string properties attached to a drawn primitive.
pub type Properties = BTreeMap<String, String>;

/// Property keys understood by the map style. Renderers ignore keys they do
/// not know.
pub mod keys {
    pub const ELEMENT_TYPE: &str = "element_type";
    pub const ELEMENT_ID: &str = "element_id";
    pub const LAYER: &str = "layer";
    pub const HEIGHT: &str = "height";
    pub const COLOR: &str = "color";
    pub const STROKE_COLOR: &str = "strokeColor";
    pub const WIDTH: &str = "width";
    pub const COLOR_LEFT: &str = "colorLeft";
    pub const DASHED_LEFT: &str = "dashedLeft";
    pub const COLOR_RIGHT: &str = "colorRight";
    pub const DASHED_RIGHT: &str = "dashedRight";
    pub const DASHED: &str = "dashed";
    pub const TEXT: &str = "text";
    pub const ICON: &str = "icon";
}

/// A single drawable primitive with its properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRecord {
    pub geometry: Geometry<f64>,
    pub properties: Properties,
}

impl RenderRecord {
    pub fn new(geometry: Geometry<f64>, properties: Properties) -> Self {
        Self {
            geometry,
            properties,
        }
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

/// Splits an element geometry into the primitives a renderer can draw.
///
/// Each polyline and each polygon becomes its own record; all of them share
/// the same properties. Polygon rings are closed if they were not already.
pub fn to_render_records(geometry: &ElementGeometry, properties: Properties) -> Vec<RenderRecord> {
    match geometry {
        ElementGeometry::Point(point) => {
            vec![RenderRecord::new(Geometry::Point(*point), properties)]
        }
        ElementGeometry::Polylines(lines) => lines
            .iter()
            .filter(|line| line.0.len() >= 2)
            .map(|line| RenderRecord::new(Geometry::LineString(line.clone()), properties.clone()))
            .collect(),
        ElementGeometry::Polygons(polygons) => polygons
            .iter()
            .filter(|polygon| !polygon.exterior().0.is_empty())
            .map(|polygon| {
                let closed = Polygon::new(polygon.exterior().clone(), polygon.interiors().to_vec());
                RenderRecord::new(Geometry::Polygon(closed), properties.clone())
            })
            .collect(),
    }
}

/// Creates a single point record.
pub fn point_record(point: Point<f64>, properties: Properties) -> RenderRecord {
    RenderRecord::new(Geometry::Point(point), properties)
}
