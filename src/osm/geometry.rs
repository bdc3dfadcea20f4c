//! Resolved element geometry.

use geo::{Area, Centroid, CoordsIter};
use geo_types::{MultiLineString, MultiPolygon, Point};
use serde::{Deserialize, Serialize};

/// Geometry of an element in WGS84 (x = longitude, y = latitude).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum ElementGeometry {
    /// A node, or anything collapsed to a single position
    Point(Point<f64>),
    /// One or more open ways
    Polylines(MultiLineString<f64>),
    /// One or more areas, each with optional holes
    Polygons(MultiPolygon<f64>),
}

impl ElementGeometry {
    /// Returns the representative center of this geometry.
    ///
    /// For points this is the point itself, for lines the centroid. For areas
    /// it is the centroid of the largest part, so that it lies on the area
    /// even when the parts are far apart. Falls back to the first coordinate
    /// when the centroid is undefined (e.g. all rings are degenerate) and
    /// returns `None` only for geometry without any coordinates.
    pub fn center(&self) -> Option<Point<f64>> {
        match self {
            ElementGeometry::Point(p) => Some(*p),
            ElementGeometry::Polylines(lines) => lines
                .centroid()
                .or_else(|| lines.coords_iter().next().map(Point::from)),
            ElementGeometry::Polygons(polygons) => polygons
                .iter()
                .max_by(|a, b| a.unsigned_area().total_cmp(&b.unsigned_area()))
                .and_then(|largest| largest.centroid())
                .or_else(|| polygons.coords_iter().next().map(Point::from)),
        }
    }
}
