//! Style variants and styled elements.

use crate::osm::{Element, ElementGeometry};
use serde::{Deserialize, Serialize};

/// Visual style of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Style {
    Polygon(PolygonStyle),
    Polyline(PolylineStyle),
    Point(PointStyle),
}

/// An area filled with a color, optionally marked with an icon and label at
/// its center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonStyle {
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl PolygonStyle {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            icon: None,
            label: None,
        }
    }
}

/// A line with up to three strokes: center, left side and right side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolylineStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_left: Option<StrokeStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_right: Option<StrokeStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A single stroke of a polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: String,
    #[serde(default)]
    pub dashed: bool,
}

impl StrokeStyle {
    pub fn solid(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            dashed: false,
        }
    }

    pub fn dashed(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            dashed: true,
        }
    }
}

/// A marker with an optional icon and label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// An element together with its geometry and the style to draw it with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledElement {
    pub element: Element,
    pub geometry: ElementGeometry,
    pub style: Style,
}

impl StyledElement {
    pub fn new(element: Element, geometry: ElementGeometry, style: Style) -> Self {
        Self {
            element,
            geometry,
            style,
        }
    }
}
