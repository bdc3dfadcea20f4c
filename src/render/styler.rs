//! Turns styled elements into render records.
//!
//! The styler is a pure mapping from tags and style to flat string
//! properties. The only state it keeps are the memoized derived colors and
//! the data layer it puts its output on.

use super::color::{self, ColorCache};
use super::config::StylerConfig;
use super::layer::{DataLayer, MemoryDataLayer};
use super::primitive::{keys, point_record, to_render_records, Properties, RenderRecord};
use crate::osm::{is_oneway, ElementKey, ElementType, Tags};
use crate::overlay::{PolygonStyle, PolylineStyle, Style, StyledElement};

/// Largest absolute `layer` tag value that is taken into account.
const MAX_LAYER: u32 = 20;

/// Lines at most this wide are drawn one layer above their tag layer.
const THIN_LINE_WIDTH: f32 = 2.0;

/// Assumed height of one building level in meters.
const LEVEL_HEIGHT: f32 = 3.0;

/// Displays styled map data on a renderer data layer.
pub struct Styler<L: DataLayer = MemoryDataLayer> {
    layer: L,
    config: StylerConfig,
    is_oneway: fn(&Tags) -> bool,
    darkened_colors: ColorCache,
    transparent_colors: ColorCache,
}

impl Styler<MemoryDataLayer> {
    /// Creates a styler that keeps its output on an in-memory layer.
    pub fn new(config: StylerConfig) -> Self {
        let layer = MemoryDataLayer::new(config.layer_name.clone());
        Self::with_layer(layer, config)
    }
}

impl Default for Styler<MemoryDataLayer> {
    fn default() -> Self {
        Self::new(StylerConfig::default())
    }
}

impl<L: DataLayer> Styler<L> {
    /// Creates a styler that puts its output on the given layer.
    pub fn with_layer(layer: L, config: StylerConfig) -> Self {
        Self {
            layer,
            config,
            is_oneway,
            darkened_colors: ColorCache::new(),
            transparent_colors: ColorCache::new(),
        }
    }

    /// Replaces the predicate used to decide whether a road is oneway.
    pub fn with_oneway_predicate(mut self, predicate: fn(&Tags) -> bool) -> Self {
        self.is_oneway = predicate;
        self
    }

    pub fn config(&self) -> &StylerConfig {
        &self.config
    }

    pub fn layer(&self) -> &L {
        &self.layer
    }

    /// Cache of darkened outline colors.
    pub fn darkened_colors(&self) -> &ColorCache {
        &self.darkened_colors
    }

    /// Cache of fill colors with added transparency.
    pub fn transparent_colors(&self) -> &ColorCache {
        &self.transparent_colors
    }

    pub fn is_visible(&self) -> bool {
        self.layer.is_visible()
    }

    /// Shows or hides the map data.
    pub fn set_visible(&mut self, visible: bool) {
        self.layer.set_visible(visible);
    }

    /// Shows the given elements, each with its style, replacing whatever was
    /// shown before.
    pub fn set(&mut self, features: &[StyledElement]) {
        let records = self.derive(features);
        log::debug!(
            "Showing {} records for {} styled elements",
            records.len(),
            features.len()
        );
        self.layer.set_features(records);
    }

    /// Removes all shown map data.
    pub fn clear(&mut self) {
        self.layer.clear();
    }

    /// Derives the render records for the given elements.
    pub fn derive(&mut self, features: &[StyledElement]) -> Vec<RenderRecord> {
        let mut records = Vec::with_capacity(features.len());
        for feature in features {
            let properties = self.properties(feature);
            records.extend(to_render_records(&feature.geometry, properties));
        }
        records.extend(polygon_center_markers(features));
        records
    }

    /// Recovers the element a record was derived from.
    ///
    /// Returns `None` if the properties were not produced by a styler.
    pub fn get_element_key(&self, properties: &Properties) -> Option<ElementKey> {
        element_key_of(properties)
    }

    fn properties(&mut self, feature: &StyledElement) -> Properties {
        let element = &feature.element;
        let mut props = identity_properties(element.element_type, element.id);
        let layer = layer_of(&element.tags);
        props.insert(keys::LAYER.to_string(), layer.to_string());

        match &feature.style {
            Style::Polygon(style) => self.add_polygon_properties(&mut props, &element.tags, style),
            Style::Polyline(style) => {
                self.add_polyline_properties(&mut props, &element.tags, layer, style)
            }
            Style::Point(style) => {
                if let Some(label) = &style.label {
                    props.insert(keys::TEXT.to_string(), label.clone());
                }
                if let Some(icon) = &style.icon {
                    props.insert(keys::ICON.to_string(), icon.clone());
                }
            }
        }
        props
    }

    fn add_polygon_properties(&mut self, props: &mut Properties, tags: &Tags, style: &PolygonStyle) {
        if let Some(height) = estimate_height(tags) {
            props.insert(keys::HEIGHT.to_string(), format_float(height));
        }
        let fill = self.color_with_some_transparency(&style.color);
        let darkened = self.darkened_color(&style.color);
        let outline = self.color_with_some_transparency(&darkened);
        props.insert(keys::COLOR.to_string(), fill);
        props.insert(keys::STROKE_COLOR.to_string(), outline);
    }

    fn add_polyline_properties(
        &mut self,
        props: &mut Properties,
        tags: &Tags,
        layer: i32,
        style: &PolylineStyle,
    ) {
        let width = line_width(tags, self.is_oneway);
        // thin lines are drawn on top so they are not hidden by wide ones
        if width <= THIN_LINE_WIDTH {
            props.insert(keys::LAYER.to_string(), (layer + 1).to_string());
        }
        props.insert(keys::WIDTH.to_string(), format_float(width));

        if let Some(left) = &style.stroke_left {
            if left.dashed {
                props.insert(keys::DASHED_LEFT.to_string(), "1".to_string());
            }
            props.insert(keys::COLOR_LEFT.to_string(), left.color.clone());
        }
        if let Some(right) = &style.stroke_right {
            if right.dashed {
                props.insert(keys::DASHED_RIGHT.to_string(), "1".to_string());
            }
            props.insert(keys::COLOR_RIGHT.to_string(), right.color.clone());
        }

        if let Some(stroke) = &style.stroke {
            if stroke.dashed {
                props.insert(keys::DASHED.to_string(), "1".to_string());
            }
            props.insert(keys::COLOR.to_string(), stroke.color.clone());
            let outline = self.darkened_color(&stroke.color);
            props.insert(keys::STROKE_COLOR.to_string(), outline);
        } else if style.stroke_left.is_some() || style.stroke_right.is_some() {
            // a center line is needed anyway, otherwise the side strokes
            // leave gaps where segments meet
            props.insert(keys::COLOR.to_string(), self.config.road_color.clone());
            props.insert(
                keys::STROKE_COLOR.to_string(),
                self.config.road_outline_color.clone(),
            );
        }

        if let Some(label) = &style.label {
            props.insert(keys::TEXT.to_string(), label.clone());
        }
    }

    /// Returns the outline variant of `color`, computed once per color.
    pub fn darkened_color(&mut self, color: &str) -> String {
        let factor = self.config.darken_factor;
        self.darkened_colors.get_or_insert_with(color, |c| {
            convert_color(c, |rgba| color::darken(rgba, factor))
        })
    }

    /// Returns the fill variant of `color`, computed once per color.
    pub fn color_with_some_transparency(&mut self, color: &str) -> String {
        let transparency = self.config.transparency;
        let alpha_scale = self.config.alpha_scale();
        self.transparent_colors.get_or_insert_with(color, |c| {
            convert_color(c, |rgba| {
                color::scale_alpha(color::add_transparency(rgba, transparency), alpha_scale)
            })
        })
    }
}

/// Parses `color`, transforms it and formats it again. Colors that cannot be
/// parsed are passed through unchanged.
fn convert_color(color: &str, transform: impl FnOnce(rgb::RGBA8) -> rgb::RGBA8) -> String {
    match color::parse_color(color) {
        Ok(rgba) => color::to_argb_string(transform(rgba)),
        Err(e) => {
            log::warn!("Cannot derive style color: {}", e);
            color.to_string()
        }
    }
}

fn identity_properties(element_type: ElementType, id: i64) -> Properties {
    let mut props = Properties::new();
    props.insert(keys::ELEMENT_TYPE.to_string(), element_type.name().to_string());
    props.insert(keys::ELEMENT_ID.to_string(), id.to_string());
    props
}

fn element_key_of(properties: &Properties) -> Option<ElementKey> {
    let element_type = properties.get(keys::ELEMENT_TYPE)?.parse().ok()?;
    let id = properties.get(keys::ELEMENT_ID)?.parse().ok()?;
    Some(ElementKey::new(element_type, id))
}

/// Workaround for renderers that repeat icons and labels of polygons at every
/// vertex: for each polygon with an icon or label, an extra point record at
/// its center carries just the identity, icon and label.
///
/// Not needed by renderers that place polygon icons correctly.
fn polygon_center_markers(features: &[StyledElement]) -> Vec<RenderRecord> {
    features
        .iter()
        .filter_map(|feature| {
            let Style::Polygon(style) = &feature.style else {
                return None;
            };
            if style.icon.is_none() && style.label.is_none() {
                return None;
            }
            let Some(center) = feature.geometry.center() else {
                log::debug!("No center for {}, skipping its marker", feature.element.key());
                return None;
            };
            let element = &feature.element;
            let mut props = identity_properties(element.element_type, element.id);
            if let Some(icon) = &style.icon {
                props.insert(keys::ICON.to_string(), icon.clone());
            }
            if let Some(label) = &style.label {
                props.insert(keys::TEXT.to_string(), label.clone());
            }
            Some(point_record(center, props))
        })
        .collect()
}

/// Returns the rendering layer from the `layer` tag, or 0 if it is missing,
/// not a number or unreasonably far from ground level.
pub fn layer_of(tags: &Tags) -> i32 {
    tags.get("layer")
        .and_then(|v| v.parse::<i32>().ok())
        .filter(|layer| layer.unsigned_abs() <= MAX_LAYER)
        .unwrap_or(0)
}

/// Approximates the drawn width of a line in meters, roughly as roads look
/// on the base map (3m otherwise).
pub fn line_width(tags: &Tags, is_oneway: fn(&Tags) -> bool) -> f32 {
    match tags.get("highway").map(String::as_str) {
        Some("motorway" | "trunk") => {
            if !is_oneway(tags) {
                20.0
            } else {
                10.0
            }
        }
        Some("motorway_link" | "trunk_link") => 6.0,
        Some("primary" | "secondary" | "tertiary") => {
            if !is_oneway(tags) {
                9.0
            } else {
                6.0
            }
        }
        Some("service" | "track") => 3.0,
        Some("path" | "cycleway" | "footway" | "bridleway" | "steps") => 1.0,
        None => 3.0,
        Some(_) => {
            if !is_oneway(tags) {
                6.0
            } else {
                3.0
            }
        }
    }
}

/// Estimates the height of a thing in meters.
pub fn estimate_height(tags: &Tags) -> Option<f32> {
    if let Some(height) = parse_finite(tags, "height") {
        return Some(height);
    }
    let building_levels = parse_finite(tags, "building:levels")?;
    let roof_levels = parse_finite(tags, "roof:levels").unwrap_or(0.0);
    Some(LEVEL_HEIGHT * (building_levels + roof_levels))
}

/// Parses a numeric tag. `NaN` and infinities count as not a number.
fn parse_finite(tags: &Tags, key: &str) -> Option<f32> {
    tags.get(key)
        .and_then(|v| v.parse::<f32>().ok())
        .filter(|v| v.is_finite())
}

/// Formats a number the way the map style expects, always with a fraction
/// (`3.0`, not `3`).
fn format_float(value: f32) -> String {
    format!("{:?}", value)
}
