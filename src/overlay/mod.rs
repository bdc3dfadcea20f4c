//! Overlay styles.
//!
//! An overlay decides, per element, how it should look on the map. The
//! result is a [`StyledElement`], which the renderer turns into drawable
//! records.

mod style;

pub use style::{PointStyle, PolygonStyle, PolylineStyle, StrokeStyle, Style, StyledElement};
