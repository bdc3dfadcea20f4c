//! Rendering of styled map data.
//!
//! This module turns [`StyledElement`](crate::overlay::StyledElement)s into
//! flat [`RenderRecord`]s and puts them on a renderer [`DataLayer`].

pub mod color;
mod config;
mod layer;
mod primitive;
mod styler;

pub use config::{AlphaConvention, ConfigError, StylerConfig};
pub use layer::{DataLayer, MemoryDataLayer};
pub use primitive::{keys, point_record, to_render_records, Properties, RenderRecord};
pub use styler::{estimate_height, layer_of, line_width, Styler};
