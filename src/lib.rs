//! Styling of map overlay data.
//!
//! Overlays pick a [`Style`](overlay::Style) for each OSM element. The
//! [`Styler`](render::Styler) turns those styled elements into flat render
//! records that any map renderer can draw.

pub mod credits;
pub mod osm;
pub mod overlay;
pub mod render;
pub mod state;
