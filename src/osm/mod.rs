//! OpenStreetMap element model.
//!
//! Elements are identified by their type and numeric id and carry a set of
//! string tags. Their geometry is stored separately, already resolved to
//! coordinates.

mod element;
mod geometry;
mod oneway;

pub use element::{Element, ElementKey, ElementType, Tags};
pub use geometry::ElementGeometry;
pub use oneway::is_oneway;
