//! Linkflow Graph — turns the member roster into a force-graph dataset.
//!
//! Everything here is a pure, synchronous transformation: tag extraction
//! from free-text descriptions, role/category display attributes, and the
//! pairwise link builder. The force-layout simulation itself lives in the
//! frontend; this crate only produces the `{nodes, links}` payload it
//! consumes.

pub mod builder;
pub mod style;
pub mod tags;

pub use builder::{build_graph, category_catalog, GraphData, GraphLink, GraphNode, LinkKind};
pub use style::{category_color, node_size};
pub use tags::extract_tags;
