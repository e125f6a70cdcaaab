pub mod construction;
pub mod model;
pub mod serialization;

pub use construction::GraphLoader;
pub use model::{EdgeLabels, EdgeSlot, GraphId, GraphInstance, NodeLabel, RawEdge, RawGraph};
pub use serialization::GraphWriter;
