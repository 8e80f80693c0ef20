pub mod generators;
pub mod node;
pub mod traits;
pub mod undirected;

pub use node::NodeId;
pub use traits::{Graph, MutableGraph};
pub use undirected::{Adjacency, WeightedGraph};
