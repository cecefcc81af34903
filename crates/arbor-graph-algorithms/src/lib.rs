pub mod common;
pub mod community;
pub mod mst;
pub mod topology;

pub use common::{GraphView, NodeIndex, WeightedEdge};
pub use community::{strongly_connected_components, SccResult};
pub use mst::{kruskal_mst, MstResult, UnionFind};
pub use topology::{dfs_finish_order, topological_sort, TopoSortResult};
