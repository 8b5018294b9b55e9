use num_traits::NumAssign;
use std::ops::Sub;

#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub to: usize,
    pub capacity: Flow,
    pub flow: Flow,
    pub pair: usize, // arena index of the residual counterpart
}

impl<Flow> Edge<Flow>
where
    Flow: Sub<Output = Flow> + Copy,
{
    #[inline]
    pub fn residual_capacity(&self) -> Flow {
        self.capacity - self.flow
    }
}

/// Capacitated directed graph with a fixed source and sink.
///
/// Edges live in a flat arena; every `add_edge` appends a forward edge and a
/// capacity-zero backward edge that reference each other by arena index.
/// Adjacency lists keep insertion order, so BFS visits edges in the order
/// they were added.
pub struct FlowNetwork<Flow> {
    num_nodes: usize,
    source: usize,
    sink: usize,
    pub(crate) edges: Vec<Edge<Flow>>,
    adjacency: Vec<Vec<usize>>,
}

impl<Flow> FlowNetwork<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn new(num_nodes: usize, source: usize, sink: usize) -> Self {
        assert!(num_nodes >= 1, "network needs at least one node");
        assert!(source < num_nodes && sink < num_nodes, "source and sink must be node indices");

        FlowNetwork { num_nodes, source, sink, edges: Vec::new(), adjacency: vec![Vec::new(); num_nodes] }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len() / 2
    }

    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    #[inline]
    pub fn sink(&self) -> usize {
        self.sink
    }

    // return the arena index of the forward edge
    pub fn add_edge(&mut self, from: usize, to: usize, capacity: Flow) -> Option<usize> {
        if from >= self.num_nodes || to >= self.num_nodes {
            return None;
        }

        let forward = self.edges.len();
        let backward = forward + 1;
        self.edges.push(Edge { to, capacity, flow: Flow::zero(), pair: backward });
        self.edges.push(Edge { to: from, capacity: Flow::zero(), flow: Flow::zero(), pair: forward });
        self.adjacency[from].push(forward);
        self.adjacency[to].push(backward);

        Some(forward)
    }

    #[inline]
    pub fn edge(&self, edge_id: usize) -> &Edge<Flow> {
        &self.edges[edge_id]
    }

    #[inline]
    pub fn outgoing(&self, u: usize) -> &[usize] {
        &self.adjacency[u]
    }

    /// Adds `delta` to the edge's flow and subtracts it from the pair's flow,
    /// keeping `edge.flow == -pair.flow` across the pair.
    #[inline]
    pub fn push_flow(&mut self, edge_id: usize, delta: Flow) {
        let pair = self.edges[edge_id].pair;
        self.edges[edge_id].flow += delta;
        self.edges[pair].flow -= delta;
    }

    pub fn source_capacity(&self) -> Flow {
        self.adjacency[self.source].iter().fold(Flow::zero(), |sum, &e| sum + self.edges[e].capacity)
    }

    /// Net flow leaving `u`. Backward edges carry the mirrored negative flow
    /// of their forward counterparts, so summing over all outgoing edges
    /// yields outflow minus inflow. Zero for every conserving node.
    pub fn flow_balance(&self, u: usize) -> Flow {
        self.adjacency[u].iter().fold(Flow::zero(), |balance, &e| balance + self.edges[e].flow)
    }
}
