use crate::graph::FlowNetwork;
use crate::status::Status;
use num_traits::NumAssign;
use std::collections::VecDeque;

const UNVISITED: usize = usize::MAX;
const SOURCE: usize = usize::MAX - 1;

/// Maximum flow by shortest augmenting paths (Edmonds-Karp).
///
/// Each round runs a BFS over positive-residual edges, then pushes the
/// bottleneck of the discovered path. BFS selection bounds the number of
/// augmentations by O(VE), giving O(VE^2) overall.
#[derive(Default)]
pub struct EdmondsKarp<Flow> {
    maximum_flow: Flow,
    status: Status,
    augmenting_paths: Vec<(Vec<usize>, Flow)>,
}

impl<Flow> EdmondsKarp<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn solve(&mut self, network: &mut FlowNetwork<Flow>) -> Status {
        self.maximum_flow = Flow::zero();
        self.augmenting_paths.clear();

        let (source, sink) = (network.source(), network.sink());
        if source == sink {
            self.status = Status::Optimal;
            return self.status;
        }

        let mut prev = vec![(UNVISITED, UNVISITED); network.num_nodes()];
        let mut queue = VecDeque::new();

        loop {
            prev.fill((UNVISITED, UNVISITED));
            prev[source] = (SOURCE, UNVISITED);
            queue.clear();
            queue.push_back(source);

            // bfs, each node discovered at most once
            'search: while let Some(u) = queue.pop_front() {
                for &edge_id in network.outgoing(u) {
                    let edge = network.edge(edge_id);
                    if prev[edge.to].0 != UNVISITED || edge.residual_capacity() == Flow::zero() {
                        continue;
                    }

                    prev[edge.to] = (u, edge_id);
                    if edge.to == sink {
                        break 'search;
                    }
                    queue.push_back(edge.to);
                }
            }

            if prev[sink].0 == UNVISITED {
                break;
            }

            self.augment(network, &prev, source, sink);
        }

        self.status = Status::Optimal;
        self.status
    }

    // One walk from sink to source fixes the edge per hop; the bottleneck is
    // taken over exactly those edges and the update pushes through the same
    // ids, so parallel edges cannot diverge between the two steps.
    fn augment(&mut self, network: &mut FlowNetwork<Flow>, prev: &[(usize, usize)], source: usize, sink: usize) {
        let mut bottleneck = network.edge(prev[sink].1).residual_capacity();
        let mut path = vec![sink];
        let mut v = sink;
        while v != source {
            let (u, edge_id) = prev[v];
            bottleneck = bottleneck.min(network.edge(edge_id).residual_capacity());
            path.push(u);
            v = u;
        }
        path.reverse();

        let mut v = sink;
        while v != source {
            let (u, edge_id) = prev[v];
            network.push_flow(edge_id, bottleneck);
            v = u;
        }

        self.maximum_flow += bottleneck;
        self.augmenting_paths.push((path, bottleneck));
    }

    #[inline]
    pub fn maximum_flow(&self) -> Flow {
        self.maximum_flow
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Node sequence and bottleneck of every augmentation, in order.
    #[inline]
    pub fn augmenting_paths(&self) -> &[(Vec<usize>, Flow)] {
        &self.augmenting_paths
    }
}
