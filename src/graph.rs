use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// One position in the final hierarchy: either a single node, or an
/// unresolved block of nodes whose pairwise comparisons contradict each
/// other. Serializes untagged, so a block appears on the wire as a plain
/// array next to bare scalars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderElement<N> {
    Single(N),
    Group(Vec<N>),
}

impl<N> OrderElement<N> {
    pub fn is_group(&self) -> bool {
        matches!(self, OrderElement::Group(_))
    }

    /// Member nodes in stored order; a scalar yields a one-element slice.
    pub fn members(&self) -> &[N] {
        match self {
            OrderElement::Single(node) => std::slice::from_ref(node),
            OrderElement::Group(members) => members,
        }
    }
}

/// Directed comparison graph with an edge winner -> loser per distinct pair.
///
/// Nodes are interned into dense indices in first-sight order, and every
/// later traversal iterates in that order, so repeated runs over the same
/// match list produce identical output.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    adj: Vec<Vec<usize>>,
}

impl<N: Clone + Eq + Hash> Graph<N> {
    /// Build the graph from (winner, loser) pairs. Parallel edges collapse
    /// into one; a self-pair registers the node but adds no edge, since it
    /// carries no ordering information.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Graph {
            nodes: Vec::new(),
            index: HashMap::new(),
            adj: Vec::new(),
        };

        for (winner, loser) in pairs {
            let w = graph.intern(winner);
            let l = graph.intern(loser);
            if w != l && !graph.adj[w].contains(&l) {
                graph.adj[w].push(l);
            }
        }

        graph
    }

    fn intern(&mut self, node: N) -> usize {
        if let Some(&i) = self.index.get(&node) {
            return i;
        }
        let i = self.nodes.len();
        self.index.insert(node.clone(), i);
        self.nodes.push(node);
        self.adj.push(Vec::new());
        i
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Strongly connected components via Tarjan's algorithm. Each node lands
    /// in exactly one component; the list order is an artifact of DFS
    /// completion and carries no meaning on its own.
    pub fn sccs(&self) -> Vec<Vec<N>> {
        self.scc_indices()
            .into_iter()
            .map(|scc| scc.into_iter().map(|i| self.nodes[i].clone()).collect())
            .collect()
    }

    /// Full ordering pipeline: find SCCs, contract them into the
    /// condensation DAG, topologically sort it, and expand back to nodes.
    /// Singleton components come out as scalars, larger ones as unresolved
    /// blocks.
    pub fn final_order(&self) -> Vec<OrderElement<N>> {
        let sccs = self.scc_indices();
        let scc_graph = condensation(&self.adj, &sccs, self.nodes.len());
        let sorted = topological_sort(&scc_graph);

        sorted
            .into_iter()
            .map(|scc_id| {
                let members = &sccs[scc_id];
                if members.len() == 1 {
                    OrderElement::Single(self.nodes[members[0]].clone())
                } else {
                    OrderElement::Group(members.iter().map(|&i| self.nodes[i].clone()).collect())
                }
            })
            .collect()
    }

    fn scc_indices(&self) -> Vec<Vec<usize>> {
        let mut state = Tarjan::new(self.nodes.len());
        for v in 0..self.nodes.len() {
            if state.ids[v].is_none() {
                state.dfs(v, &self.adj);
            }
        }
        state.sccs
    }
}

/// Per-run Tarjan state. Freshly allocated for every traversal so a
/// long-lived service never carries discovery indices between calls.
struct Tarjan {
    ids: Vec<Option<usize>>,
    low: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    timer: usize,
    sccs: Vec<Vec<usize>>,
}

impl Tarjan {
    fn new(n: usize) -> Self {
        Tarjan {
            ids: vec![None; n],
            low: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            timer: 0,
            sccs: Vec::new(),
        }
    }

    fn dfs(&mut self, at: usize, adj: &[Vec<usize>]) {
        self.ids[at] = Some(self.timer);
        self.low[at] = self.timer;
        self.timer += 1;
        self.stack.push(at);
        self.on_stack[at] = true;

        for &to in &adj[at] {
            match self.ids[to] {
                None => {
                    self.dfs(to, adj);
                    self.low[at] = self.low[at].min(self.low[to]);
                }
                // Back edge into the current DFS path: part of a cycle.
                Some(id) if self.on_stack[to] => {
                    self.low[at] = self.low[at].min(id);
                }
                // Already assigned to a completed component.
                Some(_) => {}
            }
        }

        // Root of its component: pop the stack down to it.
        if self.ids[at] == Some(self.low[at]) {
            let mut scc = Vec::new();
            loop {
                let node = self.stack.pop().expect("Tarjan stack underflow");
                self.on_stack[node] = false;
                scc.push(node);
                if node == at {
                    break;
                }
            }
            self.sccs.push(scc);
        }
    }
}

/// SCC-level projection of the graph: one node per component, same-component
/// edges dropped, duplicates collapsed. Acyclic by construction, since each
/// SCC is a maximal cyclic component.
fn condensation(adj: &[Vec<usize>], sccs: &[Vec<usize>], node_count: usize) -> Vec<Vec<usize>> {
    let mut node_to_scc = vec![usize::MAX; node_count];
    for (scc_id, members) in sccs.iter().enumerate() {
        for &node in members {
            node_to_scc[node] = scc_id;
        }
    }

    let mut scc_graph = vec![Vec::new(); sccs.len()];
    for (u, successors) in adj.iter().enumerate() {
        let u_scc = node_to_scc[u];
        assert_ne!(u_scc, usize::MAX, "node {u} not assigned to any SCC");
        for &v in successors {
            let v_scc = node_to_scc[v];
            if u_scc != v_scc && !scc_graph[u_scc].contains(&v_scc) {
                scc_graph[u_scc].push(v_scc);
            }
        }
    }

    scc_graph
}

/// Reverse DFS postorder over the condensation DAG. Edges point winner ->
/// loser, so after the reversal overall winners come out first.
fn topological_sort(scc_graph: &[Vec<usize>]) -> Vec<usize> {
    let mut visited = vec![false; scc_graph.len()];
    let mut postorder = Vec::with_capacity(scc_graph.len());

    for v in 0..scc_graph.len() {
        if !visited[v] {
            dfs_postorder(v, scc_graph, &mut visited, &mut postorder);
        }
    }

    postorder.reverse();
    postorder
}

fn dfs_postorder(
    at: usize,
    scc_graph: &[Vec<usize>],
    visited: &mut [bool],
    postorder: &mut Vec<usize>,
) {
    visited[at] = true;
    for &to in &scc_graph[at] {
        if !visited[to] {
            dfs_postorder(to, scc_graph, visited, postorder);
        }
    }
    postorder.push(at);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn order_of(pairs: &[(&'static str, &'static str)]) -> Vec<OrderElement<&'static str>> {
        Graph::from_pairs(pairs.iter().copied()).final_order()
    }

    fn single(node: &'static str) -> OrderElement<&'static str> {
        OrderElement::Single(node)
    }

    fn group_set(element: &OrderElement<&'static str>) -> BTreeSet<&'static str> {
        assert!(element.is_group(), "expected a group, got {element:?}");
        element.members().iter().copied().collect()
    }

    #[test]
    fn linear_chain_yields_scalars_in_order() {
        let order = order_of(&[("A", "B"), ("B", "C")]);
        assert_eq!(order, vec![single("A"), single("B"), single("C")]);
    }

    #[test]
    fn simple_cycle_collapses_into_one_block() {
        let order = order_of(&[("A", "B"), ("B", "C"), ("C", "A")]);
        assert_eq!(order.len(), 1);
        assert_eq!(group_set(&order[0]), BTreeSet::from(["A", "B", "C"]));
    }

    #[test]
    fn mixed_hierarchy_and_cycle() {
        // Ni dominates a three-way conflict block, which dominates Si.
        let order = order_of(&[
            ("Ni", "Fe"),
            ("Fe", "Fi"),
            ("Fi", "Te"),
            ("Te", "Fe"),
            ("Te", "Si"),
        ]);
        assert_eq!(order.len(), 3);
        assert_eq!(order[0], single("Ni"));
        assert_eq!(group_set(&order[1]), BTreeSet::from(["Fe", "Fi", "Te"]));
        assert_eq!(order[2], single("Si"));
    }

    #[test]
    fn empty_input_yields_empty_order() {
        let order = order_of(&[]);
        assert!(order.is_empty());
    }

    #[test]
    fn duplicate_pairs_do_not_change_the_result() {
        let base = order_of(&[("A", "B"), ("B", "C")]);
        let with_dupes = order_of(&[("A", "B"), ("B", "C"), ("A", "B"), ("A", "B")]);
        assert_eq!(base, with_dupes);
    }

    #[test]
    fn self_pair_registers_the_node_without_an_edge() {
        let graph = Graph::from_pairs([("A", "A")]);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.final_order(), vec![single("A")]);
    }

    #[test]
    fn full_cycle_over_four_nodes_is_one_block() {
        let order = order_of(&[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")]);
        assert_eq!(order.len(), 1);
        assert_eq!(group_set(&order[0]), BTreeSet::from(["A", "B", "C", "D"]));
    }

    #[test]
    fn disconnected_components_each_keep_their_order() {
        let order = order_of(&[("A", "B"), ("C", "D")]);
        let flat: Vec<_> = order.iter().flat_map(|e| e.members()).copied().collect();
        assert_eq!(flat.len(), 4);

        let pos = |n| flat.iter().position(|&x| x == n).unwrap();
        assert!(pos("A") < pos("B"));
        assert!(pos("C") < pos("D"));
    }

    #[test]
    fn every_node_lands_in_exactly_one_element() {
        let pairs = [("A", "B"), ("B", "C"), ("C", "A"), ("C", "D"), ("E", "A")];
        let order = order_of(&pairs);

        let mut flat: Vec<_> = order.iter().flat_map(|e| e.members()).copied().collect();
        let mentioned: BTreeSet<_> = pairs.iter().flat_map(|&(w, l)| [w, l]).collect();

        assert_eq!(flat.iter().copied().collect::<BTreeSet<_>>(), mentioned);
        flat.sort_unstable();
        flat.dedup();
        assert_eq!(flat.len(), mentioned.len(), "a node appeared twice");
    }

    #[test]
    fn repeated_runs_are_deterministic() {
        let pairs = [
            ("Ni", "Fe"),
            ("Fe", "Fi"),
            ("Fi", "Te"),
            ("Te", "Fe"),
            ("Te", "Si"),
        ];
        let first = order_of(&pairs);
        for _ in 0..10 {
            assert_eq!(order_of(&pairs), first);
        }
    }

    #[test]
    fn sccs_partition_the_node_set() {
        let graph = Graph::from_pairs([("A", "B"), ("B", "A"), ("B", "C")]);
        let sccs = graph.sccs();

        let all: Vec<_> = sccs.iter().flatten().copied().collect();
        assert_eq!(all.len(), 3);
        assert_eq!(all.iter().copied().collect::<BTreeSet<_>>().len(), 3);

        let cycle = sccs.iter().find(|scc| scc.len() == 2).unwrap();
        assert_eq!(
            cycle.iter().copied().collect::<BTreeSet<_>>(),
            BTreeSet::from(["A", "B"])
        );
    }

    #[test]
    fn edgeless_graph_yields_one_singleton_scc_per_node() {
        let graph = Graph::from_pairs([("A", "A"), ("B", "B"), ("C", "C")]);
        let sccs = graph.sccs();
        assert_eq!(sccs.len(), 3);
        assert!(sccs.iter().all(|scc| scc.len() == 1));
    }
}
