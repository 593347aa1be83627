use tracing::debug;

use crate::graph::{Graph, OrderElement};
use crate::health;
use crate::models::{CalculateRequest, Calculation, FunctionCode, Match};

/// Stateless calculation facade.
///
/// Every call builds its graph and traversal state from scratch, so a
/// long-lived instance can serve back-to-back or concurrent requests
/// without sharing any mutable algorithm state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Calculator
    }

    /// Total order over every function mentioned in `matches`, with
    /// mutually contradictory groups collapsed into unordered blocks.
    pub fn final_order(&self, matches: &[Match]) -> Vec<OrderElement<FunctionCode>> {
        let graph = Graph::from_pairs(matches.iter().map(|m| (m.winner, m.loser)));
        debug!(
            matches = matches.len(),
            nodes = graph.node_count(),
            "built comparison graph"
        );

        let order = graph.final_order();
        debug!(elements = order.len(), "materialized hierarchy");
        order
    }

    /// Strongly connected components of the comparison graph. Components
    /// larger than one node are the contradiction blocks the quiz asks the
    /// user to resolve manually.
    pub fn sccs(&self, matches: &[Match]) -> Vec<Vec<FunctionCode>> {
        Graph::from_pairs(matches.iter().map(|m| (m.winner, m.loser))).sccs()
    }

    /// Hierarchy order plus the independent health summary, i.e. the whole
    /// response body for one quiz submission.
    pub fn calculate(&self, request: &CalculateRequest) -> Calculation {
        let order = self.final_order(&request.matches);
        let health = health::health_status(&request.health_scores);
        Calculation { order, health }
    }
}
