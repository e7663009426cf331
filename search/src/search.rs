//! Search entry point and expansion loop.

use decant_space::contract::StateSpace;

use crate::frontier::{Discipline, Frontier};
use crate::node::{NodeId, NodeStore};

/// Why a search stopped.
///
/// The loop moves through at most three phases: exploring while the
/// frontier is non-empty, then either a goal pop or exhaustion. Only the
/// two terminal phases are representable; "exploring" never escapes
/// [`search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A popped node satisfied the goal predicate.
    GoalReached {
        /// Arena index of the goal node.
        node: NodeId,
    },
    /// The frontier drained without any pop satisfying the goal.
    FrontierExhausted,
}

/// Aggregate counters from one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of frontier pops, the goal pop included.
    pub expansions: u64,
    /// Successors rejected because their value was already visited.
    pub duplicates_suppressed: u64,
    /// High-water mark of pending frontier entries.
    pub frontier_high_water: u64,
    /// Distinct state values admitted over the whole search.
    pub distinct_values: u64,
}

/// Result of one search execution.
///
/// Always contains the complete node arena regardless of how the search
/// terminated; inspect [`SearchOutcome::termination`] to determine the
/// outcome.
#[derive(Debug, Clone)]
pub struct SearchOutcome<V> {
    /// Why the loop stopped.
    pub termination: Termination,
    /// Every node created during the search, root first.
    pub nodes: NodeStore<V>,
    /// Aggregate counters.
    pub stats: SearchStats,
}

impl<V> SearchOutcome<V> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination, Termination::GoalReached { .. })
    }

    /// The goal node's arena index, if one was found.
    #[must_use]
    pub fn goal(&self) -> Option<NodeId> {
        match self.termination {
            Termination::GoalReached { node } => Some(node),
            Termination::FrontierExhausted => None,
        }
    }

    /// Materialize the root-to-goal path of state values.
    ///
    /// Empty exactly when no goal was reached; a found goal always
    /// yields at least the root element. The empty case is the graceful
    /// half of the not-found contract — [`SearchOutcome::termination`]
    /// stays the distinguishable marker.
    #[must_use]
    pub fn path(&self) -> Vec<V>
    where
        V: Clone,
    {
        match self.goal() {
            Some(node) => reconstruct_path(&self.nodes, node),
            None => Vec::new(),
        }
    }
}

/// Drain `space` from its start vertex under the given discipline.
///
/// The loop is discipline-agnostic: depth-first and breadth-first runs
/// share the admission logic and the successor order, and differ only in
/// which end of the frontier [`Frontier::pop`] takes. Termination is
/// unconditional for finite value spaces because the visited set only
/// grows and admission is gated on it.
///
/// Each successor sequence is consumed lazily in the space's fixed move
/// order; values already visited are suppressed without creating a node.
pub fn search<S: StateSpace>(space: &S, discipline: Discipline) -> SearchOutcome<S::Value> {
    let mut nodes = NodeStore::new();
    let mut frontier = Frontier::new(discipline);
    let mut stats = SearchStats::default();

    let start = space.start();
    let root = nodes.insert_root(start.clone());
    frontier.push(start, root);

    let termination = loop {
        let Some(current) = frontier.pop() else {
            break Termination::FrontierExhausted;
        };
        stats.expansions += 1;

        if space.is_goal(nodes.get(current).value()) {
            break Termination::GoalReached { node: current };
        }

        let value = nodes.get(current).value().clone();
        for successor in space.moves_from(&value) {
            if frontier.is_visited(&successor) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            let child = nodes.insert_child(current, successor.clone());
            frontier.push(successor, child);
        }
    };

    stats.frontier_high_water = frontier.high_water();
    stats.distinct_values = frontier.visited_count() as u64;

    SearchOutcome {
        termination,
        nodes,
        stats,
    }
}

/// Reconstruct the root-to-`goal` path of state values.
///
/// Follows parent links from `goal` back to the root, collecting each
/// node's value, then reverses into root-to-goal order.
#[must_use]
pub fn reconstruct_path<V: Clone>(nodes: &NodeStore<V>, goal: NodeId) -> Vec<V> {
    let mut path = Vec::new();
    let mut cursor = Some(goal);

    while let Some(id) = cursor {
        let node = nodes.get(id);
        path.push(node.value().clone());
        cursor = node.parent();
    }

    path.reverse();
    path
}
