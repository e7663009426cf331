//! Solve runner: runs both disciplines over one problem input.
//!
//! The runner uses ONLY engine APIs (`search` and the outcome's path
//! materialization); it does not implement any search logic itself.

use decant_search::frontier::Discipline;
use decant_search::search::{search, SearchStats};
use decant_space::levels::Levels;
use decant_space::problem::ProblemInput;
use decant_space::space::JugSpace;

/// One discipline's traversal, reduced to its externally visible parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyOutcome {
    /// Which pop discipline produced this outcome.
    pub discipline: Discipline,
    /// Root-to-goal level pairs, both endpoints inclusive; empty when the
    /// goal is unreachable.
    pub path: Vec<Levels>,
    /// Aggregate counters from the traversal.
    pub stats: SearchStats,
}

impl StrategyOutcome {
    /// `true` when a goal state was found.
    #[must_use]
    pub fn solved(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Both traversals of one problem instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveRun {
    /// The problem that was solved.
    pub problem: ProblemInput,
    /// The stack-disciplined traversal.
    pub depth_first: StrategyOutcome,
    /// The queue-disciplined traversal.
    pub breadth_first: StrategyOutcome,
}

/// Solve `problem` under both disciplines.
///
/// The space is built once and shared: it holds only immutable
/// capacities and the goal volume, so sequential traversals cannot
/// observe each other.
#[must_use]
pub fn run(problem: ProblemInput) -> SolveRun {
    let space = JugSpace::new(problem);
    SolveRun {
        problem,
        depth_first: run_discipline(&space, Discipline::DepthFirst),
        breadth_first: run_discipline(&space, Discipline::BreadthFirst),
    }
}

/// Solve one space under a single discipline.
#[must_use]
pub fn run_discipline(space: &JugSpace, discipline: Discipline) -> StrategyOutcome {
    let outcome = search(space, discipline);
    StrategyOutcome {
        discipline,
        path: outcome.path(),
        stats: outcome.stats,
    }
}
