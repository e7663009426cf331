//! The puzzle state space: start state, goal predicate, move rules.

use crate::contract::StateSpace;
use crate::levels::Levels;
use crate::moves::{MoveKind, Moves};
use crate::problem::ProblemInput;

/// The two-container pouring puzzle as an implicit graph.
///
/// Holds only the immutable problem parameters; a single `JugSpace` may
/// back any number of independent sequential searches.
#[derive(Debug, Clone, Copy)]
pub struct JugSpace {
    first_capacity: u32,
    second_capacity: u32,
    goal_volume: u32,
}

impl JugSpace {
    #[must_use]
    pub const fn new(input: ProblemInput) -> Self {
        Self {
            first_capacity: input.first_capacity,
            second_capacity: input.second_capacity,
            goal_volume: input.goal_volume,
        }
    }

    #[must_use]
    pub const fn first_capacity(&self) -> u32 {
        self.first_capacity
    }

    #[must_use]
    pub const fn second_capacity(&self) -> u32 {
        self.second_capacity
    }

    #[must_use]
    pub const fn goal_volume(&self) -> u32 {
        self.goal_volume
    }

    /// Name the move that transforms `from` into `to`, if any.
    ///
    /// Probes [`MoveKind::ORDER`] and returns the first kind whose
    /// application produces `to`, so adjacent path entries map to exactly
    /// one move label.
    #[must_use]
    pub fn classify(&self, from: Levels, to: Levels) -> Option<MoveKind> {
        MoveKind::ORDER
            .into_iter()
            .find(|kind| kind.apply(from, self.first_capacity, self.second_capacity) == Some(to))
    }
}

impl StateSpace for JugSpace {
    type Value = Levels;
    type Moves = Moves;

    fn start(&self) -> Levels {
        Levels::EMPTY
    }

    fn is_goal(&self, value: &Levels) -> bool {
        value.first == self.goal_volume || value.second == self.goal_volume
    }

    fn moves_from(&self, value: &Levels) -> Moves {
        Moves::new(self.first_capacity, self.second_capacity, *value)
    }
}
