//! Shared helpers for behavior lock tests.

#![forbid(unsafe_code)]

use decant_space::contract::StateSpace;
use decant_space::levels::Levels;
use decant_space::problem::ProblemInput;
use decant_space::space::JugSpace;

/// The classic 5/3 instance with goal volume 4.
#[must_use]
pub fn classic_problem() -> ProblemInput {
    ProblemInput::new(5, 3, 4)
}

/// Assert `path` is a legal solution of `problem`: non-empty, starting
/// at `(0, 0)`, every hop exactly one legal move, ending on a goal
/// value.
///
/// # Panics
///
/// Panics (test assertion) when any of those conditions fails.
pub fn assert_legal_path(problem: ProblemInput, path: &[Levels]) {
    let space = JugSpace::new(problem);
    assert!(!path.is_empty(), "path must be non-empty");
    assert_eq!(path[0], Levels::EMPTY, "path must start at the empty state");
    for pair in path.windows(2) {
        assert!(
            space.classify(pair[0], pair[1]).is_some(),
            "illegal hop {:?} -> {:?}",
            pair[0],
            pair[1]
        );
    }
    let last = path[path.len() - 1];
    assert!(
        space.is_goal(&last),
        "path must end on a goal state, ended at {last:?}"
    );
}
