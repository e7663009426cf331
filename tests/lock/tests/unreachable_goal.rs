//! Behavior locks for unreachable and degenerate goals.

use decant_search::frontier::Discipline;
use decant_search::search::{search, Termination};
use decant_space::levels::Levels;
use decant_space::problem::ProblemInput;
use decant_space::space::JugSpace;

#[test]
fn equal_capacities_cannot_reach_a_larger_goal() {
    let problem = ProblemInput::new(2, 2, 5);
    let space = JugSpace::new(problem);

    for discipline in [Discipline::DepthFirst, Discipline::BreadthFirst] {
        let outcome = search(&space, discipline);
        assert_eq!(outcome.termination, Termination::FrontierExhausted);
        assert!(outcome.path().is_empty());
        // At most (2+1) * (2+1) distinct states may be explored.
        assert!(outcome.stats.distinct_values <= 9);
        assert!(outcome.stats.expansions <= 9);
    }
}

#[test]
fn zero_capacities_fail_immediately() {
    let space = JugSpace::new(ProblemInput::new(0, 0, 3));

    for discipline in [Discipline::DepthFirst, Discipline::BreadthFirst] {
        let outcome = search(&space, discipline);
        assert_eq!(outcome.termination, Termination::FrontierExhausted);
        assert_eq!(outcome.stats.distinct_values, 1, "only (0, 0) is reachable");
        assert_eq!(outcome.stats.expansions, 1);
        assert!(outcome.path().is_empty());
    }
}

#[test]
fn goal_volume_zero_is_satisfied_at_the_root() {
    let space = JugSpace::new(ProblemInput::new(5, 3, 0));

    for discipline in [Discipline::DepthFirst, Discipline::BreadthFirst] {
        let outcome = search(&space, discipline);
        assert!(outcome.is_goal_reached());
        assert_eq!(outcome.path(), vec![Levels::EMPTY]);
        assert_eq!(outcome.stats.expansions, 1);
    }
}

#[test]
fn empty_path_never_conflates_with_success() {
    let space = JugSpace::new(ProblemInput::new(2, 2, 5));
    let outcome = search(&space, Discipline::BreadthFirst);
    // The marker and the empty sequence are two layers of one contract.
    assert!(!outcome.is_goal_reached());
    assert_eq!(outcome.goal(), None);
    assert!(outcome.path().is_empty());
}
