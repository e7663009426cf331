//! Shared helpers for decant benchmark suites.

#![forbid(unsafe_code)]

use decant_space::problem::ProblemInput;

/// Benchmark instances of growing value-space size.
///
/// Capacities are coprime so pours keep generating fresh levels and the
/// search visits most of the value space before exhausting or hitting
/// the goal.
#[must_use]
pub fn instances() -> Vec<(&'static str, ProblemInput)> {
    vec![
        ("5x3", ProblemInput::new(5, 3, 4)),
        ("97x31", ProblemInput::new(97, 31, 5)),
        ("499x181", ProblemInput::new(499, 181, 7)),
    ]
}
