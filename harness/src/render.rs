//! Human-readable rendering of a solve run.
//!
//! Pure functions from run data to `String`; printing is the caller's
//! business.

use decant_space::levels::Levels;

use crate::runner::SolveRun;

/// Notice emitted in place of a path when the goal is unreachable.
pub const NOT_FOUND_NOTICE: &str = "Solution not found!";

/// Render one path as `[a, b] -> [c, d] -> ...`, or the not-found notice
/// for an empty path.
#[must_use]
pub fn render_path(path: &[Levels]) -> String {
    if path.is_empty() {
        return NOT_FOUND_NOTICE.to_string();
    }
    path.iter()
        .map(|levels| format!("[{}, {}]", levels.first, levels.second))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Render the full run: problem header plus one section per strategy.
#[must_use]
pub fn render_run(run: &SolveRun) -> String {
    format!(
        "Water Jug Puzzle\n\
         Goal volume: {}\n\
         Jug capacities {} and {}\n\
         \n\
         Depth first search result:\n\
         {}\n\
         \n\
         Breadth first search result:\n\
         {}\n",
        run.problem.goal_volume,
        run.problem.first_capacity,
        run.problem.second_capacity,
        render_path(&run.depth_first.path),
        render_path(&run.breadth_first.path),
    )
}
