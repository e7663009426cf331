//! Decant Space: the two-container pouring puzzle as a state space.
//!
//! This crate defines WHAT is being searched: container level pairs, the
//! immutable problem input, the six legal moves with their lazy generator,
//! and the [`contract::StateSpace`] trait the engine layer searches
//! against. It has no dependencies, internal or external.
//!
//! # Crate dependency graph
//!
//! ```text
//! decant_space  ←  decant_search  ←  decant_harness
//! (levels, moves)   (frontier, solver)   (runner, report)
//! ```
//!
//! One-way only. No cycles.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod levels;
pub mod moves;
pub mod problem;
pub mod space;
