//! Decant Search: uninformed graph search over a pluggable state space.
//!
//! This crate provides the engine layer. It depends only on
//! `decant_space` — it does NOT depend on `decant_harness`.
//!
//! # Key types
//!
//! - [`node::NodeStore`] — arena of immutable search nodes with parent links
//! - [`frontier::Frontier`] — pending nodes plus the visited set that gates
//!   admission, under one pop discipline
//! - [`frontier::Discipline`] — stack (depth-first) or queue (breadth-first)
//!   pop order, chosen at construction time
//! - [`search::search`] — the discipline-agnostic expansion loop
//! - [`search::SearchOutcome`] — termination, node arena, and counters

#![forbid(unsafe_code)]

pub mod frontier;
pub mod node;
pub mod search;
