//! Decant Harness: driver-facing orchestration for the search engine.
//!
//! The harness turns a problem input into rendered text and a report
//! artifact (canonical JSON plus content digest). It does NOT implement
//! search logic — it delegates to `decant_search` and packages the
//! result.

#![forbid(unsafe_code)]

pub mod render;
pub mod report;
pub mod report_dir;
pub mod runner;
