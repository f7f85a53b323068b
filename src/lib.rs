//! Community promise scoring.
//!
//! Turns a politician's promises and the community's status votes into an
//! overall score, completion rate, consensus strength and letter grade.
//! [`scoring`] is the pure engine; [`ingest`] validates exported records on
//! the way in and [`output`] renders results on the way out.

pub mod config;
pub mod ingest;
pub mod logging;
pub mod output;
pub mod ranking;
pub mod scoring;
