//! CLI library components for the worktime report converter.

pub mod logging;
pub mod pipeline;
