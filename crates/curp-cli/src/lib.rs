//! CLI library components for the CURP batch toolkit.

pub mod logging;
pub mod pipeline;
