//! Library components of the trustflow CLI.

pub mod logging;
pub mod pipeline;
