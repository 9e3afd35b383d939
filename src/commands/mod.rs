//! CLI commands

pub mod list;
pub mod review;
pub mod stats;
pub mod tag;
pub mod utils;
