//! Configuration and small helpers used across layers.

pub mod config;
pub mod text;
