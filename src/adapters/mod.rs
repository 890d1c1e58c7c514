//! Infrastructure adapters. Implement ports.
//!
//! Embedded seed data, local image files, terminal UI. Map errors to DomainError.

pub mod media;
pub mod seed;
pub mod ui;
