//! advisory-board: Program advisory board dashboard with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod state;
pub mod usecases;
