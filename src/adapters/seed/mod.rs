//! Seed data adapters. Implement SeedSource.

pub mod embedded;

pub use embedded::EmbeddedSeed;
