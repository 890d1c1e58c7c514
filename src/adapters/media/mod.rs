//! Local media adapters. Implement ImageReader.

pub mod image_reader;

pub use image_reader::FsImageReader;
