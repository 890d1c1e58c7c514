//! Domain errors. Returned by use cases and ports.
//!
//! The state store itself never fails; these cover the business rules layered on top
//! of it and the adapters feeding it.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Required field missing or malformed form input.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("You have reached the maximum limit of {max} {what}")]
    LimitReached { what: &'static str, max: usize },

    /// Image read failed or the file is not an image.
    #[error("Invalid image file: {0}")]
    InvalidImage(String),

    #[error("End date {end} must not be before start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Seed data error: {0}")]
    Seed(String),

    #[error("UI error: {0}")]
    Ui(String),

    /// User interrupted a prompt (Ctrl-C). Ends the session cleanly.
    #[error("Cancelled by user")]
    Cancelled,
}
