//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: the dashboard front end drives use cases until the user quits.
#[async_trait::async_trait(?Send)]
pub trait InputPort {
    async fn run(&self) -> Result<(), DomainError>;
}
