//! Application use cases. Business rules layered over the state store.

pub mod data_loader;
pub mod date_filter;
pub mod goal_service;
pub mod meeting_service;
pub mod member_service;
pub mod outreach_service;

pub use data_loader::{DataLoader, LoadStats};
pub use date_filter::{DateFilterService, DateRangeTarget};
pub use goal_service::GoalService;
pub use meeting_service::{MeetingForm, MeetingGroups, MeetingService, TacticSelection};
pub use member_service::{MemberForm, MemberPool, MemberService};
pub use outreach_service::{InteractionForm, OutreachService, PartnerForm};

/// Fresh record id for entities created from the dashboard.
pub(crate) fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
