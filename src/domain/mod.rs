//! Core domain layer. No external I/O dependencies.
//!
//! Entities and reference data live here. Dependencies flow inward.

pub mod catalog;
pub mod entities;
pub mod errors;

pub use catalog::{Catalog, DepartmentSeed, MeetingSeed};
pub use entities::{
    DateRange, Department, Goal, HighSchoolInteraction, HighSchoolPartner, InteractionPatch,
    Meeting, MeetingPatch, MeetingType, Member, MemberCategory, MemberPatch, MemberStatus,
    PartnerPatch, Record, Summary, TacticDiscussed,
};
pub use errors::DomainError;
