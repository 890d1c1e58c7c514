//! Static reference data and department seed shapes.
//!
//! The catalog is configuration, not state: the store only ever holds copies of
//! catalog entries.

use super::entities::{
    Department, Goal, HighSchoolInteraction, HighSchoolPartner, Meeting, MeetingType, Member,
    TacticDiscussed,
};
use chrono::NaiveDate;
use serde::Deserialize;

/// Tactics available for prioritization, the fixed interaction types, and the departments.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub tactics: Vec<Goal>,
    pub interaction_types: Vec<String>,
    pub departments: Vec<Department>,
}

impl Catalog {
    pub fn tactic(&self, id: &str) -> Option<&Goal> {
        self.tactics.iter().find(|t| t.id == id)
    }

    /// Tactics for one year, in catalog order.
    pub fn tactics_for_year(&self, year: i32) -> impl Iterator<Item = &Goal> {
        self.tactics.iter().filter(move |t| t.year == year)
    }

    /// Distinct tactic years, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.tactics.iter().map(|t| t.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    pub fn is_interaction_type(&self, value: &str) -> bool {
        self.interaction_types.iter().any(|t| t == value)
    }

    pub fn department(&self, id: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }
}

/// Raw seed for one department. Goals and attendees are referenced by id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSeed {
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub special_session_members: Vec<Member>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub meetings: Vec<MeetingSeed>,
    #[serde(default)]
    pub high_school_partners: Vec<HighSchoolPartner>,
    #[serde(default)]
    pub high_school_interactions: Vec<HighSchoolInteraction>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingSeed {
    pub id: String,
    #[serde(rename = "type", default)]
    pub meeting_type: MeetingType,
    pub date: NaiveDate,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub attendee_ids: Vec<String>,
    #[serde(default)]
    pub tactics_discussed: Vec<TacticDiscussed>,
}

impl MeetingSeed {
    /// Resolves attendee ids against `members`; unknown ids are dropped.
    pub fn into_meeting(self, members: &[Member]) -> Meeting {
        let attendees = self
            .attendee_ids
            .iter()
            .filter_map(|id| members.iter().find(|m| &m.id == id).cloned())
            .collect();
        Meeting {
            id: self.id,
            meeting_type: self.meeting_type,
            date: self.date,
            duration: self.duration,
            attendees,
            tactics_discussed: self.tactics_discussed,
        }
    }
}
