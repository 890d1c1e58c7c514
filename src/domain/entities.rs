//! Domain entities. Pure data structures for the core business.
//!
//! No UI/IO types here. Field names serialize in camelCase so seed data keeps the
//! dashboard's JSON shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record owned by the state store. Identified by a string id, merged with a partial patch.
pub trait Record: Clone {
    type Patch;

    fn id(&self) -> &str;

    /// Shallow merge: every field present in `patch` overwrites the current value.
    fn merge(&mut self, patch: Self::Patch);
}

/// Board member or special-session member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub organization: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub category: MemberCategory,
    pub status: MemberStatus,
    #[serde(default)]
    pub expertise: String,
    /// Data URL of the uploaded profile picture.
    #[serde(default)]
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemberCategory {
    Employer,
    NonProfit,
    PublicAgency,
    Other,
}

impl MemberCategory {
    pub const ALL: [MemberCategory; 4] = [
        MemberCategory::Employer,
        MemberCategory::NonProfit,
        MemberCategory::PublicAgency,
        MemberCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Employer => "employer",
            Self::NonProfit => "non-profit",
            Self::PublicAgency => "public-agency",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for MemberCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemberStatus {
    Core,
    NonCore,
    SpecialSession,
}

impl MemberStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::NonCore => "non-core",
            Self::SpecialSession => "special-session",
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Partial update for a [`Member`]. `profile_image: Some(None)` clears the picture.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub organization: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub category: Option<MemberCategory>,
    pub status: Option<MemberStatus>,
    pub expertise: Option<String>,
    pub profile_image: Option<Option<String>>,
}

impl Record for Member {
    type Patch = MemberPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn merge(&mut self, patch: MemberPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.organization {
            self.organization = v;
        }
        if let Some(v) = patch.title {
            self.title = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.phone {
            self.phone = v;
        }
        if let Some(v) = patch.category {
            self.category = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.expertise {
            self.expertise = v;
        }
        if let Some(v) = patch.profile_image {
            self.profile_image = v;
        }
    }
}

/// Priority tactic. The store only holds the prioritized subset of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub year: i32,
    /// Set for tactics carried over from a prior year.
    #[serde(default)]
    pub outdated: bool,
}

/// Goals are catalog copies and are never edited in place.
impl Record for Goal {
    type Patch = std::convert::Infallible;

    fn id(&self) -> &str {
        &self.id
    }

    fn merge(&mut self, patch: Self::Patch) {
        match patch {}
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeetingType {
    #[default]
    AdvisoryBoard,
    SpecialSession,
}

impl MeetingType {
    pub fn label(self) -> &'static str {
        match self {
            Self::AdvisoryBoard => "Advisory Board Meeting",
            Self::SpecialSession => "Special Session",
        }
    }
}

/// Tactic discussed in a meeting with the board's recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TacticDiscussed {
    #[serde(rename = "id")]
    pub goal_id: String,
    pub name: String,
    #[serde(default)]
    pub recommendations: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: String,
    #[serde(rename = "type", default)]
    pub meeting_type: MeetingType,
    pub date: NaiveDate,
    /// Hours. Missing durations count as zero.
    #[serde(default)]
    pub duration: f64,
    /// Member snapshots taken when the meeting was recorded.
    #[serde(default)]
    pub attendees: Vec<Member>,
    #[serde(default)]
    pub tactics_discussed: Vec<TacticDiscussed>,
}

impl Meeting {
    /// Attendee count times duration.
    pub fn volunteer_hours(&self) -> f64 {
        self.attendees.len() as f64 * self.duration
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeetingPatch {
    pub meeting_type: Option<MeetingType>,
    pub date: Option<NaiveDate>,
    pub duration: Option<f64>,
    pub attendees: Option<Vec<Member>>,
    pub tactics_discussed: Option<Vec<TacticDiscussed>>,
}

impl Record for Meeting {
    type Patch = MeetingPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn merge(&mut self, patch: MeetingPatch) {
        if let Some(v) = patch.meeting_type {
            self.meeting_type = v;
        }
        if let Some(v) = patch.date {
            self.date = v;
        }
        if let Some(v) = patch.duration {
            self.duration = v;
        }
        if let Some(v) = patch.attendees {
            self.attendees = v;
        }
        if let Some(v) = patch.tactics_discussed {
            self.tactics_discussed = v;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighSchoolPartner {
    pub id: String,
    pub name: String,
    pub school: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartnerPatch {
    pub name: Option<String>,
    pub school: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
}

impl Record for HighSchoolPartner {
    type Patch = PartnerPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn merge(&mut self, patch: PartnerPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.school {
            self.school = v;
        }
        if let Some(v) = patch.title {
            self.title = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.phone {
            self.phone = v;
        }
        if let Some(v) = patch.role {
            self.role = v;
        }
    }
}

/// Outreach event with high-school partners. Partners are referenced by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighSchoolInteraction {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub partners: Vec<String>,
    #[serde(default)]
    pub other_participants: String,
    pub types: Vec<String>,
    pub description: String,
    /// File names only; no content is retained.
    #[serde(default)]
    pub artifacts: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionPatch {
    pub date: Option<NaiveDate>,
    pub partners: Option<Vec<String>>,
    pub other_participants: Option<String>,
    pub types: Option<Vec<String>>,
    pub description: Option<String>,
    pub artifacts: Option<Vec<String>>,
}

impl Record for HighSchoolInteraction {
    type Patch = InteractionPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn merge(&mut self, patch: InteractionPatch) {
        if let Some(v) = patch.date {
            self.date = v;
        }
        if let Some(v) = patch.partners {
            self.partners = v;
        }
        if let Some(v) = patch.other_participants {
            self.other_participants = v;
        }
        if let Some(v) = patch.types {
            self.types = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.artifacts {
            self.artifacts = v;
        }
    }
}

/// Inclusive date window. `None` leaves that side unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateRange {
    pub const UNBOUNDED: DateRange = DateRange {
        start_date: None,
        end_date: None,
    };

    pub fn new(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date.is_none_or(|start| date >= start)
            && self.end_date.is_none_or(|end| date <= end)
    }
}

/// Aggregate counts shown on the summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub member_count: usize,
    pub special_session_member_count: usize,
    pub goal_count: usize,
    pub meeting_count: usize,
    pub total_volunteer_hours: f64,
}

/// Program whose advisory board is shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_member_merge_only_touches_patched_fields() {
        let mut member = Member {
            id: "1".into(),
            name: "Sarah Johnson".into(),
            organization: "Premier Auto Group".into(),
            title: "Service Director".into(),
            email: "sjohnson@premierauto.com".into(),
            phone: "(555) 123-4567".into(),
            category: MemberCategory::Employer,
            status: MemberStatus::Core,
            expertise: "EV maintenance".into(),
            profile_image: Some("data:image/png;base64,AA==".into()),
        };
        member.merge(MemberPatch {
            title: Some("General Manager".into()),
            profile_image: Some(None),
            ..Default::default()
        });

        assert_eq!(member.title, "General Manager");
        assert_eq!(member.profile_image, None);
        assert_eq!(member.name, "Sarah Johnson");
        assert_eq!(member.status, MemberStatus::Core);
    }

    #[test]
    fn test_date_range_bounds_are_inclusive() {
        let range = DateRange::new(Some(date("2025-02-01")), Some(date("2025-07-01")));
        assert!(range.contains(date("2025-02-01")));
        assert!(range.contains(date("2025-07-01")));
        assert!(!range.contains(date("2025-01-31")));
        assert!(!range.contains(date("2025-07-02")));
    }

    #[test]
    fn test_date_range_one_sided() {
        let until = DateRange::new(None, Some(date("2025-03-01")));
        assert!(until.contains(date("1999-01-01")));
        assert!(until.contains(date("2025-03-01")));
        assert!(!until.contains(date("2025-03-02")));

        let since = DateRange::new(Some(date("2025-03-01")), None);
        assert!(!since.contains(date("2025-02-28")));
        assert!(since.contains(date("2030-01-01")));
        assert!(DateRange::UNBOUNDED.is_unbounded());
    }

    #[test]
    fn test_meeting_deserializes_seed_shape() {
        let json = r#"{
            "id": "1",
            "date": "2025-09-15",
            "tacticsDiscussed": [
                {"id": "ev-certificate-2025", "name": "EV certificate", "recommendations": "Hands-on"}
            ]
        }"#;
        let meeting: Meeting = serde_json::from_str(json).unwrap();
        assert_eq!(meeting.meeting_type, MeetingType::AdvisoryBoard);
        assert_eq!(meeting.duration, 0.0);
        assert_eq!(meeting.volunteer_hours(), 0.0);
        assert_eq!(meeting.tactics_discussed[0].goal_id, "ev-certificate-2025");
    }

    #[test]
    fn test_member_category_serializes_kebab_case() {
        let json = serde_json::to_string(&MemberCategory::PublicAgency).unwrap();
        assert_eq!(json, "\"public-agency\"");
        assert_eq!(MemberStatus::SpecialSession.to_string(), "special-session");
    }
}
