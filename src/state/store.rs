//! Single source of truth for the dashboard.
//!
//! One instance per application, shared as `Rc<StateStore>` with the components that
//! read or mutate it. Every getter returns an independent snapshot; every mutator
//! finishes its edit, releases its borrow, then notifies the topic's subscribers.
//! The store never validates business rules and never fails.

use super::collection::Collection;
use super::observer::{Observers, SubscriptionId, Topic};
use crate::domain::{
    DateRange, Goal, HighSchoolInteraction, HighSchoolPartner, InteractionPatch, Meeting,
    MeetingPatch, Member, MemberPatch, PartnerPatch, Summary,
};
use std::cell::{Cell, RefCell};

/// Tactic year selected when nothing else is configured.
pub const DEFAULT_TACTIC_YEAR: i32 = 2025;

#[derive(Debug)]
pub struct StateStore {
    observers: Observers,
    board_members: RefCell<Collection<Member>>,
    special_session_members: RefCell<Collection<Member>>,
    priority_goals: RefCell<Collection<Goal>>,
    meetings: RefCell<Collection<Meeting>>,
    high_school_partners: RefCell<Collection<HighSchoolPartner>>,
    high_school_interactions: RefCell<Collection<HighSchoolInteraction>>,
    selected_tactic_year: Cell<i32>,
    meetings_date_range: Cell<DateRange>,
    volunteer_hours_date_range: Cell<DateRange>,
    current_department: RefCell<Option<String>>,
    // Single-slot handoffs between "start edit"/"pick image" and the form submit. No topic.
    editing_meeting_id: RefCell<Option<String>>,
    current_profile_image: RefCell<Option<String>>,
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new(DEFAULT_TACTIC_YEAR)
    }
}

impl StateStore {
    pub fn new(selected_tactic_year: i32) -> Self {
        Self {
            observers: Observers::new(),
            board_members: RefCell::default(),
            special_session_members: RefCell::default(),
            priority_goals: RefCell::default(),
            meetings: RefCell::default(),
            high_school_partners: RefCell::default(),
            high_school_interactions: RefCell::default(),
            selected_tactic_year: Cell::new(selected_tactic_year),
            meetings_date_range: Cell::new(DateRange::UNBOUNDED),
            volunteer_hours_date_range: Cell::new(DateRange::UNBOUNDED),
            current_department: RefCell::new(None),
            editing_meeting_id: RefCell::new(None),
            current_profile_image: RefCell::new(None),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Observers
    // ─────────────────────────────────────────────────────────────────────────

    pub fn subscribe(&self, topic: Topic, callback: impl Fn() + 'static) -> SubscriptionId {
        self.observers.subscribe(topic, callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn notify(&self, topic: Topic) {
        self.observers.notify(topic);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Board members
    // ─────────────────────────────────────────────────────────────────────────

    pub fn board_members(&self) -> Vec<Member> {
        self.board_members.borrow().snapshot()
    }

    pub fn set_board_members(&self, members: Vec<Member>) {
        self.board_members.borrow_mut().replace(members);
        self.notify(Topic::BoardMembers);
    }

    pub fn add_member(&self, member: Member) {
        self.board_members.borrow_mut().push(member);
        self.notify(Topic::BoardMembers);
    }

    pub fn update_member(&self, id: &str, patch: MemberPatch) {
        let updated = self.board_members.borrow_mut().update(id, patch);
        if updated {
            self.notify(Topic::BoardMembers);
        }
    }

    pub fn delete_member(&self, id: &str) {
        self.board_members.borrow_mut().remove(id);
        self.notify(Topic::BoardMembers);
    }

    pub fn member_by_id(&self, id: &str) -> Option<Member> {
        self.board_members.borrow().find(id).cloned()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Special-session members
    // ─────────────────────────────────────────────────────────────────────────

    pub fn special_session_members(&self) -> Vec<Member> {
        self.special_session_members.borrow().snapshot()
    }

    pub fn set_special_session_members(&self, members: Vec<Member>) {
        self.special_session_members.borrow_mut().replace(members);
        self.notify(Topic::SpecialSessionMembers);
    }

    pub fn add_special_session_member(&self, member: Member) {
        self.special_session_members.borrow_mut().push(member);
        self.notify(Topic::SpecialSessionMembers);
    }

    pub fn update_special_session_member(&self, id: &str, patch: MemberPatch) {
        let updated = self.special_session_members.borrow_mut().update(id, patch);
        if updated {
            self.notify(Topic::SpecialSessionMembers);
        }
    }

    pub fn delete_special_session_member(&self, id: &str) {
        self.special_session_members.borrow_mut().remove(id);
        self.notify(Topic::SpecialSessionMembers);
    }

    pub fn special_session_member_by_id(&self, id: &str) -> Option<Member> {
        self.special_session_members.borrow().find(id).cloned()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Priority goals
    // ─────────────────────────────────────────────────────────────────────────

    pub fn priority_goals(&self) -> Vec<Goal> {
        self.priority_goals.borrow().snapshot()
    }

    pub fn set_priority_goals(&self, goals: Vec<Goal>) {
        self.priority_goals.borrow_mut().replace(goals);
        self.notify(Topic::PriorityGoals);
    }

    /// Inserts unless a goal with the same id is already prioritized.
    /// The maximum-count rule belongs to the caller.
    pub fn add_goal(&self, goal: Goal) {
        let inserted = {
            let mut goals = self.priority_goals.borrow_mut();
            if goals.contains(&goal.id) {
                false
            } else {
                goals.push(goal);
                true
            }
        };
        if inserted {
            self.notify(Topic::PriorityGoals);
        }
    }

    pub fn remove_goal(&self, id: &str) {
        self.priority_goals.borrow_mut().remove(id);
        self.notify(Topic::PriorityGoals);
    }

    pub fn has_goal(&self, id: &str) -> bool {
        self.priority_goals.borrow().contains(id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Meetings (kept sorted by date, newest first)
    // ─────────────────────────────────────────────────────────────────────────

    pub fn meetings(&self) -> Vec<Meeting> {
        self.meetings.borrow().snapshot()
    }

    pub fn set_meetings(&self, meetings: Vec<Meeting>) {
        {
            let mut stored = self.meetings.borrow_mut();
            stored.replace(meetings);
            sort_newest_first(&mut stored);
        }
        self.notify(Topic::Meetings);
    }

    pub fn add_meeting(&self, meeting: Meeting) {
        {
            let mut stored = self.meetings.borrow_mut();
            stored.push(meeting);
            sort_newest_first(&mut stored);
        }
        self.notify(Topic::Meetings);
    }

    pub fn update_meeting(&self, id: &str, patch: MeetingPatch) {
        let updated = {
            let mut stored = self.meetings.borrow_mut();
            let updated = stored.update(id, patch);
            if updated {
                sort_newest_first(&mut stored);
            }
            updated
        };
        if updated {
            self.notify(Topic::Meetings);
        }
    }

    pub fn delete_meeting(&self, id: &str) {
        self.meetings.borrow_mut().remove(id);
        self.notify(Topic::Meetings);
    }

    pub fn meeting_by_id(&self, id: &str) -> Option<Meeting> {
        self.meetings.borrow().find(id).cloned()
    }

    /// Meetings inside the meetings-view date range, in stored order.
    pub fn filtered_meetings(&self) -> Vec<Meeting> {
        let range = self.meetings_date_range.get();
        self.meetings
            .borrow()
            .iter()
            .filter(|m| range.contains(m.date))
            .cloned()
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // High-school partners
    // ─────────────────────────────────────────────────────────────────────────

    pub fn high_school_partners(&self) -> Vec<HighSchoolPartner> {
        self.high_school_partners.borrow().snapshot()
    }

    pub fn set_high_school_partners(&self, partners: Vec<HighSchoolPartner>) {
        self.high_school_partners.borrow_mut().replace(partners);
        self.notify(Topic::HighSchoolPartners);
    }

    pub fn add_high_school_partner(&self, partner: HighSchoolPartner) {
        self.high_school_partners.borrow_mut().push(partner);
        self.notify(Topic::HighSchoolPartners);
    }

    pub fn update_high_school_partner(&self, id: &str, patch: PartnerPatch) {
        let updated = self.high_school_partners.borrow_mut().update(id, patch);
        if updated {
            self.notify(Topic::HighSchoolPartners);
        }
    }

    pub fn delete_high_school_partner(&self, id: &str) {
        self.high_school_partners.borrow_mut().remove(id);
        self.notify(Topic::HighSchoolPartners);
    }

    pub fn high_school_partner_by_id(&self, id: &str) -> Option<HighSchoolPartner> {
        self.high_school_partners.borrow().find(id).cloned()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // High-school interactions
    // ─────────────────────────────────────────────────────────────────────────

    pub fn high_school_interactions(&self) -> Vec<HighSchoolInteraction> {
        self.high_school_interactions.borrow().snapshot()
    }

    pub fn set_high_school_interactions(&self, interactions: Vec<HighSchoolInteraction>) {
        self.high_school_interactions
            .borrow_mut()
            .replace(interactions);
        self.notify(Topic::HighSchoolInteractions);
    }

    pub fn add_high_school_interaction(&self, interaction: HighSchoolInteraction) {
        self.high_school_interactions.borrow_mut().push(interaction);
        self.notify(Topic::HighSchoolInteractions);
    }

    pub fn update_high_school_interaction(&self, id: &str, patch: InteractionPatch) {
        let updated = self.high_school_interactions.borrow_mut().update(id, patch);
        if updated {
            self.notify(Topic::HighSchoolInteractions);
        }
    }

    pub fn delete_high_school_interaction(&self, id: &str) {
        self.high_school_interactions.borrow_mut().remove(id);
        self.notify(Topic::HighSchoolInteractions);
    }

    pub fn high_school_interaction_by_id(&self, id: &str) -> Option<HighSchoolInteraction> {
        self.high_school_interactions.borrow().find(id).cloned()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scalar UI state
    // ─────────────────────────────────────────────────────────────────────────

    pub fn selected_tactic_year(&self) -> i32 {
        self.selected_tactic_year.get()
    }

    pub fn set_selected_tactic_year(&self, year: i32) {
        self.selected_tactic_year.set(year);
        self.notify(Topic::SelectedTacticYear);
    }

    pub fn meetings_date_range(&self) -> DateRange {
        self.meetings_date_range.get()
    }

    /// The caller rejects end-before-start ranges; the store takes what it is given.
    pub fn set_meetings_date_range(&self, range: DateRange) {
        self.meetings_date_range.set(range);
        self.notify(Topic::MeetingsDateRange);
    }

    pub fn volunteer_hours_date_range(&self) -> DateRange {
        self.volunteer_hours_date_range.get()
    }

    pub fn set_volunteer_hours_date_range(&self, range: DateRange) {
        self.volunteer_hours_date_range.set(range);
        self.notify(Topic::VolunteerHoursDateRange);
    }

    pub fn current_department(&self) -> Option<String> {
        self.current_department.borrow().clone()
    }

    pub fn set_current_department(&self, department_id: impl Into<String>) {
        *self.current_department.borrow_mut() = Some(department_id.into());
        self.notify(Topic::CurrentDepartment);
    }

    pub fn editing_meeting_id(&self) -> Option<String> {
        self.editing_meeting_id.borrow().clone()
    }

    pub fn set_editing_meeting_id(&self, id: Option<String>) {
        *self.editing_meeting_id.borrow_mut() = id;
    }

    /// Reads and clears the pending edit id.
    pub fn take_editing_meeting_id(&self) -> Option<String> {
        self.editing_meeting_id.borrow_mut().take()
    }

    pub fn current_profile_image(&self) -> Option<String> {
        self.current_profile_image.borrow().clone()
    }

    pub fn set_current_profile_image(&self, data_url: Option<String>) {
        *self.current_profile_image.borrow_mut() = data_url;
    }

    /// Reads and clears the pending profile image.
    pub fn take_current_profile_image(&self) -> Option<String> {
        self.current_profile_image.borrow_mut().take()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Aggregation
    // ─────────────────────────────────────────────────────────────────────────

    /// Counts over full collections. Volunteer hours only over meetings inside the
    /// volunteer-hours range, independent of the meetings-view range.
    pub fn summary(&self) -> Summary {
        let range = self.volunteer_hours_date_range.get();
        let meetings = self.meetings.borrow();
        let total_volunteer_hours = meetings
            .iter()
            .filter(|m| range.contains(m.date))
            .map(Meeting::volunteer_hours)
            .sum();
        Summary {
            member_count: self.board_members.borrow().len(),
            special_session_member_count: self.special_session_members.borrow().len(),
            goal_count: self.priority_goals.borrow().len(),
            meeting_count: meetings.len(),
            total_volunteer_hours,
        }
    }
}

fn sort_newest_first(meetings: &mut Collection<Meeting>) {
    meetings.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MeetingType, MemberCategory, MemberStatus, TacticDiscussed};
    use chrono::NaiveDate;
    use std::rc::Rc;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn member(id: &str) -> Member {
        Member {
            id: id.into(),
            name: format!("Member {id}"),
            organization: "Premier Auto Group".into(),
            title: "Service Director".into(),
            email: format!("{id}@example.org"),
            phone: "(555) 123-4567".into(),
            category: MemberCategory::Employer,
            status: MemberStatus::Core,
            expertise: "EV maintenance".into(),
            profile_image: None,
        }
    }

    fn meeting(id: &str, on: &str, attendees: usize, duration: f64) -> Meeting {
        Meeting {
            id: id.into(),
            meeting_type: MeetingType::AdvisoryBoard,
            date: date(on),
            duration,
            attendees: (0..attendees).map(|n| member(&n.to_string())).collect(),
            tactics_discussed: vec![TacticDiscussed {
                goal_id: "ev-training-2025".into(),
                name: "Develop standalone EV training".into(),
                recommendations: String::new(),
            }],
        }
    }

    fn goal(id: &str) -> Goal {
        Goal {
            id: id.into(),
            name: format!("Tactic {id}"),
            year: 2025,
            outdated: false,
        }
    }

    fn counter(store: &StateStore, topic: Topic) -> Rc<Cell<usize>> {
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        store.subscribe(topic, move || h.set(h.get() + 1));
        hits
    }

    fn dates(meetings: &[Meeting]) -> Vec<String> {
        meetings.iter().map(|m| m.date.to_string()).collect()
    }

    #[test]
    fn test_member_crud_notifies_once_per_call() {
        let store = StateStore::default();
        let hits = counter(&store, Topic::BoardMembers);

        store.add_member(member("1"));
        store.add_member(member("2"));
        store.update_member(
            "1",
            MemberPatch {
                name: Some("Sarah Johnson".into()),
                ..Default::default()
            },
        );
        store.delete_member("2");

        assert_eq!(hits.get(), 4);
        let members = store.board_members();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id, "1");
        assert_eq!(members[0].name, "Sarah Johnson");
        assert_eq!(members[0].organization, "Premier Auto Group");
    }

    #[test]
    fn test_unknown_ids_leave_collections_unchanged() {
        let store = StateStore::default();
        store.add_member(member("1"));
        let hits = counter(&store, Topic::BoardMembers);

        store.update_member("nope", MemberPatch::default());
        assert_eq!(hits.get(), 0);

        store.delete_member("nope");
        assert_eq!(hits.get(), 1);
        assert_eq!(store.board_members().len(), 1);
    }

    #[test]
    fn test_delete_of_unknown_id_notifies_once_per_call() {
        let store = StateStore::default();
        let goals = counter(&store, Topic::PriorityGoals);
        let meetings = counter(&store, Topic::Meetings);
        let partners = counter(&store, Topic::HighSchoolPartners);
        let interactions = counter(&store, Topic::HighSchoolInteractions);
        let special = counter(&store, Topic::SpecialSessionMembers);

        store.remove_goal("missing");
        store.delete_meeting("missing");
        store.delete_high_school_partner("missing");
        store.delete_high_school_interaction("missing");
        store.delete_special_session_member("missing");

        for hits in [goals, meetings, partners, interactions, special] {
            assert_eq!(hits.get(), 1);
        }
    }

    #[test]
    fn test_getters_return_independent_snapshots() {
        let store = StateStore::default();
        store.add_member(member("1"));
        let mut snapshot = store.board_members();
        snapshot.clear();
        snapshot.push(member("intruder"));
        let members = store.board_members();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id, "1");
    }

    #[test]
    fn test_meetings_sorted_newest_first_on_insert() {
        let store = StateStore::default();
        store.add_meeting(meeting("a", "2025-01-01", 1, 1.0));
        store.add_meeting(meeting("b", "2025-06-01", 1, 1.0));
        store.add_meeting(meeting("c", "2025-03-01", 1, 1.0));
        assert_eq!(
            dates(&store.meetings()),
            vec!["2025-06-01", "2025-03-01", "2025-01-01"]
        );
    }

    #[test]
    fn test_meeting_sort_keeps_insertion_order_for_equal_dates() {
        let store = StateStore::default();
        store.add_meeting(meeting("first", "2025-03-01", 1, 1.0));
        store.add_meeting(meeting("second", "2025-03-01", 1, 1.0));
        store.add_meeting(meeting("newer", "2025-04-01", 1, 1.0));
        let ids: Vec<String> = store.meetings().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["newer", "first", "second"]);
    }

    #[test]
    fn test_update_meeting_date_resorts() {
        let store = StateStore::default();
        store.add_meeting(meeting("a", "2025-01-01", 1, 1.0));
        store.add_meeting(meeting("b", "2025-06-01", 1, 1.0));
        let hits = counter(&store, Topic::Meetings);
        store.update_meeting(
            "a",
            MeetingPatch {
                date: Some(date("2025-12-01")),
                ..Default::default()
            },
        );
        assert_eq!(hits.get(), 1);
        let ids: Vec<String> = store.meetings().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_filtered_meetings_inclusive_window() {
        let store = StateStore::default();
        for (id, on) in [
            ("1", "2025-01-01"),
            ("2", "2025-03-01"),
            ("3", "2025-06-01"),
            ("4", "2025-08-01"),
        ] {
            store.add_meeting(meeting(id, on, 1, 1.0));
        }
        store.set_meetings_date_range(DateRange::new(
            Some(date("2025-02-01")),
            Some(date("2025-07-01")),
        ));
        assert_eq!(
            dates(&store.filtered_meetings()),
            vec!["2025-06-01", "2025-03-01"]
        );
    }

    #[test]
    fn test_filtered_meetings_end_only_is_inclusive() {
        let store = StateStore::default();
        store.add_meeting(meeting("1", "2025-01-01", 1, 1.0));
        store.add_meeting(meeting("2", "2025-03-01", 1, 1.0));
        store.add_meeting(meeting("3", "2025-06-01", 1, 1.0));
        store.set_meetings_date_range(DateRange::new(None, Some(date("2025-03-01"))));
        assert_eq!(
            dates(&store.filtered_meetings()),
            vec!["2025-03-01", "2025-01-01"]
        );
    }

    #[test]
    fn test_unbounded_filter_returns_stored_order() {
        let store = StateStore::default();
        store.add_meeting(meeting("1", "2025-01-01", 1, 1.0));
        store.add_meeting(meeting("2", "2025-03-01", 1, 1.0));
        assert_eq!(store.filtered_meetings(), store.meetings());
    }

    #[test]
    fn test_summary_volunteer_hours() {
        let store = StateStore::default();
        store.add_meeting(meeting("1", "2025-01-01", 3, 2.5));
        store.add_meeting(meeting("2", "2025-02-01", 2, 1.5));
        store.add_meeting(meeting("3", "2025-03-01", 0, 4.0));
        let summary = store.summary();
        assert_eq!(summary.total_volunteer_hours, 10.5);
        assert_eq!(summary.meeting_count, 3);
    }

    #[test]
    fn test_volunteer_range_is_independent_of_meetings_range() {
        let store = StateStore::default();
        store.add_meeting(meeting("1", "2025-01-01", 3, 2.5));
        store.add_meeting(meeting("2", "2025-06-01", 2, 1.5));

        store.set_meetings_date_range(DateRange::new(Some(date("2025-05-01")), None));
        assert_eq!(store.summary().total_volunteer_hours, 10.5);

        store.set_volunteer_hours_date_range(DateRange::new(None, Some(date("2025-02-01"))));
        assert_eq!(store.summary().total_volunteer_hours, 7.5);
        assert_eq!(store.filtered_meetings().len(), 1);
    }

    #[test]
    fn test_summary_counts() {
        let store = StateStore::default();
        store.set_board_members(vec![member("1"), member("2")]);
        store.add_special_session_member(member("ss-1"));
        store.add_goal(goal("g1"));
        let summary = store.summary();
        assert_eq!(summary.member_count, 2);
        assert_eq!(summary.special_session_member_count, 1);
        assert_eq!(summary.goal_count, 1);
        assert_eq!(summary.meeting_count, 0);
        assert_eq!(summary.total_volunteer_hours, 0.0);
    }

    #[test]
    fn test_add_goal_is_idempotent() {
        let store = StateStore::default();
        let hits = counter(&store, Topic::PriorityGoals);
        store.add_goal(goal("ev-training-2025"));
        store.add_goal(goal("ev-training-2025"));
        assert_eq!(store.priority_goals().len(), 1);
        assert_eq!(hits.get(), 1);
        assert!(store.has_goal("ev-training-2025"));

        store.remove_goal("ev-training-2025");
        assert!(!store.has_goal("ev-training-2025"));
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_interaction_update_changes_only_description() {
        let store = StateStore::default();
        let original = HighSchoolInteraction {
            id: "hsi1".into(),
            date: date("2025-03-15"),
            partners: vec!["Jennifer Martinez".into(), "Robert Kim".into()],
            other_participants: "Dr. Patricia Lee".into(),
            types: vec!["Career Day at MHCC".into()],
            description: "Hosted 45 students".into(),
            artifacts: vec!["Agenda.pdf".into()],
        };
        store.add_high_school_interaction(original.clone());
        store.update_high_school_interaction(
            "hsi1",
            InteractionPatch {
                description: Some("x".into()),
                ..Default::default()
            },
        );
        let updated = store.high_school_interaction_by_id("hsi1").unwrap();
        assert_eq!(
            updated,
            HighSchoolInteraction {
                description: "x".into(),
                ..original
            }
        );
    }

    #[test]
    fn test_scalar_setters_notify_their_own_topic() {
        let store = StateStore::default();
        let year_hits = counter(&store, Topic::SelectedTacticYear);
        let meetings_range_hits = counter(&store, Topic::MeetingsDateRange);
        let volunteer_range_hits = counter(&store, Topic::VolunteerHoursDateRange);

        store.set_selected_tactic_year(2026);
        store.set_volunteer_hours_date_range(DateRange::UNBOUNDED);

        assert_eq!(store.selected_tactic_year(), 2026);
        assert_eq!(year_hits.get(), 1);
        assert_eq!(meetings_range_hits.get(), 0);
        assert_eq!(volunteer_range_hits.get(), 1);
    }

    #[test]
    fn test_handoff_slots_do_not_notify() {
        let store = StateStore::default();
        let meeting_hits = counter(&store, Topic::Meetings);
        let member_hits = counter(&store, Topic::BoardMembers);

        store.set_editing_meeting_id(Some("m1".into()));
        store.set_current_profile_image(Some("data:image/png;base64,AA==".into()));

        assert_eq!(store.editing_meeting_id().as_deref(), Some("m1"));
        assert_eq!(store.take_editing_meeting_id().as_deref(), Some("m1"));
        assert_eq!(store.editing_meeting_id(), None);
        assert!(store.take_current_profile_image().is_some());
        assert_eq!(store.current_profile_image(), None);
        assert_eq!(meeting_hits.get(), 0);
        assert_eq!(member_hits.get(), 0);
    }

    #[test]
    fn test_subscriber_can_read_store_during_notification() {
        let store = Rc::new(StateStore::default());
        let seen = Rc::new(Cell::new(0));
        let (inner, s) = (Rc::clone(&store), Rc::clone(&seen));
        store.subscribe(Topic::BoardMembers, move || {
            s.set(inner.summary().member_count);
        });
        store.add_member(member("1"));
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn test_subscriber_can_mutate_another_topic() {
        let store = Rc::new(StateStore::default());
        let inner = Rc::clone(&store);
        store.subscribe(Topic::BoardMembers, move || {
            inner.set_selected_tactic_year(2024);
        });
        let year_hits = counter(&store, Topic::SelectedTacticYear);
        store.add_member(member("1"));
        assert_eq!(store.selected_tactic_year(), 2024);
        assert_eq!(year_hits.get(), 1);
    }
}
