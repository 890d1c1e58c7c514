//! Populates the store from a department's seed data.
//!
//! Goal ids are resolved against the catalog and attendee ids against the department's
//! own board members; unknown ids are dropped with a warning.

use crate::domain::{Catalog, DomainError, Goal, Meeting};
use crate::ports::SeedSource;
use crate::state::StateStore;
use std::rc::Rc;
use tracing::{info, warn};

pub struct DataLoader {
    store: Rc<StateStore>,
    seed: Rc<dyn SeedSource>,
    catalog: Rc<Catalog>,
}

/// Counts of what a load put into the store.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub members: usize,
    pub special_session_members: usize,
    pub goals: usize,
    pub meetings: usize,
    pub partners: usize,
    pub interactions: usize,
}

impl DataLoader {
    pub fn new(store: Rc<StateStore>, seed: Rc<dyn SeedSource>, catalog: Rc<Catalog>) -> Self {
        Self {
            store,
            seed,
            catalog,
        }
    }

    /// Replaces every collection with the department's data and selects the department.
    pub fn load_department(&self, department_id: &str) -> Result<LoadStats, DomainError> {
        let data = self
            .seed
            .department_seed(department_id)?
            .ok_or_else(|| DomainError::NotFound(format!("department {department_id}")))?;

        let goals: Vec<Goal> = data
            .goals
            .iter()
            .filter_map(|id| {
                let tactic = self.catalog.tactic(id).cloned();
                if tactic.is_none() {
                    warn!(department_id, tactic_id = %id, "seed references unknown tactic");
                }
                tactic
            })
            .collect();
        let meetings: Vec<Meeting> = data
            .meetings
            .into_iter()
            .map(|seed| seed.into_meeting(&data.members))
            .collect();

        let stats = LoadStats {
            members: data.members.len(),
            special_session_members: data.special_session_members.len(),
            goals: goals.len(),
            meetings: meetings.len(),
            partners: data.high_school_partners.len(),
            interactions: data.high_school_interactions.len(),
        };

        self.store.set_current_department(department_id);
        self.store.set_board_members(data.members);
        self.store
            .set_special_session_members(data.special_session_members);
        self.store.set_priority_goals(goals);
        self.store.set_meetings(meetings);
        self.store.set_high_school_partners(data.high_school_partners);
        self.store
            .set_high_school_interactions(data.high_school_interactions);

        info!(department_id, ?stats, "department data loaded");
        Ok(stats)
    }

    /// Empties every collection. Scalar UI state is kept.
    pub fn clear(&self) {
        self.store.set_board_members(Vec::new());
        self.store.set_special_session_members(Vec::new());
        self.store.set_priority_goals(Vec::new());
        self.store.set_meetings(Vec::new());
        self.store.set_high_school_partners(Vec::new());
        self.store.set_high_school_interactions(Vec::new());
        info!("dashboard data cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        DepartmentSeed, MeetingSeed, MeetingType, Member, MemberCategory, MemberStatus,
    };
    use crate::state::Topic;
    use chrono::NaiveDate;
    use std::cell::Cell;

    struct FixedSeed;

    impl SeedSource for FixedSeed {
        fn catalog(&self) -> Result<Catalog, DomainError> {
            Ok(catalog())
        }

        fn department_seed(
            &self,
            department_id: &str,
        ) -> Result<Option<DepartmentSeed>, DomainError> {
            if department_id != "automotive" {
                return Ok(None);
            }
            let member = |id: &str| Member {
                id: id.into(),
                name: format!("Member {id}"),
                organization: "Org".into(),
                title: String::new(),
                email: String::new(),
                phone: String::new(),
                category: MemberCategory::Employer,
                status: MemberStatus::Core,
                expertise: String::new(),
                profile_image: None,
            };
            let meeting = |id: &str, day: u32, attendee_ids: &[&str]| MeetingSeed {
                id: id.into(),
                meeting_type: MeetingType::AdvisoryBoard,
                date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
                duration: 2.0,
                attendee_ids: attendee_ids.iter().map(|s| s.to_string()).collect(),
                tactics_discussed: vec![],
            };
            Ok(Some(DepartmentSeed {
                members: vec![member("1"), member("2")],
                goals: vec!["ev-training-2025".into(), "retired-tactic".into()],
                meetings: vec![
                    meeting("a", 5, &["1", "ghost"]),
                    meeting("b", 20, &["1", "2"]),
                ],
                ..Default::default()
            }))
        }
    }

    fn catalog() -> Catalog {
        Catalog {
            tactics: vec![Goal {
                id: "ev-training-2025".into(),
                name: "Develop standalone EV training".into(),
                year: 2025,
                outdated: false,
            }],
            ..Default::default()
        }
    }

    fn loader() -> (Rc<StateStore>, DataLoader) {
        let store = Rc::new(StateStore::default());
        let loader = DataLoader::new(Rc::clone(&store), Rc::new(FixedSeed), Rc::new(catalog()));
        (store, loader)
    }

    #[test]
    fn test_load_resolves_references_and_sorts_meetings() {
        let (store, loader) = loader();
        let stats = loader.load_department("automotive").unwrap();

        assert_eq!(stats.goals, 1);
        assert_eq!(store.current_department().as_deref(), Some("automotive"));
        let meetings = store.meetings();
        assert_eq!(meetings[0].id, "b");
        assert_eq!(meetings[1].attendees.len(), 1);
        assert_eq!(store.summary().total_volunteer_hours, 6.0);
    }

    #[test]
    fn test_load_notifies_each_collection_topic() {
        let (store, loader) = loader();
        let hits = Rc::new(Cell::new(0));
        for topic in [Topic::BoardMembers, Topic::PriorityGoals, Topic::Meetings] {
            let h = Rc::clone(&hits);
            store.subscribe(topic, move || h.set(h.get() + 1));
        }
        loader.load_department("automotive").unwrap();
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn test_unknown_department_leaves_store_untouched() {
        let (store, loader) = loader();
        assert!(matches!(
            loader.load_department("culinary"),
            Err(DomainError::NotFound(_))
        ));
        assert_eq!(store.current_department(), None);
    }

    #[test]
    fn test_clear_empties_collections() {
        let (store, loader) = loader();
        loader.load_department("automotive").unwrap();
        loader.clear();
        let summary = store.summary();
        assert_eq!(summary.member_count, 0);
        assert_eq!(summary.goal_count, 0);
        assert_eq!(summary.meeting_count, 0);
    }
}
