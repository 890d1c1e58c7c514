//! Priority tactic selection against the fixed catalog.

use crate::domain::{Catalog, DomainError, Goal};
use crate::shared::config::AppConfig;
use crate::state::StateStore;
use std::rc::Rc;
use tracing::info;

pub struct GoalService {
    store: Rc<StateStore>,
    catalog: Rc<Catalog>,
    max_priority_tactics: usize,
}

impl GoalService {
    pub fn new(store: Rc<StateStore>, catalog: Rc<Catalog>, cfg: &AppConfig) -> Self {
        Self {
            store,
            catalog,
            max_priority_tactics: cfg.max_priority_tactics_or_default(),
        }
    }

    pub fn years(&self) -> Vec<i32> {
        self.catalog.years()
    }

    pub fn select_year(&self, year: i32) {
        self.store.set_selected_tactic_year(year);
    }

    /// Catalog tactics for the selected year that are not prioritized yet.
    pub fn available_tactics(&self) -> Vec<Goal> {
        self.catalog
            .tactics_for_year(self.store.selected_tactic_year())
            .filter(|t| !self.store.has_goal(&t.id))
            .cloned()
            .collect()
    }

    pub fn ensure_capacity(&self) -> Result<(), DomainError> {
        if self.store.priority_goals().len() >= self.max_priority_tactics {
            return Err(DomainError::LimitReached {
                what: "priority tactics",
                max: self.max_priority_tactics,
            });
        }
        Ok(())
    }

    pub fn add_tactic(&self, tactic_id: &str) -> Result<Goal, DomainError> {
        self.ensure_capacity()?;
        let tactic = self
            .catalog
            .tactic(tactic_id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("tactic {tactic_id}")))?;
        if self.store.has_goal(&tactic.id) {
            return Err(DomainError::Validation(format!(
                "tactic {tactic_id} is already prioritized"
            )));
        }
        self.store.add_goal(tactic.clone());
        info!(tactic_id, "tactic prioritized");
        Ok(tactic)
    }

    pub fn remove_tactic(&self, tactic_id: &str) -> Result<(), DomainError> {
        if !self.store.has_goal(tactic_id) {
            return Err(DomainError::NotFound(format!("priority tactic {tactic_id}")));
        }
        self.store.remove_goal(tactic_id);
        info!(tactic_id, "tactic removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let goal = |id: &str, year, outdated| Goal {
            id: id.into(),
            name: format!("Tactic {id}"),
            year,
            outdated,
        };
        Catalog {
            tactics: vec![
                goal("ev-certificate-2025", 2025, false),
                goal("ev-training-2025", 2025, false),
                goal("adas-curriculum-2025", 2025, false),
                goal("battery-tech-2026", 2026, false),
                goal("traditional-diagnostics-2024", 2024, true),
            ],
            ..Default::default()
        }
    }

    fn service(max: usize) -> (Rc<StateStore>, GoalService) {
        let store = Rc::new(StateStore::default());
        let cfg = AppConfig {
            max_priority_tactics: Some(max),
            ..Default::default()
        };
        let svc = GoalService::new(Rc::clone(&store), Rc::new(catalog()), &cfg);
        (store, svc)
    }

    #[test]
    fn test_available_tactics_exclude_prioritized_and_other_years() {
        let (_store, svc) = service(5);
        svc.add_tactic("ev-training-2025").unwrap();
        let ids: Vec<String> = svc.available_tactics().into_iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["ev-certificate-2025", "adas-curriculum-2025"]);

        svc.select_year(2026);
        let ids: Vec<String> = svc.available_tactics().into_iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["battery-tech-2026"]);
    }

    #[test]
    fn test_add_tactic_enforces_maximum() {
        let (store, svc) = service(2);
        svc.add_tactic("ev-certificate-2025").unwrap();
        svc.add_tactic("battery-tech-2026").unwrap();
        let err = svc.add_tactic("ev-training-2025").unwrap_err();
        assert!(matches!(err, DomainError::LimitReached { max: 2, .. }));
        assert_eq!(store.priority_goals().len(), 2);
    }

    #[test]
    fn test_add_tactic_rejects_unknown_and_duplicate() {
        let (store, svc) = service(5);
        assert!(matches!(
            svc.add_tactic("nope"),
            Err(DomainError::NotFound(_))
        ));
        svc.add_tactic("ev-training-2025").unwrap();
        assert!(matches!(
            svc.add_tactic("ev-training-2025"),
            Err(DomainError::Validation(_))
        ));
        assert_eq!(store.priority_goals().len(), 1);
    }

    #[test]
    fn test_outdated_flag_is_carried() {
        let (_store, svc) = service(5);
        let goal = svc.add_tactic("traditional-diagnostics-2024").unwrap();
        assert!(goal.outdated);
        assert_eq!(svc.years(), vec![2024, 2025, 2026]);
        svc.remove_tactic("traditional-diagnostics-2024").unwrap();
    }

    #[test]
    fn test_remove_tactic_not_prioritized_is_not_found() {
        let (store, svc) = service(5);
        svc.add_tactic("traditional-diagnostics-2024").unwrap();
        assert!(matches!(
            svc.remove_tactic("ev-training-2025"),
            Err(DomainError::NotFound(_))
        ));
        assert_eq!(store.priority_goals().len(), 1);
        svc.remove_tactic("traditional-diagnostics-2024").unwrap();
        assert!(store.priority_goals().is_empty());
    }
}
