//! High-school partners and outreach interactions.

use crate::domain::{
    Catalog, DomainError, HighSchoolInteraction, HighSchoolPartner, InteractionPatch,
    PartnerPatch,
};
use crate::shared::config::AppConfig;
use crate::state::StateStore;
use crate::usecases::generate_id;
use chrono::NaiveDate;
use std::rc::Rc;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PartnerForm {
    pub name: String,
    pub school: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub role: String,
}

impl PartnerForm {
    fn validate(&self) -> Result<(), DomainError> {
        let required = [
            &self.name,
            &self.school,
            &self.title,
            &self.email,
            &self.phone,
        ];
        if required.iter().any(|v| v.trim().is_empty()) {
            return Err(DomainError::Validation(
                "Please fill in all required fields.".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionForm {
    pub date: Option<NaiveDate>,
    /// Partner names, as listed in the partners collection.
    pub partners: Vec<String>,
    pub other_participants: String,
    pub types: Vec<String>,
    pub description: String,
    pub artifacts: Vec<String>,
}

pub struct OutreachService {
    store: Rc<StateStore>,
    catalog: Rc<Catalog>,
    max_partners: usize,
    max_interactions: usize,
    max_artifacts: usize,
}

impl OutreachService {
    pub fn new(store: Rc<StateStore>, catalog: Rc<Catalog>, cfg: &AppConfig) -> Self {
        Self {
            store,
            catalog,
            max_partners: cfg.max_high_school_partners_or_default(),
            max_interactions: cfg.max_high_school_interactions_or_default(),
            max_artifacts: cfg.max_interaction_artifacts_or_default(),
        }
    }

    pub fn interaction_types(&self) -> &[String] {
        &self.catalog.interaction_types
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Partners
    // ─────────────────────────────────────────────────────────────────────────

    pub fn ensure_partner_capacity(&self) -> Result<(), DomainError> {
        if self.store.high_school_partners().len() >= self.max_partners {
            return Err(DomainError::LimitReached {
                what: "high school partners",
                max: self.max_partners,
            });
        }
        Ok(())
    }

    pub fn add_partner(&self, form: PartnerForm) -> Result<HighSchoolPartner, DomainError> {
        self.ensure_partner_capacity()?;
        form.validate()?;
        let partner = HighSchoolPartner {
            id: generate_id(),
            name: form.name,
            school: form.school,
            title: form.title,
            email: form.email,
            phone: form.phone,
            role: form.role,
        };
        self.store.add_high_school_partner(partner.clone());
        info!(id = %partner.id, school = %partner.school, "partner added");
        Ok(partner)
    }

    pub fn update_partner(&self, id: &str, form: PartnerForm) -> Result<(), DomainError> {
        if self.store.high_school_partner_by_id(id).is_none() {
            return Err(DomainError::NotFound(format!("partner {id}")));
        }
        form.validate()?;
        self.store.update_high_school_partner(
            id,
            PartnerPatch {
                name: Some(form.name),
                school: Some(form.school),
                title: Some(form.title),
                email: Some(form.email),
                phone: Some(form.phone),
                role: Some(form.role),
            },
        );
        info!(id, "partner updated");
        Ok(())
    }

    pub fn delete_partner(&self, id: &str) -> Result<(), DomainError> {
        if self.store.high_school_partner_by_id(id).is_none() {
            return Err(DomainError::NotFound(format!("partner {id}")));
        }
        self.store.delete_high_school_partner(id);
        info!(id, "partner deleted");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Interactions
    // ─────────────────────────────────────────────────────────────────────────

    pub fn ensure_interaction_capacity(&self) -> Result<(), DomainError> {
        if self.store.high_school_interactions().len() >= self.max_interactions {
            return Err(DomainError::LimitReached {
                what: "high school interactions",
                max: self.max_interactions,
            });
        }
        Ok(())
    }

    /// Checked when more files are picked for an interaction already holding `current`.
    pub fn ensure_artifact_capacity(
        &self,
        current: usize,
        incoming: usize,
    ) -> Result<(), DomainError> {
        if current + incoming > self.max_artifacts {
            return Err(DomainError::LimitReached {
                what: "artifacts",
                max: self.max_artifacts,
            });
        }
        Ok(())
    }

    fn validate_interaction(&self, form: &InteractionForm) -> Result<NaiveDate, DomainError> {
        let date = form
            .date
            .ok_or_else(|| DomainError::Validation("Please select a date.".into()))?;
        if form.types.is_empty() {
            return Err(DomainError::Validation(
                "Please select at least one interaction type.".into(),
            ));
        }
        if let Some(unknown) = form
            .types
            .iter()
            .find(|t| !self.catalog.is_interaction_type(t))
        {
            return Err(DomainError::Validation(format!(
                "unknown interaction type: {unknown}"
            )));
        }
        if form.description.trim().is_empty() {
            return Err(DomainError::Validation(
                "Please enter a description.".into(),
            ));
        }
        self.ensure_artifact_capacity(form.artifacts.len(), 0)?;
        Ok(date)
    }

    pub fn add_interaction(
        &self,
        form: InteractionForm,
    ) -> Result<HighSchoolInteraction, DomainError> {
        self.ensure_interaction_capacity()?;
        let date = self.validate_interaction(&form)?;
        let interaction = HighSchoolInteraction {
            id: generate_id(),
            date,
            partners: form.partners,
            other_participants: form.other_participants,
            types: form.types,
            description: form.description,
            artifacts: form.artifacts,
        };
        self.store.add_high_school_interaction(interaction.clone());
        info!(id = %interaction.id, %date, "interaction added");
        Ok(interaction)
    }

    pub fn update_interaction(&self, id: &str, form: InteractionForm) -> Result<(), DomainError> {
        if self.store.high_school_interaction_by_id(id).is_none() {
            return Err(DomainError::NotFound(format!("interaction {id}")));
        }
        let date = self.validate_interaction(&form)?;
        self.store.update_high_school_interaction(
            id,
            InteractionPatch {
                date: Some(date),
                partners: Some(form.partners),
                other_participants: Some(form.other_participants),
                types: Some(form.types),
                description: Some(form.description),
                artifacts: Some(form.artifacts),
            },
        );
        info!(id, "interaction updated");
        Ok(())
    }

    pub fn delete_interaction(&self, id: &str) -> Result<(), DomainError> {
        if self.store.high_school_interaction_by_id(id).is_none() {
            return Err(DomainError::NotFound(format!("interaction {id}")));
        }
        self.store.delete_high_school_interaction(id);
        info!(id, "interaction deleted");
        Ok(())
    }

    /// Display order; the stored order is left untouched.
    pub fn interactions_newest_first(&self) -> Vec<HighSchoolInteraction> {
        let mut interactions = self.store.high_school_interactions();
        interactions.sort_by(|a, b| b.date.cmp(&a.date));
        interactions
    }
}
