//! Board and special-session member management.
//!
//! - Enforces the per-pool member limit before anything is added
//! - Requires name and organization
//! - Takes the pending profile image from the store's handoff slot on submit

use crate::domain::{DomainError, Member, MemberCategory, MemberPatch, MemberStatus};
use crate::ports::ImageReader;
use crate::shared::config::AppConfig;
use crate::state::StateStore;
use crate::usecases::generate_id;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;
use tracing::{info, warn};

/// Which member list an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberPool {
    Board,
    SpecialSession,
}

impl MemberPool {
    fn label(self) -> &'static str {
        match self {
            Self::Board => "board members",
            Self::SpecialSession => "special session members",
        }
    }
}

/// Fields entered in the member form.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberForm {
    pub name: String,
    pub organization: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub category: MemberCategory,
    /// Ignored for the special-session pool, which always uses `SpecialSession`.
    pub status: MemberStatus,
    pub expertise: String,
}

impl MemberForm {
    fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() || self.organization.trim().is_empty() {
            return Err(DomainError::Validation(
                "Please fill in all required fields.".into(),
            ));
        }
        Ok(())
    }
}

pub struct MemberService {
    store: Rc<StateStore>,
    images: Arc<dyn ImageReader>,
    max_board_members: usize,
    max_special_session_members: usize,
}

impl MemberService {
    pub fn new(store: Rc<StateStore>, images: Arc<dyn ImageReader>, cfg: &AppConfig) -> Self {
        Self {
            store,
            images,
            max_board_members: cfg.max_board_members_or_default(),
            max_special_session_members: cfg.max_special_session_members_or_default(),
        }
    }

    pub fn members(&self, pool: MemberPool) -> Vec<Member> {
        match pool {
            MemberPool::Board => self.store.board_members(),
            MemberPool::SpecialSession => self.store.special_session_members(),
        }
    }

    fn find(&self, pool: MemberPool, id: &str) -> Option<Member> {
        match pool {
            MemberPool::Board => self.store.member_by_id(id),
            MemberPool::SpecialSession => self.store.special_session_member_by_id(id),
        }
    }

    /// Checked before the add form opens.
    pub fn ensure_capacity(&self, pool: MemberPool) -> Result<(), DomainError> {
        let max = match pool {
            MemberPool::Board => self.max_board_members,
            MemberPool::SpecialSession => self.max_special_session_members,
        };
        if self.members(pool).len() >= max {
            return Err(DomainError::LimitReached {
                what: pool.label(),
                max,
            });
        }
        Ok(())
    }

    pub fn add_member(&self, pool: MemberPool, form: MemberForm) -> Result<Member, DomainError> {
        self.ensure_capacity(pool)?;
        form.validate()?;

        let status = match pool {
            MemberPool::Board => form.status,
            MemberPool::SpecialSession => MemberStatus::SpecialSession,
        };
        let member = Member {
            id: generate_id(),
            name: form.name,
            organization: form.organization,
            title: form.title,
            email: form.email,
            phone: form.phone,
            category: form.category,
            status,
            expertise: form.expertise,
            profile_image: self.store.take_current_profile_image(),
        };
        match pool {
            MemberPool::Board => self.store.add_member(member.clone()),
            MemberPool::SpecialSession => self.store.add_special_session_member(member.clone()),
        }
        info!(id = %member.id, pool = pool.label(), "member added");
        Ok(member)
    }

    /// Overwrites the form fields. A pending profile image, if any, replaces the current one.
    pub fn update_member(
        &self,
        pool: MemberPool,
        id: &str,
        form: MemberForm,
    ) -> Result<(), DomainError> {
        if self.find(pool, id).is_none() {
            return Err(DomainError::NotFound(format!("member {id}")));
        }
        form.validate()?;

        let status = match pool {
            MemberPool::Board => form.status,
            MemberPool::SpecialSession => MemberStatus::SpecialSession,
        };
        let patch = MemberPatch {
            name: Some(form.name),
            organization: Some(form.organization),
            title: Some(form.title),
            email: Some(form.email),
            phone: Some(form.phone),
            category: Some(form.category),
            status: Some(status),
            expertise: Some(form.expertise),
            profile_image: self.store.take_current_profile_image().map(Some),
        };
        self.apply_patch(pool, id, patch);
        info!(id, pool = pool.label(), "member updated");
        Ok(())
    }

    pub fn delete_member(&self, pool: MemberPool, id: &str) -> Result<(), DomainError> {
        if self.find(pool, id).is_none() {
            return Err(DomainError::NotFound(format!("member {id}")));
        }
        match pool {
            MemberPool::Board => self.store.delete_member(id),
            MemberPool::SpecialSession => self.store.delete_special_session_member(id),
        }
        info!(id, pool = pool.label(), "member deleted");
        Ok(())
    }

    pub fn remove_profile_image(&self, pool: MemberPool, id: &str) -> Result<(), DomainError> {
        if self.find(pool, id).is_none() {
            return Err(DomainError::NotFound(format!("member {id}")));
        }
        self.apply_patch(
            pool,
            id,
            MemberPatch {
                profile_image: Some(None),
                ..Default::default()
            },
        );
        info!(id, pool = pool.label(), "profile image removed");
        Ok(())
    }

    /// Reads the picture and parks its data URL until the member form is submitted.
    pub async fn attach_profile_image(&self, path: &Path) -> Result<(), DomainError> {
        match self.images.read_as_data_url(path).await {
            Ok(data_url) => {
                self.store.set_current_profile_image(Some(data_url));
                Ok(())
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "profile image rejected");
                Err(e)
            }
        }
    }

    /// Drops a parked image when the form is cancelled.
    pub fn discard_pending_image(&self) {
        self.store.set_current_profile_image(None);
    }

    fn apply_patch(&self, pool: MemberPool, id: &str, patch: MemberPatch) {
        match pool {
            MemberPool::Board => self.store.update_member(id, patch),
            MemberPool::SpecialSession => self.store.update_special_session_member(id, patch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    struct StubImages;

    #[async_trait::async_trait]
    impl ImageReader for StubImages {
        async fn read_as_data_url(&self, path: &Path) -> Result<String, DomainError> {
            if path.extension().is_some_and(|ext| ext == "png") {
                Ok("data:image/png;base64,AA==".into())
            } else {
                Err(DomainError::InvalidImage(path.display().to_string()))
            }
        }
    }

    fn service(max_board_members: usize) -> (Rc<StateStore>, MemberService) {
        let store = Rc::new(StateStore::default());
        let cfg = AppConfig {
            max_board_members: Some(max_board_members),
            ..Default::default()
        };
        let svc = MemberService::new(Rc::clone(&store), Arc::new(StubImages), &cfg);
        (store, svc)
    }

    fn form(name: &str) -> MemberForm {
        MemberForm {
            name: name.into(),
            organization: "Tesla Service Center".into(),
            title: "Lead EV Technician".into(),
            email: "mchen@tesla.com".into(),
            phone: "(555) 234-5678".into(),
            category: MemberCategory::Employer,
            status: MemberStatus::Core,
            expertise: "Battery technology".into(),
        }
    }

    #[test]
    fn test_add_member_requires_name_and_organization() {
        let (store, svc) = service(20);
        let mut missing = form("Michael Chen");
        missing.organization = "  ".into();
        let err = svc.add_member(MemberPool::Board, missing).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(store.board_members().is_empty());
    }

    #[test]
    fn test_add_member_enforces_limit() {
        let (store, svc) = service(1);
        svc.add_member(MemberPool::Board, form("A")).unwrap();
        let err = svc.add_member(MemberPool::Board, form("B")).unwrap_err();
        assert!(matches!(err, DomainError::LimitReached { max: 1, .. }));
        assert_eq!(store.board_members().len(), 1);
    }

    #[test]
    fn test_special_session_pool_forces_status() {
        let (store, svc) = service(20);
        let member = svc
            .add_member(MemberPool::SpecialSession, form("Dr. Patricia Martinez"))
            .unwrap();
        assert_eq!(member.status, MemberStatus::SpecialSession);
        assert_eq!(store.special_session_members().len(), 1);
        assert!(store.board_members().is_empty());
    }

    #[tokio::test]
    async fn test_profile_image_handoff() {
        let (store, svc) = service(20);
        svc.attach_profile_image(Path::new("face.png")).await.unwrap();
        let member = svc.add_member(MemberPool::Board, form("A")).unwrap();
        assert_eq!(
            member.profile_image.as_deref(),
            Some("data:image/png;base64,AA==")
        );
        assert_eq!(store.current_profile_image(), None);

        svc.remove_profile_image(MemberPool::Board, &member.id)
            .unwrap();
        assert_eq!(store.member_by_id(&member.id).unwrap().profile_image, None);
    }

    #[tokio::test]
    async fn test_invalid_image_is_reported() {
        let (store, svc) = service(20);
        let err = svc
            .attach_profile_image(Path::new("notes.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidImage(_)));
        assert_eq!(store.current_profile_image(), None);
    }

    #[tokio::test]
    async fn test_discarded_image_is_not_applied() {
        let (_store, svc) = service(20);
        svc.attach_profile_image(Path::new("face.png")).await.unwrap();
        svc.discard_pending_image();
        let member = svc.add_member(MemberPool::Board, form("A")).unwrap();
        assert_eq!(member.profile_image, None);
    }

    #[test]
    fn test_update_and_delete_unknown_member() {
        let (_store, svc) = service(20);
        assert!(matches!(
            svc.update_member(MemberPool::Board, "404", form("A")),
            Err(DomainError::NotFound(_))
        ));
        assert!(matches!(
            svc.delete_member(MemberPool::Board, "404"),
            Err(DomainError::NotFound(_))
        ));
        assert!(matches!(
            svc.remove_profile_image(MemberPool::SpecialSession, "404"),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_member_keeps_image_without_pending_one() {
        let (store, svc) = service(20);
        store.set_current_profile_image(Some("data:image/png;base64,AA==".into()));
        let member = svc.add_member(MemberPool::Board, form("A")).unwrap();
        svc.update_member(MemberPool::Board, &member.id, form("B"))
            .unwrap();
        let stored = store.member_by_id(&member.id).unwrap();
        assert_eq!(stored.name, "B");
        assert!(stored.profile_image.is_some());
    }
}
