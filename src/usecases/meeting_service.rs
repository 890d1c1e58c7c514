//! Meeting scheduling and editing.
//!
//! - Add and edit share one submit path; the store's `editing_meeting_id` slot decides which
//! - Attendees are resolved to member snapshots at submit time
//! - The edit slot is only consumed once the form has passed validation

use crate::domain::{
    DomainError, Meeting, MeetingPatch, MeetingType, Member, TacticDiscussed,
};
use crate::state::StateStore;
use crate::usecases::generate_id;
use chrono::NaiveDate;
use std::rc::Rc;
use tracing::{info, warn};

/// Tactic checked in the meeting form, with the board's recommendations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TacticSelection {
    pub goal_id: String,
    pub recommendations: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeetingForm {
    pub meeting_type: Option<MeetingType>,
    pub date: Option<NaiveDate>,
    pub duration: f64,
    pub attendee_ids: Vec<String>,
    pub tactics: Vec<TacticSelection>,
}

/// Filtered meetings split by type for display.
#[derive(Debug, Clone, Default)]
pub struct MeetingGroups {
    pub advisory_board: Vec<Meeting>,
    pub special_sessions: Vec<Meeting>,
}

impl MeetingGroups {
    pub fn is_empty(&self) -> bool {
        self.advisory_board.is_empty() && self.special_sessions.is_empty()
    }
}

pub struct MeetingService {
    store: Rc<StateStore>,
}

impl MeetingService {
    pub fn new(store: Rc<StateStore>) -> Self {
        Self { store }
    }

    /// A meeting needs at least one possible attendee and one prioritized tactic.
    pub fn ensure_can_schedule(&self) -> Result<(), DomainError> {
        if self.store.board_members().is_empty() && self.store.special_session_members().is_empty()
        {
            return Err(DomainError::Validation(
                "Please add board members or special session members before creating a meeting."
                    .into(),
            ));
        }
        if self.store.priority_goals().is_empty() {
            return Err(DomainError::Validation(
                "Please add priority tactics before creating a meeting.".into(),
            ));
        }
        Ok(())
    }

    /// Advisory board meetings draw from the board; special sessions add the special-session pool.
    pub fn eligible_attendees(&self, meeting_type: MeetingType) -> Vec<Member> {
        let mut members = self.store.board_members();
        if meeting_type == MeetingType::SpecialSession {
            members.extend(self.store.special_session_members());
        }
        members
    }

    /// Marks `meeting_id` as the edit target and returns the form prefilled from it.
    pub fn start_edit(&self, meeting_id: &str) -> Result<MeetingForm, DomainError> {
        let meeting = self
            .store
            .meeting_by_id(meeting_id)
            .ok_or_else(|| DomainError::NotFound(format!("meeting {meeting_id}")))?;
        self.store.set_editing_meeting_id(Some(meeting.id.clone()));
        Ok(MeetingForm {
            meeting_type: Some(meeting.meeting_type),
            date: Some(meeting.date),
            duration: meeting.duration,
            attendee_ids: meeting.attendees.into_iter().map(|m| m.id).collect(),
            tactics: meeting
                .tactics_discussed
                .into_iter()
                .map(|t| TacticSelection {
                    goal_id: t.goal_id,
                    recommendations: t.recommendations,
                })
                .collect(),
        })
    }

    pub fn cancel_edit(&self) {
        self.store.set_editing_meeting_id(None);
    }

    /// Validates the form, then updates the meeting being edited or adds a new one.
    /// Returns the id of the stored meeting.
    pub fn submit(&self, form: MeetingForm) -> Result<String, DomainError> {
        let meeting_type = form
            .meeting_type
            .ok_or_else(|| invalid("Please select a meeting type."))?;

        if form.attendee_ids.is_empty() {
            return Err(invalid("Please select at least one attendee."));
        }
        let pool = self.eligible_attendees(MeetingType::SpecialSession);
        let attendees: Vec<Member> = pool
            .into_iter()
            .filter(|m| form.attendee_ids.contains(&m.id))
            .collect();
        if attendees.is_empty() {
            return Err(invalid("Please select at least one attendee."));
        }

        if form.tactics.is_empty() {
            return Err(invalid("Please select at least one priority tactic."));
        }
        let goals = self.store.priority_goals();
        let tactics_discussed = form
            .tactics
            .into_iter()
            .map(|selection| {
                let goal = goals
                    .iter()
                    .find(|g| g.id == selection.goal_id)
                    .ok_or_else(|| {
                        DomainError::NotFound(format!("priority tactic {}", selection.goal_id))
                    })?;
                Ok(TacticDiscussed {
                    goal_id: selection.goal_id,
                    name: goal.name.clone(),
                    recommendations: selection.recommendations,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        let date = form
            .date
            .ok_or_else(|| invalid("Please select a meeting date."))?;
        if !form.duration.is_finite() || form.duration <= 0.0 {
            return Err(invalid("Please enter a valid meeting duration."));
        }

        match self.store.take_editing_meeting_id() {
            Some(id) if self.store.meeting_by_id(&id).is_some() => {
                self.store.update_meeting(
                    &id,
                    MeetingPatch {
                        meeting_type: Some(meeting_type),
                        date: Some(date),
                        duration: Some(form.duration),
                        attendees: Some(attendees),
                        tactics_discussed: Some(tactics_discussed),
                    },
                );
                info!(id = %id, %date, "meeting updated");
                Ok(id)
            }
            stale => {
                if let Some(id) = stale {
                    warn!(id = %id, "edited meeting no longer exists; recording as new");
                }
                let meeting = Meeting {
                    id: generate_id(),
                    meeting_type,
                    date,
                    duration: form.duration,
                    attendees,
                    tactics_discussed,
                };
                let id = meeting.id.clone();
                self.store.add_meeting(meeting);
                info!(id = %id, %date, "meeting added");
                Ok(id)
            }
        }
    }

    pub fn delete_meeting(&self, meeting_id: &str) -> Result<(), DomainError> {
        if self.store.meeting_by_id(meeting_id).is_none() {
            return Err(DomainError::NotFound(format!("meeting {meeting_id}")));
        }
        self.store.delete_meeting(meeting_id);
        info!(id = meeting_id, "meeting deleted");
        Ok(())
    }

    /// Meetings in the meetings-view range, grouped by type, newest first.
    pub fn grouped_meetings(&self) -> MeetingGroups {
        let (advisory_board, special_sessions): (Vec<Meeting>, Vec<Meeting>) = self
            .store
            .filtered_meetings()
            .into_iter()
            .partition(|m| m.meeting_type == MeetingType::AdvisoryBoard);
        MeetingGroups {
            advisory_board,
            special_sessions,
        }
    }
}

fn invalid(message: &str) -> DomainError {
    DomainError::Validation(message.to_string())
}
