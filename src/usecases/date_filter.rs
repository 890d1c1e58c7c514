//! Date-range filters for the meetings list and the volunteer-hours card.
//!
//! The two ranges are independent store slots; this service validates input before
//! it reaches either of them.

use crate::domain::{DateRange, DomainError};
use crate::shared::text::short_date;
use crate::state::StateStore;
use chrono::NaiveDate;
use std::rc::Rc;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRangeTarget {
    Meetings,
    VolunteerHours,
}

impl DateRangeTarget {
    fn as_str(self) -> &'static str {
        match self {
            Self::Meetings => "meetings",
            Self::VolunteerHours => "volunteer_hours",
        }
    }
}

pub struct DateFilterService {
    store: Rc<StateStore>,
    target: DateRangeTarget,
}

impl DateFilterService {
    pub fn new(store: Rc<StateStore>, target: DateRangeTarget) -> Self {
        Self { store, target }
    }

    pub fn current(&self) -> DateRange {
        match self.target {
            DateRangeTarget::Meetings => self.store.meetings_date_range(),
            DateRangeTarget::VolunteerHours => self.store.volunteer_hours_date_range(),
        }
    }

    /// Rejects an end date before the start date; either side may be open.
    pub fn apply(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<(), DomainError> {
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if start > end {
                return Err(DomainError::InvalidDateRange { start, end });
            }
        }
        self.set(DateRange::new(start_date, end_date));
        info!(
            filter = self.target.as_str(),
            start = ?start_date,
            end = ?end_date,
            "date range applied"
        );
        Ok(())
    }

    pub fn reset(&self) {
        self.set(DateRange::UNBOUNDED);
        info!(filter = self.target.as_str(), "date range reset");
    }

    /// Human-readable summary of the active range, empty when unbounded.
    pub fn label(&self) -> String {
        let range = self.current();
        match (range.start_date, range.end_date) {
            (Some(start), Some(end)) => format!("{} - {}", short_date(start), short_date(end)),
            (Some(start), None) => format!("Since {}", short_date(start)),
            (None, Some(end)) => format!("Until {}", short_date(end)),
            (None, None) => String::new(),
        }
    }

    fn set(&self, range: DateRange) {
        match self.target {
            DateRangeTarget::Meetings => self.store.set_meetings_date_range(range),
            DateRangeTarget::VolunteerHours => self.store.set_volunteer_hours_date_range(range),
        }
    }
}
