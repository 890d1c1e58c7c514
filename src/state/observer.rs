//! Topic-keyed publish/subscribe registry.
//!
//! Callbacks run synchronously, in registration order, inside the mutating call.
//! The subscriber list is copied out before fan-out, so a callback may read the
//! store, subscribe, unsubscribe or mutate again without a `RefCell` conflict.
//! Nothing guards against a callback that re-triggers its own topic forever.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use tracing::trace;

/// Named change channel, one per collection or notifying scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    BoardMembers,
    SpecialSessionMembers,
    PriorityGoals,
    Meetings,
    HighSchoolPartners,
    HighSchoolInteractions,
    SelectedTacticYear,
    MeetingsDateRange,
    VolunteerHoursDateRange,
    CurrentDepartment,
}

impl Topic {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BoardMembers => "boardMembers",
            Self::SpecialSessionMembers => "specialSessionMembers",
            Self::PriorityGoals => "priorityGoals",
            Self::Meetings => "meetings",
            Self::HighSchoolPartners => "highSchoolPartners",
            Self::HighSchoolInteractions => "highSchoolInteractions",
            Self::SelectedTacticYear => "selectedTacticYear",
            Self::MeetingsDateRange => "meetingsDateRange",
            Self::VolunteerHoursDateRange => "volunteerHoursDateRange",
            Self::CurrentDepartment => "currentDepartment",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle returned by `subscribe`; pass it to `unsubscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Rc<dyn Fn()>;

#[derive(Default)]
pub struct Observers {
    next_id: Cell<u64>,
    subscribers: RefCell<HashMap<Topic, Vec<(SubscriptionId, Callback)>>>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, topic: Topic, callback: impl Fn() + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers
            .borrow_mut()
            .entry(topic)
            .or_default()
            .push((id, Rc::new(callback)));
        id
    }

    /// Returns false if the subscription was already removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        for list in subscribers.values_mut() {
            if let Some(pos) = list.iter().position(|(sid, _)| *sid == id) {
                list.remove(pos);
                return true;
            }
        }
        false
    }

    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.subscribers
            .borrow()
            .get(&topic)
            .map(Vec::len)
            .unwrap_or(0)
    }

    pub fn notify(&self, topic: Topic) {
        let callbacks: Vec<Callback> = match self.subscribers.borrow().get(&topic) {
            Some(list) => list.iter().map(|(_, cb)| Rc::clone(cb)).collect(),
            None => return,
        };
        trace!(topic = %topic, subscribers = callbacks.len(), "notify");
        for callback in callbacks {
            callback();
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subscribers = self.subscribers.borrow();
        let counts: HashMap<&'static str, usize> = subscribers
            .iter()
            .map(|(topic, list)| (topic.as_str(), list.len()))
            .collect();
        f.debug_struct("Observers")
            .field("subscribers", &counts)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callbacks_run_in_registration_order() {
        let observers = Observers::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for n in 0..3 {
            let log = Rc::clone(&log);
            observers.subscribe(Topic::Meetings, move || log.borrow_mut().push(n));
        }
        observers.notify(Topic::Meetings);
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_notify_only_reaches_its_topic() {
        let observers = Observers::new();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        observers.subscribe(Topic::BoardMembers, move || h.set(h.get() + 1));
        observers.notify(Topic::PriorityGoals);
        observers.notify(Topic::BoardMembers);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let observers = Observers::new();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let id = observers.subscribe(Topic::Meetings, move || h.set(h.get() + 1));
        observers.notify(Topic::Meetings);
        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        observers.notify(Topic::Meetings);
        assert_eq!(hits.get(), 1);
        assert_eq!(observers.subscriber_count(Topic::Meetings), 0);
    }

    #[test]
    fn test_callback_may_subscribe_during_fan_out() {
        let observers = Rc::new(Observers::new());
        let inner = Rc::clone(&observers);
        observers.subscribe(Topic::Meetings, move || {
            inner.subscribe(Topic::Meetings, || {});
        });
        observers.notify(Topic::Meetings);
        assert_eq!(observers.subscriber_count(Topic::Meetings), 2);
    }
}
