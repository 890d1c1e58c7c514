//! Id-keyed record list backing each store topic.

use crate::domain::Record;

#[derive(Debug, Clone)]
pub struct Collection<T: Record> {
    items: Vec<T>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> Collection<T> {
    /// Independent copy of the current contents.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.clone()
    }

    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Merges `patch` into the record with `id`. Returns false if absent.
    pub fn update(&mut self, id: &str, patch: T::Patch) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                item.merge(patch);
                true
            }
            None => false,
        }
    }

    /// Returns false if nothing matched.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Stable sort; equal keys keep their relative order.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        self.items.sort_by(compare);
    }
}
