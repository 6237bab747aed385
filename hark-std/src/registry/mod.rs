//! The listener registry data structure.
//!
//! [`ListenerRegistry`] maps event names to ordered entry lists and keeps the
//! order in which names first appeared. It does no locking and never invokes
//! a listener; [`EventEmitter`] wraps it for dispatch.
//!
//! [`EventEmitter`]: crate::EventEmitter

mod entry;

pub(crate) use entry::{Entry, EntryId};

use hark_core::{EventName, Listener};
use std::{
    borrow::Borrow,
    collections::{HashMap, hash_map},
    hash::Hash,
};

/// Where a new entry goes in its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Position {
    Back,
    Front,
}

/// Outcome of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Inserted {
    pub(crate) id: EntryId,
    /// List length after the insert.
    pub(crate) count: usize,
    /// Threshold in effect at insert time.
    pub(crate) max: usize,
}

impl Inserted {
    /// The list already held `max` or more entries before this insert.
    pub(crate) fn exceeds_max(&self) -> bool {
        self.count > self.max
    }
}

pub(crate) struct ListenerRegistry<E> {
    lists: HashMap<E, Vec<Entry>>,
    order: Vec<E>,
    max_listeners: usize,
    next_id: EntryId,
}

impl<E: EventName> ListenerRegistry<E> {
    pub(crate) fn new(max_listeners: usize) -> Self {
        Self {
            lists: HashMap::new(),
            order: Vec::new(),
            max_listeners,
            next_id: 0,
        }
    }

    pub(crate) fn max_listeners(&self) -> usize {
        self.max_listeners
    }

    pub(crate) fn set_max_listeners(&mut self, max: usize) {
        self.max_listeners = max;
    }

    pub(crate) fn insert(
        &mut self,
        event: E,
        listener: Listener,
        once: bool,
        position: Position,
    ) -> Inserted {
        let id = self.next_id;
        self.next_id += 1;

        let entry = if once {
            Entry::once(id, listener)
        } else {
            Entry::persistent(id, listener)
        };

        let list = match self.lists.entry(event) {
            hash_map::Entry::Occupied(occupied) => occupied.into_mut(),
            hash_map::Entry::Vacant(vacant) => {
                self.order.push(vacant.key().clone());
                vacant.insert(Vec::new())
            }
        };
        match position {
            Position::Back => list.push(entry),
            Position::Front => list.insert(0, entry),
        }

        Inserted {
            id,
            count: list.len(),
            max: self.max_listeners,
        }
    }

    /// Remove the first entry matching `listener`.
    pub(crate) fn remove_matching<Q>(&mut self, event: &Q, listener: &Listener) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_first(event, |entry| entry.matches(listener))
    }

    /// Remove the entry with the given id, if it is still registered.
    pub(crate) fn remove_entry<Q>(&mut self, event: &Q, id: EntryId) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_first(event, |entry| entry.id() == id)
    }

    fn remove_first<Q>(&mut self, event: &Q, predicate: impl Fn(&Entry) -> bool) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(list) = self.lists.get_mut(event) else {
            return false;
        };
        let Some(index) = list.iter().position(predicate) else {
            return false;
        };
        list.remove(index);
        if list.is_empty() {
            self.remove_event(event);
        }
        true
    }

    /// Drop the whole list for `event`, returning how many entries it held.
    pub(crate) fn remove_event<Q>(&mut self, event: &Q) -> usize
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.lists.remove(event) {
            Some(list) => {
                self.order
                    .retain(|name| <E as Borrow<Q>>::borrow(name) != event);
                list.len()
            }
            None => 0,
        }
    }

    /// Drop every list, returning how many entries were held in total.
    pub(crate) fn clear(&mut self) -> usize {
        let removed = self.lists.values().map(Vec::len).sum();
        self.lists.clear();
        self.order.clear();
        removed
    }

    pub(crate) fn entries<Q>(&self, event: &Q) -> &[Entry]
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lists.get(event).map(Vec::as_slice).unwrap_or_default()
    }

    pub(crate) fn count<Q>(&self, event: &Q) -> usize
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries(event).len()
    }

    /// Event names in first-registration order.
    pub(crate) fn names(&self) -> Vec<E> {
        self.order.clone()
    }

    /// `(name, listener count)` pairs in first-registration order.
    pub(crate) fn counts(&self) -> Vec<(E, usize)> {
        self.order
            .iter()
            .map(|name| (name.clone(), self.count(name)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listener() -> Listener {
        Listener::new(|_| {})
    }

    #[test]
    fn test_insert_back_and_front() {
        let mut registry = ListenerRegistry::<&'static str>::new(10);
        let first = listener();
        let second = listener();
        let head = listener();

        registry.insert("foo", first.clone(), false, Position::Back);
        registry.insert("foo", second.clone(), false, Position::Back);
        registry.insert("foo", head.clone(), false, Position::Front);

        let stored: Vec<&Listener> = registry.entries("foo").iter().map(Entry::callback).collect();
        assert_eq!(stored, vec![&head, &first, &second]);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut registry = ListenerRegistry::<&'static str>::new(10);
        let a = registry.insert("a", listener(), false, Position::Back);
        let b = registry.insert("b", listener(), true, Position::Back);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_exceeds_max_once_prior_len_reaches_threshold() {
        let mut registry = ListenerRegistry::<&'static str>::new(2);
        let flags: Vec<bool> = (0..4)
            .map(|_| {
                registry
                    .insert("warn", listener(), false, Position::Back)
                    .exceeds_max()
            })
            .collect();
        assert_eq!(flags, vec![false, false, true, true]);
    }

    #[test]
    fn test_zero_threshold_flags_every_insert() {
        let mut registry = ListenerRegistry::<&'static str>::new(0);
        assert!(registry.insert("x", listener(), false, Position::Back).exceeds_max());
    }

    #[test]
    fn test_remove_matching_removes_first_only() {
        let mut registry = ListenerRegistry::<&'static str>::new(10);
        let shared = listener();
        let a = registry.insert("dup", shared.clone(), false, Position::Back);
        let b = registry.insert("dup", shared.clone(), false, Position::Back);

        assert!(registry.remove_matching("dup", &shared));
        let ids: Vec<EntryId> = registry.entries("dup").iter().map(Entry::id).collect();
        assert_eq!(ids, vec![b.id]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut registry = ListenerRegistry::<&'static str>::new(10);
        registry.insert("known", listener(), false, Position::Back);

        assert!(!registry.remove_matching("unknown", &listener()));
        assert!(!registry.remove_matching("known", &listener()));
        assert_eq!(registry.remove_event("unknown"), 0);
        assert_eq!(registry.count("known"), 1);
    }

    #[test]
    fn test_empty_list_is_dropped() {
        let mut registry = ListenerRegistry::<&'static str>::new(10);
        let only = registry.insert("solo", listener(), true, Position::Back);
        registry.insert("other", listener(), false, Position::Back);

        assert!(registry.remove_entry("solo", only.id));
        assert_eq!(registry.count("solo"), 0);
        assert_eq!(registry.names(), vec!["other"]);
    }

    #[test]
    fn test_names_keep_first_registration_order() {
        let mut registry = ListenerRegistry::<String>::new(10);
        for name in ["b", "a", "b", "c"] {
            registry.insert(name.to_string(), listener(), false, Position::Back);
        }
        assert_eq!(registry.names(), vec!["b", "a", "c"]);
        assert_eq!(
            registry.counts(),
            vec![("b".to_string(), 2), ("a".to_string(), 1), ("c".to_string(), 1)]
        );

        assert_eq!(registry.remove_event("a"), 1);
        assert_eq!(registry.names(), vec!["b", "c"]);

        assert_eq!(registry.clear(), 3);
        assert!(registry.names().is_empty());
    }
}
