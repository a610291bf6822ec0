//! Client-side state for the pending screen: the mirrored entry list and
//! the per-id in-flight guard.

use std::collections::HashSet;

use api::PendingEntry;

/// Ordered mirror of the daemon's pending list.
///
/// Replaced wholesale when a list delivery arrives and mutated one element
/// at a time when the daemon confirms an approve or a delete. Entry ids are
/// assumed unique within the list; the daemon owns that invariant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingList {
    entries: Vec<PendingEntry>,
}

impl PendingList {
    pub fn entries(&self) -> &[PendingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the entry with the given id, if it is still listed.
    pub fn index_of(&self, id: i64) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Wholesale replacement. Both the cached and the confirmed delivery go
    /// through here, so whichever delivery lands last is what stays on screen.
    pub fn replace_all(&mut self, entries: Vec<PendingEntry>) {
        self.entries = entries;
    }

    /// Replaces the entry in place with the daemon's authoritative copy.
    /// Returns `false`, leaving the list untouched, when the id is gone.
    pub fn apply_approved(&mut self, updated: PendingEntry) -> bool {
        match self.index_of(updated.id) {
            Some(index) => {
                self.entries[index] = updated;
                true
            }
            None => false,
        }
    }

    /// Removes the entry once the daemon has confirmed the delete. Returns
    /// `false` when the id is gone.
    pub fn remove(&mut self, id: i64) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }
}

impl From<Vec<PendingEntry>> for PendingList {
    fn from(entries: Vec<PendingEntry>) -> Self {
        Self { entries }
    }
}

/// Ids with a mutation request currently outstanding. A second approve or
/// delete for the same id is refused until the first one resolves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InFlight {
    ids: HashSet<i64>,
}

impl InFlight {
    /// Claims the id. Returns `false` when a request is already outstanding.
    pub fn begin(&mut self, id: i64) -> bool {
        self.ids.insert(id)
    }

    pub fn finish(&mut self, id: i64) {
        self.ids.remove(&id);
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;

    fn entry(id: i64) -> PendingEntry {
        PendingEntry {
            id,
            task_name: "sync-shows".to_string(),
            title: format!("Some Show S01E0{id}"),
            url: format!("https://example.test/{id}"),
            approved: false,
            added: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
            extra: Default::default(),
        }
    }

    fn approved(id: i64) -> PendingEntry {
        PendingEntry {
            approved: true,
            ..entry(id)
        }
    }

    #[test]
    fn initial_delivery_is_mirrored_as_is() {
        let mut list = PendingList::default();
        list.replace_all(vec![entry(1), entry(2)]);

        assert_eq!(list.entries(), &[entry(1), entry(2)]);
    }

    #[test]
    fn last_delivery_wins() {
        let mut list = PendingList::default();

        // cached delivery first, confirmed delivery afterwards
        list.replace_all(vec![entry(1)]);
        list.replace_all(vec![entry(1), entry(2)]);

        assert_eq!(list.entries(), &[entry(1), entry(2)]);
    }

    #[test]
    fn approve_replaces_at_the_same_position() {
        let mut list = PendingList::from(vec![entry(1), entry(2)]);

        assert!(list.apply_approved(approved(2)));

        assert_eq!(list.entries(), &[entry(1), approved(2)]);
        assert_eq!(list.index_of(2), Some(1));
    }

    #[test]
    fn delete_removes_the_entry() {
        let mut list = PendingList::from(vec![entry(1), entry(2)]);

        assert!(list.remove(1));

        assert_eq!(list.entries(), &[entry(2)]);
    }

    #[test]
    fn duplicate_responses_apply_in_order() {
        // Two racing approve calls resolve one after the other; each response
        // is applied and the last one applied is what sticks.
        let mut list = PendingList::from(vec![entry(1), entry(2)]);

        let mut first = approved(2);
        first.title = "first response".to_string();
        let mut second = approved(2);
        second.title = "second response".to_string();

        assert!(list.apply_approved(first));
        assert!(list.apply_approved(second.clone()));

        assert_eq!(list.entries(), &[entry(1), second]);
    }

    #[test]
    fn absent_id_is_an_explicit_no_op() {
        let mut list = PendingList::from(vec![entry(1), entry(2)]);

        assert_eq!(list.index_of(7), None);
        assert!(!list.apply_approved(approved(7)));
        assert!(!list.remove(7));

        assert_eq!(list.entries(), &[entry(1), entry(2)]);
    }

    #[test]
    fn in_flight_refuses_duplicates_until_finished() {
        let mut in_flight = InFlight::default();

        assert!(in_flight.begin(2));
        assert!(!in_flight.begin(2));
        assert!(in_flight.contains(2));

        // an unrelated id is not blocked
        assert!(in_flight.begin(1));

        in_flight.finish(2);
        assert!(!in_flight.contains(2));
        assert!(in_flight.begin(2));
    }
}
