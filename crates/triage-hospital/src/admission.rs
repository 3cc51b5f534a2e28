//! `AdmissionQueue` — the global priority-ordered waiting structure.
//!
//! # Ordering
//!
//! Total order over waiting patients:
//!
//!   (category ascending, arrival seconds ascending, insertion sequence)
//!
//! Lower category = more urgent = extracted first; ties broken by earliest
//! arrival; the insertion sequence makes the remaining ties stable without
//! ever being observable as anything other than insertion order.
//!
//! # Why a BTreeMap and not a binary heap
//!
//! A plain heap supports push/pop but not the mid-run re-keying the
//! triage-correction path needs: when a queued patient's category changes,
//! the ordering invariant must be restored before the next extraction.  With
//! a `BTreeMap` keyed by the priority tuple plus a `PatientId → key` side
//! index, re-keying is remove + insert at O(log n), and `pop_next` is the
//! map's first entry.

use std::collections::{BTreeMap, HashMap};

use triage_core::{Category, PatientId};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
struct QueueKey {
    category:     Category,
    arrival_secs: u64,
    seq:          u64,
}

/// Priority queue over waiting patients.  Unbounded; holds ids only.
#[derive(Default)]
pub struct AdmissionQueue {
    entries:  BTreeMap<QueueKey, PatientId>,
    index:    HashMap<PatientId, QueueKey>,
    next_seq: u64,
}

impl AdmissionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a waiting patient.  O(log n); always succeeds.
    pub fn push(&mut self, id: PatientId, category: Category, arrival_secs: u64) {
        let key = QueueKey { category, arrival_secs, seq: self.next_seq };
        self.next_seq += 1;
        self.entries.insert(key, id);
        self.index.insert(id, key);
    }

    /// Remove and return the highest-priority patient, or `None` if empty.
    pub fn pop_next(&mut self) -> Option<PatientId> {
        let (&key, &id) = self.entries.first_key_value()?;
        self.entries.remove(&key);
        self.index.remove(&id);
        Some(id)
    }

    /// The highest-priority patient without removing it.
    pub fn peek_next(&self) -> Option<PatientId> {
        self.entries.first_key_value().map(|(_, &id)| id)
    }

    /// Remove a specific patient.  Returns `false` if it was not queued.
    pub fn remove(&mut self, id: PatientId) -> bool {
        match self.index.remove(&id) {
            Some(key) => {
                self.entries.remove(&key);
                true
            }
            None => false,
        }
    }

    /// Re-key a queued patient after a category change, preserving its
    /// arrival time.  This is the resift step of category reassignment:
    /// without it the next extraction would use the stale order.
    ///
    /// Returns `false` (and does nothing) if the patient is not queued.
    pub fn requeue(&mut self, id: PatientId, new_category: Category) -> bool {
        match self.index.remove(&id) {
            Some(key) => {
                self.entries.remove(&key);
                self.push(id, new_category, key.arrival_secs);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn contains(&self, id: PatientId) -> bool {
        self.index.contains_key(&id)
    }

    /// Current membership in priority order.  Used at close-out to harvest
    /// the unattended list.
    pub fn ids(&self) -> impl Iterator<Item = PatientId> + '_ {
        self.entries.values().copied()
    }

    /// Drop all entries.  Used by close-out after the membership has been
    /// harvested.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
