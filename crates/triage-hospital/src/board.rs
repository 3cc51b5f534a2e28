//! Bounded per-area queues that patients enter after being attended.
//!
//! Capacity is the whole point here: once an area's queue is full, further
//! admissions are silently dropped — the patient keeps its attended status
//! but is never routed into the area.  The drop is observable only through
//! the queue size staying pinned at capacity.

use triage_core::{Area, PatientId};

/// One area's bounded queue of attended patients.
pub struct AreaQueue {
    area:     Area,
    capacity: usize,
    patients: Vec<PatientId>,
}

impl AreaQueue {
    pub fn new(area: Area, capacity: usize) -> Self {
        Self { area, capacity, patients: Vec::new() }
    }

    #[inline]
    pub fn area(&self) -> Area {
        self.area
    }

    /// Insert if below capacity.  Returns `false` on saturation (no-op).
    pub fn admit(&mut self, id: PatientId) -> bool {
        if self.is_saturated() {
            return false;
        }
        self.patients.push(id);
        true
    }

    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.patients.len() >= self.capacity
    }

    /// Current members, in admission order.  Priority-ordered views are
    /// produced by the hospital, which can see the patients' current keys.
    #[inline]
    pub fn ids(&self) -> &[PatientId] {
        &self.patients
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}

// ── AreaBoard ─────────────────────────────────────────────────────────────────

/// The registry of all three attention areas, built once at hospital
/// construction with a single shared capacity.
pub struct AreaBoard {
    queues: [AreaQueue; 3],
}

impl AreaBoard {
    pub fn new(capacity: usize) -> Self {
        Self {
            queues: Area::ALL.map(|area| AreaQueue::new(area, capacity)),
        }
    }

    fn idx(area: Area) -> usize {
        match area {
            Area::Sapu           => 0,
            Area::AdultEmergency => 1,
            Area::Pediatric      => 2,
        }
    }

    #[inline]
    pub fn queue(&self, area: Area) -> &AreaQueue {
        &self.queues[Self::idx(area)]
    }

    /// Route an attended patient into its area.  `false` on saturation.
    pub fn admit(&mut self, area: Area, id: PatientId) -> bool {
        self.queues[Self::idx(area)].admit(id)
    }

    #[inline]
    pub fn is_saturated(&self, area: Area) -> bool {
        self.queue(area).is_saturated()
    }
}
