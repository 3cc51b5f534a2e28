//! The patient record: immutable identity plus mutable triage state.

use triage_core::{fmt_hms, Area, Category, PatientId, Tick};

/// Where the patient stands in the attention pipeline.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatientStatus {
    /// In the admission queue, not yet attended.
    #[default]
    Waiting,
    /// Extracted from the admission queue and attended.
    Attended,
}

/// A registered patient.
///
/// Identity (id, name, arrival time, area) is fixed at creation; triage state
/// (category, status, attention time) mutates during the run.  Category
/// changes are recorded in a last-in-first-out change log used for audit
/// display, never for scheduling decisions.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Patient {
    id:               PatientId,
    first_name:       String,
    last_name:        String,
    category:         Category,
    status:           PatientStatus,
    area:             Area,
    /// Seconds since simulation start, assigned by the generator.
    arrival_secs:     u64,
    /// Minute at which the patient was attended; `None` until then.
    attention_minute: Option<Tick>,
    changes:          Vec<String>,
}

impl Patient {
    pub fn new(
        id:           PatientId,
        first_name:   impl Into<String>,
        last_name:    impl Into<String>,
        category:     Category,
        arrival_secs: u64,
        area:         Area,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            category,
            status: PatientStatus::Waiting,
            area,
            arrival_secs,
            attention_minute: None,
            changes: Vec::new(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> PatientId {
        self.id
    }

    #[inline]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[inline]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    #[inline]
    pub fn status(&self) -> PatientStatus {
        self.status
    }

    #[inline]
    pub fn area(&self) -> Area {
        self.area
    }

    #[inline]
    pub fn arrival_secs(&self) -> u64 {
        self.arrival_secs
    }

    #[inline]
    pub fn attention_minute(&self) -> Option<Tick> {
        self.attention_minute
    }

    #[inline]
    pub fn is_attended(&self) -> bool {
        self.status == PatientStatus::Attended
    }

    // ── Mutations ─────────────────────────────────────────────────────────

    /// Minutes waited so far, given the current time in seconds since
    /// simulation start.  Integer division: partial minutes don't count.
    pub fn wait_minutes(&self, now_secs: u64) -> u64 {
        (now_secs - self.arrival_secs) / 60
    }

    /// Append a change description to the audit log.
    pub fn record_change(&mut self, description: impl Into<String>) {
        self.changes.push(description.into());
    }

    /// Remove and return the most recent change, or `None` if the log is
    /// empty.
    pub fn pop_last_change(&mut self) -> Option<String> {
        self.changes.pop()
    }

    /// Overwrite the triage category.  Callers wanting an audit trail must
    /// call [`Patient::record_change`] first — the hospital's reassignment
    /// path always does.
    pub fn reassign_category(&mut self, new: Category) {
        self.category = new;
    }

    /// Mark the patient attended at `tick`.  Callers guarantee single
    /// attendance by removing the patient from the admission queue first.
    pub fn mark_attended(&mut self, tick: Tick) {
        self.status = PatientStatus::Attended;
        self.attention_minute = Some(tick);
    }

    // ── Display ───────────────────────────────────────────────────────────

    /// One-line human-readable summary.  The exact format is an observable
    /// contract consumed verbatim by the console layer.
    pub fn summary(&self) -> String {
        let arrived = fmt_hms(self.arrival_secs);
        match self.attention_minute {
            None => format!(
                "[{}] {} | {} | {} | Llegó: {} hrs | Atendido: No atendido",
                self.id,
                self.full_name(),
                self.category,
                self.area,
                arrived,
            ),
            Some(tick) => {
                let attended_secs = tick.as_secs();
                let wait_secs = attended_secs.saturating_sub(self.arrival_secs);
                format!(
                    "[{}] {} | {} | {} | Llegó: {} hrs | Atendido: {} hrs | Espera de: {} hrs",
                    self.id,
                    self.full_name(),
                    self.category,
                    self.area,
                    arrived,
                    fmt_hms(attended_secs),
                    fmt_hms(wait_secs),
                )
            }
        }
    }
}
