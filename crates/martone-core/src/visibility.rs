//! One-shot visibility triggers.
//!
//! Elements are registered with a payload and fire at most once: the first
//! report whose visible ratio reaches the threshold moves the record from
//! `Pending` to `Fired`, and no later report can fire it again. Hosts without
//! an intersection observer call [`VisibilityTrigger::fire_all_pending`],
//! which treats every registered element as immediately visible.

/// Observer options mirrored onto the host intersection observer.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: "0px".to_string(),
        }
    }
}

impl ObserverOptions {
    pub fn new(threshold: f64, root_margin: &str) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            root_margin: root_margin.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObservationState {
    Pending,
    Fired,
}

struct ObservedElement<K, T> {
    key: K,
    payload: T,
    state: ObservationState,
}

pub struct VisibilityTrigger<K, T> {
    options: ObserverOptions,
    records: Vec<ObservedElement<K, T>>,
}

impl<K: PartialEq + Clone, T: Clone> VisibilityTrigger<K, T> {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            records: Vec::new(),
        }
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    /// Register an element. Returns `false` if the key is already known, in
    /// which case the existing record (and its state) is kept.
    pub fn register(&mut self, key: K, payload: T) -> bool {
        if self.records.iter().any(|r| r.key == key) {
            return false;
        }
        self.records.push(ObservedElement {
            key,
            payload,
            state: ObservationState::Pending,
        });
        true
    }

    /// Feed one intersection report. Returns the payload when this report is
    /// the element's first threshold crossing.
    pub fn report(&mut self, key: &K, is_intersecting: bool, ratio: f64) -> Option<T> {
        if !is_intersecting || ratio < self.options.threshold {
            return None;
        }
        let record = self
            .records
            .iter_mut()
            .find(|r| &r.key == key && r.state == ObservationState::Pending)?;
        record.state = ObservationState::Fired;
        Some(record.payload.clone())
    }

    /// Fallback for hosts without intersection observation.
    pub fn fire_all_pending(&mut self) -> Vec<(K, T)> {
        self.records
            .iter_mut()
            .filter(|r| r.state == ObservationState::Pending)
            .map(|r| {
                r.state = ObservationState::Fired;
                (r.key.clone(), r.payload.clone())
            })
            .collect()
    }

    pub fn state_of(&self, key: &K) -> Option<ObservationState> {
        self.records.iter().find(|r| &r.key == key).map(|r| r.state)
    }

    pub fn pending_len(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.state == ObservationState::Pending)
            .count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
