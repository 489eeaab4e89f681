//! Loading screen lifecycle.
//!
//! The screen is marked loaded a fixed time after the window `load` event,
//! or at the fallback deadline if `load` is late or never arrives, then
//! removed once its fade has played. Each step happens once.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderPhase {
    Visible,
    Fading,
    Removed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderEvent {
    /// Add the `loaded` class and release the body `loading` state.
    MarkLoaded,
    /// Detach the screen from the document.
    Remove,
}

#[derive(Debug)]
pub struct LoadingScreen {
    created_at: f64,
    loaded_at: Option<f64>,
    fade_started: Option<f64>,
    phase: LoaderPhase,
}

impl LoadingScreen {
    pub fn new(created_at: f64) -> Self {
        Self {
            created_at,
            loaded_at: None,
            fade_started: None,
            phase: LoaderPhase::Visible,
        }
    }

    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    pub fn on_window_load(&mut self, now: f64) {
        if self.loaded_at.is_none() {
            self.loaded_at = Some(now);
        }
    }

    fn hide_deadline(&self) -> f64 {
        let fallback = self.created_at + LOADER_FALLBACK_MS;
        match self.loaded_at {
            Some(t) => (t + LOADER_AFTER_LOAD_MS).min(fallback),
            None => fallback,
        }
    }

    /// Earliest timestamp at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<f64> {
        match self.phase {
            LoaderPhase::Visible => Some(self.hide_deadline()),
            LoaderPhase::Fading => self.fade_started.map(|t| t + LOADER_FADE_MS),
            LoaderPhase::Removed => None,
        }
    }

    pub fn tick(&mut self, now: f64) -> Vec<LoaderEvent> {
        let mut events = Vec::new();
        if self.phase == LoaderPhase::Visible {
            let deadline = self.hide_deadline();
            if now >= deadline {
                self.phase = LoaderPhase::Fading;
                self.fade_started = Some(deadline);
                events.push(LoaderEvent::MarkLoaded);
            }
        }
        if self.phase == LoaderPhase::Fading {
            if let Some(t) = self.fade_started {
                if now >= t + LOADER_FADE_MS {
                    self.phase = LoaderPhase::Removed;
                    events.push(LoaderEvent::Remove);
                }
            }
        }
        events
    }
}
