//! Transient notifications with timed, two-phase dismissal.
//!
//! Each notification enters shortly after creation, hides on timeout or
//! explicit dismissal, and is removed once the exit transition has had time
//! to play. The center only tracks timing; the host applies the returned
//! [`NotificationEvent`]s to the page.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Info => "info-circle",
            NotificationKind::Success => "check-circle",
            NotificationKind::Error => "exclamation-circle",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationPhase {
    Entering,
    Shown,
    Hiding,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationEvent {
    Show(NotificationId),
    Hide(NotificationId),
    Remove(NotificationId),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NotifyTimings {
    pub enter_delay_ms: f64,
    pub timeout_ms: f64,
    pub exit_ms: f64,
}

impl Default for NotifyTimings {
    fn default() -> Self {
        Self {
            enter_delay_ms: NOTIFY_ENTER_DELAY_MS,
            timeout_ms: NOTIFY_TIMEOUT_MS,
            exit_ms: NOTIFY_EXIT_MS,
        }
    }
}

#[derive(Clone, Debug)]
struct Notification {
    id: NotificationId,
    message: String,
    kind: NotificationKind,
    created_at: f64,
    hide_at: Option<f64>,
    phase: NotificationPhase,
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
    timings: NotifyTimings,
    next_id: u32,
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(timings: NotifyTimings) -> Self {
        Self {
            timings,
            next_id: 0,
            items: Vec::new(),
        }
    }

    pub fn timings(&self) -> NotifyTimings {
        self.timings
    }

    pub fn notify(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: f64,
    ) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.items.push(Notification {
            id,
            message: message.into(),
            kind,
            created_at: now,
            hide_at: None,
            phase: NotificationPhase::Entering,
        });
        id
    }

    /// Start the dismissal sequence. Returns `false` (and does nothing) when
    /// the notification is already hiding or gone.
    pub fn dismiss(&mut self, id: NotificationId, now: f64) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) if n.phase != NotificationPhase::Hiding => {
                n.phase = NotificationPhase::Hiding;
                n.hide_at = Some(now);
                true
            }
            _ => false,
        }
    }

    /// Advance timers. A single late tick may emit several transitions for
    /// one notification, always in show → hide → remove order.
    pub fn tick(&mut self, now: f64) -> Vec<NotificationEvent> {
        let t = self.timings;
        let mut events = Vec::new();
        for n in self.items.iter_mut() {
            if n.phase == NotificationPhase::Entering && now >= n.created_at + t.enter_delay_ms {
                n.phase = NotificationPhase::Shown;
                events.push(NotificationEvent::Show(n.id));
            }
            if n.phase != NotificationPhase::Hiding && now >= n.created_at + t.timeout_ms {
                n.phase = NotificationPhase::Hiding;
                n.hide_at = Some(n.created_at + t.timeout_ms);
                events.push(NotificationEvent::Hide(n.id));
            }
            if let Some(hide_at) = n.hide_at {
                if now >= hide_at + t.exit_ms {
                    events.push(NotificationEvent::Remove(n.id));
                }
            }
        }
        self.items.retain(|n| {
            !events
                .iter()
                .any(|e| matches!(e, NotificationEvent::Remove(id) if *id == n.id))
        });
        events
    }

    /// Earliest timestamp at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<f64> {
        let t = self.timings;
        self.items
            .iter()
            .map(|n| match (n.phase, n.hide_at) {
                (NotificationPhase::Entering, _) => n.created_at + t.enter_delay_ms,
                (NotificationPhase::Shown, _) => n.created_at + t.timeout_ms,
                (NotificationPhase::Hiding, Some(h)) => h + t.exit_ms,
                (NotificationPhase::Hiding, None) => n.created_at,
            })
            .min_by(|a, b| a.total_cmp(b))
    }

    pub fn phase(&self, id: NotificationId) -> Option<NotificationPhase> {
        self.items.iter().find(|n| n.id == id).map(|n| n.phase)
    }

    pub fn message(&self, id: NotificationId) -> Option<(&str, NotificationKind)> {
        self.items
            .iter()
            .find(|n| n.id == id)
            .map(|n| (n.message.as_str(), n.kind))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
