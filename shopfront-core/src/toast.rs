//! Toast lifecycle, driven by an explicit millisecond clock.
//!
//! ```text
//!  push ──► Armed(dismiss_ms) ──deadline──► Leaving(fade_ms) ──deadline──► removed
//!              │   ▲                            ▲
//!        enter │   │ leave (resume_ms)          │ view / dismiss
//!              ▼   │                            │
//!              Held ────────────────────────────┘
//! ```
//!
//! The board never reads a clock itself; the web layer passes `now_ms` in and
//! keeps one cancellable timer pointed at [`ToastBoard::next_deadline`].
use crate::cart::AddOutcome;
use crate::config::TimingConfig;

pub type ToastId = u64;

/// What a toast shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub title: String,
    pub subtitle: String,
    pub img: String,
}

/// Message keys for the add-to-cart toast, resolved through i18n by callers.
#[must_use]
pub const fn add_outcome_title_key(outcome: AddOutcome) -> &'static str {
    match outcome {
        AddOutcome::Added => "toast.added",
        AddOutcome::QuantityUpdated => "toast.updated",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Visible, dismissal scheduled at the deadline.
    Armed { dismiss_at: u64 },
    /// Hovered; no dismissal pending.
    Held,
    /// Fading out, removed at the deadline.
    Leaving { remove_at: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: ToastId,
    pub message: ToastMessage,
    pub phase: ToastPhase,
}

impl ToastEntry {
    #[must_use]
    pub const fn is_leaving(&self) -> bool {
        matches!(self.phase, ToastPhase::Leaving { .. })
    }

    const fn deadline(&self) -> Option<u64> {
        match self.phase {
            ToastPhase::Armed { dismiss_at } => Some(dismiss_at),
            ToastPhase::Held => None,
            ToastPhase::Leaving { remove_at } => Some(remove_at),
        }
    }
}

/// Stack of independently timed toasts, oldest first.
#[derive(Debug, Clone)]
pub struct ToastBoard {
    dismiss_ms: u64,
    resume_ms: u64,
    fade_ms: u64,
    next_id: ToastId,
    entries: Vec<ToastEntry>,
}

impl ToastBoard {
    #[must_use]
    pub fn new(timing: &TimingConfig) -> Self {
        Self {
            dismiss_ms: u64::from(timing.toast_dismiss_ms),
            resume_ms: u64::from(timing.toast_resume_ms),
            fade_ms: u64::from(timing.toast_fade_ms),
            next_id: 1,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ToastEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    fn get_mut(&mut self, id: ToastId) -> Option<&mut ToastEntry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    /// Show a new toast; it dismisses itself after the full delay.
    pub fn push(&mut self, message: ToastMessage, now_ms: u64) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ToastEntry {
            id,
            message,
            phase: ToastPhase::Armed {
                dismiss_at: now_ms.saturating_add(self.dismiss_ms),
            },
        });
        id
    }

    /// Pointer entered a toast: cancel its pending dismissal.
    pub fn pointer_enter(&mut self, id: ToastId) {
        if let Some(entry) = self.get_mut(id)
            && matches!(entry.phase, ToastPhase::Armed { .. })
        {
            entry.phase = ToastPhase::Held;
        }
    }

    /// Pointer left a toast: re-arm with the shorter resume delay.
    pub fn pointer_leave(&mut self, id: ToastId, now_ms: u64) {
        let resume_at = now_ms.saturating_add(self.resume_ms);
        if let Some(entry) = self.get_mut(id)
            && !entry.is_leaving()
        {
            entry.phase = ToastPhase::Armed {
                dismiss_at: resume_at,
            };
        }
    }

    /// Start the exit transition right away (the "view" action).
    pub fn dismiss(&mut self, id: ToastId, now_ms: u64) {
        let remove_at = now_ms.saturating_add(self.fade_ms);
        if let Some(entry) = self.get_mut(id)
            && !entry.is_leaving()
        {
            entry.phase = ToastPhase::Leaving { remove_at };
        }
    }

    /// Advance every toast to `now_ms`. Returns `true` if anything changed.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        let fade_ms = self.fade_ms;
        let before = self.entries.len();
        let mut changed = false;
        for entry in &mut self.entries {
            if let ToastPhase::Armed { dismiss_at } = entry.phase
                && dismiss_at <= now_ms
            {
                entry.phase = ToastPhase::Leaving {
                    remove_at: dismiss_at.saturating_add(fade_ms),
                };
                changed = true;
            }
        }
        self.entries.retain(|entry| match entry.phase {
            ToastPhase::Leaving { remove_at } => remove_at > now_ms,
            _ => true,
        });
        changed || self.entries.len() != before
    }

    /// Earliest pending deadline across all toasts.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().filter_map(ToastEntry::deadline).min()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
