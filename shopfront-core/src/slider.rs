//! Promotional slider state machine.
//!
//! Exactly one slide is active at any time. The timer advances the active
//! slide circularly; pointer hover suspends advancement until the pointer
//! leaves, which restarts a full delay.

/// Active slide before and after a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    pub previous: usize,
    pub current: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderState {
    len: usize,
    active: usize,
    hovered: bool,
}

impl SliderState {
    /// A slider over `len` slides with the first one active, or `None`
    /// when there is nothing to rotate.
    #[must_use]
    pub const fn new(len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            len,
            active: 0,
            hovered: false,
        })
    }

    #[must_use]
    pub const fn active(&self) -> usize {
        self.active
    }

    /// Whether slide `idx` should carry the active marker.
    #[must_use]
    pub const fn is_active(&self, idx: usize) -> bool {
        idx == self.active
    }

    /// Timer tick: advance by one unless hovered.
    pub fn tick(&mut self) -> Option<SlideChange> {
        if self.hovered {
            return None;
        }
        let previous = self.active;
        self.active = (self.active + 1) % self.len;
        Some(SlideChange {
            previous,
            current: self.active,
        })
    }

    /// Pointer entered: the timer must stop.
    pub const fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    /// Pointer left: the timer must restart.
    pub const fn pointer_leave(&mut self) {
        self.hovered = false;
    }
}
