use std::time::Duration;

/// Quiet period after the last resize before transitions are re-enabled.
pub const RESIZE_SETTLE: Duration = Duration::from_millis(200);

/// Identifies one resize event. Only the newest ticket can settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResizeTicket(u64);

/// Tracks whether the window is being resized.
///
/// Every resize hands out a new ticket and restarts the quiet period; the
/// caller schedules `settle` after [`RESIZE_SETTLE`]. Stale tickets from
/// superseded timers are ignored, so only the last resize of a burst ends
/// the resizing phase.
#[derive(Debug, Clone, Default)]
pub struct ResizeDebounce {
    generation: u64,
    resizing: bool,
}

impl ResizeDebounce {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resized(&mut self) -> ResizeTicket {
        self.generation = self.generation.wrapping_add(1);
        self.resizing = true;
        ResizeTicket(self.generation)
    }

    /// Returns `true` when `ticket` ended the resizing phase.
    pub fn settle(&mut self, ticket: ResizeTicket) -> bool {
        if !self.resizing || ticket.0 != self.generation {
            return false;
        }

        self.resizing = false;
        true
    }

    /// Drop any pending timer, e.g. when the component goes away.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.resizing = false;
    }

    pub fn is_resizing(&self) -> bool {
        self.resizing
    }

    /// The ticket that will end the current resizing phase.
    pub fn pending(&self) -> Option<ResizeTicket> {
        self.resizing.then_some(ResizeTicket(self.generation))
    }
}
