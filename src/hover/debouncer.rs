use std::time::{Duration, Instant};

pub const HOVER_DEBOUNCE: Duration = Duration::from_millis(150);

/// Delays hover lookups until the cursor has rested on a word
#[derive(Debug, Default)]
pub struct Debouncer {
    /// When the last cursor change scheduled a lookup
    scheduled_at: Option<Instant>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self) {
        self.schedule_at(Instant::now());
    }

    pub fn schedule_at(&mut self, now: Instant) {
        self.scheduled_at = Some(now);
    }

    pub fn should_execute(&self) -> bool {
        self.should_execute_at(Instant::now())
    }

    pub fn should_execute_at(&self, now: Instant) -> bool {
        self.scheduled_at
            .is_some_and(|at| now.saturating_duration_since(at) >= HOVER_DEBOUNCE)
    }

    pub fn mark_executed(&mut self) {
        self.scheduled_at = None;
    }

    pub fn cancel(&mut self) {
        self.scheduled_at = None;
    }

    pub fn has_pending(&self) -> bool {
        self.scheduled_at.is_some()
    }
}
