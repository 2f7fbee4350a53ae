//! Hover state management
//!
//! Tracks the word under the cursor, the lookup in flight for it and the
//! lines to display. Only the response to the latest request is applied;
//! answers for words the cursor has already left are dropped.

use std::time::Instant;

use super::debouncer::Debouncer;
use crate::worker::LookupResponse;

/// What applying a lookup response did to the hover
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverUpdate {
    /// Stale or unexpected response
    Ignored,
    /// Lines are ready to display
    Shown,
    /// The dictionary knows nothing about the word
    NoDefinitions,
    Failed(String),
}

#[derive(Debug)]
pub struct HoverState {
    /// Whether hovers show automatically (toggled with Ctrl+T)
    pub enabled: bool,
    word: Option<String>,
    lines: Option<Vec<String>>,
    pending_request: Option<u64>,
    next_request_id: u64,
    debouncer: Debouncer,
}

impl HoverState {
    pub fn new(auto_show: bool) -> Self {
        Self {
            enabled: auto_show,
            word: None,
            lines: None,
            pending_request: None,
            next_request_id: 1,
            debouncer: Debouncer::new(),
        }
    }

    /// Toggle hovers; turning them back on re-requests the current word
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        if self.enabled && self.word.is_some() && self.lines.is_none() {
            self.debouncer.schedule();
        }
    }

    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// Record the word under the cursor. Returns true when it changed.
    pub fn set_word(&mut self, word: Option<String>) -> bool {
        self.set_word_at(word, Instant::now())
    }

    pub fn set_word_at(&mut self, word: Option<String>, now: Instant) -> bool {
        if self.word == word {
            return false;
        }

        self.word = word;
        self.lines = None;
        self.pending_request = None;

        if self.word.is_some() {
            self.debouncer.schedule_at(now);
        } else {
            self.debouncer.cancel();
        }
        true
    }

    /// Next lookup to send, once the cursor has rested on a word
    pub fn take_due_request(&mut self) -> Option<(String, u64)> {
        self.take_due_request_at(Instant::now())
    }

    pub fn take_due_request_at(&mut self, now: Instant) -> Option<(String, u64)> {
        if !self.enabled || !self.debouncer.should_execute_at(now) {
            return None;
        }
        self.debouncer.mark_executed();

        let word = self.word.clone()?;
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.pending_request = Some(request_id);

        Some((word, request_id))
    }

    pub fn apply_response(&mut self, response: LookupResponse) -> HoverUpdate {
        if self.pending_request != Some(response.request_id()) {
            log::debug!("Dropping stale hover response {}", response.request_id());
            return HoverUpdate::Ignored;
        }
        self.pending_request = None;

        match response {
            LookupResponse::Hover {
                lines: Some(lines), ..
            } => {
                self.lines = Some(lines);
                HoverUpdate::Shown
            }
            LookupResponse::Hover { lines: None, .. } => HoverUpdate::NoDefinitions,
            LookupResponse::Failed { message, .. } => HoverUpdate::Failed(message),
        }
    }

    /// Forget the in-flight request, e.g. when there is no worker to send it to
    pub fn abandon_request(&mut self) {
        self.pending_request = None;
    }

    pub fn is_loading(&self) -> bool {
        self.pending_request.is_some()
    }

    pub fn lines(&self) -> Option<&[String]> {
        self.lines.as_deref()
    }

    pub fn should_show(&self) -> bool {
        self.enabled && self.lines.is_some()
    }
}

impl Default for HoverState {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
#[path = "hover_state_tests.rs"]
mod hover_state_tests;
