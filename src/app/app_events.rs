use std::io;
use std::sync::mpsc::TryRecvError;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use super::app_state::App;
use crate::hover::HoverUpdate;
use crate::picker::picker_events;
use crate::worker::LookupRequest;

mod global;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.dispatch_hover_request();
        self.poll_lookup_responses();
        self.notification.clear_if_expired();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if global::handle_global_keys(self, key) {
            return;
        }

        if self.picker.is_visible() {
            picker_events::handle_picker_key(self, key);
            return;
        }

        if key.code == KeyCode::Esc && self.notification.current().is_some() {
            self.notification.dismiss();
            return;
        }

        self.document.input(key);
        self.update_hover();
    }

    fn handle_paste_event(&mut self, text: String) {
        if self.picker.is_visible() {
            self.picker.filter_textarea_mut().insert_str(&text);
            self.picker.on_filter_changed();
            return;
        }

        self.document.paste(&text);
        self.update_hover();
    }

    /// Send the hover lookup once the cursor has settled.
    /// Returns true when a request went out.
    pub(crate) fn dispatch_hover_request(&mut self) -> bool {
        let Some((word, request_id)) = self.hover.take_due_request() else {
            return false;
        };

        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(LookupRequest::Hover { word, request_id }).is_ok());

        if !sent {
            log::warn!("No lookup worker for hover request {}", request_id);
            self.hover.abandon_request();
        }
        sent
    }

    /// Drain lookup responses. Returns true if anything changed.
    pub(crate) fn poll_lookup_responses(&mut self) -> bool {
        let Some(rx) = &self.response_rx else {
            return false;
        };

        let mut responses = Vec::new();
        let mut disconnected = false;
        loop {
            match rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        let had_responses = !responses.is_empty();

        for response in responses {
            if let HoverUpdate::Failed(message) = self.hover.apply_response(response) {
                self.notification.show_warning(&message);
            }
        }

        if disconnected {
            log::error!("Lookup worker disconnected");
            self.hover.abandon_request();
            self.request_tx = None;
            self.response_rx = None;
            self.notification.show_error("Dictionary lookups stopped unexpectedly");
        }

        had_responses || disconnected
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
