use std::sync::Arc;
use std::sync::mpsc::Receiver;

use tokio::sync::mpsc::UnboundedSender;

use crate::config::Config;
use crate::dictionary::LookupCache;
use crate::document::Document;
use crate::host::{EditorHost, SynonymCommand, hover_word, provide_synonym_command};
use crate::hover::HoverState;
use crate::notification::NotificationState;
use crate::picker::PickerState;
use crate::worker::{LookupRequest, LookupResponse};

/// Application state
pub struct App {
    pub document: Document,
    pub hover: HoverState,
    pub picker: PickerState,
    pub notification: NotificationState,
    pub should_quit: bool,
    pub(super) cache: Arc<dyn LookupCache>,
    pub(super) request_tx: Option<UnboundedSender<LookupRequest>>,
    pub(super) response_rx: Option<Receiver<LookupResponse>>,
}

impl App {
    pub fn new(document: Document, cache: Arc<dyn LookupCache>, config: &Config) -> Self {
        let mut app = Self {
            document,
            hover: HoverState::new(config.hover.auto_show),
            picker: PickerState::new(),
            notification: NotificationState::new(),
            should_quit: false,
            cache,
            request_tx: None,
            response_rx: None,
        };
        app.update_hover();
        app
    }

    /// Connect the app to the lookup worker
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<LookupRequest>,
        response_rx: Receiver<LookupResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Track the word under the cursor for the hover
    pub fn update_hover(&mut self) {
        let word = hover_word(&self.document);
        self.hover.set_word(word);
    }

    /// Open the synonym picker for the selection, or the word under the
    /// cursor when nothing is selected.
    pub fn open_synonyms(&mut self) {
        if !self.document.has_selection() {
            let Some(range) = self.document.word_range_at_cursor() else {
                self.notification.show_warning("Select a word to find synonyms");
                return;
            };
            self.document.select_range(&range);
        }

        let selection = self.document.current_selection_text();
        match provide_synonym_command(self.cache.as_ref(), &selection) {
            SynonymCommand::Message(message) => self.notification.show_warning(&message),
            SynonymCommand::Pick(choices) => self.picker.open(choices),
        }
    }

    /// Replace the selection with a picked synonym
    pub fn apply_synonym(&mut self, choice: &str) {
        if self.document.current_selection_text() == choice {
            return;
        }
        if self.document.replace_selection(choice) {
            self.update_hover();
        }
    }

    pub fn save(&mut self) {
        match self.document.save() {
            Ok(path) => {
                let message = format!("Saved {}", path.display());
                self.notification.show(&message);
            }
            Err(e) => {
                log::error!("Save failed: {}", e);
                self.notification.show_error(&format!("Failed to save: {}", e));
            }
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
