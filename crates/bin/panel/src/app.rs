//! Panel state and key dispatch.
//!
//! The [`Panel`] bundles every UI sink in one struct constructed once: the
//! last fetched snapshot, the threshold input field, and the diagnostic log.
//! Keystrokes map to actions through a single dispatch table; every command
//! goes through the one consolidated refresh path.

use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use lumo_domain::status::StatusSnapshot;

use crate::client::ApiClient;
use crate::ui;

const LOG_CAPACITY: usize = 100;

/// State of the threshold input field.
#[derive(Debug, Default)]
struct ThresholdInput {
    buffer: String,
    editing: bool,
}

/// The control panel: UI state plus the API client driving it.
pub struct Panel {
    client: ApiClient,
    snapshot: Option<StatusSnapshot>,
    input: ThresholdInput,
    log: VecDeque<String>,
    should_exit: bool,
}

impl Panel {
    /// Create a panel talking to the given API.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            snapshot: None,
            input: ThresholdInput::default(),
            log: VecDeque::new(),
            should_exit: false,
        }
    }

    /// The last successfully fetched snapshot, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<&StatusSnapshot> {
        self.snapshot.as_ref()
    }

    /// Current contents of the threshold input field.
    #[must_use]
    pub fn threshold_input(&self) -> &str {
        &self.input.buffer
    }

    /// Whether the threshold field is being edited.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.input.editing
    }

    /// Diagnostic log entries, oldest first.
    pub fn log_entries(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }

    /// Whether the user asked to quit.
    #[must_use]
    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Fetch the latest status and rebuild the rendered state from it.
    ///
    /// On failure the error lands in the diagnostic log and the previously
    /// rendered state is left untouched. No retry.
    pub async fn refresh(&mut self) {
        match self.client.fetch_status().await {
            Ok(snapshot) => {
                if !self.input.editing {
                    self.input.buffer = ui::format_threshold(snapshot.darkness_threshold);
                }
                self.snapshot = Some(snapshot);
            }
            Err(err) => self.log_failure("status fetch failed", &err),
        }
    }

    /// Dispatch a key event to its action.
    pub async fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.input.editing {
            self.handle_edit_key(key.code).await;
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
            KeyCode::Char('a') => self.enable_auto().await,
            KeyCode::Char('o') => self.manual(true).await,
            KeyCode::Char('f') => self.manual(false).await,
            KeyCode::Char('t') => self.input.editing = true,
            KeyCode::Char('r') => self.refresh().await,
            _ => {}
        }
    }

    async fn handle_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.cancel_threshold_edit(),
            KeyCode::Enter => self.submit_threshold().await,
            KeyCode::Backspace => {
                self.input.buffer.pop();
            }
            KeyCode::Char(c) => self.input.buffer.push(c),
            _ => {}
        }
    }

    async fn enable_auto(&mut self) {
        if let Err(err) = self.client.set_auto(true).await {
            self.log_failure("auto command failed", &err);
            return;
        }
        self.refresh().await;
    }

    async fn manual(&mut self, turn_on: bool) {
        if let Err(err) = self.client.set_manual(turn_on).await {
            self.log_failure("manual command failed", &err);
            return;
        }
        self.refresh().await;
    }

    async fn submit_threshold(&mut self) {
        // Malformed input never reaches the network.
        let Ok(value) = self.input.buffer.trim().parse::<f64>() else {
            self.cancel_threshold_edit();
            return;
        };
        self.input.editing = false;
        if let Err(err) = self.client.set_threshold(value).await {
            self.log_failure("threshold command failed", &err);
            return;
        }
        self.refresh().await;
    }

    fn cancel_threshold_edit(&mut self) {
        self.input.editing = false;
        self.input.buffer = self
            .snapshot
            .as_ref()
            .map(|snapshot| ui::format_threshold(snapshot.darkness_threshold))
            .unwrap_or_default();
    }

    fn log_failure(&mut self, context: &str, err: &dyn std::fmt::Display) {
        if self.log.len() == LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(format!("{context}: {err}"));
    }
}
