//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`ViewState`] - Which panels are visible
//! - [`SubmissionState`] - Idle or waiting on the service
//! - [`AppMessage`] - Messages for async communication
//!
//! `App` is the submission controller. Input mode selection, validation and
//! submit, the result and error panels, and navigation all hang off it;
//! [`crate::ui::render`] is a projection of its state.

mod handlers;
mod messages;
mod navigation;
mod presenters;
mod submit;
mod types;

pub use messages::AppMessage;
pub use presenters::{Panels, COPIED_LABEL, COPY_FAILED_PREFIX, COPY_LABEL};
pub use types::{
    BusyRelease, BusyState, Notice, SubmissionState, ViewState, COPY_CONFIRM_DURATION,
    NOTICE_DURATION,
};

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::adapters::{ReqwestHttpClient, SystemClipboard};
use crate::config::AppConfig;
use crate::domain::PageScroll;
use crate::state::FormState;
use crate::traits::{ClipboardProvider, HttpClient, HttpError};

/// Represents the application state
pub struct App {
    /// Compose form: mode, inputs, file selection
    pub form: FormState,
    /// Result and error panels
    pub panels: Panels,
    /// Whether a request is in flight
    pub submission: SubmissionState,
    /// Overlay and submit busy marker
    pub busy: BusyState,
    /// Blocking alert; any key dismisses it
    pub alert: Option<String>,
    /// Transient status line message
    pub notice: Option<Notice>,
    /// Resolved configuration
    pub config: AppConfig,
    /// Analysis service client (shared with the request task)
    pub client: Arc<dyn HttpClient>,
    /// Clipboard used by the copy action
    pub clipboard: Arc<dyn ClipboardProvider>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver for async messages; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Page scroll and scroll-into-view animation
    pub scroll: PageScroll,
    /// Height of the page viewport from the last render
    pub viewport_height: u16,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Tick counter for animations (spinner, cursor)
    pub tick_count: u64,
    /// Set when visible state changed since the last draw
    pub needs_redraw: bool,
}

impl App {
    /// Create an App with explicit adapters.
    pub fn new(
        config: AppConfig,
        client: Arc<dyn HttpClient>,
        clipboard: Arc<dyn ClipboardProvider>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            form: FormState::new(),
            panels: Panels::default(),
            submission: SubmissionState::Idle,
            busy: BusyState::default(),
            alert: None,
            notice: None,
            config,
            client,
            clipboard,
            message_tx,
            message_rx: Some(message_rx),
            scroll: PageScroll::new(),
            viewport_height: 24, // Updated on first render
            should_quit: false,
            tick_count: 0,
            needs_redraw: true,
        }
    }

    /// Create an App talking to the real service and the system clipboard.
    pub fn with_system_adapters(config: AppConfig) -> Result<Self, HttpError> {
        let client = ReqwestHttpClient::with_timeout(config.timeout)?;
        Ok(Self::new(
            config,
            Arc::new(client),
            Arc::new(SystemClipboard::new()),
        ))
    }

    pub fn view(&self) -> ViewState {
        self.panels.view
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
