//! Type definitions for the application state.
//!
//! - [`ViewState`] - Which panels are showing
//! - [`SubmissionState`] - Whether a request is in flight
//! - [`BusyState`] / [`BusyRelease`] - Overlay and busy marker, and the guard
//!   that clears them
//! - [`Notice`] - Transient, non-blocking status line message

use std::time::{Duration, Instant};

/// How long the copy button shows its confirmation label.
pub const COPY_CONFIRM_DURATION: Duration = Duration::from_secs(2);

/// How long a notice stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_secs(4);

/// Which part of the page is showing.
///
/// The error panel is shown below the compose form without hiding it; the
/// result panel replaces the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Compose,
    Result,
    Error,
}

impl ViewState {
    pub fn compose_visible(self) -> bool {
        self != ViewState::Result
    }

    pub fn result_visible(self) -> bool {
        self == ViewState::Result
    }

    pub fn error_visible(self) -> bool {
        self == ViewState::Error
    }
}

/// Whether an analysis request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// Visual busy state shown while a request is in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusyState {
    /// Blocking overlay with spinner
    pub overlay_visible: bool,
    /// Submit button shows its busy label
    pub submit_busy: bool,
}

impl BusyState {
    pub fn engage(&mut self) {
        self.overlay_visible = true;
        self.submit_busy = true;
    }

    pub fn release(&mut self) {
        self.overlay_visible = false;
        self.submit_busy = false;
    }

    pub fn is_engaged(&self) -> bool {
        self.overlay_visible || self.submit_busy
    }
}

/// Clears a [`BusyState`] when dropped, on every exit path including panics.
#[derive(Debug)]
pub struct BusyRelease<'a> {
    busy: &'a mut BusyState,
}

impl<'a> BusyRelease<'a> {
    pub fn new(busy: &'a mut BusyState) -> Self {
        Self { busy }
    }
}

impl Drop for BusyRelease<'_> {
    fn drop(&mut self) {
        self.busy.release();
    }
}

/// A transient message in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub expires_at: Instant,
}

impl Notice {
    pub fn new(text: impl Into<String>, now: Instant) -> Self {
        Self {
            text: text.into(),
            expires_at: now + NOTICE_DURATION,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
