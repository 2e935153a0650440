//! Auto-dismissing notifications
//!
//! The panel shows one info line and one warning line. Posting a message
//! clears both, fills the slot for its severity, and schedules a dismiss
//! after a fixed display duration.
//!
//! Every post bumps a generation counter and cancels the previous pending
//! dismiss. A dismiss only clears slots still holding its own generation,
//! so a late timer can never blank a newer message.
//!
//! ```text
//! post("copied")  ──▶ gen 1, timer A ──────────┐ (cancelled)
//! post("warning") ──▶ gen 2, timer B ──▶ expire(2) clears "warning"
//! ```

use crossbeam_channel::{after, bounded, select, Sender};
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// How long a notification stays visible
pub const DEFAULT_DISPLAY_DURATION: Duration = Duration::from_secs(5);

/// Display slot of a notification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warning,
}

impl Severity {
    /// Text color used by the panel
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Info => "#76b900",
            Severity::Warning => "#d48f09",
        }
    }
}

/// A message currently on display
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub text: String,
    pub generation: u64,
}

#[derive(Default)]
struct BoardState {
    info: Option<Notification>,
    warning: Option<Notification>,
    generation: u64,
    /// Dropping this sender cancels the pending dismiss timer
    pending_dismiss: Option<Sender<()>>,
}

impl BoardState {
    fn expire(&mut self, generation: u64) -> bool {
        let mut cleared = false;
        for slot in [&mut self.info, &mut self.warning] {
            if slot.as_ref().is_some_and(|n| n.generation == generation) {
                *slot = None;
                cleared = true;
            }
        }
        cleared
    }
}

/// Shared notification slots. Clones share the same state.
#[derive(Clone)]
pub struct NotificationBoard {
    state: Arc<Mutex<BoardState>>,
    display_duration: Option<Duration>,
}

impl NotificationBoard {
    /// Board that dismisses messages after [`DEFAULT_DISPLAY_DURATION`]
    pub fn new() -> Self {
        Self::with_display_duration(DEFAULT_DISPLAY_DURATION)
    }

    pub fn with_display_duration(duration: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(BoardState::default())),
            display_duration: Some(duration),
        }
    }

    /// Board without timers. The host calls [`NotificationBoard::expire`]
    /// from its own timer.
    pub fn manual() -> Self {
        Self {
            state: Arc::new(Mutex::new(BoardState::default())),
            display_duration: None,
        }
    }

    /// Show a message, replacing whatever is on display. Returns the
    /// message's generation.
    pub fn post(&self, severity: Severity, text: impl Into<String>) -> u64 {
        let text = text.into();
        match severity {
            Severity::Info => log::info!("{}", text),
            Severity::Warning => log::warn!("{}", text),
        }

        let mut state = self.state.lock();
        state.generation += 1;
        let generation = state.generation;

        let notification = Notification {
            severity,
            text,
            generation,
        };
        state.info = None;
        state.warning = None;
        match severity {
            Severity::Info => state.info = Some(notification),
            Severity::Warning => state.warning = Some(notification),
        }

        // Replacing the sender cancels the previous timer
        state.pending_dismiss = self
            .display_duration
            .and_then(|duration| self.spawn_dismiss(generation, duration));

        generation
    }

    pub fn info(&self, text: impl Into<String>) -> u64 {
        self.post(Severity::Info, text)
    }

    pub fn warn(&self, text: impl Into<String>) -> u64 {
        self.post(Severity::Warning, text)
    }

    /// Clear the message of `generation` if it is still on display.
    /// Returns true if something was cleared.
    pub fn expire(&self, generation: u64) -> bool {
        self.state.lock().expire(generation)
    }

    /// Clear everything and cancel the pending dismiss
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.info = None;
        state.warning = None;
        state.pending_dismiss = None;
    }

    pub fn info_message(&self) -> Option<Notification> {
        self.state.lock().info.clone()
    }

    pub fn warning_message(&self) -> Option<Notification> {
        self.state.lock().warning.clone()
    }

    /// Whichever message is on display
    pub fn current(&self) -> Option<Notification> {
        let state = self.state.lock();
        state.warning.clone().or_else(|| state.info.clone())
    }

    /// Generation of the most recent post
    pub fn generation(&self) -> u64 {
        self.state.lock().generation
    }

    fn spawn_dismiss(&self, generation: u64, duration: Duration) -> Option<Sender<()>> {
        let (cancel_tx, cancel_rx) = bounded::<()>(1);
        let state = Arc::clone(&self.state);

        let spawned = thread::Builder::new()
            .name("portal-notification".to_string())
            .spawn(move || {
                let timeout = after(duration);
                select! {
                    recv(timeout) -> _ => {
                        if state.lock().expire(generation) {
                            log::debug!("Notification {} dismissed", generation);
                        }
                    }
                    recv(cancel_rx) -> _ => {}
                }
            });

        match spawned {
            Ok(_) => Some(cancel_tx),
            Err(e) => {
                log::warn!("Failed to start notification timer: {}", e);
                None
            }
        }
    }
}

impl Default for NotificationBoard {
    fn default() -> Self {
        Self::new()
    }
}
