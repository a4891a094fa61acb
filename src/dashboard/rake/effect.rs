use std::time::Duration;

use tokio::{sync::mpsc, task::JoinHandle};

use crate::event::{AppEvent, Event};

/// Highlight on the rake button.
///
/// Each trigger cancels the pending reset and schedules a new one, so there
/// is only ever one timer. The generation guards against a reset that was
/// already queued when it got cancelled.
#[derive(Debug)]
pub struct RakeEffect {
    active: bool,
    generation: u64,
    delay: Duration,
    pending_reset: Option<JoinHandle<()>>,
}

impl RakeEffect {
    pub fn new(delay: Duration) -> Self {
        Self {
            active: false,
            generation: 0,
            delay,
            pending_reset: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Turn the highlight on and (re)schedule its reset.
    pub fn trigger(&mut self, sender: mpsc::UnboundedSender<Event>) -> u64 {
        self.cancel_pending();

        self.active = true;
        self.generation = self.generation.wrapping_add(1);

        let generation = self.generation;
        let delay = self.delay;
        self.pending_reset = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = sender.send(Event::App(AppEvent::RakeEffectElapsed(generation)));
        }));

        generation
    }

    /// Clear the highlight if `generation` is the latest trigger.
    /// Returns whether the flag changed.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.active {
            return false;
        }
        self.active = false;
        self.pending_reset = None;
        true
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending_reset.take() {
            handle.abort();
        }
    }
}

impl Drop for RakeEffect {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
