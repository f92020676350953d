//! Transient toast notifications with a timed visibility lifecycle.
//!
//! Each toast moves through three phases: a brief entry delay before it is
//! shown (so the overlay gets a frame to lay out before the entry
//! animation), a fixed display window, and an exit-animation window after
//! which it is dropped. The same primitive serves all three toast kinds;
//! re-raising a kind that is already active restarts its timers. Distinct
//! kinds are independent and may be visible simultaneously.
//!
//! Phase changes are driven by [`ToastManager::tick`] with an explicit
//! `Instant` rather than by detached timers, so the owning session carries
//! no background tasks to cancel on teardown.

use std::time::{Duration, Instant};

/// Delay between raising a toast and marking it visible.
pub const ENTRY_DELAY: Duration = Duration::from_millis(10);

/// How long a toast stays visible before it starts exiting.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(3500);

/// Exit-animation window before a toast is removed.
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

pub const RESET_TOAST_MESSAGE: &str = "The table was restored to its default state.";
pub const UNDO_TOAST_MESSAGE: &str = "The generated table has been undone.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    /// A generated report was applied to the table.
    Configured,
    /// The table was restored to its default state.
    Reset,
    /// The last generated table was undone.
    Reverted,
}

impl ToastKind {
    pub fn title(self) -> &'static str {
        match self {
            ToastKind::Configured => "Table configured",
            ToastKind::Reset => "Table reset",
            ToastKind::Reverted => "Table reverted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Active but not yet visible (entry delay running).
    Raised,
    /// Fully visible.
    Visible,
    /// Exit animation running; removed when it completes.
    Exiting,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    phase: ToastPhase,
    phase_since: Instant,
}

impl Toast {
    fn new(kind: ToastKind, message: String, now: Instant) -> Self {
        Self {
            kind,
            message,
            phase: ToastPhase::Raised,
            phase_since: now,
        }
    }

    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase == ToastPhase::Visible
    }

    /// Fraction of the current phase that has elapsed, clamped to 0..=1.
    /// The overlay uses this to fade the exit animation.
    pub fn phase_progress(&self, now: Instant) -> f32 {
        let duration = self.phase_duration().as_secs_f32();
        if duration <= 0.0 {
            return 1.0;
        }
        (now.saturating_duration_since(self.phase_since).as_secs_f32() / duration).clamp(0.0, 1.0)
    }

    /// Begin the exit animation early (close button).
    pub fn dismiss(&mut self, now: Instant) {
        if self.phase != ToastPhase::Exiting {
            self.phase = ToastPhase::Exiting;
            self.phase_since = now;
        }
    }

    fn phase_duration(&self) -> Duration {
        match self.phase {
            ToastPhase::Raised => ENTRY_DELAY,
            ToastPhase::Visible => DISPLAY_DURATION,
            ToastPhase::Exiting => EXIT_DURATION,
        }
    }

    /// Advance through any elapsed phases. Returns false once the toast has
    /// finished exiting and should be removed.
    fn advance(&mut self, now: Instant) -> bool {
        loop {
            let duration = self.phase_duration();
            let elapsed = now.saturating_duration_since(self.phase_since);
            if elapsed < duration {
                return true;
            }
            match self.phase {
                ToastPhase::Raised => {
                    self.phase = ToastPhase::Visible;
                    self.phase_since += duration;
                }
                ToastPhase::Visible => {
                    self.phase = ToastPhase::Exiting;
                    self.phase_since += duration;
                }
                ToastPhase::Exiting => return false,
            }
        }
    }
}

/// Holds the active toasts, at most one per kind.
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise a toast, restarting the timer chain if one of the same kind is
    /// already active.
    pub fn raise(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) {
        self.toasts.retain(|t| t.kind != kind);
        self.toasts.push(Toast::new(kind, message.into(), now));
        tracing::debug!("Toast raised: {}", kind.title());
    }

    /// Advance toast phases and drop toasts whose exit window has elapsed.
    pub fn tick(&mut self, now: Instant) {
        self.toasts.retain_mut(|t| t.advance(now));
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn active(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Toast> {
        self.toasts.iter_mut()
    }

    pub fn get(&self, kind: ToastKind) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_walks_through_phases() {
        let start = Instant::now();
        let mut toasts = ToastManager::new();
        toasts.raise(ToastKind::Configured, "1 dimension, 4 metrics", start);

        assert_eq!(
            toasts.get(ToastKind::Configured).unwrap().phase(),
            ToastPhase::Raised
        );

        toasts.tick(start + ENTRY_DELAY);
        assert_eq!(
            toasts.get(ToastKind::Configured).unwrap().phase(),
            ToastPhase::Visible
        );

        toasts.tick(start + ENTRY_DELAY + DISPLAY_DURATION);
        assert_eq!(
            toasts.get(ToastKind::Configured).unwrap().phase(),
            ToastPhase::Exiting
        );

        toasts.tick(start + ENTRY_DELAY + DISPLAY_DURATION + EXIT_DURATION);
        assert!(toasts.is_empty());
    }

    #[test]
    fn tick_catches_up_over_skipped_phases() {
        let start = Instant::now();
        let mut toasts = ToastManager::new();
        toasts.raise(ToastKind::Reset, RESET_TOAST_MESSAGE, start);

        // One late tick lands mid-display rather than mid-entry.
        toasts.tick(start + ENTRY_DELAY + Duration::from_millis(100));
        assert!(toasts.get(ToastKind::Reset).unwrap().is_visible());

        // A very late tick removes the toast outright.
        toasts.tick(start + Duration::from_secs(60));
        assert!(toasts.is_empty());
    }

    #[test]
    fn reraising_restarts_the_timer_chain() {
        let start = Instant::now();
        let mut toasts = ToastManager::new();
        toasts.raise(ToastKind::Reverted, UNDO_TOAST_MESSAGE, start);
        toasts.tick(start + ENTRY_DELAY + DISPLAY_DURATION);
        assert_eq!(
            toasts.get(ToastKind::Reverted).unwrap().phase(),
            ToastPhase::Exiting
        );

        let reraise = start + ENTRY_DELAY + DISPLAY_DURATION + Duration::from_millis(100);
        toasts.raise(ToastKind::Reverted, UNDO_TOAST_MESSAGE, reraise);
        assert_eq!(
            toasts.get(ToastKind::Reverted).unwrap().phase(),
            ToastPhase::Raised
        );
        toasts.tick(reraise + ENTRY_DELAY);
        assert!(toasts.get(ToastKind::Reverted).unwrap().is_visible());
        assert_eq!(toasts.active().len(), 1);
    }

    #[test]
    fn distinct_kinds_run_independently() {
        let start = Instant::now();
        let mut toasts = ToastManager::new();
        toasts.raise(ToastKind::Configured, "2 metrics", start);
        toasts.raise(
            ToastKind::Reset,
            RESET_TOAST_MESSAGE,
            start + Duration::from_secs(1),
        );

        toasts.tick(start + Duration::from_secs(1) + ENTRY_DELAY);
        assert_eq!(toasts.active().len(), 2);
        assert!(toasts.get(ToastKind::Configured).unwrap().is_visible());
        assert!(toasts.get(ToastKind::Reset).unwrap().is_visible());

        // The earlier toast expires first; the later one keeps running.
        toasts.tick(start + ENTRY_DELAY + DISPLAY_DURATION + EXIT_DURATION);
        assert!(toasts.get(ToastKind::Configured).is_none());
        assert!(toasts.get(ToastKind::Reset).is_some());
    }

    #[test]
    fn dismiss_starts_exit_early() {
        let start = Instant::now();
        let mut toasts = ToastManager::new();
        toasts.raise(ToastKind::Configured, "1 metric", start);
        toasts.tick(start + ENTRY_DELAY);

        let dismissed_at = start + Duration::from_millis(500);
        for toast in toasts.iter_mut() {
            toast.dismiss(dismissed_at);
        }
        assert_eq!(
            toasts.get(ToastKind::Configured).unwrap().phase(),
            ToastPhase::Exiting
        );

        toasts.tick(dismissed_at + EXIT_DURATION);
        assert!(toasts.is_empty());
    }
}
