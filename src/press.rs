//! Press-duration state machine for a single physical button.
//!
//! Classifies a press/release pair into short, long, or very-long bands.
//! Time never comes from an ambient clock: the host loop passes `Instant`s
//! in, asks for the next deadline, and drains due events via [`PressTimer::advance`].
//! This keeps the machine deterministic under test and trivially single-threaded.

use std::time::{Duration, Instant};

use strum_macros::Display;
use tracing::debug;

/// The very-long threshold sits at `long_press * (1 + VERY_LONG_FACTOR)`
/// after activation: the second deadline is armed for `5T` when the first
/// fires at `T`.
pub const VERY_LONG_FACTOR: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum PressPhase {
    Disabled,
    Short,
    Long,
    VeryLong,
}

/// Emitted when a press crosses a duration boundary, or when a short press
/// is released. Each maps to exactly one score mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressEvent {
    Short,
    Long,
    VeryLong,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    fire_at: Instant,
    target: PressPhase,
}

pub struct PressTimer {
    long_press: Duration,
    phase: PressPhase,
    // At most one live deadline; arming replaces (and thereby cancels) the
    // previous one, so a stale timeout can never fire.
    pending: Option<Pending>,
}

impl PressTimer {
    pub fn new(long_press: Duration) -> Self {
        Self {
            long_press,
            phase: PressPhase::Disabled,
            pending: None,
        }
    }

    pub fn phase(&self) -> PressPhase {
        self.phase
    }

    /// Deadline the host loop should wake at, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.fire_at)
    }

    fn set_phase(&mut self, phase: PressPhase) {
        debug!("press phase: {} -> {}", self.phase, phase);
        self.phase = phase;
    }

    fn arm(&mut self, fire_at: Instant, target: PressPhase) {
        self.pending = Some(Pending { fire_at, target });
    }

    /// Button pressed. The host delivers activate/deactivate in strict
    /// alternation; a nested activate is a host bug. Release builds close
    /// the stale cycle instead of leaking its timer.
    pub fn on_activate(&mut self, now: Instant) {
        debug_assert_eq!(
            self.phase,
            PressPhase::Disabled,
            "activate delivered while a press cycle is still open"
        );
        debug_assert!(self.pending.is_none());
        self.pending = None;

        self.set_phase(PressPhase::Short);
        self.arm(now + self.long_press, PressPhase::Long);
    }

    /// Fires the pending deadline if it is due at `now` (inclusive: a press
    /// held exactly `T` counts as long). Returns the event the caller must
    /// apply, or `None` when nothing is due.
    pub fn advance(&mut self, now: Instant) -> Option<PressEvent> {
        let fire_at = self.pending.as_ref()?.fire_at;
        if now < fire_at {
            return None;
        }
        let fired = self.pending.take()?;

        match fired.target {
            PressPhase::Long => {
                self.set_phase(PressPhase::Long);
                // Re-armed relative to the threshold just crossed, so the
                // very-long boundary stays at 6T after activation even when
                // the host polls late.
                self.arm(
                    fire_at + self.long_press * VERY_LONG_FACTOR,
                    PressPhase::VeryLong,
                );
                Some(PressEvent::Long)
            }
            PressPhase::VeryLong => {
                self.set_phase(PressPhase::VeryLong);
                // Terminal: holding past this point has no further effect.
                self.set_phase(PressPhase::Disabled);
                Some(PressEvent::VeryLong)
            }
            PressPhase::Disabled | PressPhase::Short => {
                debug_assert!(false, "unschedulable deadline target");
                None
            }
        }
    }

    /// Button released. Callers must drain [`PressTimer::advance`] with the
    /// release timestamp first so thresholds crossed while held are applied
    /// before classification. Returns `Short` when the press never reached
    /// the long threshold; always ends disabled with no pending deadline.
    pub fn on_deactivate(&mut self) -> Option<PressEvent> {
        self.pending = None;

        let event = match self.phase {
            PressPhase::Short => Some(PressEvent::Short),
            PressPhase::Long | PressPhase::VeryLong | PressPhase::Disabled => None,
        };
        self.set_phase(PressPhase::Disabled);
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_short_release_emits_short() {
        let mut timer = PressTimer::new(ms(500));
        let t0 = Instant::now();

        timer.on_activate(t0);
        assert_eq!(timer.advance(t0 + ms(200)), None);
        assert_eq!(timer.on_deactivate(), Some(PressEvent::Short));
        assert_eq!(timer.phase(), PressPhase::Disabled);
        assert!(timer.next_deadline().is_none());
    }

    #[test]
    fn test_long_threshold_is_inclusive() {
        let mut timer = PressTimer::new(ms(500));
        let t0 = Instant::now();

        timer.on_activate(t0);
        assert_eq!(timer.advance(t0 + ms(500)), Some(PressEvent::Long));
        assert_eq!(timer.phase(), PressPhase::Long);
        assert_eq!(timer.on_deactivate(), None);
    }

    #[test]
    fn test_very_long_fires_at_six_t() {
        let mut timer = PressTimer::new(ms(500));
        let t0 = Instant::now();

        timer.on_activate(t0);
        assert_eq!(timer.advance(t0 + ms(600)), Some(PressEvent::Long));
        assert_eq!(timer.next_deadline(), Some(t0 + ms(3000)));
        assert_eq!(timer.advance(t0 + ms(2999)), None);
        assert_eq!(timer.advance(t0 + ms(3000)), Some(PressEvent::VeryLong));
        assert_eq!(timer.phase(), PressPhase::Disabled);
        assert!(timer.next_deadline().is_none());
    }

    #[test]
    fn test_no_effect_past_very_long() {
        let mut timer = PressTimer::new(ms(500));
        let t0 = Instant::now();

        timer.on_activate(t0);
        timer.advance(t0 + ms(500));
        timer.advance(t0 + ms(3000));
        assert_eq!(timer.advance(t0 + ms(60_000)), None);
        assert_eq!(timer.on_deactivate(), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "press cycle is still open")]
    fn test_nested_activate_faults_in_debug() {
        let mut timer = PressTimer::new(ms(500));
        let t0 = Instant::now();

        timer.on_activate(t0);
        timer.on_activate(t0 + ms(100));
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_nested_activate_recovers_without_stale_deadline() {
        let mut timer = PressTimer::new(ms(500));
        let t0 = Instant::now();
        timer.on_activate(t0);

        // Host bug: a second activate while the cycle is still open. The
        // stale deadline is dropped and a fresh cycle starts in its place.
        let t1 = t0 + ms(100);
        timer.on_activate(t1);
        assert_eq!(timer.phase(), PressPhase::Short);
        assert_eq!(timer.next_deadline(), Some(t1 + ms(500)));

        // The first cycle's deadline at t0 + T must never fire.
        assert_eq!(timer.advance(t0 + ms(500)), None);
        assert_eq!(timer.advance(t1 + ms(500)), Some(PressEvent::Long));
    }

    #[test]
    fn test_release_cancels_pending_deadline() {
        let mut timer = PressTimer::new(ms(500));
        let t0 = Instant::now();

        timer.on_activate(t0);
        timer.on_deactivate();
        // The cancelled deadline never fires, even long after its instant.
        assert_eq!(timer.advance(t0 + ms(10_000)), None);
    }

    #[test]
    fn test_reactivation_arms_a_fresh_deadline() {
        let mut timer = PressTimer::new(ms(500));
        let t0 = Instant::now();

        timer.on_activate(t0);
        timer.on_deactivate();

        let t1 = t0 + ms(1000);
        timer.on_activate(t1);
        assert_eq!(timer.next_deadline(), Some(t1 + ms(500)));
        assert_eq!(timer.advance(t1 + ms(499)), None);
        assert_eq!(timer.advance(t1 + ms(500)), Some(PressEvent::Long));
    }
}
