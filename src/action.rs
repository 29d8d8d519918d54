//! The capability interface every button action exposes to the host, and
//! the environment the host hands a factory at construction time.

use std::time::{Duration, Instant};

use serde_json::Value;

use crate::overlay::Overlay;

/// Fallback when the host toolkit supplies no long-press duration.
pub const DEFAULT_LONG_PRESS: Duration = Duration::from_millis(500);

/// Host-supplied configuration. The long-press threshold is a toolkit-global
/// setting on real hosts; it is an input here, never owned by the action.
#[derive(Debug, Clone)]
pub struct ActionEnv {
    pub long_press: Duration,
}

impl Default for ActionEnv {
    fn default() -> Self {
        Self {
            long_press: DEFAULT_LONG_PRESS,
        }
    }
}

/// Contract between the host's button dispatch and a concrete action.
///
/// The host delivers `on_activate`/`on_deactivate` in strict alternation on
/// its event loop, wakes the action at `next_deadline` via `poll`, and loads
/// or stores settings around the action's lifetime. None of the operations
/// return errors; recoverable failures degrade silently inside the action.
pub trait Action {
    /// Button pressed.
    fn on_activate(&mut self, now: Instant);

    /// Button released.
    fn on_deactivate(&mut self, now: Instant);

    /// Drives any press-duration deadline that is due at `now`.
    fn poll(&mut self, now: Instant);

    /// When the host loop must next call [`Action::poll`], if at all.
    fn next_deadline(&self) -> Option<Instant>;

    /// Settings record for the host's settings store. Every member is
    /// always present.
    fn serialize_settings(&self) -> Value;

    /// Applies a settings record leniently and atomically; malformed
    /// members fall back to defaults, observers see one batched change.
    fn deserialize_settings(&mut self, settings: &Value);

    /// The icon overlay a rendering collaborator observes.
    fn overlay(&self) -> &Overlay;

    fn overlay_mut(&mut self) -> &mut Overlay;
}
