//! The score action: a persistent counter mutated by press duration.
//!
//! Short press increments, holding past the long-press threshold decrements,
//! holding five times longer resets. Every mutation mirrors the score to an
//! optional text file and invalidates the icon overlay.

use std::path::PathBuf;
use std::time::Instant;

use serde_json::Value;
use strum_macros::Display;
use tracing::{debug, warn};

use crate::action::{Action, ActionEnv};
use crate::color::Rgba;
use crate::mirror;
use crate::overlay::Overlay;
use crate::press::{PressEvent, PressTimer};
use crate::settings::ScoreSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ScoreMutation {
    Increment,
    Decrement,
    Reset,
}

impl From<PressEvent> for ScoreMutation {
    fn from(event: PressEvent) -> Self {
        match event {
            PressEvent::Short => ScoreMutation::Increment,
            PressEvent::Long => ScoreMutation::Decrement,
            PressEvent::VeryLong => ScoreMutation::Reset,
        }
    }
}

pub struct ScoreAction {
    timer: PressTimer,
    overlay: Overlay,
    restore_score: bool,
    save_to_file: bool,
    output_file: Option<PathBuf>,
}

impl ScoreAction {
    pub fn new(env: &ActionEnv) -> Self {
        Self {
            timer: PressTimer::new(env.long_press),
            overlay: Overlay::new(),
            restore_score: false,
            save_to_file: false,
            output_file: None,
        }
    }

    pub fn score(&self) -> i64 {
        self.overlay.score()
    }

    pub fn color(&self) -> Rgba {
        self.overlay.color()
    }

    pub fn restore_score(&self) -> bool {
        self.restore_score
    }

    pub fn save_to_file(&self) -> bool {
        self.save_to_file
    }

    pub fn output_file(&self) -> Option<&PathBuf> {
        self.output_file.as_ref()
    }

    // Preferences-panel entry points. The panel itself is host territory;
    // these are the knobs it turns.

    pub fn set_restore_score(&mut self, restore: bool) {
        self.restore_score = restore;
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.overlay.set_color(color);
    }

    pub fn set_save_to_file(&mut self, save: bool) {
        self.save_to_file = save;
    }

    pub fn set_output_file(&mut self, file: Option<PathBuf>) {
        self.output_file = file;
        self.persist();
    }

    /// `score += 1`.
    pub fn increment(&mut self) {
        self.apply(ScoreMutation::Increment);
    }

    /// `score -= 1`; there is no floor.
    pub fn decrement(&mut self) {
        self.apply(ScoreMutation::Decrement);
    }

    /// `score = 0`. Idempotent.
    pub fn reset(&mut self) {
        self.apply(ScoreMutation::Reset);
    }

    fn apply(&mut self, mutation: ScoreMutation) {
        debug!("applying {}", mutation);
        let next = match mutation {
            ScoreMutation::Increment => self.overlay.score() + 1,
            ScoreMutation::Decrement => self.overlay.score() - 1,
            ScoreMutation::Reset => 0,
        };
        self.overlay.set_score(next);
        self.persist();
    }

    /// Mirrors the score to the output file when both the flag and the path
    /// are set. Write failures are logged and dropped; the next mutation
    /// writes the then-current value anyway.
    fn persist(&self) {
        if !self.save_to_file {
            return;
        }
        let Some(path) = &self.output_file else {
            return;
        };
        if let Err(err) = mirror::write_score(path, self.overlay.score()) {
            warn!("failed to mirror score to {}: {}", path.display(), err);
        }
    }
}

impl Action for ScoreAction {
    fn on_activate(&mut self, now: Instant) {
        self.timer.on_activate(now);
    }

    fn on_deactivate(&mut self, now: Instant) {
        // Settle thresholds crossed while held before classifying the
        // release, so a late-polled host still sees long-press semantics.
        self.poll(now);
        if let Some(event) = self.timer.on_deactivate() {
            self.apply(event.into());
        }
    }

    fn poll(&mut self, now: Instant) {
        while let Some(event) = self.timer.advance(now) {
            self.apply(event.into());
        }
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.timer.next_deadline()
    }

    fn serialize_settings(&self) -> Value {
        ScoreSettings {
            restore_score: self.restore_score,
            score: self.overlay.score(),
            text_color: self.overlay.color().to_string(),
            save_to_file: self.save_to_file,
            file: self.output_file.clone(),
        }
        .to_value()
    }

    fn deserialize_settings(&mut self, settings: &Value) {
        let record = ScoreSettings::from_value(settings);

        self.restore_score = record.restore_score;
        self.save_to_file = record.save_to_file;
        if let Some(file) = record.file {
            self.output_file = Some(file);
        }

        let score = if record.restore_score {
            record.score
        } else {
            self.overlay.score()
        };
        let color = record.text_color.parse().unwrap_or(Rgba::WHITE);

        // One batched overlay update, never a torn intermediate state.
        self.overlay.update(score, color);
    }

    fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    fn overlay_mut(&mut self) -> &mut Overlay {
        &mut self.overlay
    }
}
