//! The live icon overlay: score plus text color, with a dirty flag the
//! rendering collaborator drains. Glyph rasterization lives host-side; this
//! surface only owns what the renderer needs to observe.

use crate::color::Rgba;

#[derive(Debug, Clone)]
pub struct Overlay {
    score: i64,
    color: Rgba,
    dirty: bool,
}

impl Overlay {
    pub fn new() -> Self {
        Self {
            score: 0,
            color: Rgba::WHITE,
            // Dirty from birth so the first host redraw shows the initial score.
            dirty: true,
        }
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Text the renderer draws onto the button icon.
    pub fn label(&self) -> String {
        self.score.to_string()
    }

    pub fn set_score(&mut self, score: i64) {
        if self.score != score {
            self.score = score;
            self.invalidate();
        }
    }

    pub fn set_color(&mut self, color: Rgba) {
        if self.color != color {
            self.color = color;
            self.invalidate();
        }
    }

    /// Batched update: applies both fields, invalidating at most once so an
    /// observer never sees a torn intermediate state.
    pub fn update(&mut self, score: i64, color: Rgba) {
        let changed = self.score != score || self.color != color;
        self.score = score;
        self.color = color;
        if changed {
            self.invalidate();
        }
    }

    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// True when a redraw is owed; clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_dirty() {
        let mut overlay = Overlay::new();
        assert!(overlay.take_dirty());
        assert!(!overlay.take_dirty());
    }

    #[test]
    fn test_unchanged_value_does_not_invalidate() {
        let mut overlay = Overlay::new();
        overlay.take_dirty();

        overlay.set_score(0);
        overlay.set_color(Rgba::WHITE);
        assert!(!overlay.take_dirty());

        overlay.set_score(3);
        assert!(overlay.take_dirty());
        assert_eq!(overlay.label(), "3");
    }

    #[test]
    fn test_update_is_a_single_invalidation() {
        let mut overlay = Overlay::new();
        overlay.take_dirty();

        overlay.update(-2, Rgba::opaque(1.0, 0.0, 0.0));
        assert!(overlay.take_dirty());
        assert!(!overlay.take_dirty());
        assert_eq!(overlay.label(), "-2");
    }
}
