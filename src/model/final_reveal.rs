use super::rng::Rng;
use super::words::FINAL_PHRASE;
use serde::{Deserialize, Serialize};

/// Keep-out distance from the right/bottom viewport edge.
const EDGE_MARGIN: f64 = 50.0;
/// Minimum left/top offset.
const MIN_OFFSET: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum DeclineButton {
    /// Still in its original place beside "yes".
    Inline,
    /// Relocated to fixed viewport coordinates (px).
    Fled { left: f64, top: f64 },
    Removed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinalReveal {
    /// Phrase tokens shown so far.
    shown: usize,
    pub choices_visible: bool,
    pub decline: DeclineButton,
    /// How many times "no" ran away. Purely for the log.
    pub evasions: u32,
}

impl Default for FinalReveal {
    fn default() -> Self {
        Self {
            shown: 0,
            choices_visible: false,
            decline: DeclineButton::Inline,
            evasions: 0,
        }
    }
}

impl FinalReveal {
    pub fn tokens(&self) -> &'static [&'static str] {
        &FINAL_PHRASE[..self.shown]
    }

    pub fn is_fully_shown(&self) -> bool {
        self.shown == FINAL_PHRASE.len()
    }

    pub fn reveal_next(&mut self) {
        self.shown = (self.shown + 1).min(FINAL_PHRASE.len());
    }

    /// Moves the decline button somewhere else on screen. No-op once removed.
    pub fn evade(&mut self, viewport: (f64, f64), button: (f64, f64), rng: &mut Rng) -> Option<(f64, f64)> {
        if self.decline == DeclineButton::Removed {
            return None;
        }
        let (left, top) = evasion_position(viewport, button, rng.unit(), rng.unit());
        self.decline = DeclineButton::Fled { left, top };
        self.evasions += 1;
        Some((left, top))
    }

    pub fn remove_decline(&mut self) {
        self.decline = DeclineButton::Removed;
    }
}

/// `rx`/`ry` are uniform draws in [0, 1).
pub fn evasion_position(viewport: (f64, f64), button: (f64, f64), rx: f64, ry: f64) -> (f64, f64) {
    let max_left = viewport.0 - button.0 - EDGE_MARGIN;
    let max_top = viewport.1 - button.1 - EDGE_MARGIN;
    ((rx * max_left).max(MIN_OFFSET), (ry * max_top).max(MIN_OFFSET))
}
