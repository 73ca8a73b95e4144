use crate::model::content::SliderContent;
use crate::model::puzzle::{Feedback, Outcome, Puzzle, PuzzleInput, PuzzleKind, ShakeTarget};
use crate::model::rng::Rng;
use crate::util::normalize_answer;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealSlider {
    content: SliderContent,
    /// 0..=100
    progress: u8,
    /// Latches once progress passes the threshold.
    answer_visible: bool,
}

impl RevealSlider {
    pub fn new(content: &SliderContent) -> Self {
        Self {
            content: content.clone(),
            progress: 0,
            answer_visible: false,
        }
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn answer_visible(&self) -> bool {
        self.answer_visible
    }

    pub fn image(&self) -> &str {
        &self.content.image
    }

    /// Blur radius in px, linear from `max_blur_px` at 0 down to 0 at 100.
    pub fn blur_px(&self) -> f64 {
        let max = self.content.max_blur_px;
        max - (self.progress as f64 / 100.0 * max)
    }
}

impl Puzzle for RevealSlider {
    fn kind(&self) -> PuzzleKind {
        PuzzleKind::RevealSlider
    }

    fn init(&mut self, _rng: &mut Rng) {
        self.progress = 0;
        self.answer_visible = false;
    }

    fn evaluate(&mut self, input: &PuzzleInput) -> Outcome {
        match input {
            PuzzleInput::Slide(value) => {
                self.progress = (*value).min(100);
                if self.progress > self.content.reveal_threshold {
                    self.answer_visible = true;
                }
                Outcome::progress()
            }
            PuzzleInput::Submit(raw) => {
                if !self.answer_visible {
                    return Outcome::Ignored;
                }
                let answer = normalize_answer(raw);
                if answer == normalize_answer(&self.content.answer) {
                    return Outcome::Solved;
                }
                match self
                    .content
                    .decoys
                    .iter()
                    .find(|d| normalize_answer(&d.answer) == answer)
                {
                    Some(decoy) => Outcome::Rejected(Feedback::Hint(decoy.hint.clone())),
                    None => Outcome::shake(ShakeTarget::Submit),
                }
            }
            _ => Outcome::Ignored,
        }
    }
}
