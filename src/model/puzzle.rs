//! The capability every mini-game implements, plus the input/outcome
//! vocabulary shared between puzzles and the sequencer.

use super::content::PuzzleContent;
use super::puzzles::{ClickReveal, Crossword, RevealSlider, Timeline, WordSearch};
use super::rng::Rng;
use super::words::WORDS;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PuzzleKind {
    Crossword,
    RevealSlider,
    WordSearch,
    ClickReveal,
    Timeline,
}

/// Presentation order: step `n` plays `PUZZLE_ORDER[n - 1]`.
pub const PUZZLE_ORDER: [PuzzleKind; 5] = [
    PuzzleKind::Crossword,
    PuzzleKind::RevealSlider,
    PuzzleKind::WordSearch,
    PuzzleKind::ClickReveal,
    PuzzleKind::Timeline,
];

impl PuzzleKind {
    /// Fixed identifier 1..=5, independent of presentation order.
    pub fn id(self) -> usize {
        match self {
            PuzzleKind::Crossword => 1,
            PuzzleKind::RevealSlider => 2,
            PuzzleKind::WordSearch => 3,
            PuzzleKind::ClickReveal => 4,
            PuzzleKind::Timeline => 5,
        }
    }

    /// The target word this puzzle unlocks.
    pub fn word(self) -> &'static str {
        WORDS[self.id() - 1]
    }

    pub fn title(self) -> &'static str {
        match self {
            PuzzleKind::Crossword => "Crossword",
            PuzzleKind::RevealSlider => "Focus",
            PuzzleKind::WordSearch => "Word Search",
            PuzzleKind::ClickReveal => "Our Story",
            PuzzleKind::Timeline => "Timeline",
        }
    }
}

/// Deferred inputs a puzzle schedules for itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleTimer {
    RevealQuestion,
    ShowBanner,
    Finish,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleInput {
    CellEdit { row: usize, col: usize, value: String },
    Slide(u8),
    Submit(String),
    CellClick(usize),
    HiddenClick(usize),
    SelectPhoto(u16),
    Drop { photo_year: u16, slot_year: u16 },
    TapSlot(u16),
    Timer(PuzzleTimer),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShakeTarget {
    Submit,
    Cell(usize),
    Slot(u16),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    Shake(ShakeTarget),
    /// Decoy answer: shown instead of a shake.
    Hint(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Repeat or not-yet-applicable input; nothing changed.
    Ignored,
    /// Accepted without completing. `follow_up` is fed back as `PuzzleInput::Timer` after the delay (ms).
    Progress { follow_up: Option<(u32, PuzzleTimer)> },
    Rejected(Feedback),
    Solved,
}

impl Outcome {
    pub fn progress() -> Self {
        Outcome::Progress { follow_up: None }
    }

    pub fn later(delay_ms: u32, timer: PuzzleTimer) -> Self {
        Outcome::Progress {
            follow_up: Some((delay_ms, timer)),
        }
    }

    pub fn shake(target: ShakeTarget) -> Self {
        Outcome::Rejected(Feedback::Shake(target))
    }
}

pub trait Puzzle {
    fn kind(&self) -> PuzzleKind;

    /// Reset to a fresh, unsolved board.
    fn init(&mut self, rng: &mut Rng);

    fn evaluate(&mut self, input: &PuzzleInput) -> Outcome;
}

#[derive(Clone, Debug, PartialEq)]
pub enum ActivePuzzle {
    Crossword(Crossword),
    RevealSlider(RevealSlider),
    WordSearch(WordSearch),
    ClickReveal(ClickReveal),
    Timeline(Timeline),
}

impl ActivePuzzle {
    pub fn build(kind: PuzzleKind, content: &PuzzleContent, rng: &mut Rng) -> Self {
        let t = &content.timings;
        let mut puzzle = match kind {
            PuzzleKind::Crossword => ActivePuzzle::Crossword(Crossword::new(&content.crossword)),
            PuzzleKind::RevealSlider => ActivePuzzle::RevealSlider(RevealSlider::new(&content.slider)),
            PuzzleKind::WordSearch => {
                ActivePuzzle::WordSearch(WordSearch::new(&content.word_search, t.reveal_question_ms))
            }
            PuzzleKind::ClickReveal => ActivePuzzle::ClickReveal(ClickReveal::new(
                &content.story,
                t.banner_ms,
                t.banner_complete_ms,
            )),
            PuzzleKind::Timeline => {
                ActivePuzzle::Timeline(Timeline::new(&content.timeline, t.reveal_question_ms))
            }
        };
        puzzle.init(rng);
        puzzle
    }

    fn inner(&mut self) -> &mut dyn Puzzle {
        match self {
            ActivePuzzle::Crossword(p) => p as &mut dyn Puzzle,
            ActivePuzzle::RevealSlider(p) => p,
            ActivePuzzle::WordSearch(p) => p,
            ActivePuzzle::ClickReveal(p) => p,
            ActivePuzzle::Timeline(p) => p,
        }
    }
}

impl Puzzle for ActivePuzzle {
    fn kind(&self) -> PuzzleKind {
        match self {
            ActivePuzzle::Crossword(_) => PuzzleKind::Crossword,
            ActivePuzzle::RevealSlider(_) => PuzzleKind::RevealSlider,
            ActivePuzzle::WordSearch(_) => PuzzleKind::WordSearch,
            ActivePuzzle::ClickReveal(_) => PuzzleKind::ClickReveal,
            ActivePuzzle::Timeline(_) => PuzzleKind::Timeline,
        }
    }

    fn init(&mut self, rng: &mut Rng) {
        self.inner().init(rng)
    }

    fn evaluate(&mut self, input: &PuzzleInput) -> Outcome {
        self.inner().evaluate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_a_permutation_of_ids() {
        let mut ids: Vec<usize> = PUZZLE_ORDER.iter().map(|k| k.id()).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn each_kind_unlocks_its_word() {
        assert_eq!(PuzzleKind::Crossword.word(), "Will");
        assert_eq!(PuzzleKind::Timeline.word(), "valentine");
    }

    #[test]
    fn build_reports_requested_kind() {
        let content = PuzzleContent::embedded().unwrap();
        let mut rng = Rng::new(11);
        for kind in PUZZLE_ORDER {
            assert_eq!(ActivePuzzle::build(kind, &content, &mut rng).kind(), kind);
        }
    }
}
