use crate::model::content::WordSearchContent;
use crate::model::puzzle::{Outcome, Puzzle, PuzzleInput, PuzzleKind, PuzzleTimer, ShakeTarget};
use crate::model::rng::Rng;
use crate::util::normalize_answer;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WsCell {
    pub letter: char,
    /// Index into `WordSearch::words` when the cell belongs to a hidden word.
    pub word: Option<usize>,
    pub found: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenWord {
    pub text: String,
    pub cells: Vec<usize>,
    pub revealed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSearch {
    size: usize,
    answer: String,
    cells: Vec<WsCell>,
    words: Vec<HiddenWord>,
    question_visible: bool,
    question_delay_ms: u32,
}

impl WordSearch {
    pub fn new(content: &WordSearchContent, question_delay_ms: u32) -> Self {
        let words = content
            .words
            .iter()
            .map(|w| HiddenWord {
                text: w.word.to_uppercase(),
                cells: w.cells.clone(),
                revealed: false,
            })
            .collect();
        Self {
            size: content.size,
            answer: content.answer.clone(),
            cells: Vec::new(),
            words,
            question_visible: false,
            question_delay_ms,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[WsCell] {
        &self.cells
    }

    pub fn words(&self) -> &[HiddenWord] {
        &self.words
    }

    pub fn revealed_count(&self) -> usize {
        self.words.iter().filter(|w| w.revealed).count()
    }

    pub fn question_visible(&self) -> bool {
        self.question_visible
    }

    fn click(&mut self, idx: usize) -> Outcome {
        let Some(cell) = self.cells.get_mut(idx) else {
            return Outcome::Ignored;
        };
        let Some(word_idx) = cell.word else {
            return Outcome::shake(ShakeTarget::Cell(idx));
        };
        if cell.found {
            return Outcome::Ignored;
        }
        cell.found = true;

        let cells = &self.cells;
        let word = &mut self.words[word_idx];
        if !word.revealed && word.cells.iter().all(|&c| cells[c].found) {
            word.revealed = true;
            log::debug!("word search: found {}", word.text);
            if self.revealed_count() == self.words.len() {
                return Outcome::later(self.question_delay_ms, PuzzleTimer::RevealQuestion);
            }
        }
        Outcome::progress()
    }
}

impl Puzzle for WordSearch {
    fn kind(&self) -> PuzzleKind {
        PuzzleKind::WordSearch
    }

    fn init(&mut self, rng: &mut Rng) {
        let mut cells: Vec<WsCell> = (0..self.size * self.size)
            .map(|_| WsCell {
                letter: rng.letter(),
                word: None,
                found: false,
            })
            .collect();
        for (word_idx, word) in self.words.iter_mut().enumerate() {
            word.revealed = false;
            for (&cell, letter) in word.cells.iter().zip(word.text.chars()) {
                if let Some(c) = cells.get_mut(cell) {
                    c.letter = letter;
                    c.word = Some(word_idx);
                }
            }
        }
        self.cells = cells;
        self.question_visible = false;
    }

    fn evaluate(&mut self, input: &PuzzleInput) -> Outcome {
        match input {
            PuzzleInput::CellClick(idx) => self.click(*idx),
            PuzzleInput::Timer(PuzzleTimer::RevealQuestion) => {
                if self.question_visible || self.revealed_count() < self.words.len() {
                    return Outcome::Ignored;
                }
                self.question_visible = true;
                Outcome::progress()
            }
            PuzzleInput::Submit(raw) => {
                if !self.question_visible {
                    return Outcome::Ignored;
                }
                if normalize_answer(raw) == normalize_answer(&self.answer) {
                    Outcome::Solved
                } else {
                    Outcome::shake(ShakeTarget::Submit)
                }
            }
            _ => Outcome::Ignored,
        }
    }
}
