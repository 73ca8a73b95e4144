//! Puzzle content and effect timings. Shipped as `assets/puzzles.json` and
//! embedded at compile time so a content typo is caught by `validate` rather
//! than surfacing mid-game.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

const EMBEDDED: &str = include_str!("../../assets/puzzles.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("puzzle content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("crossword row {row} ({answer}) has extraction index {idx} outside the answer")]
    ExtractionOutOfRange { row: usize, answer: String, idx: usize },
    #[error("crossword has no rows")]
    EmptyCrossword,
    #[error("hidden word {word} has {letters} letters but {cells} cells")]
    WordLengthMismatch { word: String, letters: usize, cells: usize },
    #[error("hidden word {word} uses cell {cell} outside the {size}x{size} grid")]
    CellOutOfGrid { word: String, cell: usize, size: usize },
    #[error("cell {cell} is claimed by more than one hidden word")]
    OverlappingCell { cell: usize },
    #[error("story has no hidden fragments to click")]
    NothingHidden,
    #[error("timeline target {target} must have at least one letter")]
    EmptyTimeline { target: String },
    #[error("timeline of {count} years starting at {first_year} runs past year 65535")]
    TimelineYearsOverflow { first_year: u16, count: usize },
}

/// Delays (ms) used when scheduling cosmetic effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub advance_ms: u32,
    pub shake_ms: u32,
    pub celebration_ms: u32,
    pub reveal_question_ms: u32,
    pub banner_ms: u32,
    pub banner_complete_ms: u32,
    pub final_word_ms: u32,
    pub choices_extra_ms: u32,
    pub accept_celebration_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            advance_ms: 1200,
            shake_ms: 400,
            celebration_ms: 700,
            reveal_question_ms: 500,
            banner_ms: 600,
            banner_complete_ms: 1500,
            final_word_ms: 600,
            choices_extra_ms: 500,
            accept_celebration_ms: 400,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrosswordRow {
    pub clue: String,
    pub answer: String,
    /// Column whose letter contributes to the extracted word.
    pub target_idx: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrosswordContent {
    pub rows: Vec<CrosswordRow>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoy {
    pub answer: String,
    pub hint: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SliderContent {
    pub answer: String,
    pub reveal_threshold: u8,
    pub max_blur_px: f64,
    pub image: String,
    #[serde(default)]
    pub decoys: Vec<Decoy>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenWordContent {
    pub word: String,
    pub cells: Vec<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSearchContent {
    pub size: usize,
    pub answer: String,
    pub words: Vec<HiddenWordContent>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoryFragment {
    Text(String),
    Hidden { hidden: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryContent {
    pub banner: String,
    pub fragments: Vec<StoryFragment>,
}

impl StoryContent {
    pub fn hidden_count(&self) -> usize {
        self.fragments
            .iter()
            .filter(|f| matches!(f, StoryFragment::Hidden { .. }))
            .count()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineContent {
    pub target: String,
    pub first_year: u16,
    pub accepted: Vec<String>,
}

impl TimelineContent {
    /// Year of the last slot, `None` when the range does not fit in `u16`.
    pub fn last_year(&self) -> Option<u16> {
        let count = self.target.chars().count();
        let span = u16::try_from(count.checked_sub(1)?).ok()?;
        self.first_year.checked_add(span)
    }

    /// One year per letter of the target, consecutive from `first_year`.
    /// Saturates at `u16::MAX`; `validate` rejects ranges that would.
    pub fn years(&self) -> Vec<u16> {
        (0..self.target.chars().count())
            .map(|i| self.first_year.saturating_add(u16::try_from(i).unwrap_or(u16::MAX)))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleContent {
    #[serde(default)]
    pub timings: Timings,
    pub crossword: CrosswordContent,
    pub slider: SliderContent,
    pub word_search: WordSearchContent,
    pub story: StoryContent,
    pub timeline: TimelineContent,
}

impl PuzzleContent {
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: PuzzleContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.crossword.rows.is_empty() {
            return Err(ContentError::EmptyCrossword);
        }
        for (row, r) in self.crossword.rows.iter().enumerate() {
            if r.target_idx >= r.answer.chars().count() {
                return Err(ContentError::ExtractionOutOfRange {
                    row,
                    answer: r.answer.clone(),
                    idx: r.target_idx,
                });
            }
        }

        let ws = &self.word_search;
        let mut claimed = HashSet::new();
        for w in &ws.words {
            let letters = w.word.chars().count();
            if letters != w.cells.len() {
                return Err(ContentError::WordLengthMismatch {
                    word: w.word.clone(),
                    letters,
                    cells: w.cells.len(),
                });
            }
            for &cell in &w.cells {
                if cell >= ws.size * ws.size {
                    return Err(ContentError::CellOutOfGrid {
                        word: w.word.clone(),
                        cell,
                        size: ws.size,
                    });
                }
                if !claimed.insert(cell) {
                    return Err(ContentError::OverlappingCell { cell });
                }
            }
        }

        if self.story.hidden_count() == 0 {
            return Err(ContentError::NothingHidden);
        }
        if self.timeline.target.is_empty() {
            return Err(ContentError::EmptyTimeline {
                target: self.timeline.target.clone(),
            });
        }
        if self.timeline.last_year().is_none() {
            return Err(ContentError::TimelineYearsOverflow {
                first_year: self.timeline.first_year,
                count: self.timeline.target.chars().count(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_is_valid() {
        let content = PuzzleContent::embedded().expect("embedded content");
        assert_eq!(content.crossword.rows.len(), 4);
        assert_eq!(content.word_search.words.len(), 4);
        assert_eq!(content.story.hidden_count(), 3);
        assert_eq!(content.timeline.years().first(), Some(&2017));
        assert_eq!(content.timeline.years().last(), Some(&2025));
        assert_eq!(content.timings, Timings::default());
    }

    #[test]
    fn crossword_extraction_spells_will() {
        let content = PuzzleContent::embedded().unwrap();
        let extracted: String = content
            .crossword
            .rows
            .iter()
            .filter_map(|r| r.answer.chars().nth(r.target_idx))
            .collect();
        assert_eq!(extracted, "WILL");
    }

    #[test]
    fn overlapping_cells_are_rejected() {
        let mut content = PuzzleContent::embedded().unwrap();
        content.word_search.words[1].cells[0] = content.word_search.words[0].cells[0];
        assert!(matches!(
            content.validate(),
            Err(ContentError::OverlappingCell { cell: 1 })
        ));
    }

    #[test]
    fn out_of_grid_cell_is_rejected() {
        let mut content = PuzzleContent::embedded().unwrap();
        content.word_search.words[2].cells[3] = 64;
        assert!(matches!(
            content.validate(),
            Err(ContentError::CellOutOfGrid { cell: 64, .. })
        ));
    }

    #[test]
    fn bad_extraction_index_is_rejected() {
        let mut content = PuzzleContent::embedded().unwrap();
        content.crossword.rows[1].target_idx = 4;
        assert!(matches!(
            content.validate(),
            Err(ContentError::ExtractionOutOfRange { row: 1, idx: 4, .. })
        ));
    }

    #[test]
    fn timeline_running_past_u16_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(EMBEDDED).unwrap();
        value["timeline"]["first_year"] = serde_json::json!(65530);
        assert!(matches!(
            PuzzleContent::from_json(&value.to_string()),
            Err(ContentError::TimelineYearsOverflow { first_year: 65530, count: 9 })
        ));

        let mut content = PuzzleContent::embedded().unwrap();
        content.timeline.first_year = u16::MAX - 8;
        assert_eq!(content.timeline.last_year(), Some(u16::MAX));
        assert!(content.validate().is_ok());
        content.timeline.first_year = u16::MAX - 7;
        assert_eq!(content.timeline.years().last(), Some(&u16::MAX));
        assert!(content.validate().is_err());
    }

    #[test]
    fn garbage_json_is_a_parse_error() {
        assert!(matches!(
            PuzzleContent::from_json("{ nope"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn partial_timings_fall_back_to_defaults() {
        let mut value: serde_json::Value = serde_json::from_str(EMBEDDED).unwrap();
        value["timings"] = serde_json::json!({ "advance_ms": 10 });
        let content = PuzzleContent::from_json(&value.to_string()).unwrap();
        assert_eq!(content.timings.advance_ms, 10);
        assert_eq!(content.timings.shake_ms, 400);
    }
}
