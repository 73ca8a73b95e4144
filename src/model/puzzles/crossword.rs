use crate::model::content::{CrosswordContent, CrosswordRow};
use crate::model::puzzle::{Outcome, Puzzle, PuzzleInput, PuzzleKind};
use crate::model::rng::Rng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crossword {
    rows: Vec<CrosswordRow>,
    /// Row-major entries; `None` until the cell has been typed into.
    entries: Vec<Vec<Option<char>>>,
}

impl Crossword {
    pub fn new(content: &CrosswordContent) -> Self {
        let rows = content.rows.clone();
        let entries = rows.iter().map(|r| vec![None; r.answer.chars().count()]).collect();
        Self { rows, entries }
    }

    pub fn rows(&self) -> &[CrosswordRow] {
        &self.rows
    }

    pub fn entry(&self, row: usize, col: usize) -> Option<char> {
        self.entries.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    pub fn expected(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row).and_then(|r| r.answer.chars().nth(col))
    }

    pub fn is_correct(&self, row: usize, col: usize) -> bool {
        match (self.entry(row, col), self.expected(row, col)) {
            (Some(got), Some(want)) => got == want.to_ascii_uppercase(),
            _ => false,
        }
    }

    pub fn is_extraction(&self, row: usize, col: usize) -> bool {
        self.rows.get(row).is_some_and(|r| r.target_idx == col)
    }

    pub fn is_complete(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(row, cells)| (0..cells.len()).all(|col| self.is_correct(row, col)))
    }
}

impl Puzzle for Crossword {
    fn kind(&self) -> PuzzleKind {
        PuzzleKind::Crossword
    }

    fn init(&mut self, _rng: &mut Rng) {
        for row in &mut self.entries {
            row.iter_mut().for_each(|c| *c = None);
        }
    }

    fn evaluate(&mut self, input: &PuzzleInput) -> Outcome {
        let PuzzleInput::CellEdit { row, col, value } = input else {
            return Outcome::Ignored;
        };
        let Some(cell) = self.entries.get_mut(*row).and_then(|r| r.get_mut(*col)) else {
            return Outcome::Ignored;
        };
        // Cells hold one letter; extra typed characters are dropped.
        *cell = value.trim().chars().next().map(|c| c.to_ascii_uppercase());
        if self.is_complete() {
            Outcome::Solved
        } else {
            Outcome::progress()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::content::PuzzleContent;

    fn board() -> Crossword {
        let content = PuzzleContent::embedded().unwrap();
        let mut c = Crossword::new(&content.crossword);
        c.init(&mut Rng::new(1));
        c
    }

    fn edit(row: usize, col: usize, value: &str) -> PuzzleInput {
        PuzzleInput::CellEdit { row, col, value: value.to_string() }
    }

    fn all_cells(c: &Crossword) -> Vec<(usize, usize, char)> {
        c.rows()
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.answer.chars().enumerate().map(move |(col, ch)| (r, col, ch)))
            .collect()
    }

    #[test]
    fn lowercase_entries_count_as_correct() {
        let mut c = board();
        assert_eq!(c.evaluate(&edit(0, 0, "s")), Outcome::progress());
        assert!(c.is_correct(0, 0));
        assert_eq!(c.entry(0, 0), Some('S'));
    }

    #[test]
    fn completes_in_any_order() {
        let mut c = board();
        let mut cells = all_cells(&c);
        cells.reverse();
        let last = cells.pop().unwrap();
        for (r, col, ch) in cells {
            assert_eq!(c.evaluate(&edit(r, col, &ch.to_string())), Outcome::progress());
        }
        assert_eq!(c.evaluate(&edit(last.0, last.1, &last.2.to_string())), Outcome::Solved);
    }

    #[test]
    fn wrong_letter_blocks_completion_until_fixed() {
        let mut c = board();
        for (r, col, ch) in all_cells(&c) {
            c.evaluate(&edit(r, col, &ch.to_string()));
        }
        assert!(c.is_complete());
        assert_eq!(c.evaluate(&edit(3, 6, "x")), Outcome::progress());
        assert!(!c.is_complete());
        assert_eq!(c.evaluate(&edit(3, 6, "L")), Outcome::Solved);
    }

    #[test]
    fn clearing_and_out_of_range_edits() {
        let mut c = board();
        c.evaluate(&edit(1, 0, "M"));
        c.evaluate(&edit(1, 0, ""));
        assert_eq!(c.entry(1, 0), None);
        assert_eq!(c.evaluate(&edit(9, 0, "A")), Outcome::Ignored);
        assert_eq!(c.evaluate(&PuzzleInput::Slide(50)), Outcome::Ignored);
    }

    #[test]
    fn extraction_cells_follow_content() {
        let c = board();
        assert!(c.is_extraction(0, 4));
        assert!(c.is_extraction(1, 1));
        assert!(!c.is_extraction(1, 2));
    }
}
