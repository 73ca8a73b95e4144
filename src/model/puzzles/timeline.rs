use crate::model::content::TimelineContent;
use crate::model::puzzle::{Outcome, Puzzle, PuzzleInput, PuzzleKind, PuzzleTimer, ShakeTarget};
use crate::model::rng::Rng;
use crate::util::normalize_answer;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    target: String,
    accepted: Vec<String>,
    /// Slot years in chronological order.
    years: Vec<u16>,
    /// Photo bank display order.
    photo_order: Vec<u16>,
    /// Target letters in bank order. Position i is shown after the i-th placement.
    letters: Vec<char>,
    /// Years placed so far, in placement order.
    placed: Vec<u16>,
    /// Touch fallback: photo tapped, waiting for a slot tap.
    selected: Option<u16>,
    question_visible: bool,
    question_delay_ms: u32,
}

impl Timeline {
    pub fn new(content: &TimelineContent, question_delay_ms: u32) -> Self {
        let years = content.years();
        Self {
            target: content.target.to_uppercase(),
            accepted: content.accepted.iter().map(|a| normalize_answer(a)).collect(),
            photo_order: years.clone(),
            years,
            letters: content.target.to_uppercase().chars().collect(),
            placed: Vec::new(),
            selected: None,
            question_visible: false,
            question_delay_ms,
        }
    }

    pub fn years(&self) -> &[u16] {
        &self.years
    }

    pub fn photo_order(&self) -> &[u16] {
        &self.photo_order
    }

    pub fn is_placed(&self, year: u16) -> bool {
        self.placed.contains(&year)
    }

    pub fn placements(&self) -> usize {
        self.placed.len()
    }

    pub fn selected(&self) -> Option<u16> {
        self.selected
    }

    pub fn question_visible(&self) -> bool {
        self.question_visible
    }

    pub fn bank_len(&self) -> usize {
        self.letters.len()
    }

    /// Letter at bank position `i`, once it has been earned.
    pub fn revealed_letter(&self, i: usize) -> Option<char> {
        if i < self.placed.len() {
            self.letters.get(i).copied()
        } else {
            None
        }
    }

    fn place(&mut self, photo_year: u16, slot_year: u16) -> Outcome {
        if !self.years.contains(&slot_year) {
            return Outcome::Ignored;
        }
        if photo_year != slot_year {
            return Outcome::shake(ShakeTarget::Slot(slot_year));
        }
        if self.is_placed(slot_year) {
            return Outcome::Ignored;
        }
        self.placed.push(slot_year);
        if self.selected == Some(slot_year) {
            self.selected = None;
        }
        if self.placed.len() == self.years.len() {
            Outcome::later(self.question_delay_ms, PuzzleTimer::RevealQuestion)
        } else {
            Outcome::progress()
        }
    }
}

impl Puzzle for Timeline {
    fn kind(&self) -> PuzzleKind {
        PuzzleKind::Timeline
    }

    fn init(&mut self, rng: &mut Rng) {
        self.letters = self.target.chars().collect();
        rng.shuffle(&mut self.letters);
        self.photo_order = self.years.clone();
        rng.shuffle(&mut self.photo_order);
        self.placed.clear();
        self.selected = None;
        self.question_visible = false;
    }

    fn evaluate(&mut self, input: &PuzzleInput) -> Outcome {
        match input {
            PuzzleInput::Drop { photo_year, slot_year } => self.place(*photo_year, *slot_year),
            PuzzleInput::SelectPhoto(year) => {
                if !self.years.contains(year) || self.is_placed(*year) {
                    return Outcome::Ignored;
                }
                self.selected = Some(*year);
                Outcome::progress()
            }
            PuzzleInput::TapSlot(slot_year) => match self.selected.take() {
                Some(photo_year) => self.place(photo_year, *slot_year),
                None => Outcome::Ignored,
            },
            PuzzleInput::Timer(PuzzleTimer::RevealQuestion) => {
                if self.question_visible || self.placed.len() < self.years.len() {
                    return Outcome::Ignored;
                }
                self.question_visible = true;
                Outcome::progress()
            }
            PuzzleInput::Submit(raw) => {
                if !self.question_visible {
                    return Outcome::Ignored;
                }
                if self.accepted.contains(&normalize_answer(raw)) {
                    Outcome::Solved
                } else {
                    Outcome::shake(ShakeTarget::Submit)
                }
            }
            _ => Outcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::content::PuzzleContent;

    fn timeline(seed: u64) -> Timeline {
        let content = PuzzleContent::embedded().unwrap();
        let mut t = Timeline::new(&content.timeline, 500);
        t.init(&mut Rng::new(seed));
        t
    }

    fn drop_photo(t: &mut Timeline, photo_year: u16, slot_year: u16) -> Outcome {
        t.evaluate(&PuzzleInput::Drop { photo_year, slot_year })
    }

    #[test]
    fn bank_and_photos_are_permutations() {
        let t = timeline(5);
        let mut letters = t.letters.clone();
        letters.sort();
        let mut want: Vec<char> = "VALENTINE".chars().collect();
        want.sort();
        assert_eq!(letters, want);
        let mut photos = t.photo_order().to_vec();
        photos.sort();
        assert_eq!(photos, (2017..=2025).collect::<Vec<u16>>());
    }

    #[test]
    fn mismatched_drop_shakes_slot() {
        let mut t = timeline(5);
        assert_eq!(drop_photo(&mut t, 2018, 2020), Outcome::shake(ShakeTarget::Slot(2020)));
        assert_eq!(t.placements(), 0);
        assert_eq!(t.revealed_letter(0), None);
    }

    #[test]
    fn letters_reveal_in_bank_order_whatever_the_year() {
        let mut t = timeline(8);
        let bank = t.letters.clone();
        for (i, year) in [2025, 2017, 2021].into_iter().enumerate() {
            assert_eq!(drop_photo(&mut t, year, year), Outcome::progress());
            assert_eq!(t.revealed_letter(i), Some(bank[i]));
            assert_eq!(t.revealed_letter(i + 1), None);
        }
    }

    #[test]
    fn duplicate_drop_is_ignored() {
        let mut t = timeline(8);
        drop_photo(&mut t, 2019, 2019);
        assert_eq!(drop_photo(&mut t, 2019, 2019), Outcome::Ignored);
        assert_eq!(t.placements(), 1);
        assert_eq!(drop_photo(&mut t, 2017, 2030), Outcome::Ignored);
    }

    #[test]
    fn touch_select_then_tap() {
        let mut t = timeline(2);
        assert_eq!(t.evaluate(&PuzzleInput::TapSlot(2017)), Outcome::Ignored);
        t.evaluate(&PuzzleInput::SelectPhoto(2017));
        assert_eq!(t.selected(), Some(2017));
        assert_eq!(t.evaluate(&PuzzleInput::TapSlot(2017)), Outcome::progress());
        assert!(t.is_placed(2017));
        assert_eq!(t.selected(), None);
        assert_eq!(t.evaluate(&PuzzleInput::SelectPhoto(2017)), Outcome::Ignored);
    }

    #[test]
    fn full_board_then_either_spelling() {
        let mut t = timeline(3);
        for year in 2017..2025 {
            drop_photo(&mut t, year, year);
        }
        assert_eq!(drop_photo(&mut t, 2025, 2025), Outcome::later(500, PuzzleTimer::RevealQuestion));
        let revealed: String = (0..t.bank_len()).filter_map(|i| t.revealed_letter(i)).collect();
        assert_eq!(revealed.len(), 9);
        assert_eq!(t.evaluate(&PuzzleInput::Submit("valentine".into())), Outcome::Ignored);
        t.evaluate(&PuzzleInput::Timer(PuzzleTimer::RevealQuestion));
        assert_eq!(
            t.evaluate(&PuzzleInput::Submit("valentin".into())),
            Outcome::shake(ShakeTarget::Submit)
        );
        assert_eq!(t.evaluate(&PuzzleInput::Submit(" valentines ".into())), Outcome::Solved);
    }
}
