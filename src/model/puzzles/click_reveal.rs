use crate::model::content::{StoryContent, StoryFragment};
use crate::model::puzzle::{Outcome, Puzzle, PuzzleInput, PuzzleKind, PuzzleTimer};
use crate::model::rng::Rng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickReveal {
    fragments: Vec<StoryFragment>,
    banner: String,
    /// One flag per hidden fragment, in story order.
    found: Vec<bool>,
    banner_visible: bool,
    banner_delay_ms: u32,
    complete_delay_ms: u32,
}

impl ClickReveal {
    pub fn new(content: &StoryContent, banner_delay_ms: u32, complete_delay_ms: u32) -> Self {
        Self {
            fragments: content.fragments.clone(),
            banner: content.banner.clone(),
            found: vec![false; content.hidden_count()],
            banner_visible: false,
            banner_delay_ms,
            complete_delay_ms,
        }
    }

    pub fn fragments(&self) -> &[StoryFragment] {
        &self.fragments
    }

    pub fn banner(&self) -> &str {
        &self.banner
    }

    pub fn banner_visible(&self) -> bool {
        self.banner_visible
    }

    pub fn is_found(&self, hidden_idx: usize) -> bool {
        self.found.get(hidden_idx).copied().unwrap_or(false)
    }

    pub fn found_count(&self) -> usize {
        self.found.iter().filter(|f| **f).count()
    }

    fn all_found(&self) -> bool {
        self.found.iter().all(|f| *f)
    }
}

impl Puzzle for ClickReveal {
    fn kind(&self) -> PuzzleKind {
        PuzzleKind::ClickReveal
    }

    fn init(&mut self, _rng: &mut Rng) {
        self.found.iter_mut().for_each(|f| *f = false);
        self.banner_visible = false;
    }

    fn evaluate(&mut self, input: &PuzzleInput) -> Outcome {
        match input {
            PuzzleInput::HiddenClick(idx) => {
                match self.found.get_mut(*idx) {
                    Some(f) if !*f => *f = true,
                    _ => return Outcome::Ignored,
                }
                if self.all_found() {
                    Outcome::later(self.banner_delay_ms, PuzzleTimer::ShowBanner)
                } else {
                    Outcome::progress()
                }
            }
            PuzzleInput::Timer(PuzzleTimer::ShowBanner) => {
                if self.banner_visible || !self.all_found() {
                    return Outcome::Ignored;
                }
                self.banner_visible = true;
                Outcome::later(self.complete_delay_ms, PuzzleTimer::Finish)
            }
            PuzzleInput::Timer(PuzzleTimer::Finish) if self.banner_visible => Outcome::Solved,
            _ => Outcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::content::PuzzleContent;

    fn story() -> ClickReveal {
        let content = PuzzleContent::embedded().unwrap();
        let mut s = ClickReveal::new(&content.story, 600, 1500);
        s.init(&mut Rng::new(1));
        s
    }

    #[test]
    fn repeat_clicks_are_ignored() {
        let mut s = story();
        assert_eq!(s.evaluate(&PuzzleInput::HiddenClick(1)), Outcome::progress());
        assert_eq!(s.evaluate(&PuzzleInput::HiddenClick(1)), Outcome::Ignored);
        assert_eq!(s.evaluate(&PuzzleInput::HiddenClick(7)), Outcome::Ignored);
        assert_eq!(s.found_count(), 1);
        assert!(s.is_found(1));
    }

    #[test]
    fn three_clicks_lead_to_banner_then_completion() {
        let mut s = story();
        s.evaluate(&PuzzleInput::HiddenClick(2));
        s.evaluate(&PuzzleInput::HiddenClick(0));
        assert_eq!(
            s.evaluate(&PuzzleInput::HiddenClick(1)),
            Outcome::later(600, PuzzleTimer::ShowBanner)
        );
        assert_eq!(s.evaluate(&PuzzleInput::Timer(PuzzleTimer::Finish)), Outcome::Ignored);
        assert_eq!(
            s.evaluate(&PuzzleInput::Timer(PuzzleTimer::ShowBanner)),
            Outcome::later(1500, PuzzleTimer::Finish)
        );
        assert!(s.banner_visible());
        assert_eq!(s.banner(), "MY");
        assert_eq!(s.evaluate(&PuzzleInput::Timer(PuzzleTimer::Finish)), Outcome::Solved);
    }

    #[test]
    fn banner_waits_for_all_clicks() {
        let mut s = story();
        s.evaluate(&PuzzleInput::HiddenClick(0));
        assert_eq!(s.evaluate(&PuzzleInput::Timer(PuzzleTimer::ShowBanner)), Outcome::Ignored);
        assert!(!s.banner_visible());
    }

    #[test]
    fn hidden_text_is_my() {
        let s = story();
        let hidden: Vec<&str> = s
            .fragments()
            .iter()
            .filter_map(|f| match f {
                StoryFragment::Hidden { hidden } => Some(hidden.as_str()),
                StoryFragment::Text(_) => None,
            })
            .collect();
        assert_eq!(hidden, vec!["my", "my", "my"]);
    }
}
