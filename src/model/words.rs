//! The five target words and the slots they get written into as puzzles are solved.

use serde::{Deserialize, Serialize};

/// Target words in phrase order. One puzzle gates each word.
pub const WORDS: [&str; 5] = ["Will", "you", "bee", "my", "valentine"];

/// Tokens of the final proposal, shown one at a time on the final screen.
pub const FINAL_PHRASE: [&str; 5] = ["Will", "you", "bee", "my", "valentine?"];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRegistry {
    /// Index-aligned with `WORDS`. A slot is written once and never cleared until reset.
    slots: [Option<String>; 5],
}

impl WordRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `word` solved. Returns false if the word is unknown or was already solved.
    pub fn mark_solved(&mut self, word: &str) -> bool {
        let Some(idx) = WORDS.iter().position(|w| w.eq_ignore_ascii_case(word)) else {
            return false;
        };
        if self.slots[idx].is_some() {
            return false;
        }
        self.slots[idx] = Some(WORDS[idx].to_string());
        true
    }

    pub fn is_solved(&self, word: &str) -> bool {
        WORDS
            .iter()
            .position(|w| w.eq_ignore_ascii_case(word))
            .is_some_and(|idx| self.slots[idx].is_some())
    }

    pub fn solved_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn progress_percent(&self) -> f64 {
        self.solved_count() as f64 / WORDS.len() as f64 * 100.0
    }

    /// Word per slot for the "words so far" strip; pending slots read `???`.
    pub fn display(&self) -> Vec<(String, bool)> {
        self.slots
            .iter()
            .map(|s| match s {
                Some(w) => (w.clone(), true),
                None => ("???".to_string(), false),
            })
            .collect()
    }

    pub fn reset(&mut self) {
        self.slots = Default::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_is_marked_once() {
        let mut reg = WordRegistry::new();
        assert!(reg.mark_solved("bee"));
        assert!(!reg.mark_solved("bee"));
        assert!(!reg.mark_solved("BEE"));
        assert_eq!(reg.solved_count(), 1);
        assert!(reg.is_solved("Bee"));
    }

    #[test]
    fn unknown_word_is_rejected() {
        let mut reg = WordRegistry::new();
        assert!(!reg.mark_solved("honey"));
        assert_eq!(reg.solved_count(), 0);
    }

    #[test]
    fn count_caps_at_five() {
        let mut reg = WordRegistry::new();
        for w in WORDS.iter().chain(WORDS.iter()) {
            reg.mark_solved(w);
        }
        assert_eq!(reg.solved_count(), 5);
        assert_eq!(reg.progress_percent(), 100.0);
    }

    #[test]
    fn display_keeps_slot_alignment() {
        let mut reg = WordRegistry::new();
        reg.mark_solved("my");
        let shown = reg.display();
        assert_eq!(shown[3], ("my".to_string(), true));
        assert_eq!(shown[0], ("???".to_string(), false));
        reg.reset();
        assert_eq!(reg.solved_count(), 0);
    }
}
