//! Whole-game runs on a virtual clock.

use super::content::PuzzleContent;
use super::final_reveal::DeclineButton;
use super::game::{Effect, GameAction, GameState, Screen};
use super::puzzle::{ActivePuzzle, PuzzleInput};
use super::rng::Rng;
use super::scheduler::Scheduler;
use std::rc::Rc;

struct Harness {
    game: GameState,
    clock: Scheduler<Effect>,
    now: f64,
}

impl Harness {
    fn new(seed: u64) -> Self {
        let content = Rc::new(PuzzleContent::embedded().unwrap());
        Self {
            game: GameState::new(content, Rng::new(seed)),
            clock: Scheduler::default(),
            now: 0.0,
        }
    }

    fn dispatch(&mut self, action: GameAction) {
        self.game.apply(action);
        self.collect();
    }

    fn input(&mut self, input: PuzzleInput) {
        self.dispatch(GameAction::Input(input));
    }

    fn collect(&mut self) {
        for q in self.game.outbox.drain(..) {
            self.clock
                .schedule(self.now, q.scheduled.delay_ms, q.scheduled.effect);
        }
    }

    fn run_for(&mut self, ms: f64) {
        let until = self.now + ms;
        loop {
            match self.clock.next_due() {
                Some(due) if due <= until => {
                    let Some((due, effect)) = self.clock.pop_next() else {
                        break;
                    };
                    self.now = due;
                    self.game.fire(effect);
                    self.collect();
                }
                _ => break,
            }
        }
        self.now = until;
    }

    fn puzzle(&self) -> &ActivePuzzle {
        self.game.puzzle.as_ref().expect("a puzzle on screen")
    }

    fn solve_crossword(&mut self) {
        let ActivePuzzle::Crossword(c) = self.puzzle() else {
            panic!("expected crossword");
        };
        let edits: Vec<PuzzleInput> = c
            .rows()
            .iter()
            .enumerate()
            .flat_map(|(row, r)| {
                r.answer.chars().enumerate().map(move |(col, ch)| PuzzleInput::CellEdit {
                    row,
                    col,
                    value: ch.to_ascii_lowercase().to_string(),
                })
            })
            .collect();
        for e in edits {
            self.input(e);
        }
    }

    fn solve_slider(&mut self) {
        self.input(PuzzleInput::Slide(90));
        self.input(PuzzleInput::Submit(" YOU ".into()));
    }

    fn solve_word_search(&mut self) {
        let ActivePuzzle::WordSearch(ws) = self.puzzle() else {
            panic!("expected word search");
        };
        let cells: Vec<usize> = ws.words().iter().flat_map(|w| w.cells.clone()).collect();
        for idx in cells {
            self.input(PuzzleInput::CellClick(idx));
        }
        self.run_for(500.0);
        self.input(PuzzleInput::Submit("bee".into()));
    }

    fn solve_story(&mut self) {
        for idx in 0..3 {
            self.input(PuzzleInput::HiddenClick(idx));
        }
        self.run_for(600.0 + 1500.0);
    }

    fn solve_timeline(&mut self) {
        for year in (2017..=2025).rev() {
            self.input(PuzzleInput::Drop { photo_year: year, slot_year: year });
        }
        self.run_for(500.0);
        self.input(PuzzleInput::Submit("Valentine".into()));
    }
}

#[test]
fn full_playthrough_reaches_proposal() {
    let mut h = Harness::new(2024);
    h.dispatch(GameAction::Start);

    let solvers: [fn(&mut Harness); 5] = [
        Harness::solve_crossword,
        Harness::solve_slider,
        Harness::solve_word_search,
        Harness::solve_story,
        Harness::solve_timeline,
    ];
    for (i, solve) in solvers.iter().enumerate() {
        assert_eq!(h.game.screen, Screen::Level(i + 1));
        assert_eq!(h.game.current_step, i);
        solve(&mut h);
        assert!(h.game.advance_pending, "step {} did not complete", i + 1);
        assert_eq!(h.game.words.solved_count(), i + 1);
        h.run_for(1200.0);
    }

    assert_eq!(h.game.screen, Screen::Final);
    assert_eq!(h.game.current_step, 5);
    assert!(h.game.puzzle.is_none());

    // First token lands immediately, then one every 600ms.
    h.run_for(0.0);
    assert_eq!(h.game.final_reveal.tokens(), &["Will"]);
    h.run_for(600.0);
    assert_eq!(h.game.final_reveal.tokens(), &["Will", "you"]);
    h.run_for(1800.0);
    assert_eq!(h.game.final_reveal.tokens().join(" "), "Will you bee my valentine?");
    assert!(!h.game.final_reveal.choices_visible);
    h.run_for(1100.0);
    assert!(h.game.final_reveal.choices_visible);

    for _ in 0..3 {
        h.dispatch(GameAction::Evade { viewport: (390.0, 844.0), button: (70.0, 40.0) });
    }
    assert!(matches!(h.game.final_reveal.decline, DeclineButton::Fled { .. }));

    h.dispatch(GameAction::Accept);
    assert_eq!(h.game.screen, Screen::Reveal);
    assert_eq!(h.game.final_reveal.decline, DeclineButton::Removed);
    h.run_for(0.0);
    assert_eq!(h.game.celebrations.len(), 1);
    h.run_for(1600.0);
    h.run_for(700.0);
    assert!(h.game.celebrations.is_empty());
}

#[test]
fn wrong_answers_never_advance() {
    let mut h = Harness::new(7);
    h.dispatch(GameAction::Start);
    h.solve_crossword();
    h.run_for(1200.0);
    assert_eq!(h.game.screen, Screen::Level(2));

    h.input(PuzzleInput::Slide(100));
    for guess in ["STEVEN", "me", "him", ""] {
        h.input(PuzzleInput::Submit(guess.into()));
    }
    h.run_for(5000.0);
    assert_eq!(h.game.screen, Screen::Level(2));
    assert_eq!(h.game.current_step, 1);
    assert!(h.game.shake.is_none());
    assert_eq!(h.game.words.solved_count(), 1);
}

#[test]
fn restarting_mid_game_clears_progress() {
    let mut h = Harness::new(99);
    h.dispatch(GameAction::Start);
    h.solve_crossword();
    h.run_for(1200.0);
    h.solve_slider();
    h.dispatch(GameAction::Start);
    assert_eq!(h.game.screen, Screen::Level(1));
    assert_eq!(h.game.words.solved_count(), 0);
    // the advance queued before the restart must not skip the new step 1
    h.run_for(2000.0);
    assert_eq!(h.game.screen, Screen::Level(1));
    assert_eq!(h.game.current_step, 0);
}
