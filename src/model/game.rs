//! Level sequencer. `GameState` is the single owner of game progress and is
//! driven as a Yew reducer; deferred work leaves through `outbox`.

use super::content::{PuzzleContent, Timings};
use super::final_reveal::FinalReveal;
use super::puzzle::{
    ActivePuzzle, Feedback, Outcome, PUZZLE_ORDER, Puzzle, PuzzleInput, PuzzleKind, PuzzleTimer,
    ShakeTarget,
};
use super::rng::Rng;
use super::words::{WORDS, WordRegistry};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Start,
    /// 1-based step.
    Level(usize),
    Final,
    /// Terminal screen after "yes".
    Reveal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Advance,
    ClearShake(u32),
    Celebrate,
    ClearCelebration(u32),
    /// Deferred puzzle input, dropped if `step` is no longer current.
    Puzzle { step: usize, timer: PuzzleTimer },
    RevealFinalWord,
    ShowChoices,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scheduled {
    pub delay_ms: u32,
    pub effect: Effect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Queued {
    pub id: u64,
    pub scheduled: Scheduled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shake {
    pub target: ShakeTarget,
    /// Distinguishes repeated shakes of the same target.
    pub nonce: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameAction {
    Start,
    Input(PuzzleInput),
    Fire(Effect),
    /// Pointer reached the decline button.
    Evade { viewport: (f64, f64), button: (f64, f64) },
    Accept,
    /// Outbox entries with `id < upto` have been handed to the scheduler.
    Ack { upto: u64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    content: Rc<PuzzleContent>,
    pub screen: Screen,
    pub words: WordRegistry,
    /// Completed puzzles, 0..=5.
    pub current_step: usize,
    pub puzzle: Option<ActivePuzzle>,
    /// Set between a solve and its scheduled advance; puzzle input is ignored meanwhile.
    pub advance_pending: bool,
    pub shake: Option<Shake>,
    pub hint: Option<String>,
    /// Ids of celebration overlays currently on screen.
    pub celebrations: Vec<u32>,
    pub final_reveal: FinalReveal,
    pub outbox: Vec<Queued>,
    /// Id the next queued effect will get; doubles as a change marker for the app.
    pub next_effect_id: u64,
    rng: Rng,
    nonce: u32,
}

impl GameState {
    pub fn new(content: Rc<PuzzleContent>, rng: Rng) -> Self {
        Self {
            content,
            screen: Screen::Start,
            words: WordRegistry::new(),
            current_step: 0,
            puzzle: None,
            advance_pending: false,
            shake: None,
            hint: None,
            celebrations: Vec::new(),
            final_reveal: FinalReveal::default(),
            outbox: Vec::new(),
            next_effect_id: 0,
            rng,
            nonce: 0,
        }
    }

    fn timings(&self) -> Timings {
        self.content.timings
    }

    /// 1-based step currently on screen, if a level is showing.
    pub fn step(&self) -> Option<usize> {
        match self.screen {
            Screen::Level(step) => Some(step),
            _ => None,
        }
    }

    pub fn current_kind(&self) -> Option<PuzzleKind> {
        self.puzzle.as_ref().map(|p| p.kind())
    }

    /// Body class for the current screen.
    pub fn theme(&self) -> String {
        match self.screen {
            Screen::Start => "bg-start".to_string(),
            Screen::Level(step) => format!("bg-level{step}"),
            Screen::Final | Screen::Reveal => "bg-final".to_string(),
        }
    }

    pub fn apply(&mut self, action: GameAction) {
        match action {
            GameAction::Start => self.start(),
            GameAction::Input(input) => self.submit(input),
            GameAction::Fire(effect) => self.fire(effect),
            GameAction::Evade { viewport, button } => self.evade(viewport, button),
            GameAction::Accept => self.accept(),
            GameAction::Ack { upto } => self.outbox.retain(|q| q.id >= upto),
        }
    }

    /// Outbox entries not yet handed off (`id >= upto`), plus the mark to hand
    /// off from next time. Entries stay in the outbox until an `Ack`.
    pub fn pending_since(&self, upto: u64) -> (Vec<Scheduled>, u64) {
        let fresh: Vec<&Queued> = self.outbox.iter().filter(|q| q.id >= upto).collect();
        let next = fresh.last().map_or(upto, |q| q.id + 1);
        (fresh.into_iter().map(|q| q.scheduled.clone()).collect(), next)
    }

    fn schedule(&mut self, delay_ms: u32, effect: Effect) {
        let id = self.next_effect_id;
        self.next_effect_id += 1;
        self.outbox.push(Queued {
            id,
            scheduled: Scheduled { delay_ms, effect },
        });
    }

    fn next_nonce(&mut self) -> u32 {
        self.nonce = self.nonce.wrapping_add(1);
        self.nonce
    }

    pub fn start(&mut self) {
        self.words.reset();
        self.current_step = 0;
        self.advance_pending = false;
        self.final_reveal = FinalReveal::default();
        log::info!("game started");
        self.init_step(1);
    }

    fn init_step(&mut self, step: usize) {
        let kind = PUZZLE_ORDER[step - 1];
        self.puzzle = Some(ActivePuzzle::build(kind, &self.content, &mut self.rng));
        self.screen = Screen::Level(step);
        self.shake = None;
        self.hint = None;
        log::info!("step {step}: {} (puzzle {})", kind.title(), kind.id());
    }

    pub fn advance(&mut self) {
        if !matches!(self.screen, Screen::Level(_)) {
            return;
        }
        self.current_step = (self.current_step + 1).min(WORDS.len());
        if self.current_step >= WORDS.len() {
            self.show_final();
        } else {
            self.init_step(self.current_step + 1);
        }
    }

    pub fn submit(&mut self, input: PuzzleInput) {
        let Screen::Level(step) = self.screen else {
            return;
        };
        if self.advance_pending {
            return;
        }
        let Some(puzzle) = self.puzzle.as_mut() else {
            return;
        };
        let outcome = puzzle.evaluate(&input);
        match outcome {
            Outcome::Ignored => {}
            Outcome::Progress { follow_up } => {
                self.hint = None;
                if let Some((delay_ms, timer)) = follow_up {
                    self.schedule(delay_ms, Effect::Puzzle { step, timer });
                }
            }
            Outcome::Rejected(Feedback::Shake(target)) => {
                log::debug!("step {step}: rejected {input:?}");
                self.hint = None;
                let nonce = self.next_nonce();
                self.shake = Some(Shake { target, nonce });
                let delay = self.timings().shake_ms;
                self.schedule(delay, Effect::ClearShake(nonce));
            }
            Outcome::Rejected(Feedback::Hint(text)) => {
                log::debug!("step {step}: decoy answer");
                self.hint = Some(text);
            }
            Outcome::Solved => self.complete_level(),
        }
    }

    fn complete_level(&mut self) {
        let Some(kind) = self.current_kind() else {
            return;
        };
        if self.words.mark_solved(kind.word()) {
            log::info!(
                "solved \"{}\" ({}/{})",
                kind.word(),
                self.words.solved_count(),
                WORDS.len()
            );
        }
        self.hint = None;
        self.advance_pending = true;
        self.celebrate();
        let delay = self.timings().advance_ms;
        self.schedule(delay, Effect::Advance);
    }

    fn celebrate(&mut self) {
        let id = self.next_nonce();
        self.celebrations.push(id);
        let delay = self.timings().celebration_ms;
        self.schedule(delay, Effect::ClearCelebration(id));
    }

    fn show_final(&mut self) {
        self.screen = Screen::Final;
        self.puzzle = None;
        self.shake = None;
        self.hint = None;
        self.final_reveal = FinalReveal::default();
        let t = self.timings();
        for i in 0..WORDS.len() as u32 {
            self.schedule(i * t.final_word_ms, Effect::RevealFinalWord);
        }
        self.schedule(
            WORDS.len() as u32 * t.final_word_ms + t.choices_extra_ms,
            Effect::ShowChoices,
        );
        log::info!("all words solved, showing final reveal");
    }

    pub fn fire(&mut self, effect: Effect) {
        match effect {
            Effect::Advance => {
                if self.advance_pending {
                    self.advance_pending = false;
                    self.advance();
                }
            }
            Effect::ClearShake(nonce) => {
                if self.shake.is_some_and(|s| s.nonce == nonce) {
                    self.shake = None;
                }
            }
            Effect::Celebrate => self.celebrate(),
            Effect::ClearCelebration(id) => self.celebrations.retain(|c| *c != id),
            Effect::Puzzle { step, timer } => {
                if self.step() == Some(step) {
                    self.submit(PuzzleInput::Timer(timer));
                } else {
                    log::warn!("dropping {timer:?} for step {step}, now on {:?}", self.screen);
                }
            }
            Effect::RevealFinalWord => {
                if self.screen == Screen::Final {
                    self.final_reveal.reveal_next();
                }
            }
            Effect::ShowChoices => {
                if self.screen == Screen::Final {
                    self.final_reveal.choices_visible = true;
                }
            }
        }
    }

    fn evade(&mut self, viewport: (f64, f64), button: (f64, f64)) {
        if self.screen != Screen::Final || !self.final_reveal.choices_visible {
            return;
        }
        if let Some((left, top)) = self.final_reveal.evade(viewport, button, &mut self.rng) {
            log::debug!("decline ran to ({left:.0}, {top:.0})");
        }
    }

    pub fn accept(&mut self) {
        if self.screen != Screen::Final || !self.final_reveal.choices_visible {
            return;
        }
        self.final_reveal.remove_decline();
        self.screen = Screen::Reveal;
        log::info!("accepted after {} evasions", self.final_reveal.evasions);
        let interval = self.timings().accept_celebration_ms;
        for i in 0..5 {
            self.schedule(i * interval, Effect::Celebrate);
        }
    }
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if let GameAction::Ack { upto } = action {
            // Nothing to prune: skip the re-render.
            if self.outbox.iter().all(|q| q.id >= upto) {
                return self;
            }
        }
        let mut new = (*self).clone();
        new.apply(action);
        Rc::new(new)
    }
}
