//! Game model: everything that decides what happens, with no DOM access.

pub mod content;
pub mod final_reveal;
pub mod game;
pub mod puzzle;
pub mod puzzles;
pub mod rng;
pub mod scheduler;
pub mod words;

#[cfg(test)]
mod tests;

pub use content::{PuzzleContent, StoryFragment};
pub use final_reveal::DeclineButton;
pub use game::{Effect, GameAction, GameState, Screen};
pub use puzzle::{ActivePuzzle, PuzzleInput, ShakeTarget};
pub use rng::Rng;
pub use scheduler::Scheduler;
