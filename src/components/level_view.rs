use super::{
    crossword_view::CrosswordView, slider_view::SliderView, story_view::StoryView,
    timeline_view::TimelineView, word_search_view::WordSearchView, words_display::WordsDisplay,
};
use crate::model::puzzle::Puzzle;
use crate::model::{ActivePuzzle, PuzzleInput, ShakeTarget};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LevelViewProps {
    pub step: usize,
    pub puzzle: ActivePuzzle,
    pub words: Vec<(String, bool)>,
    pub shake: Option<ShakeTarget>,
    pub hint: Option<String>,
    /// Solved and waiting for the advance; inputs are dimmed.
    pub locked: bool,
    pub on_input: Callback<PuzzleInput>,
}

#[function_component(LevelView)]
pub fn level_view(props: &LevelViewProps) -> Html {
    let shake = props.shake;
    let on_input = props.on_input.clone();
    let body = match &props.puzzle {
        ActivePuzzle::Crossword(c) => html! { <CrosswordView puzzle={c.clone()} {on_input} /> },
        ActivePuzzle::RevealSlider(s) => html! { <SliderView puzzle={s.clone()} {shake} {on_input} /> },
        ActivePuzzle::WordSearch(ws) => html! { <WordSearchView puzzle={ws.clone()} {shake} {on_input} /> },
        ActivePuzzle::ClickReveal(story) => html! { <StoryView puzzle={story.clone()} {on_input} /> },
        ActivePuzzle::Timeline(t) => html! { <TimelineView puzzle={t.clone()} {shake} {on_input} /> },
    };
    let kind = props.puzzle.kind();

    html! {
        <div class={classes!("screen", "active", props.locked.then_some("locked"))} id={format!("level{}-screen", props.step)}>
            <div style="text-align:center; font-size:13px; letter-spacing:0.08em; text-transform:uppercase; opacity:0.7;">
                { format!("Level {} of {}", props.step, props.words.len()) }
            </div>
            <h2 style="margin:4px 0 0 0; text-align:center; font-family:'Dancing Script', cursive; font-size:2.2rem; color:#d63384;">{ kind.title() }</h2>
            <WordsDisplay words={props.words.clone()} />
            { body }
            { if let Some(hint) = &props.hint {
                html! { <div class="hint" style="margin-top:10px; text-align:center; color:#d63384; font-weight:600;">{ hint.clone() }</div> }
            } else { html! {} } }
        </div>
    }
}
