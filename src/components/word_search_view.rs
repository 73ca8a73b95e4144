use super::answer_box::AnswerBox;
use crate::model::puzzles::WordSearch;
use crate::model::{PuzzleInput, ShakeTarget};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct WordSearchViewProps {
    pub puzzle: WordSearch,
    pub shake: Option<ShakeTarget>,
    pub on_input: Callback<PuzzleInput>,
}

#[function_component(WordSearchView)]
pub fn word_search_view(props: &WordSearchViewProps) -> Html {
    let ws = &props.puzzle;
    let on_submit = {
        let cb = props.on_input.clone();
        Callback::from(move |text: String| cb.emit(PuzzleInput::Submit(text)))
    };
    html! {
        <div style="display:flex; flex-direction:column; align-items:center; gap:14px;">
            <div style="display:flex; gap:10px; flex-wrap:wrap; justify-content:center;">
                { for ws.words().iter().map(|w| html! {
                    <span id={format!("word-{}", w.text)} class={classes!("ws-word", w.revealed.then_some("revealed"))}>{ w.text.clone() }</span>
                }) }
            </div>
            <div id="ws-grid" style={format!("display:grid; grid-template-columns:repeat({}, 34px); gap:4px;", ws.size())}>
                { for ws.cells().iter().enumerate().map(|(i, cell)| {
                    let onclick = {
                        let cb = props.on_input.clone();
                        Callback::from(move |_| cb.emit(PuzzleInput::CellClick(i)))
                    };
                    let shaking = props.shake == Some(ShakeTarget::Cell(i));
                    html! {
                        <div class={classes!("ws-cell", cell.found.then_some("found"), shaking.then_some("shake"))} {onclick}>
                            { cell.letter.to_string() }
                        </div>
                    }
                }) }
            </div>
            { if ws.question_visible() {
                html! {
                    <div id="bee-final-question">
                        <AnswerBox
                            prompt="What do all of these words describe?"
                            shake={props.shake == Some(ShakeTarget::Submit)}
                            {on_submit}
                        />
                    </div>
                }
            } else {
                html! { <p style="margin:0; font-size:13px; opacity:0.75;">{ format!("{} / {} found", ws.revealed_count(), ws.words().len()) }</p> }
            } }
        </div>
    }
}
